//! schema.org JSON-LD objects embedded in prerendered documents.

use leaselens_core::{Article, Config, StateRecord};
use serde_json::{Value, json};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// `SoftwareApplication` description of the product for the homepage.
#[must_use]
pub fn software_application(config: &Config, description: &str, features: &[&str]) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "SoftwareApplication",
        "name": config.site.name,
        "applicationCategory": "BusinessApplication",
        "operatingSystem": "Web Browser",
        "offers": {
            "@type": "Offer",
            "price": "0",
            "priceCurrency": "USD",
            "priceValidUntil": "2027-12-31"
        },
        "description": description,
        "url": config.base_url(),
        "screenshot": config.og_image_url(),
        "softwareVersion": "2.0",
        "author": { "@type": "Organization", "name": config.site.name },
        "featureList": features
    })
}

/// `FAQPage` answering the four standard questions for a state.
#[must_use]
pub fn state_faq(state: &StateRecord) -> Value {
    let name = &state.name;
    let questions = [
        (
            format!("What is the security deposit limit in {name}?"),
            &state.security_deposit_limit,
        ),
        (
            format!("How long does a landlord have to return a security deposit in {name}?"),
            &state.security_deposit_return,
        ),
        (
            format!("What notice is required for rent increases in {name}?"),
            &state.rent_increase_notice,
        ),
        (
            format!(
                "How much notice must a landlord give before entering a rental unit in {name}?"
            ),
            &state.entry_notice,
        ),
    ];

    let main_entity: Vec<Value> = questions
        .into_iter()
        .map(|(question, answer)| {
            json!({
                "@type": "Question",
                "name": question,
                "acceptedAnswer": { "@type": "Answer", "text": answer }
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "FAQPage",
        "mainEntity": main_entity
    })
}

/// `BreadcrumbList` from `(name, url)` pairs, positions starting at 1.
#[must_use]
pub fn breadcrumb_list(crumbs: &[(&str, &str)]) -> Value {
    let items: Vec<Value> = crumbs
        .iter()
        .enumerate()
        .map(|(i, (name, item))| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": name,
                "item": item
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": items
    })
}

/// `Article` description of a blog article.
#[must_use]
pub fn article(config: &Config, article: &Article, canonical: &str) -> Value {
    let mut data = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Article",
        "headline": article.title,
        "description": article.description,
        "inLanguage": article.lang,
        "mainEntityOfPage": { "@type": "WebPage", "@id": canonical },
        "image": config.og_image_url(),
        "author": { "@type": "Organization", "name": config.site.name },
        "publisher": { "@type": "Organization", "name": config.site.name, "url": config.base_url() }
    });

    if !article.keywords.is_empty()
        && let Some(obj) = data.as_object_mut()
    {
        obj.insert("keywords".to_string(), json!(article.keywords));
    }

    data
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use leaselens_core::Frontmatter;

    use super::*;

    fn texas() -> StateRecord {
        StateRecord {
            key: "texas".to_string(),
            name: "Texas".to_string(),
            slug: "texas".to_string(),
            security_deposit_limit: "No statutory limit".to_string(),
            security_deposit_return: "30 days".to_string(),
            rent_increase_notice: "Per lease terms".to_string(),
            entry_notice: "Not specified by statute".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_software_application() {
        let config = Config::default();
        let data = software_application(&config, "Lease analysis", &["Risk identification"]);

        assert_eq!(data["@type"], "SoftwareApplication");
        assert_eq!(data["name"], "LeaseLenses");
        assert_eq!(data["url"], "https://www.leaselenses.com");
        assert_eq!(data["offers"]["priceValidUntil"], "2027-12-31");
        assert_eq!(
            data["screenshot"],
            "https://www.leaselenses.com/assets/og-image.png"
        );
        assert_eq!(data["featureList"][0], "Risk identification");
    }

    #[test]
    fn test_state_faq() {
        let data = state_faq(&texas());
        let questions = data["mainEntity"].as_array().unwrap();

        assert_eq!(questions.len(), 4);
        assert_eq!(
            questions[0]["name"],
            "What is the security deposit limit in Texas?"
        );
        assert_eq!(questions[1]["acceptedAnswer"]["text"], "30 days");
        assert_eq!(
            questions[3]["acceptedAnswer"]["text"],
            "Not specified by statute"
        );
    }

    #[test]
    fn test_breadcrumb_positions() {
        let data = breadcrumb_list(&[
            ("Home", "https://www.leaselenses.com"),
            ("State Guides", "https://www.leaselenses.com/states"),
        ]);
        let items = data["itemListElement"].as_array().unwrap();

        assert_eq!(items[0]["position"], 1);
        assert_eq!(items[1]["position"], 2);
        assert_eq!(items[1]["name"], "State Guides");
    }

    #[test]
    fn test_article_keywords_optional() {
        let config = Config::default();
        let without = Article::from_parts("ohio", Frontmatter::default(), String::new(), Path::new("ohio.md"));
        let data = article(&config, &without, "https://www.leaselenses.com/blog/ohio");

        assert_eq!(data["@type"], "Article");
        assert_eq!(data["headline"], "ohio");
        assert_eq!(
            data["mainEntityOfPage"]["@id"],
            "https://www.leaselenses.com/blog/ohio"
        );
        assert!(data.get("keywords").is_none());

        let with = Article {
            keywords: "ohio, deposit".to_string(),
            ..without
        };
        let data = article(&config, &with, "https://www.leaselenses.com/blog/ohio");
        assert_eq!(data["keywords"], "ohio, deposit");
    }
}
