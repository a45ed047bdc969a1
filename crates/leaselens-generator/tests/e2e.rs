//! End-to-end tests for the prerender and sitemap pipeline.
//!
//! Each test builds a small project tree in a temp directory and runs the
//! generators against it.

use std::{
    collections::{BTreeMap, HashSet},
    fs,
    path::Path,
    time::{Duration, SystemTime},
};

use leaselens_core::{Config, OutputDir};
use leaselens_generator::{Prerenderer, SitemapGenerator, output_dirs};
use leaselens_parser::load_state_records;
use walkdir::WalkDir;

const SHELL: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>LeaseLenses</title>
    <script type="module" crossorigin src="/assets/index-DkX2.js"></script>
    <link rel="stylesheet" crossorigin href="/assets/index-Q9aa.css">
  </head>
  <body>
    <div id="root"></div>
  </body>
</html>
"#;

const STATE_DATA: &str = r#"// Generated from statute summaries.
export interface StateInfo {
  name: string;
  slug: string;
  keyStatutes: string[];
}

export const stateData: Record<string, StateInfo> = {
  california: {
    name: "California",
    slug: "california",
    description: `Strong tenant protections, including statewide rent caps under AB 1482.`,
    securityDepositLimit: "1 month's rent (most landlords, since July 2024)",
    securityDepositReturn: "21 days",
    rentIncreaseNotice: "30 days (<10%), 90 days (>10%)",
    entryNotice: "24 hours written notice",
    keyStatutes: ["Civ. Code § 1950.5", "Civ. Code § 1954", "Civ. Code § 1947.12"],
    commonIssues: ["Deposit deductions for normal wear and tear"],
  },
  "new-york": {
    name: 'New York',
    description: "Deposits are capped at one month's rent statewide.",
    keyStatutes: [
      "GOL § 7-108", // deposits
      "RPL § 235-e",
    ],
  },
  draft: {
    slug: "draft",
    description: "Work in progress",
  },
};
"#;

const ARTICLE: &str = r#"---
title: "California Security Deposit Law"
description: "Limits, deadlines and deductions for California deposits."
keywords: "california, security deposit"
---

## Deadlines

Landlords have **21 days** to return the deposit.
"#;

fn setup_project(root: &Path) {
    fs::create_dir_all(root.join("dist")).unwrap();
    fs::write(root.join("dist/index.html"), SHELL).unwrap();

    fs::create_dir_all(root.join("src/data")).unwrap();
    fs::write(root.join("src/data/stateData.ts"), STATE_DATA).unwrap();

    fs::create_dir_all(root.join("seo/content")).unwrap();
    fs::write(
        root.join("seo/content/california-security-deposit-law.md"),
        ARTICLE,
    )
    .unwrap();
}

fn snapshot(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(dir).unwrap().display().to_string();
            (rel, fs::read(e.path()).unwrap())
        })
        .collect()
}

fn sitemap_locs(xml: &str) -> Vec<String> {
    xml.lines()
        .filter_map(|line| {
            line.trim()
                .strip_prefix("<loc>")
                .and_then(|l| l.strip_suffix("</loc>"))
        })
        .map(str::to_string)
        .collect()
}

#[test]
fn test_prerender_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    setup_project(dir.path());
    let dist = dir.path().join("dist");

    let first = Prerenderer::new(Config::default(), dir.path()).run().unwrap();
    let after_first = snapshot(&dist);

    // Second run reads the already prerendered homepage as its shell.
    let second = Prerenderer::new(Config::default(), dir.path()).run().unwrap();
    let after_second = snapshot(&dist);

    assert_eq!(first.pages, second.pages);
    assert_eq!(
        after_first.keys().collect::<Vec<_>>(),
        after_second.keys().collect::<Vec<_>>()
    );
    for (path, bytes) in &after_first {
        assert_eq!(bytes, &after_second[path], "{path} changed on rerun");
    }

    let home = String::from_utf8(after_second["index.html"].clone()).unwrap();
    assert_eq!(home.matches("/assets/index-Q9aa.css").count(), 1);
    assert_eq!(home.matches("/assets/index-DkX2.js").count(), 1);
}

#[test]
fn test_prerender_is_idempotent_with_favicon_under_assets() {
    let dir = tempfile::tempdir().unwrap();
    setup_project(dir.path());
    let dist = dir.path().join("dist");
    let mut config = Config::default();
    config.site.favicon = "/assets/favicon.svg".to_string();

    Prerenderer::new(config.clone(), dir.path()).run().unwrap();
    let after_first = snapshot(&dist);
    Prerenderer::new(config, dir.path()).run().unwrap();
    let after_second = snapshot(&dist);

    assert_eq!(after_first, after_second);
    for page in ["index.html", "about/index.html", "states/california/index.html"] {
        let html = String::from_utf8(after_second[page].clone()).unwrap();
        assert_eq!(html.matches("rel=\"icon\"").count(), 1, "{page}");
        assert_eq!(html.matches("rel=\"canonical\"").count(), 1, "{page}");
    }
}

#[test]
fn test_prerender_writes_every_route() {
    let dir = tempfile::tempdir().unwrap();
    setup_project(dir.path());
    let dist = dir.path().join("dist");

    let report = Prerenderer::new(Config::default(), dir.path()).run().unwrap();

    // home + 2 states + states index + 4 tools + 8 marketing + article + blog index
    assert_eq!(report.pages, 18);
    for route in [
        "states/california",
        "states/new-york",
        "states",
        "tools/security-deposit-calculator",
        "tools/rent-increase-calculator",
        "tools/lease-termination-notice-generator",
        "tools/late-fee-checker",
        "features",
        "about",
        "pricing",
        "case-studies",
        "templates",
        "privacy",
        "terms",
        "sample-report",
        "blog/california-security-deposit-law",
        "blog",
    ] {
        assert!(
            dist.join(route).join("index.html").is_file(),
            "missing {route}"
        );
    }
    assert!(!dist.join("states/draft").exists());

    let california = fs::read_to_string(dist.join("states/california/index.html")).unwrap();
    assert!(california.contains(
        "<title>California Landlord-Tenant Law Guide | LeaseLenses</title>"
    ));
    assert!(california.contains(
        r#"<link rel="canonical" href="https://www.leaselenses.com/states/california" />"#
    ));
    assert!(california.contains("<p>30 days (&lt;10%), 90 days (&gt;10%)</p>"));
    assert!(california.contains("<li>Civ. Code § 1950.5</li>"));
    assert!(california.contains("<section><h2>Common Issues</h2>"));
    assert!(california.contains("\"@type\": \"BreadcrumbList\""));

    let index = fs::read_to_string(dist.join("states/index.html")).unwrap();
    let ca = index.find("/states/california").unwrap();
    let ny = index.find("/states/new-york").unwrap();
    assert!(ca < ny);

    let article =
        fs::read_to_string(dist.join("blog/california-security-deposit-law/index.html")).unwrap();
    assert!(article.contains("<strong>21 days</strong>"));
    assert!(article.contains("\"@type\": \"Article\""));
    assert!(article.contains(r#"<meta property="og:type" content="article" />"#));
}

#[test]
fn test_sitemap_urls_unique_and_canonical() {
    let dir = tempfile::tempdir().unwrap();
    setup_project(dir.path());
    let config = Config::default();

    Prerenderer::new(config.clone(), dir.path()).run().unwrap();

    // Declaring a directory twice must not duplicate its URLs.
    let mut dirs = output_dirs(&config, dir.path());
    dirs.push(OutputDir::generated("states"));

    let report = SitemapGenerator::new(config, dir.path())
        .write(&dirs)
        .unwrap();
    let xml = fs::read_to_string(&report.path).unwrap();
    let locs = sitemap_locs(&xml);

    assert_eq!(report.urls, 18);
    assert_eq!(locs.len(), report.urls);
    assert_eq!(locs.iter().collect::<HashSet<_>>().len(), locs.len());

    assert_eq!(locs[0], "https://www.leaselenses.com");
    assert!(locs.contains(&"https://www.leaselenses.com/states/california/".to_string()));
    assert!(locs.contains(&"https://www.leaselenses.com/states/".to_string()));
    assert!(locs.contains(&"https://www.leaselenses.com/tools/late-fee-checker/".to_string()));
    assert!(locs.iter().all(|l| !l.ends_with("index.html")));

    // Traversal order follows the declared directories, sorted within each.
    let tools: Vec<_> = locs.iter().filter(|l| l.contains("/tools/")).collect();
    assert_eq!(
        tools,
        vec![
            "https://www.leaselenses.com/tools/late-fee-checker/",
            "https://www.leaselenses.com/tools/lease-termination-notice-generator/",
            "https://www.leaselenses.com/tools/rent-increase-calculator/",
            "https://www.leaselenses.com/tools/security-deposit-calculator/",
        ]
    );
}

#[test]
fn test_sitemap_uses_article_source_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    setup_project(dir.path());
    let config = Config::default();

    let source = dir
        .path()
        .join("seo/content/california-security-deposit-law.md");
    let fixed = SystemTime::UNIX_EPOCH + Duration::from_secs(1_768_384_800);
    fs::File::options()
        .write(true)
        .open(&source)
        .unwrap()
        .set_modified(fixed)
        .unwrap();

    Prerenderer::new(config.clone(), dir.path()).run().unwrap();
    let sitemap = SitemapGenerator::new(config.clone(), dir.path())
        .collect(&output_dirs(&config, dir.path()))
        .unwrap();

    let article = sitemap
        .entries()
        .iter()
        .find(|e| e.loc == "https://www.leaselenses.com/blog/california-security-deposit-law/")
        .unwrap();
    assert_eq!(article.lastmod_string(), "2026-01-14T10:00:00.000Z");

    let blog_index = sitemap
        .entries()
        .iter()
        .find(|e| e.loc == "https://www.leaselenses.com/blog/")
        .unwrap();
    assert_ne!(blog_index.lastmod_string(), "2026-01-14T10:00:00.000Z");
}

#[test]
fn test_missing_inputs_are_graceful() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default();

    let report = Prerenderer::new(config.clone(), dir.path()).run().unwrap();
    assert!(report.skipped);
    assert_eq!(report.pages, 0);
    assert!(!dir.path().join("dist").exists());

    let report = SitemapGenerator::new(config.clone(), dir.path())
        .write(&output_dirs(&config, dir.path()))
        .unwrap();
    assert_eq!(report.urls, 0);

    let xml = fs::read_to_string(report.path).unwrap();
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(sitemap_locs(&xml).is_empty());
}

#[test]
fn test_state_record_extraction() {
    let dir = tempfile::tempdir().unwrap();
    setup_project(dir.path());

    let records =
        load_state_records(&dir.path().join("src/data/stateData.ts"), "stateData").unwrap();

    let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["California", "New York"]);
    assert_eq!(
        records[0].key_statutes,
        vec!["Civ. Code § 1950.5", "Civ. Code § 1954", "Civ. Code § 1947.12"]
    );
    assert_eq!(records[1].slug, "new-york");
    assert_eq!(records[1].key_statutes, vec!["GOL § 7-108", "RPL § 235-e"]);
    assert_eq!(
        records[0].rent_increase_notice,
        "30 days (<10%), 90 days (>10%)"
    );
}
