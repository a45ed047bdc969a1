//! Check command - reports what a build would see without writing anything

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use leaselens_core::{Config, LastModPolicy};
use leaselens_generator::{AssetBundle, output_dirs};
use leaselens_parser::{ParserError, load_articles, load_state_records};

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates configuration and inspects every build input.
pub fn run(config_path: &Path, root: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, ?root, strict, "Checking configuration and inputs");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = match super::load_config(config_path, root) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            c
        }
        Err(e) => {
            println!("  ✗ Configuration invalid: {e:#}");
            bail!("Validation failed: {e:#}");
        }
    };

    println!("\nChecking shell...");
    check_shell(&config, root, &mut result)?;

    println!("\nChecking state data...");
    check_state_data(&config, root, &mut result)?;

    println!("\nChecking articles...");
    check_articles(&config, root, &mut result)?;

    println!("\nOutput directories:");
    for dir in output_dirs(&config, root) {
        match dir.lastmod {
            LastModPolicy::Generated => println!("  • {}", dir.name),
            LastModPolicy::ContentSource { dir: source, .. } => {
                println!("  • {} (timestamps from {})", dir.name, source.display());
            }
        }
    }

    // Print summary
    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

fn check_shell(config: &Config, root: &Path, result: &mut ValidationResult) -> Result<()> {
    let shell = config.paths(root).shell;
    let Some(bundle) = AssetBundle::load(&shell)? else {
        result.add_warning(format!(
            "Shell {} not found, prerender would be skipped",
            shell.display()
        ));
        return Ok(());
    };

    println!(
        "  ✓ {} ({} asset link(s), {} script(s))",
        shell.display(),
        bundle.head_tags.len(),
        bundle.body_scripts.len()
    );
    if bundle.body_scripts.is_empty() {
        result.add_warning("Shell has no script tags, prerendered pages would not boot the app");
    }
    Ok(())
}

fn check_state_data(config: &Config, root: &Path, result: &mut ValidationResult) -> Result<()> {
    let path = config.paths(root).state_data;
    if !path.exists() {
        result.add_warning(format!(
            "State data {} not found, no state guides would be generated",
            path.display()
        ));
        return Ok(());
    }

    match load_state_records(&path, &config.content.state_binding) {
        Ok(records) if records.is_empty() => {
            result.add_warning(format!(
                "No records with a name found in `{}`",
                config.content.state_binding
            ));
        }
        Ok(records) => println!("  ✓ {} state record(s)", records.len()),
        Err(ParserError::Source { path, source }) => {
            result.add_error(format!("{}: {source}", path.display()));
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn check_articles(config: &Config, root: &Path, result: &mut ValidationResult) -> Result<()> {
    let dir = config.paths(root).articles_dir;
    if !dir.is_dir() {
        println!("  • {} not found, no articles", dir.display());
        return Ok(());
    }

    let articles = load_articles(&dir)?;
    println!("  ✓ {} article(s)", articles.len());
    for article in &articles {
        if article.description.is_empty() {
            result.add_warning(format!("Article `{}` has no description", article.slug));
        }
    }
    Ok(())
}
