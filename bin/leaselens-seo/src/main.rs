//! LeaseLens SEO CLI
//!
//! Build-time prerenderer and sitemap generator for the LeaseLenses site.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for the SEO build step.
#[derive(Parser)]
#[command(
    name = "leaselens-seo",
    version,
    about = "Prerender SEO routes and generate the sitemap after the SPA build"
)]
struct Cli {
    /// Path to configuration file, relative to the project root
    #[arg(short, long, default_value = "leaselens.toml")]
    config: std::path::PathBuf,

    /// Project root that relative paths resolve against
    #[arg(short, long, default_value = ".")]
    root: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Prerender static HTML for the SEO routes
    Prerender,
    /// Generate sitemap.xml over the prerendered output
    Sitemap,
    /// Prerender, then generate the sitemap
    Build,
    /// Report what a build would see without writing anything
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    leaselens_seo::init_tracing(cli.verbose);

    match cli.command {
        Commands::Prerender => {
            leaselens_seo::cmd::prerender::run(&cli.config, &cli.root)?;
        }
        Commands::Sitemap => {
            leaselens_seo::cmd::sitemap::run(&cli.config, &cli.root)?;
        }
        Commands::Build => {
            leaselens_seo::cmd::build::run(&cli.config, &cli.root)?;
        }
        Commands::Check { strict } => {
            leaselens_seo::cmd::check::run(&cli.config, &cli.root, strict)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_defaults() {
        let args = ["leaselens-seo", "build"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("leaselens.toml"));
        assert_eq!(cli.root, std::path::PathBuf::from("."));
        assert_eq!(cli.verbose, 0);
        assert!(matches!(cli.command, Commands::Build));
    }

    #[test]
    fn test_cli_prerender_command_parsing() {
        let cli = Cli::parse_from(["leaselens-seo", "prerender"]);
        assert!(matches!(cli.command, Commands::Prerender));
    }

    #[test]
    fn test_cli_sitemap_command_parsing() {
        let cli = Cli::parse_from(["leaselens-seo", "sitemap"]);
        assert!(matches!(cli.command, Commands::Sitemap));
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let args = ["leaselens-seo", "check", "--strict"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Check { strict } => {
                assert!(strict);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let args = ["leaselens-seo", "-vvv", "build"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_and_root() {
        let args = [
            "leaselens-seo",
            "--config",
            "seo.toml",
            "--root",
            "frontend",
            "sitemap",
        ];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.config, std::path::PathBuf::from("seo.toml"));
        assert_eq!(cli.root, std::path::PathBuf::from("frontend"));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["leaselens-seo"]).is_err());
    }
}
