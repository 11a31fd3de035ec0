//! Command-line interface for the resolver.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::ResolverConfig;
use crate::error::Result;
use crate::numeral::normalize;
use crate::registry::LawRegistry;
use crate::resolver::Resolver;

/// Roppou - Look up Japanese statute articles from a citation.
#[derive(Parser)]
#[command(name = "roppou")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a citation (e.g. 民法709条) and print the reply.
    Resolve {
        /// Citation text
        text: String,

        /// Law registry file (default: $ROPPOU_LAWLIST or lawlist.json)
        #[arg(short, long)]
        lawlist: Option<PathBuf>,
    },

    /// Print the canonical form of an article number.
    Normalize {
        /// Raw article token (e.g. 第八九条の二)
        token: String,
    },

    /// Show which registered law a name resolves to.
    Lookup {
        /// Law name or alias
        name: String,

        /// Law registry file (default: $ROPPOU_LAWLIST or lawlist.json)
        #[arg(short, long)]
        lawlist: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { text, lawlist } => resolve_command(&text, lawlist),
        Commands::Normalize { token } => {
            normalize_command(&token);
            Ok(())
        }
        Commands::Lookup { name, lawlist } => lookup_command(&name, lawlist),
    }
}

fn load_config(lawlist: Option<PathBuf>) -> Result<ResolverConfig> {
    let config = ResolverConfig::from_env()?;
    Ok(match lawlist {
        Some(path) => config.with_lawlist_path(path),
        None => config,
    })
}

/// Execute the resolve command.
fn resolve_command(text: &str, lawlist: Option<PathBuf>) -> Result<()> {
    let config = load_config(lawlist)?;
    let resolver = Resolver::from_config(&config)?;

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(format!("Resolving {text}..."));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let reply = resolver.answer(text);

    pb.finish_and_clear();
    println!("{reply}");
    Ok(())
}

/// Execute the normalize command.
fn normalize_command(token: &str) {
    match normalize(token) {
        Some(number) => println!(
            "{} {}",
            style(number.canonical()).green().bold(),
            style(number.label()).dim()
        ),
        None => println!("{} {token}", style("unparsable:").red().bold()),
    }
}

/// Execute the lookup command.
fn lookup_command(name: &str, lawlist: Option<PathBuf>) -> Result<()> {
    let config = load_config(lawlist)?;
    let registry = LawRegistry::load(&config.lawlist_path);

    match registry.resolve(name) {
        Some(entry) => {
            println!("  Name: {}", style(&entry.canonical_name).green());
            println!("  Id: {}", style(&entry.id).cyan());
            if !entry.aliases.is_empty() {
                println!("  Aliases: {}", entry.aliases.join(", "));
            }
        }
        None => println!(
            "{} {name} ({} laws registered)",
            style("not registered:").yellow().bold(),
            registry.len()
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_resolve() {
        let cli = Cli::parse_from(["roppou", "resolve", "民法709条"]);

        let Commands::Resolve { text, lawlist } = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(text, "民法709条");
        assert!(lawlist.is_none());
    }

    #[test]
    fn test_cli_parse_resolve_with_lawlist() {
        let cli = Cli::parse_from(["roppou", "resolve", "憲法9条", "--lawlist", "laws.json"]);

        let Commands::Resolve { lawlist, .. } = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(lawlist, Some(PathBuf::from("laws.json")));
    }

    #[test]
    fn test_cli_parse_normalize() {
        let cli = Cli::parse_from(["roppou", "normalize", "第八九条の二"]);

        let Commands::Normalize { token } = cli.command else {
            panic!("expected normalize");
        };
        assert_eq!(token, "第八九条の二");
    }
}
