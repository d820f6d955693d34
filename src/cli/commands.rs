//! CLI commands and argument parsing

use crate::services::access_provider::AccessProviderOrderByInput;
use crate::types::Sort;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Raito access provider CLI
#[derive(Parser, Debug)]
#[command(name = "raito")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// SDK configuration file (YAML)
    #[arg(short = 'C', long, global = true, default_value = "raito.yaml")]
    pub config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one access provider
    Get {
        /// Access provider id
        id: String,
    },

    /// List access providers
    List {
        /// Sort key, e.g. `name:asc` or `modifiedAt:desc` (repeatable)
        #[arg(long = "order-by", value_parser = parse_order_by)]
        order_by: Vec<AccessProviderOrderByInput>,

        /// Free text search
        #[arg(long)]
        search: Option<String>,
    },

    /// List who an access provider grants access to
    Who {
        /// Access provider id
        id: String,
    },

    /// List the data objects an access provider covers
    What {
        /// Access provider id
        id: String,
    },

    /// Delete an access provider
    Delete {
        /// Access provider id
        id: String,
    },
}

/// Parse `field[:direction]` into an order clause
pub fn parse_order_by(value: &str) -> Result<AccessProviderOrderByInput, String> {
    let (field, direction) = value.split_once(':').unwrap_or((value, "asc"));
    let sort: Sort = direction.parse().map_err(|e: crate::Error| e.to_string())?;

    let mut order = AccessProviderOrderByInput::default();
    match field {
        "name" => order.name = Some(sort),
        "createdAt" | "created_at" => order.created_at = Some(sort),
        "modifiedAt" | "modified_at" => order.modified_at = Some(sort),
        other => {
            return Err(format!(
                "unknown order field '{other}' (expected name, createdAt or modifiedAt)"
            ))
        }
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_parse_list_command() {
        let cli = Cli::try_parse_from([
            "raito",
            "-C",
            "conf.yaml",
            "list",
            "--order-by",
            "name:desc",
            "--search",
            "finance",
        ])
        .unwrap();

        assert_eq!(cli.config, PathBuf::from("conf.yaml"));
        match cli.command {
            Commands::List { order_by, search } => {
                assert_eq!(order_by.len(), 1);
                assert_eq!(order_by[0].name, Some(Sort::Desc));
                assert_eq!(search.as_deref(), Some("finance"));
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_default_config_path() {
        let cli = Cli::try_parse_from(["raito", "get", "ap-1"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("raito.yaml"));
        assert!(!cli.verbose);
    }

    #[test_case("name", Some(Sort::Asc), None ; "default direction")]
    #[test_case("name:DESC", Some(Sort::Desc), None ; "uppercase direction")]
    #[test_case("modifiedAt:desc", None, Some(Sort::Desc) ; "modified at")]
    fn test_parse_order_by(value: &str, name: Option<Sort>, modified_at: Option<Sort>) {
        let order = parse_order_by(value).unwrap();
        assert_eq!(order.name, name);
        assert_eq!(order.modified_at, modified_at);
    }

    #[test_case("owner:asc" ; "unknown field")]
    #[test_case("name:up" ; "unknown direction")]
    fn test_parse_order_by_invalid(value: &str) {
        assert!(parse_order_by(value).is_err());
    }
}
