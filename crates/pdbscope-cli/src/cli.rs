//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// pdbscope - protein structure dashboard
#[derive(Parser, Debug)]
#[command(name = "pdbscope", version)]
#[command(about = "Protein structure dashboard backed by the RCSB PDB", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "PDBSCOPE_CONFIG", global = true)]
    pub config: Option<String>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the dashboard server
    Serve {
        /// Address to listen on, overriding `server.bind`
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Print the summary fields for an identifier
    Summary {
        /// PDB identifier, e.g. 1ubq
        pdb_id: String,

        /// Print JSON instead of aligned text
        #[arg(long)]
        json: bool,
    },

    /// Print the scene description for an identifier
    Scene {
        /// PDB identifier, e.g. 1ubq
        pdb_id: String,

        /// Print only the axis, grid and label overlay
        #[arg(long)]
        annotations_only: bool,
    },

    /// Configuration file management
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Print the effective configuration as TOML
    Show,

    /// Get a value by dotted key, e.g. `viewer.width`
    Get {
        /// Dotted key
        key: String,
    },

    /// Write a config file with default values
    Init {
        /// Where to write it (defaults to the platform config directory)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration as environment variables
    Export {
        /// Format as `--env KEY=VALUE` for docker run
        #[arg(long)]
        docker_env: bool,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_summary() {
        let cli = Cli::try_parse_from(["pdbscope", "summary", "4hhb", "--json"]).unwrap();
        match cli.command {
            Command::Summary { pdb_id, json } => {
                assert_eq!(pdb_id, "4hhb");
                assert!(json);
            }
            other => unreachable!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "pdbscope",
            "scene",
            "1crn",
            "--annotations-only",
            "-v",
            "--config",
            "/tmp/p.toml",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config.as_deref(), Some("/tmp/p.toml"));
        assert!(matches!(
            cli.command,
            Command::Scene {
                annotations_only: true,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_config_init() {
        let cli =
            Cli::try_parse_from(["pdbscope", "config", "init", "--file", "x.toml", "--force"])
                .unwrap();
        match cli.command {
            Command::Config {
                action: ConfigAction::Init { file, force },
            } => {
                assert_eq!(file.as_deref(), Some("x.toml"));
                assert!(force);
            }
            other => unreachable!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["pdbscope"]).is_err());
    }
}
