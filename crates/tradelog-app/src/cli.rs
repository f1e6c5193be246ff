//! Command line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Trading journal dashboard settings CLI
#[derive(Parser, Debug)]
#[command(name = "tradelog", version, about, long_about = None)]
pub struct Args {
    /// Configuration file path (can also be set via TRADELOG_CONFIG env var)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Settings file path, overriding the config file and the default location
    #[arg(long)]
    pub settings_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the current settings and the derived dashboard view
    Show,
    /// Print one setting
    Get {
        /// Settings key, e.g. compactMode
        key: String,
    },
    /// Change one setting
    Set {
        /// Settings key, e.g. compactMode
        key: String,
        /// New value (true/false for toggles, a persona name, or free text)
        value: String,
    },
    /// Restore every setting to its default
    Reset,
    /// List the known settings keys with their kinds and defaults
    Keys,
    /// Report the settings file location and its status
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_command() {
        let args = Args::parse_from(["tradelog", "set", "compactMode", "true"]);
        match args.command {
            Command::Set { key, value } => {
                assert_eq!(key, "compactMode");
                assert_eq!(value, "true");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_settings_path_override() {
        let args = Args::parse_from(["tradelog", "--settings-path", "/tmp/s.json", "show"]);
        assert_eq!(args.settings_path, Some(PathBuf::from("/tmp/s.json")));
        assert!(matches!(args.command, Command::Show));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
