use std::env;
use std::path::PathBuf;

use crate::debugger::DebugLevel;

pub const DEBUG_ENV: &str = "LIBRIS_DEBUG";

/// Settings for the `catalogcli` shell.
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub debug_level: DebugLevel,
    pub load_sample: bool,
    pub history: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            debug_level: DebugLevel::Off,
            load_sample: true,
            history: None,
        }
    }
}

impl CliConfig {
    /// Reads `std::env::args` and the `LIBRIS_DEBUG` / `RUST_LOG` variables.
    pub fn from_env() -> Self {
        let args: Vec<String> = env::args().skip(1).collect();
        let env_level = env::var(DEBUG_ENV).or_else(|_| env::var("RUST_LOG")).ok();
        Self::resolve(&args, env_level.as_deref())
    }

    /// Flags win over the environment. Unknown arguments are ignored.
    pub fn resolve(args: &[String], env_level: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(level) = env_level.and_then(DebugLevel::parse) {
            config.debug_level = level;
        }

        for arg in args {
            if let Some(level) = arg.strip_prefix("--debug=") {
                if let Some(level) = DebugLevel::parse(level) {
                    config.debug_level = level;
                }
            } else if arg == "--no-sample" {
                config.load_sample = false;
            } else if let Some(path) = arg.strip_prefix("--history=") {
                config.history = Some(PathBuf::from(path));
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults() {
        let config = CliConfig::resolve(&[], None);
        assert_eq!(config, CliConfig::default());
        assert!(config.load_sample);
    }

    #[test]
    fn flag_overrides_env() {
        let config = CliConfig::resolve(&args(&["--debug=2"]), Some("trace"));
        assert_eq!(config.debug_level, DebugLevel::Warn);
    }

    #[test]
    fn env_level_by_name() {
        let config = CliConfig::resolve(&[], Some("debug"));
        assert_eq!(config.debug_level, DebugLevel::Debug);
    }

    #[test]
    fn parses_sample_and_history() {
        let config = CliConfig::resolve(
            &args(&["--no-sample", "--history=/tmp/libris_history", "--bogus"]),
            None,
        );
        assert!(!config.load_sample);
        assert_eq!(config.history, Some(PathBuf::from("/tmp/libris_history")));
    }
}
