//! Session configuration, resolved from command-line flags and environment variables.

use crate::cli::Cli;
use crate::storage::DEFAULT_DATA_FILE;
use crate::tasks::DEFAULT_MAX_TASKS;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Task file location
    pub data_file: PathBuf,
    /// Upper bound on the number of tasks in the list
    pub max_tasks: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            max_tasks: DEFAULT_MAX_TASKS,
        }
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            data_file: cli.data_file.clone(),
            max_tasks: cli.max_tasks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["encik"]);
        let config = Config::from(&cli);
        assert_eq!(config.data_file, PathBuf::from("data/encik.txt"));
        assert_eq!(config.max_tasks, 100);
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from(["encik", "--data-file", "/tmp/tasks.txt", "--max-tasks", "5"]);
        let config = Config::from(&cli);
        assert_eq!(config.data_file, PathBuf::from("/tmp/tasks.txt"));
        assert_eq!(config.max_tasks, 5);
    }
}
