use crate::storage::DEFAULT_DATA_FILE;
use crate::tasks::DEFAULT_MAX_TASKS;
use clap::Parser;
use std::path::PathBuf;

const LONG_ABOUT: &str = r#"
Encik - a small interactive task list

Type one command per line:
  todo <description>                      Add a plain task
  deadline <desc> /by <date>              Add a task with a deadline
  event <desc> /from <start> /to <end>    Add an event
  list                                    Show all tasks
  mark <index> / unmark <index>           Set or clear the done flag
  delete <index>                          Remove a task
  bye                                     Save and quit

Tasks are saved after every change to the data file (data/encik.txt by default).
"#;

#[derive(Parser, Debug, Clone)]
#[command(name = "encik")]
#[command(about = "Interactive task list for todos, deadlines and events")]
#[command(long_about = LONG_ABOUT)]
#[command(version)]
pub struct Cli {
    /// Path of the task file
    #[arg(long, env = "ENCIK_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Maximum number of tasks the list can hold
    #[arg(long, env = "ENCIK_MAX_TASKS", default_value_t = DEFAULT_MAX_TASKS)]
    pub max_tasks: usize,

    /// Write logs to this file instead of stderr
    #[arg(long, env = "ENCIK_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output logs in JSON format
    #[arg(long)]
    pub json: bool,
}
