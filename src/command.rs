//! Command parsing
//!
//! Turns one raw input line into a [`Command`] with validated arguments.
//! Task-creating commands build their [`Task`] here, so a parsed command
//! can always be executed.

use crate::error::{EncikError, Result};
use crate::tasks::{Task, TaskIndex};

pub const MARK_USAGE: &str = "mark <index>";
pub const UNMARK_USAGE: &str = "unmark <index>";
pub const DELETE_USAGE: &str = "delete <index>";
pub const TODO_USAGE: &str = "todo <description>";
pub const DEADLINE_USAGE: &str = "deadline <desc> /by <date>";
pub const EVENT_USAGE: &str = "event <desc> /from <start> /to <end>";

const DEADLINE_BY: &str = " /by ";
const EVENT_FROM: &str = " /from ";
const EVENT_TO: &str = " /to ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Bye,
    List,
    Mark(TaskIndex),
    Unmark(TaskIndex),
    Delete(TaskIndex),
    Add(Task),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Bye => "bye",
            Command::List => "list",
            Command::Mark(_) => "mark",
            Command::Unmark(_) => "unmark",
            Command::Delete(_) => "delete",
            Command::Add(_) => "add",
        }
    }

    /// Commands that change the task list and must be persisted
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Mark(_) | Command::Unmark(_) | Command::Delete(_) | Command::Add(_)
        )
    }
}

/// Parse a raw input line.
///
/// The command word is case-insensitive. Everything after it is the
/// command's argument text.
pub fn parse(input: &str) -> Result<Command> {
    let input = input.trim();
    let (word, rest) = match input.find(char::is_whitespace) {
        Some(pos) => input.split_at(pos),
        None => (input, ""),
    };

    match word.to_lowercase().as_str() {
        "bye" => Ok(Command::Bye),
        "list" => Ok(Command::List),
        "mark" => parse_index(rest, MARK_USAGE).map(Command::Mark),
        "unmark" => parse_index(rest, UNMARK_USAGE).map(Command::Unmark),
        "delete" => parse_index(rest, DELETE_USAGE).map(Command::Delete),
        "todo" => parse_todo(rest).map(Command::Add),
        "deadline" => parse_deadline(rest).map(Command::Add),
        "event" => parse_event(rest).map(Command::Add),
        _ => Err(EncikError::UnknownCommand(word.to_string())),
    }
}

fn parse_index(rest: &str, usage: &'static str) -> Result<TaskIndex> {
    rest.trim()
        .parse::<usize>()
        .ok()
        .and_then(TaskIndex::from_one_based)
        .ok_or_else(|| EncikError::validation("Invalid task index.", usage))
}

fn parse_todo(rest: &str) -> Result<Task> {
    if rest.trim().is_empty() {
        return Err(EncikError::validation(
            "The description of a todo cannot be empty.",
            TODO_USAGE,
        ));
    }
    Task::todo(rest).map_err(|e| e.with_usage(TODO_USAGE))
}

fn parse_deadline(rest: &str) -> Result<Task> {
    let (description, by) = rest
        .split_once(DEADLINE_BY)
        .ok_or_else(|| EncikError::validation("Invalid deadline format.", DEADLINE_USAGE))?;

    if description.trim().is_empty() || by.trim().is_empty() {
        return Err(EncikError::validation(
            "The description or date cannot be empty.",
            DEADLINE_USAGE,
        ));
    }
    Task::deadline(description, by).map_err(|e| e.with_usage(DEADLINE_USAGE))
}

fn parse_event(rest: &str) -> Result<Task> {
    let invalid_format = || EncikError::validation("Invalid event format.", EVENT_USAGE);

    let (description, times) = rest.split_once(EVENT_FROM).ok_or_else(invalid_format)?;
    let (from, to) = times.split_once(EVENT_TO).ok_or_else(invalid_format)?;

    if description.trim().is_empty() || from.trim().is_empty() || to.trim().is_empty() {
        return Err(EncikError::validation(
            "The description or time cannot be empty.",
            EVENT_USAGE,
        ));
    }
    Task::event(description, from, to).map_err(|e| e.with_usage(EVENT_USAGE))
}
