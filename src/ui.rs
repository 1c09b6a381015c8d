//! Console text: the separator frame and the fixed messages printed by the session.

use std::io::{self, Write};

pub const LINE_LENGTH: usize = 60;
pub const LINE_SEPARATOR: char = '-';

pub const BOT_NAME: &str = "Encik";
pub const FAREWELL: &str = "Bye. Hope to see you again soon!";
pub const EMPTY_LIST: &str = "There are no tasks in your list.";
pub const LIST_HEADER: &str = "Here are the tasks in your list:";
pub const ADDED: &str = "Got it. I've added this task:";
pub const MARKED: &str = "Nice! I've marked this task as done:";
pub const UNMARKED: &str = "OK, I've marked this task as not done yet:";
pub const DELETED: &str = "Noted. I've removed this task:";

pub const LOAD_WARNING: &str = "Warning: Unable to load tasks from file.";
pub const SAVE_WARNING: &str = "Warning: Unable to save tasks to file.";

pub fn separator() -> String {
    LINE_SEPARATOR.to_string().repeat(LINE_LENGTH)
}

/// Write `body` between two separator lines.
pub fn write_framed<W: Write>(out: &mut W, body: &str) -> io::Result<()> {
    let line = separator();
    writeln!(out, "{}", line)?;
    writeln!(out, "{}", body)?;
    writeln!(out, "{}", line)?;
    out.flush()
}

pub fn welcome() -> String {
    format!("Hello! I'm {}\nWhat can I do for you?", BOT_NAME)
}

pub fn task_count(count: usize) -> String {
    format!("Now you have {} tasks in the list.", count)
}

pub fn corrupt_line_warning(line: &str) -> String {
    format!("Warning: Skipping corrupted line: {}", line)
}

pub fn overflow_warning(dropped: usize, max_tasks: usize) -> String {
    format!(
        "Warning: Task list is full (max {} tasks), ignoring {} saved task(s).",
        max_tasks, dropped
    )
}
