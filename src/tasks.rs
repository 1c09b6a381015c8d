//! Task model: the three task variants and the ordered, capacity-bounded task list.

use crate::error::{EncikError, Result};
use std::fmt;
use std::num::NonZeroUsize;

/// Field separator used by the storage format. Task fields may not contain it.
pub const FIELD_DELIMITER: &str = " | ";

/// Default upper bound on the number of tasks a list holds
pub const DEFAULT_MAX_TASKS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { by: String },
    Event { from: String, to: String },
}

impl TaskKind {
    /// Single-letter tag shared by the display form and the storage format
    pub fn code(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    is_done: bool,
    kind: TaskKind,
}

impl Task {
    pub fn todo(description: &str) -> Result<Self> {
        Self::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: &str, by: &str) -> Result<Self> {
        let by = required_field(by, "date")?;
        Self::new(description, TaskKind::Deadline { by })
    }

    pub fn event(description: &str, from: &str, to: &str) -> Result<Self> {
        let from = required_field(from, "start time")?;
        let to = required_field(to, "end time")?;
        Self::new(description, TaskKind::Event { from, to })
    }

    fn new(description: &str, kind: TaskKind) -> Result<Self> {
        Ok(Self {
            description: required_field(description, "description")?,
            is_done: false,
            kind,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.is_done
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn mark_done(&mut self) {
        self.is_done = true;
    }

    pub fn mark_not_done(&mut self) {
        self.is_done = false;
    }

    pub fn status_icon(&self) -> char {
        if self.is_done {
            'X'
        } else {
            ' '
        }
    }
}

/// Trim a task field and reject values that are empty or would not survive storage.
fn required_field(value: &str, name: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(EncikError::InvalidTask(format!(
            "The {} of a task cannot be empty.",
            name
        )));
    }
    // A trailing " |" would merge with the following delimiter when stored
    if value.contains(FIELD_DELIMITER) || value.ends_with(FIELD_DELIMITER.trim_end()) {
        return Err(EncikError::InvalidTask(format!(
            "The {} cannot contain '{}'.",
            name, FIELD_DELIMITER
        )));
    }
    if value.contains(['\n', '\r']) {
        return Err(EncikError::InvalidTask(format!(
            "The {} cannot span multiple lines.",
            name
        )));
    }
    Ok(value.to_string())
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.kind.code(),
            self.status_icon(),
            self.description
        )?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", by),
            TaskKind::Event { from, to } => write!(f, " (from: {} to: {})", from, to),
        }
    }
}

/// 1-based position of a task in the list, as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskIndex(NonZeroUsize);

impl TaskIndex {
    pub fn from_one_based(position: usize) -> Option<Self> {
        NonZeroUsize::new(position).map(Self)
    }

    pub fn position(self) -> usize {
        self.0.get()
    }

    /// 0-based offset into the underlying vector
    pub fn offset(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for TaskIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered list of tasks. Insertion order is display order and storage order.
#[derive(Debug, Clone)]
pub struct TaskList {
    tasks: Vec<Task>,
    max_tasks: usize,
}

impl Default for TaskList {
    fn default() -> Self {
        Self::with_capacity_limit(DEFAULT_MAX_TASKS)
    }
}

impl TaskList {
    pub fn with_capacity_limit(max_tasks: usize) -> Self {
        Self {
            tasks: Vec::new(),
            max_tasks,
        }
    }

    pub fn max_tasks(&self) -> usize {
        self.max_tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.tasks.len() >= self.max_tasks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Append a task, returning a reference to it in its new position.
    pub fn push(&mut self, task: Task) -> Result<&Task> {
        if self.is_full() {
            return Err(EncikError::ListFull(self.max_tasks));
        }
        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    pub fn get(&self, index: TaskIndex) -> Option<&Task> {
        self.tasks.get(index.offset())
    }

    pub fn get_mut(&mut self, index: TaskIndex) -> Option<&mut Task> {
        self.tasks.get_mut(index.offset())
    }

    /// Remove the task at `index`, shifting later tasks down by one.
    pub fn remove(&mut self, index: TaskIndex) -> Option<Task> {
        if index.offset() < self.tasks.len() {
            Some(self.tasks.remove(index.offset()))
        } else {
            None
        }
    }
}
