//! Interactive session
//!
//! A [`Session`] owns the task list, the store it persists to, and the writer
//! it prints to. It loads once at startup, then handles one input line at a
//! time until `bye` or end of input. Every change is saved before its
//! confirmation is printed.

use crate::command::{self, Command, DELETE_USAGE, MARK_USAGE, UNMARK_USAGE};
use crate::config::Config;
use crate::error::{EncikError, Result};
use crate::storage::TaskStore;
use crate::tasks::{Task, TaskIndex, TaskList};
use crate::ui;
use std::io::{BufRead, Write};

/// What the loop should do after a line has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<S: TaskStore, W: Write> {
    tasks: TaskList,
    store: S,
    out: W,
}

impl<S: TaskStore, W: Write> Session<S, W> {
    /// Load saved tasks and print the welcome message.
    ///
    /// Storage problems are reported as warnings and never prevent the
    /// session from starting.
    pub fn start(store: S, out: W, config: &Config) -> Result<Self> {
        let mut session = Self {
            tasks: TaskList::with_capacity_limit(config.max_tasks),
            store,
            out,
        };
        session.load()?;
        session.print(&ui::welcome())?;
        Ok(session)
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Read and execute lines until `bye` or end of input, then say goodbye.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        let mut buffer = Vec::new();
        loop {
            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                tracing::debug!("End of input");
                break;
            }
            let line = String::from_utf8_lossy(&buffer);
            if self.execute(&line)? == Flow::Exit {
                break;
            }
        }
        self.print(ui::FAREWELL)
    }

    /// Handle one input line.
    ///
    /// Mistakes in the input are printed and the session carries on. Only
    /// failures to write output are returned as errors.
    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        match self.dispatch(line) {
            Ok(flow) => Ok(flow),
            Err(e) if e.is_user_error() => {
                tracing::debug!(code = e.to_error_code(), "Rejected input");
                self.print(&e.to_string())?;
                Ok(Flow::Continue)
            },
            Err(e) => Err(e),
        }
    }

    fn dispatch(&mut self, line: &str) -> Result<Flow> {
        let command = command::parse(line)?;
        tracing::debug!(command = command.name(), "Dispatching command");

        match command {
            Command::Bye => return Ok(Flow::Exit),
            Command::List => self.list()?,
            Command::Add(task) => self.add(task)?,
            Command::Mark(index) => self.set_done(index, true)?,
            Command::Unmark(index) => self.set_done(index, false)?,
            Command::Delete(index) => self.delete(index)?,
        }
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> Result<()> {
        if self.tasks.is_empty() {
            return self.print(ui::EMPTY_LIST);
        }

        let lines: Vec<String> = self
            .tasks
            .iter()
            .enumerate()
            .map(|(i, task)| format!("{}.{}", i + 1, task))
            .collect();
        self.print(&format!("{}\n{}", ui::LIST_HEADER, lines.join("\n")))
    }

    fn add(&mut self, task: Task) -> Result<()> {
        let rendered = self.tasks.push(task)?.to_string();
        self.persist()?;
        self.print(&format!(
            "{}\n  {}\n{}",
            ui::ADDED,
            rendered,
            ui::task_count(self.tasks.len())
        ))
    }

    fn set_done(&mut self, index: TaskIndex, done: bool) -> Result<()> {
        let usage = if done { MARK_USAGE } else { UNMARK_USAGE };
        let task = self
            .tasks
            .get_mut(index)
            .ok_or_else(|| EncikError::validation("Invalid task index.", usage))?;

        if done {
            task.mark_done();
        } else {
            task.mark_not_done();
        }
        let rendered = task.to_string();

        self.persist()?;
        let header = if done { ui::MARKED } else { ui::UNMARKED };
        self.print(&format!("{}\n  {}", header, rendered))
    }

    fn delete(&mut self, index: TaskIndex) -> Result<()> {
        let removed = self
            .tasks
            .remove(index)
            .ok_or_else(|| EncikError::validation("Invalid task index.", DELETE_USAGE))?;

        self.persist()?;
        self.print(&format!(
            "{}\n  {}\n{}",
            ui::DELETED,
            removed,
            ui::task_count(self.tasks.len())
        ))
    }

    fn load(&mut self) -> Result<()> {
        let loaded = match self.store.load() {
            Ok(loaded) => loaded,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load tasks, starting with an empty list");
                writeln!(self.out, "{}", ui::LOAD_WARNING)?;
                return Ok(());
            },
        };

        for skipped in &loaded.skipped {
            tracing::warn!(error = %skipped, "Skipping corrupted line");
            let warning = match skipped {
                EncikError::CorruptLine { line, .. } => ui::corrupt_line_warning(line),
                other => ui::corrupt_line_warning(&other.to_string()),
            };
            writeln!(self.out, "{}", warning)?;
        }

        let mut dropped = 0;
        for task in loaded.tasks {
            if self.tasks.push(task).is_err() {
                dropped += 1;
            }
        }
        if dropped > 0 {
            let max_tasks = self.tasks.max_tasks();
            tracing::warn!(dropped, max_tasks, "Saved tasks exceed capacity");
            writeln!(self.out, "{}", ui::overflow_warning(dropped, max_tasks))?;
        }

        tracing::info!(tasks = self.tasks.len(), "Session started");
        Ok(())
    }

    /// Save the whole list. A failed save is a warning; memory stays authoritative.
    fn persist(&mut self) -> Result<()> {
        if let Err(e) = self.store.save(self.tasks.as_slice()) {
            tracing::warn!(error = %e, "Failed to save tasks");
            writeln!(self.out, "{}", ui::SAVE_WARNING)?;
        }
        Ok(())
    }

    fn print(&mut self, body: &str) -> Result<()> {
        ui::write_framed(&mut self.out, body)?;
        Ok(())
    }
}
