//! Task persistence
//!
//! Tasks are stored one per line as `TYPE | DONE | DESCRIPTION [| EXTRA...]`.
//! Deadlines carry one extra field (`by`), events carry two (`from`, `to`).
//! Lines that cannot be decoded are reported and skipped; they never abort a load.

use crate::error::{EncikError, Result};
use crate::tasks::{Task, TaskKind, FIELD_DELIMITER};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default location of the task file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "data/encik.txt";

/// Result of loading a task file
#[derive(Debug, Default)]
pub struct LoadedTasks {
    pub tasks: Vec<Task>,
    /// One `CorruptLine` error per skipped line
    pub skipped: Vec<EncikError>,
}

/// Storage backend for the task list.
///
/// The session only ever loads once at startup and saves the full list
/// after each change.
pub trait TaskStore {
    fn load(&self) -> Result<LoadedTasks>;

    fn save(&self, tasks: &[Task]) -> Result<()>;
}

/// Encode a single task as one storage line (without line terminator).
pub fn encode_task(task: &Task) -> String {
    let done_flag = if task.is_done() { "1" } else { "0" };
    let mut fields = vec![
        task.kind().code().to_string(),
        done_flag.to_string(),
        task.description().to_string(),
    ];
    match task.kind() {
        TaskKind::Todo => {},
        TaskKind::Deadline { by } => fields.push(by.clone()),
        TaskKind::Event { from, to } => {
            fields.push(from.clone());
            fields.push(to.clone());
        },
    }
    fields.join(FIELD_DELIMITER)
}

/// Decode one storage line back into a task.
pub fn decode_line(line: &str) -> Result<Task> {
    let line = line.trim();
    let parts: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();
    if parts.len() < 3 {
        return Err(EncikError::corrupt_line(line, "expected at least 3 fields"));
    }

    let is_done = match parts[1] {
        "1" => true,
        "0" => false,
        other => {
            return Err(EncikError::corrupt_line(
                line,
                format!("invalid done flag '{}'", other),
            ))
        },
    };
    let description = parts[2];

    let task = match parts[0] {
        "T" => Task::todo(description),
        "D" => {
            if parts.len() < 4 {
                return Err(EncikError::corrupt_line(line, "deadline is missing its date"));
            }
            Task::deadline(description, parts[3])
        },
        "E" => {
            if parts.len() < 5 {
                return Err(EncikError::corrupt_line(
                    line,
                    "event is missing its start or end time",
                ));
            }
            Task::event(description, parts[3], parts[4])
        },
        other => {
            return Err(EncikError::corrupt_line(
                line,
                format!("unknown task type '{}'", other),
            ))
        },
    };

    let mut task = task.map_err(|e| EncikError::corrupt_line(line, e.to_string()))?;
    if is_done {
        task.mark_done();
    }
    Ok(task)
}

/// Decode a whole file's contents, collecting undecodable lines instead of failing.
pub fn decode_all(contents: &str) -> LoadedTasks {
    let mut loaded = LoadedTasks::default();
    for line in contents.lines().filter(|l| !l.trim().is_empty()) {
        match decode_line(line) {
            Ok(task) => loaded.tasks.push(task),
            Err(e) => loaded.skipped.push(e),
        }
    }
    loaded
}

/// Encode a list of tasks as file contents, one terminated line per task.
pub fn encode_all(tasks: &[Task]) -> String {
    tasks
        .iter()
        .map(|task| encode_task(task) + "\n")
        .collect()
}

/// Plain-text file store
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskStore for FileStore {
    fn load(&self) -> Result<LoadedTasks> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No task file yet, starting empty");
                return Ok(LoadedTasks::default());
            },
            Err(source) => {
                return Err(EncikError::StorageRead {
                    path: self.path.clone(),
                    source,
                })
            },
        };

        let loaded = decode_all(&contents);
        tracing::debug!(
            path = %self.path.display(),
            tasks = loaded.tasks.len(),
            skipped = loaded.skipped.len(),
            "Loaded task file"
        );
        Ok(loaded)
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        let write_error = |source: std::io::Error| EncikError::StorageWrite {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_error)?;
            }
        }
        fs::write(&self.path, encode_all(tasks)).map_err(write_error)?;

        tracing::debug!(path = %self.path.display(), tasks = tasks.len(), "Saved task file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_tasks() -> Vec<Task> {
        let mut done_todo = Task::todo("read book").unwrap();
        done_todo.mark_done();
        vec![
            done_todo,
            Task::deadline("submit report", "Friday").unwrap(),
            Task::event("trip", "Mon 2pm", "Wed").unwrap(),
        ]
    }

    #[test]
    fn test_encode_lines() {
        let tasks = sample_tasks();
        assert_eq!(encode_task(&tasks[0]), "T | 1 | read book");
        assert_eq!(encode_task(&tasks[1]), "D | 0 | submit report | Friday");
        assert_eq!(encode_task(&tasks[2]), "E | 0 | trip | Mon 2pm | Wed");
    }

    #[test]
    fn test_round_trip_preserves_list() {
        let tasks = sample_tasks();
        let loaded = decode_all(&encode_all(&tasks));
        assert!(loaded.skipped.is_empty());
        assert_eq!(loaded.tasks, tasks);
    }

    #[test]
    fn test_round_trip_with_pipes_inside_fields() {
        let tasks = vec![
            Task::todo("a|b").unwrap(),
            Task::deadline("| leading", "x|y").unwrap(),
            Task::event("|", "|", "|x|").unwrap(),
        ];
        let loaded = decode_all(&encode_all(&tasks));
        assert!(loaded.skipped.is_empty());
        assert_eq!(loaded.tasks, tasks);
    }

    #[test]
    fn test_decode_tolerates_whitespace_and_extra_fields() {
        let task = decode_line("  T | 0 | read book | leftover  ").unwrap();
        assert_eq!(task.to_string(), "[T][ ] read book");
    }

    #[test]
    fn test_decode_rejects_corrupt_lines() {
        for line in [
            "T | 0",
            "garbage",
            "X | 0 | something",
            "D | 0 | report",
            "E | 1 | trip | Mon",
            "T | 2 | read book",
            "T | 0 |  ",
        ] {
            assert!(
                matches!(decode_line(line), Err(EncikError::CorruptLine { .. })),
                "line should be rejected: {}",
                line
            );
        }
    }

    #[test]
    fn test_decode_all_skips_bad_lines_only() {
        let contents = "T | 0 | one\nnot a task\n\nD | 1 | two | Friday\nE | 0 | three\n";
        let loaded = decode_all(contents);

        assert_eq!(loaded.tasks.len(), 2);
        assert_eq!(loaded.tasks[1].to_string(), "[D][X] two (by: Friday)");
        assert_eq!(loaded.skipped.len(), 2);
        match &loaded.skipped[0] {
            EncikError::CorruptLine { line, .. } => assert_eq!(line, "not a task"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("nope").join("encik.txt"));

        let loaded = store.load().unwrap();
        assert!(loaded.tasks.is_empty());
        assert!(loaded.skipped.is_empty());
    }

    #[test]
    fn test_save_creates_directory_and_rewrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("encik.txt");
        let store = FileStore::new(&path);

        store.save(&sample_tasks()).unwrap();
        assert_eq!(store.load().unwrap().tasks, sample_tasks());

        let fewer = vec![Task::todo("only one").unwrap()];
        store.save(&fewer).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "T | 0 | only one\n");
    }

    #[test]
    fn test_save_to_unwritable_location_fails() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file where the data directory should be
        let blocker = temp_dir.path().join("data");
        std::fs::write(&blocker, "not a directory").unwrap();

        let store = FileStore::new(blocker.join("encik.txt"));
        let err = store.save(&sample_tasks()).unwrap_err();
        assert!(matches!(err, EncikError::StorageWrite { .. }));
    }

    #[test]
    fn test_load_unreadable_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        // Reading a directory as a file is an I/O error other than NotFound
        let store = FileStore::new(temp_dir.path());
        let err = store.load().unwrap_err();
        assert!(matches!(err, EncikError::StorageRead { .. }));
    }
}
