#[cfg(test)]
pub mod test_helpers {
    use crate::config::Config;
    use crate::error::{EncikError, Result};
    use crate::session::Session;
    use crate::storage::{LoadedTasks, TaskStore};
    use crate::tasks::Task;
    use std::cell::RefCell;
    use std::io;

    /// In-memory store that records every save
    #[derive(Default)]
    pub struct MemoryStore {
        initial: Vec<Task>,
        skipped: RefCell<Vec<EncikError>>,
        saves: RefCell<Vec<Vec<Task>>>,
        fail_load: bool,
        fail_save: bool,
    }

    impl MemoryStore {
        pub fn with_tasks(tasks: Vec<Task>) -> Self {
            Self {
                initial: tasks,
                ..Self::default()
            }
        }

        pub fn with_skipped(self, skipped: Vec<EncikError>) -> Self {
            Self {
                skipped: RefCell::new(skipped),
                ..self
            }
        }

        pub fn failing_load(self) -> Self {
            Self {
                fail_load: true,
                ..self
            }
        }

        pub fn failing_save(self) -> Self {
            Self {
                fail_save: true,
                ..self
            }
        }

        pub fn saves(&self) -> Vec<Vec<Task>> {
            self.saves.borrow().clone()
        }
    }

    impl TaskStore for MemoryStore {
        fn load(&self) -> Result<LoadedTasks> {
            if self.fail_load {
                return Err(EncikError::StorageRead {
                    path: "memory".into(),
                    source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
                });
            }
            Ok(LoadedTasks {
                tasks: self.initial.clone(),
                skipped: self.skipped.take(),
            })
        }

        fn save(&self, tasks: &[Task]) -> Result<()> {
            if self.fail_save {
                return Err(EncikError::StorageWrite {
                    path: "memory".into(),
                    source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
                });
            }
            self.saves.borrow_mut().push(tasks.to_vec());
            Ok(())
        }
    }

    /// Run a whole session over `input` and return everything it printed
    pub fn run_session(store: MemoryStore, input: &str) -> String {
        let mut session = Session::start(store, Vec::new(), &Config::default()).unwrap();
        session.run(input.as_bytes()).unwrap();
        String::from_utf8(session.into_output()).unwrap()
    }
}
