pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;
pub mod storage;
pub mod tasks;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
