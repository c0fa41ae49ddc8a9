//! Logging utilities.
//!
//! Centralizes logger initialization. Engine code only talks to the `log` facade;
//! `env_logger` is wired up here and nowhere else.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER};
