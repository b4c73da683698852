//! Logging utilities.
//!
//! Centralizes logger initialization. Library code only uses the `log`
//! facade; `env_logger` is wired up here for binaries and tests.

mod init;

pub use init::{LoggingConfig, init_logging};
