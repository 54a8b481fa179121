//! Startup diagnostics
//!
//! Each [`SystemCheck`] covers one part of the shell (configuration, build
//! metadata, host system, graphics adapters, the input bridge) and reports a
//! [`CheckResult`]. A [`DiagnosticsRunner`] runs them in order and collects a
//! [`DiagnosticsReport`] that renders as a table.
//!
//! ```no_run
//! use window_shell::diagnostics::{self, DiagnosticsRunner, checks::*};
//!
//! let report = DiagnosticsRunner::new()
//!     .add_check(ConfigCheck::new())
//!     .add_check(InputBridgeCheck::new())
//!     .run();
//!
//! println!("{}", diagnostics::format_report(&report));
//! ```

pub mod checks;
mod report;

use std::time::Duration;

pub use report::{DiagnosticsReport, DiagnosticsRunner, format_report, print_report};

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    /// Usable, but something is degraded
    Warn,
    Fail,
}

impl CheckStatus {
    /// Pass or Warn
    pub fn is_ok(self) -> bool {
        !self.is_fail()
    }

    pub fn is_fail(self) -> bool {
        self == Self::Fail
    }

    /// Status label colored for terminal output
    pub fn label(self) -> String {
        use colored::Colorize;
        match self {
            Self::Pass => "PASS".green().to_string(),
            Self::Warn => "WARN".yellow().to_string(),
            Self::Fail => "FAIL".red().to_string(),
        }
    }
}

/// What a check found
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub status: CheckStatus,
    /// One-line summary
    pub message: String,
    /// Extra lines printed under the table
    pub details: Vec<String>,
    /// Filled in by the runner
    pub duration: Duration,
}

impl CheckResult {
    fn with_status(status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: Vec::new(),
            duration: Duration::ZERO,
        }
    }

    pub fn pass(message: impl Into<String>) -> Self {
        Self::with_status(CheckStatus::Pass, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::with_status(CheckStatus::Warn, message)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::with_status(CheckStatus::Fail, message)
    }

    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }
}

/// A check of one subsystem
pub trait SystemCheck {
    /// Name shown in the report
    fn name(&self) -> &'static str;

    fn check(&self) -> CheckResult;
}

/// Runs every built-in check except the graphics check, which needs a GPU
pub fn run_default_checks() -> DiagnosticsReport {
    DiagnosticsRunner::new()
        .add_check(checks::ConfigCheck::new())
        .add_check(checks::BuildInfoCheck)
        .add_check(checks::SystemInfoCheck)
        .add_check(checks::InputBridgeCheck::new())
        .run()
}

/// Runs every built-in check, including graphics adapter enumeration
pub fn run_all_checks() -> DiagnosticsReport {
    DiagnosticsRunner::new()
        .add_check(checks::ConfigCheck::new())
        .add_check(checks::BuildInfoCheck)
        .add_check(checks::SystemInfoCheck)
        .add_check(checks::GraphicsBackendCheck)
        .add_check(checks::InputBridgeCheck::new())
        .run()
}
