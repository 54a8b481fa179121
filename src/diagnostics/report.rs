//! Running checks and rendering the results

use std::time::Instant;

use colored::Colorize;
use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};
use tracing::debug;

use super::{CheckResult, CheckStatus, SystemCheck};

/// Results of a diagnostics run, in check order
#[derive(Debug, Default)]
pub struct DiagnosticsReport {
    pub results: Vec<(&'static str, CheckResult)>,
}

impl DiagnosticsReport {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn count(&self, status: CheckStatus) -> usize {
        self.results
            .iter()
            .filter(|(_, result)| result.status == status)
            .count()
    }

    /// No check failed
    pub fn is_healthy(&self) -> bool {
        self.count(CheckStatus::Fail) == 0
    }

    /// 0 = all pass, 1 = any fail, 2 = warnings only
    pub fn exit_code(&self) -> i32 {
        if !self.is_healthy() {
            1
        } else if self.count(CheckStatus::Warn) > 0 {
            2
        } else {
            0
        }
    }
}

/// Runs checks in the order they were added
#[derive(Default)]
pub struct DiagnosticsRunner {
    checks: Vec<Box<dyn SystemCheck>>,
}

impl DiagnosticsRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_check<C: SystemCheck + 'static>(mut self, check: C) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    pub fn run(self) -> DiagnosticsReport {
        let results = self
            .checks
            .into_iter()
            .map(|check| {
                let start = Instant::now();
                let mut result = check.check();
                result.duration = start.elapsed();
                debug!(
                    check = check.name(),
                    status = ?result.status,
                    duration = ?result.duration,
                    "Check finished"
                );
                (check.name(), result)
            })
            .collect();

        DiagnosticsReport { results }
    }
}

/// Renders the report as a table followed by a summary
pub fn format_report(report: &DiagnosticsReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(["System", "Status", "Duration", "Message"]);
    for (name, result) in &report.results {
        builder.push_record([
            name.to_string(),
            result.status.label(),
            format!("{:.2?}", result.duration),
            result.message.clone(),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    let passed = report.count(CheckStatus::Pass);
    let warned = report.count(CheckStatus::Warn);
    let failed = report.count(CheckStatus::Fail);

    let overall = match (failed, warned) {
        (0, 0) => "Overall: HEALTHY".green().bold(),
        (0, _) => "Overall: HEALTHY (with warnings)".yellow().bold(),
        _ => "Overall: UNHEALTHY".red().bold(),
    };

    format!(
        "{table}\n\n{}\n  Total checks: {}\n  {} Passed: {passed}\n  {} Warned: {warned}\n  {} Failed: {failed}\n\n  {overall}\n",
        "Summary".bold().underline(),
        report.total(),
        "✓".green(),
        "⚠".yellow(),
        "✗".red(),
    )
}

/// Prints the table, then any per-check details
pub fn print_report(report: &DiagnosticsReport) {
    println!("{}", format_report(report));

    for (name, result) in &report.results {
        if !result.details.is_empty() {
            println!("{} Details:", name.bold());
            for line in &result.details {
                println!("  {line}");
            }
            println!();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(CheckStatus);

    impl SystemCheck for Fixed {
        fn name(&self) -> &'static str {
            "Fixed"
        }

        fn check(&self) -> CheckResult {
            match self.0 {
                CheckStatus::Pass => CheckResult::pass("ok"),
                CheckStatus::Warn => CheckResult::warn("meh"),
                CheckStatus::Fail => CheckResult::fail("bad"),
            }
        }
    }

    #[test]
    fn exit_code_reflects_worst_status() {
        let pass = DiagnosticsRunner::new().add_check(Fixed(CheckStatus::Pass)).run();
        assert_eq!(pass.exit_code(), 0);

        let warn = DiagnosticsRunner::new()
            .add_check(Fixed(CheckStatus::Pass))
            .add_check(Fixed(CheckStatus::Warn))
            .run();
        assert_eq!(warn.exit_code(), 2);

        let fail = DiagnosticsRunner::new()
            .add_check(Fixed(CheckStatus::Warn))
            .add_check(Fixed(CheckStatus::Fail))
            .run();
        assert_eq!(fail.exit_code(), 1);
        assert!(!fail.is_healthy());
    }

    #[test]
    fn report_lists_every_check() {
        let report = DiagnosticsRunner::new()
            .add_check(Fixed(CheckStatus::Pass))
            .add_check(Fixed(CheckStatus::Fail))
            .run();

        let text = format_report(&report);
        assert_eq!(report.total(), 2);
        assert!(text.contains("Fixed"));
        assert!(text.contains("Total checks: 2"));
    }
}
