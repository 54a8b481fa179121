//! Integration tests for the startup diagnostics

use window_shell::diagnostics::{self, CheckStatus, DiagnosticsRunner, SystemCheck, checks::*};

#[test]
fn test_default_checks_are_healthy() {
    let report = diagnostics::run_default_checks();

    if !report.is_healthy() {
        eprintln!("\n{}", diagnostics::format_report(&report));
    }

    assert!(
        report.is_healthy(),
        "Diagnostics failed: {} failures, {} warnings",
        report.count(CheckStatus::Fail),
        report.count(CheckStatus::Warn)
    );
}

#[test]
fn test_config_check() {
    let result = ConfigCheck::new().check();
    assert!(result.status.is_ok(), "Config check failed: {}", result.message);
}

#[test]
fn test_input_bridge_check() {
    let result = InputBridgeCheck::new().check();
    assert_eq!(
        result.status,
        CheckStatus::Pass,
        "Input bridge scenarios failed: {:?}",
        result.details
    );
}

#[test]
fn test_build_info_check() {
    let result = BuildInfoCheck.check();
    assert!(result.status.is_ok(), "Build info check failed: {}", result.message);
}

#[test]
fn test_system_info_check() {
    let result = SystemInfoCheck.check();
    assert!(result.status.is_ok(), "System info check failed: {}", result.message);
}

#[test]
fn test_runner_keeps_check_order() {
    let report = DiagnosticsRunner::new()
        .add_check(InputBridgeCheck::new())
        .add_check(ConfigCheck::new())
        .run();

    let names: Vec<_> = report.results.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, ["Input Bridge", "Configuration"]);
    assert_eq!(report.total(), 2);
}
