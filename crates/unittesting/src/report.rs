//! Failure records and report text.
//!
//! Every line the harness logs is built here, so the wording stays consistent
//! between the per-module summaries, the aggregate report and the error
//! message returned under `explicit_raise`.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::compose::ShadowedMethod;

/// How a test method failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The method panicked
    Panic,
    /// The method returned `Err`
    Error,
}

/// Representation of one failure, fixed at capture time.
///
/// Displays as the full trace when one was captured, otherwise as the short
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestError {
    /// Panic or returned error
    pub kind: FailureKind,
    /// Short summary of the failure
    pub message: String,
    /// Full trace, present only under verbose logging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

impl TestError {
    /// A failure with only a short message.
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            trace: None,
        }
    }

    /// Attach a full trace.
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }
}

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.trace {
            Some(trace) => f.write_str(trace),
            None => f.write_str(&self.message),
        }
    }
}

/// One failed test method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureRecord {
    /// Module the test belongs to
    pub module: String,
    /// Name of the failing method
    pub test: String,
    /// What went wrong
    pub error: TestError,
}

impl FailureRecord {
    /// Create a record.
    pub fn new(module: impl Into<String>, test: impl Into<String>, error: TestError) -> Self {
        Self {
            module: module.into(),
            test: test.into(),
            error,
        }
    }
}

impl fmt::Display for FailureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} : {}", self.module, self.test, self.error)
    }
}

/// Per-module outcome within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleReport {
    /// Module name
    pub name: String,
    /// Number of test methods executed
    pub total: usize,
    /// Number of those that failed
    pub failed: usize,
    /// Methods lost to name collisions during composition
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shadowed: Vec<ShadowedMethod>,
    /// Wall-clock time spent executing the module
    #[serde(serialize_with = "serialize_millis")]
    pub duration: Duration,
}

impl ModuleReport {
    /// Number of test methods that passed.
    pub fn passed(&self) -> usize {
        self.total - self.failed
    }
}

/// Everything one harness invocation produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// One entry per module, in input order
    pub modules: Vec<ModuleReport>,
    /// Every failure, in module-then-method order
    pub failures: Vec<FailureRecord>,
}

impl RunReport {
    /// True if no test failed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Names of the processed modules, in input order.
    pub fn module_names(&self) -> Vec<&str> {
        self.modules.iter().map(|m| m.name.as_str()).collect()
    }

    /// Number of test methods executed across all modules.
    pub fn total_tests(&self) -> usize {
        self.modules.iter().map(|m| m.total).sum()
    }
}

fn serialize_millis<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64() * 1000.0)
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

fn bracketed(names: &[&str]) -> String {
    format!("[{}]", names.join(", "))
}

/// Logged immediately when a test method fails.
pub fn failure_message(record: &FailureRecord) -> String {
    format!("FAILED: {} : {}\n{}\n", record.module, record.test, record.error)
}

/// Module summary when every test passed.
pub fn module_passed_message(module: &str, total: usize) -> String {
    format!("All {total} unit tests for {module} passed.\n")
}

/// Module summary when some tests failed.
pub fn module_failed_message(module: &str, failed: &[&str], total: usize) -> String {
    format!(
        "{} unit test{} out of {total} for {module} did not pass: {}\n",
        failed.len(),
        plural(failed.len()),
        bracketed(failed)
    )
}

/// Run summary when every test of every module passed.
pub fn run_passed_message(modules: &[&str]) -> String {
    format!("All unit tests for {} passed.\n", bracketed(modules))
}

/// Aggregate report listing every failure of the run.
pub fn run_failed_message(failures: &[FailureRecord], modules: &[&str]) -> String {
    let lines: Vec<String> = failures.iter().map(ToString::to_string).collect();
    format!(
        "\n\nA total of {} unit test{} for\n\n{}\n\ndid not pass:\n\n{}\n",
        failures.len(),
        plural(failures.len()),
        modules.join("\n"),
        lines.join("\n")
    )
}

/// Message of the aggregate error returned under `explicit_raise`.
pub fn raise_message(failures: &[FailureRecord]) -> String {
    let lines: Vec<String> = failures.iter().map(ToString::to_string).collect();
    format!("{} failed: \n{}", failures.len(), lines.join("\n"))
}
