//! Harness - the single entry point tying the stages together.
//!
//! For each module, in input order: extract its test-bearing definitions,
//! compose them into one unit, execute the unit. Once every module has run,
//! the failures are aggregated into one report and the caller's flags decide
//! whether they come back as an error, as a value, or only in the log.

use std::sync::Arc;

use tracing::debug;

use crate::compose::compose;
use crate::config::HarnessConfig;
use crate::error::{HarnessError, Result};
use crate::execute::execute_unit;
use crate::registry::{TestModule, extract_test_cases};
use crate::report::{self, FailureRecord, ModuleReport, RunReport};
use crate::sink::{ReportSink, TracingSink};

/// One module or an ordered sequence of modules.
#[derive(Debug, Clone, Default)]
pub struct ModuleSet<'a>(Vec<&'a TestModule>);

impl<'a> ModuleSet<'a> {
    /// The modules, in run order.
    pub fn as_slice(&self) -> &[&'a TestModule] {
        &self.0
    }
}

impl<'a> From<&'a TestModule> for ModuleSet<'a> {
    fn from(module: &'a TestModule) -> Self {
        Self(vec![module])
    }
}

impl<'a> From<&'a [TestModule]> for ModuleSet<'a> {
    fn from(modules: &'a [TestModule]) -> Self {
        Self(modules.iter().collect())
    }
}

impl<'a> From<&'a Vec<TestModule>> for ModuleSet<'a> {
    fn from(modules: &'a Vec<TestModule>) -> Self {
        Self(modules.iter().collect())
    }
}

impl<'a> From<Vec<&'a TestModule>> for ModuleSet<'a> {
    fn from(modules: Vec<&'a TestModule>) -> Self {
        Self(modules)
    }
}

impl<'a, const N: usize> From<[&'a TestModule; N]> for ModuleSet<'a> {
    fn from(modules: [&'a TestModule; N]) -> Self {
        Self(modules.to_vec())
    }
}

/// Runs modules of tests and reports on them.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use unittesting::{Harness, HarnessConfig, MemorySink, TestModule};
///
/// let sink = Arc::new(MemorySink::new());
/// let harness = Harness::new(HarnessConfig::default()).with_sink(sink.clone());
///
/// let module = TestModule::new("empty");
/// assert!(harness.run(&module).unwrap().is_none());
/// assert_eq!(sink.count_containing("All 0 unit tests for empty passed."), 1);
/// ```
pub struct Harness {
    config: HarnessConfig,
    sink: Arc<dyn ReportSink>,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new(HarnessConfig::default())
    }
}

impl Harness {
    /// Create a harness that logs through `tracing`.
    pub fn new(config: HarnessConfig) -> Self {
        Self {
            config,
            sink: Arc::new(TracingSink),
        }
    }

    /// Send report lines somewhere else.
    pub fn with_sink(mut self, sink: Arc<dyn ReportSink>) -> Self {
        self.sink = sink;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Run every module and return the full report, ignoring the
    /// raise/return flags.
    pub fn run_report<'a>(&self, modules: impl Into<ModuleSet<'a>>) -> RunReport {
        let modules = modules.into();
        let mut run = RunReport::default();

        for module in modules.as_slice() {
            let name = module.name();

            debug!(unittesting.module = name, "Extracting");
            let cases = extract_test_cases(module, self.config.order);

            debug!(unittesting.module = name, definitions = cases.len(), "Composing");
            let unit = compose(&cases, self.config.order);

            debug!(unittesting.module = name, tests = unit.len(), "Executing");
            let outcome = execute_unit(
                name,
                &unit,
                self.config.verbose_logging,
                self.sink.as_ref(),
            );

            run.modules.push(ModuleReport {
                name: name.to_string(),
                total: outcome.total,
                failed: outcome.failures.len(),
                shadowed: unit.shadowed().to_vec(),
                duration: outcome.duration,
            });
            run.failures.extend(outcome.failures);
        }

        debug!(failures = run.failures.len(), "Aggregating");
        let names = run.module_names();
        if run.is_success() {
            self.sink.warn(&report::run_passed_message(&names));
        } else {
            self.sink.warn(&report::run_failed_message(&run.failures, &names));
        }

        run
    }

    /// Run every module and apply the configured flags.
    ///
    /// Returns `Ok(Some(failures))` under `explicit_return`, otherwise
    /// `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::TestsFailed`] when `explicit_raise` is set and
    /// any test failed. This takes precedence over `explicit_return`.
    pub fn run<'a>(
        &self,
        modules: impl Into<ModuleSet<'a>>,
    ) -> Result<Option<Vec<FailureRecord>>> {
        let run = self.run_report(modules);

        if self.config.explicit_raise && !run.is_success() {
            debug!("Reported+Raised");
            return Err(HarnessError::tests_failed(run.failures));
        }

        debug!("Reported");
        Ok(self.config.explicit_return.then_some(run.failures))
    }
}

/// Run `modules` with `config`, logging through `tracing`.
///
/// Shorthand for `Harness::new(*config).run(modules)`.
///
/// # Errors
///
/// Returns [`HarnessError::TestsFailed`] when `config.explicit_raise` is set
/// and any test failed.
pub fn run_tests<'a>(
    modules: impl Into<ModuleSet<'a>>,
    config: &HarnessConfig,
) -> Result<Option<Vec<FailureRecord>>> {
    Harness::new(*config).run(modules)
}
