#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

//! # Unittesting
//!
//! A small harness that runs suites of test methods outside of `cargo test`,
//! for pipelines that need to check their own helpers at runtime and either
//! halt or report on failure.
//!
//! The harness provides:
//! - **Registry**: modules declare test-bearing definitions in a manifest
//! - **Composition**: all definitions of a module merge into one unit
//! - **Execution**: every test method runs in isolation from the others
//! - **Reporting**: failures are logged immediately and aggregated per run
//!
//! ## Example
//!
//! ```rust
//! use unittesting::{HarnessConfig, TestCase, TestModule, run_tests};
//!
//! let module = TestModule::new("M").declare(
//!     TestCase::new("TestMath")
//!         .method("test_add", || {
//!             anyhow::ensure!(1 + 1 == 2, "math is broken");
//!             Ok(())
//!         })
//!         .method("test_boom", || anyhow::bail!("boom")),
//! );
//!
//! let config = HarnessConfig::default().with_explicit_return(true);
//! let failures = run_tests(&module, &config).unwrap().unwrap();
//!
//! assert_eq!(failures.len(), 1);
//! assert_eq!(failures[0].test, "test_boom");
//! assert_eq!(failures[0].error.to_string(), "boom");
//! ```
//!
//! ## Flags
//!
//! Logs are always written. `explicit_raise` turns any failure into an
//! [`HarnessError::TestsFailed`]; `explicit_return` hands the failure records
//! back to the caller. With neither flag set, failures are visible only in the
//! log.

pub mod compose;
pub mod config;
pub mod error;
pub mod execute;
pub mod harness;
pub mod registry;
pub mod report;
pub mod sink;

pub use compose::{CompositeUnit, ShadowedMethod, compose};
pub use config::{DiscoveryOrder, HarnessConfig};
pub use error::{HarnessError, Result};
pub use execute::{UnitOutcome, execute_unit};
pub use harness::{Harness, ModuleSet, run_tests};
pub use registry::{
    TestCase, TestDefinition, TestMethod, TestModule, TestResult, extract_test_cases,
    is_test_name,
};
pub use report::{FailureKind, FailureRecord, ModuleReport, RunReport, TestError};
pub use sink::{MemorySink, ReportSink, TracingSink};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        FailureRecord, Harness, HarnessConfig, HarnessError, TestCase, TestDefinition, TestMethod,
        TestModule, TestResult, run_tests,
    };
}
