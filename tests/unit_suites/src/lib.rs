#![forbid(unsafe_code)]
#![allow(clippy::missing_errors_doc)]
//! Example unit test suites for the `unittesting` harness.
//!
//! Each suite is a [`TestModule`] built by a `module()` function in
//! [`suites`]. The `run-unit-tests` binary runs them from the command line.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use unit_suites::all_suites;
//! use unittesting::{HarnessConfig, run_tests};
//!
//! let suites = all_suites();
//! let failures = run_tests(&suites, &HarnessConfig::default().with_explicit_return(true))?;
//! ```

use unittesting::TestModule;

pub mod suites;

/// Names of the bundled suites, in run order.
pub const SUITE_NAMES: [&str; 3] = [
    suites::test_unit_testing_one::NAME,
    suites::test_unit_testing_two::NAME,
    suites::test_unit_testing_three::NAME,
];

/// Every bundled suite, in run order.
pub fn all_suites() -> Vec<TestModule> {
    vec![
        suites::test_unit_testing_one::module(),
        suites::test_unit_testing_two::module(),
        suites::test_unit_testing_three::module(),
    ]
}

/// Look up a bundled suite by name.
pub fn suite(name: &str) -> Option<TestModule> {
    all_suites().into_iter().find(|module| module.name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suite_names_match_modules() {
        let names: Vec<_> = all_suites()
            .iter()
            .map(|module| module.name().to_string())
            .collect();
        assert_eq!(names, SUITE_NAMES);
    }

    #[test]
    fn test_suite_lookup() {
        assert!(suite("test_unit_testing_two").is_some());
        assert!(suite("test_unit_testing_four").is_none());
    }
}
