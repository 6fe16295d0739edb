//! Bundled suites.
//!
//! - `test_unit_testing_one`: checks the Airflow cache path helper
//! - `test_unit_testing_two`: two definitions sharing a method name
//! - `test_unit_testing_three`: re-exports only, nothing to run

pub mod test_unit_testing_three;
pub mod test_unit_testing_two;
