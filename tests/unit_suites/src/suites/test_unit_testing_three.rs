//! A suite that declares nothing to run.
//!
//! It re-exports `TestClassOne` and declares a fixture definition whose name
//! does not follow the `test` prefix, so neither is discovered.

use unittesting::{TestCase, TestModule};

use super::test_unit_testing_one::{self, TestClassOne};

pub const NAME: &str = "test_unit_testing_three";

pub fn module() -> TestModule {
    TestModule::new(NAME)
        .import(test_unit_testing_one::NAME, TestClassOne)
        .declare(
            TestCase::new("CacheFixtures")
                .method("test_never_discovered", || anyhow::bail!("fixtures are not tests")),
        )
}
