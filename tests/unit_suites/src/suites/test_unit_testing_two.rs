//! Two definitions that register the same method name.
//!
//! `TestClassTwo` is declared first, so its `test_shared` is the one that
//! runs; the failing `test_shared` of `TestClassTwoExtended` is shadowed and
//! shows up in the run report instead.

use anyhow::ensure;
use unittesting::{TestCase, TestModule, TestResult};

pub const NAME: &str = "test_unit_testing_two";

fn expected_words() -> Vec<&'static str> {
    vec!["gcs", "data", "cache"]
}

fn test_split_cache_subdir() -> TestResult {
    let words: Vec<_> = caching_tools::AIRFLOW_CACHE_SUBDIR.split('/').collect();
    ensure!(words == expected_words(), "unexpected layout: {words:?}");
    Ok(())
}

fn test_shared() -> TestResult {
    Ok(())
}

fn test_cache_path_is_relative_to_home() -> TestResult {
    let path = caching_tools::airflow_cache_path_in(std::path::Path::new("/srv/home"));
    ensure!(path.starts_with("/srv/home"), "{} escaped its home", path.display());
    Ok(())
}

pub fn module() -> TestModule {
    TestModule::new(NAME)
        .declare(
            TestCase::new("TestClassTwo")
                .method("test_split_cache_subdir", test_split_cache_subdir)
                .method("test_shared", test_shared),
        )
        .declare(
            TestCase::new("TestClassTwoExtended")
                .method("expected_words", || {
                    ensure!(!expected_words().is_empty());
                    Ok(())
                })
                .method("test_shared", || anyhow::bail!("shadowed by TestClassTwo"))
                .method(
                    "test_cache_path_is_relative_to_home",
                    test_cache_path_is_relative_to_home,
                ),
        )
}
