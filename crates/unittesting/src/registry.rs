//! Test registry - the manifest a module exposes to the harness.
//!
//! A [`TestModule`] lists the test-bearing definitions it declares. Each
//! definition is a named bundle of [`TestMethod`]s. Discovery follows a naming
//! convention: only definitions and methods whose names start with `test`
//! (case-insensitive) take part in a run.

use std::fmt;
use std::sync::Arc;

use crate::config::DiscoveryOrder;

/// Outcome of a single test method. `Err` (or a panic) marks a failure.
pub type TestResult = anyhow::Result<()>;

type TestFn = Arc<dyn Fn() -> TestResult + Send + Sync>;

/// Returns true if `name` follows the case-insensitive `test` prefix convention.
pub fn is_test_name(name: &str) -> bool {
    name.get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("test"))
}

/// A named zero-argument callable registered on a definition.
#[derive(Clone)]
pub struct TestMethod {
    name: String,
    func: TestFn,
}

impl TestMethod {
    /// Wrap a callable under the given name.
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn() -> TestResult + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Name the method was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the harness will execute this method.
    pub fn is_test(&self) -> bool {
        is_test_name(&self.name)
    }

    pub(crate) fn invoke(&self) -> TestResult {
        (self.func)()
    }
}

impl fmt::Debug for TestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestMethod")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Capability shared by everything that can be registered on a module.
///
/// # Example
///
/// ```rust
/// use unittesting::{TestDefinition, TestMethod, TestModule};
///
/// struct TestParsing;
///
/// impl TestDefinition for TestParsing {
///     fn name(&self) -> &str {
///         "TestParsing"
///     }
///
///     fn methods(&self) -> Vec<TestMethod> {
///         vec![TestMethod::new("test_empty", || Ok(()))]
///     }
/// }
///
/// let module = TestModule::new("parsing").declare(TestParsing);
/// assert_eq!(module.members().len(), 1);
/// ```
pub trait TestDefinition {
    /// Name of the definition, matched against the `test` prefix.
    fn name(&self) -> &str;

    /// Every method of the definition, in declaration order.
    ///
    /// Helpers may be listed too; only `test`-prefixed methods are executed.
    fn methods(&self) -> Vec<TestMethod>;
}

/// A concrete test-bearing definition built method by method.
#[derive(Debug, Clone)]
pub struct TestCase {
    name: String,
    methods: Vec<TestMethod>,
}

impl TestCase {
    /// Create an empty definition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    /// Snapshot any [`TestDefinition`] into a case.
    ///
    /// Repeated names collapse the same way [`TestCase::method`] does.
    pub fn from_definition<D: TestDefinition + ?Sized>(definition: &D) -> Self {
        let mut case = Self::new(definition.name());
        for method in definition.methods() {
            case.register(method);
        }
        case
    }

    /// Register a method.
    ///
    /// Registering a name a second time replaces the earlier method but keeps
    /// its position, so only the latest body under a name ever runs.
    pub fn method<F>(mut self, name: impl Into<String>, func: F) -> Self
    where
        F: Fn() -> TestResult + Send + Sync + 'static,
    {
        self.register(TestMethod::new(name, func));
        self
    }

    fn register(&mut self, method: TestMethod) {
        match self.methods.iter_mut().find(|m| m.name == method.name) {
            Some(slot) => *slot = method,
            None => self.methods.push(method),
        }
    }

    /// Name of the definition.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every registered method, helpers included.
    pub fn all_methods(&self) -> &[TestMethod] {
        &self.methods
    }

    /// Registered methods that follow the `test` prefix convention.
    pub fn test_methods(&self) -> impl Iterator<Item = &TestMethod> {
        self.methods.iter().filter(|method| method.is_test())
    }
}

impl TestDefinition for TestCase {
    fn name(&self) -> &str {
        &self.name
    }

    fn methods(&self) -> Vec<TestMethod> {
        self.methods.clone()
    }
}

/// Where a module member comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Declared by the module itself
    Declared,
    /// Re-exported from another module
    Imported {
        /// Name of the module that declares it
        from: String,
    },
}

/// One entry of a module manifest.
#[derive(Debug, Clone)]
pub struct Member {
    /// The definition
    pub case: TestCase,
    /// Whether the module declares or merely re-exports it
    pub origin: Origin,
}

/// A named collection of definitions, supplied by the caller.
#[derive(Debug, Clone)]
pub struct TestModule {
    name: String,
    members: Vec<Member>,
}

impl TestModule {
    /// Create an empty module.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Declare a definition owned by this module.
    pub fn declare<D: TestDefinition>(mut self, definition: D) -> Self {
        self.members.push(Member {
            case: TestCase::from_definition(&definition),
            origin: Origin::Declared,
        });
        self
    }

    /// Record a definition re-exported from another module.
    ///
    /// Imported members are visible in the manifest but never discovered, so a
    /// suite that pulls in another suite's definitions does not run them twice.
    pub fn import<D: TestDefinition>(mut self, from: impl Into<String>, definition: D) -> Self {
        self.members.push(Member {
            case: TestCase::from_definition(&definition),
            origin: Origin::Imported { from: from.into() },
        });
        self
    }

    /// Name used in every report line.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full manifest, declared and imported members alike.
    pub fn members(&self) -> &[Member] {
        &self.members
    }
}

/// Enumerate the test-bearing definitions a module declares.
///
/// Imported members and definitions whose names do not start with `test` are
/// skipped. An empty result is valid.
pub fn extract_test_cases(module: &TestModule, order: DiscoveryOrder) -> Vec<&TestCase> {
    let mut cases: Vec<&TestCase> = module
        .members
        .iter()
        .filter(|member| member.origin == Origin::Declared)
        .map(|member| &member.case)
        .filter(|case| is_test_name(case.name()))
        .collect();

    if order == DiscoveryOrder::Alphabetical {
        cases.sort_by(|a, b| a.name().cmp(b.name()));
    }

    cases
}
