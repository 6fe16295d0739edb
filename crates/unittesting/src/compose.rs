//! Composition - merging a module's definitions into one executable unit.
//!
//! The composite exposes the union of every definition's test methods. When two
//! definitions register a method under the same name, the definition discovered
//! first wins, the same precedence left-to-right base classes get under
//! multiple inheritance. The losing method is kept in
//! [`CompositeUnit::shadowed`] so the collision stays visible in reports.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::config::DiscoveryOrder;
use crate::registry::{TestCase, TestMethod};

/// A method hidden by a same-named method of an earlier definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShadowedMethod {
    /// Method name both definitions register
    pub name: String,
    /// Definition whose method runs
    pub kept_from: String,
    /// Definition whose method never runs
    pub shadowed_from: String,
}

/// A resolved method and the definition it came from.
#[derive(Debug, Clone)]
pub struct ResolvedMethod {
    /// Definition that provided the method
    pub origin: String,
    /// The callable itself
    pub method: TestMethod,
}

/// The merged, per-module set of test methods.
#[derive(Debug, Clone, Default)]
pub struct CompositeUnit {
    methods: Vec<ResolvedMethod>,
    shadowed: Vec<ShadowedMethod>,
}

impl CompositeUnit {
    /// Resolved methods in execution order.
    pub fn methods(&self) -> &[ResolvedMethod] {
        &self.methods
    }

    /// Methods lost to a name collision.
    pub fn shadowed(&self) -> &[ShadowedMethod] {
        &self.shadowed
    }

    /// Number of test methods the unit will run.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// True if the unit has nothing to run.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Look up the resolved method for `name`.
    pub fn get(&self, name: &str) -> Option<&ResolvedMethod> {
        self.methods.iter().find(|resolved| resolved.method.name() == name)
    }
}

/// Merge `cases` into one composite, first definition winning on collision.
pub fn compose(cases: &[&TestCase], order: DiscoveryOrder) -> CompositeUnit {
    let mut unit = CompositeUnit::default();
    let mut index: HashMap<String, usize> = HashMap::new();

    for case in cases {
        for method in case.test_methods() {
            if let Some(&slot) = index.get(method.name()) {
                let kept_from = unit.methods[slot].origin.clone();
                debug!(
                    unittesting.method = method.name(),
                    unittesting.kept_from = %kept_from,
                    unittesting.shadowed_from = case.name(),
                    "Test method shadowed by an earlier definition"
                );
                unit.shadowed.push(ShadowedMethod {
                    name: method.name().to_string(),
                    kept_from,
                    shadowed_from: case.name().to_string(),
                });
                continue;
            }

            index.insert(method.name().to_string(), unit.methods.len());
            unit.methods.push(ResolvedMethod {
                origin: case.name().to_string(),
                method: method.clone(),
            });
        }
    }

    if order == DiscoveryOrder::Alphabetical {
        unit.methods.sort_by(|a, b| a.method.name().cmp(b.method.name()));
    }

    unit
}
