//! Order-insensitive structural comparison of build-provenance records.
//!
//! Fragments of the same build produced by parallel steps rarely agree on
//! element order: modules, artifact lists, dependency lists, scopes, and
//! requester paths all come out in whatever order the producers ran.
//! [`is_equal_module_slices`] decides semantic equality across all of that
//! incidental ordering, with one deliberate exception: the element order
//! *inside* a requester path encodes the request chain and stays significant.
//!
//! # Algorithm
//!
//! Modules are matched by `(type, id)` through a map, so lookup is linear in
//! the number of modules. Artifact and dependency lists are compared as
//! multisets via signed occurrence counts keyed on a canonical form:
//! increment for the left list, decrement for the right, equal iff every
//! count returns to zero. Occurrence counts matter: an extra copy of an
//! otherwise-identical entry on one side is an inequality.
//!
//! The comparison is reflexive and symmetric by construction, never mutates
//! its inputs, and treats empty lists on both sides as equal.

use std::collections::{BTreeMap, BTreeSet};

use super::types::{Artifact, BuildInfo, Checksum, Dependency, Module};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Decide whether two module lists describe the same build content.
///
/// The module count must match exactly; every module in `a` must have a
/// `(type, id)` counterpart in `b`; and each matched pair must agree on an
/// order-insensitive, count-sensitive comparison of artifacts and
/// dependencies. Module identities are assumed unique within each list.
#[must_use]
pub fn is_equal_module_slices(a: &[Module], b: &[Module]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let by_identity: BTreeMap<(&str, &str), &Module> = b
        .iter()
        .map(|module| ((module.module_type.as_str(), module.id.as_str()), module))
        .collect();
    a.iter().all(|module| {
        by_identity
            .get(&(module.module_type.as_str(), module.id.as_str()))
            .is_some_and(|found| modules_deep_equal(module, found))
    })
}

impl BuildInfo {
    /// Return `true` if `other` describes the same build content.
    ///
    /// Compares the two module lists with [`is_equal_module_slices`]; the
    /// root `name`/`number` scalars are not part of the comparison.
    #[must_use]
    pub fn equivalent(&self, other: &Self) -> bool {
        is_equal_module_slices(&self.modules, &other.modules)
    }
}

// ---------------------------------------------------------------------------
// Deep module comparison
// ---------------------------------------------------------------------------

fn modules_deep_equal(a: &Module, b: &Module) -> bool {
    a.module_type == b.module_type
        && a.id == b.id
        && equal_artifact_multisets(&a.artifacts, &b.artifacts)
        && equal_dependency_multisets(&a.dependencies, &b.dependencies)
}

/// Multiset equality over full structural artifact equality.
fn equal_artifact_multisets(a: &[Artifact], b: &[Artifact]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut counts: BTreeMap<&Artifact, i64> = BTreeMap::new();
    for artifact in a {
        *counts.entry(artifact).or_insert(0) += 1;
    }
    for artifact in b {
        let Some(count) = counts.get_mut(artifact) else {
            return false;
        };
        *count -= 1;
    }
    counts.values().all(|&count| count == 0)
}

/// Multiset equality over canonicalized dependencies.
fn equal_dependency_multisets(a: &[Dependency], b: &[Dependency]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut counts: BTreeMap<CanonicalDependency<'_>, i64> = BTreeMap::new();
    for dependency in a {
        *counts.entry(CanonicalDependency::of(dependency)).or_insert(0) += 1;
    }
    for dependency in b {
        let Some(count) = counts.get_mut(&CanonicalDependency::of(dependency)) else {
            return false;
        };
        *count -= 1;
    }
    counts.values().all(|&count| count == 0)
}

// ---------------------------------------------------------------------------
// CanonicalDependency
// ---------------------------------------------------------------------------

/// A dependency reduced to its comparison form: scopes and requester paths
/// become ordered sets (outer order and duplicates discarded), while each
/// path keeps its internal element order.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct CanonicalDependency<'a> {
    id: &'a str,
    dependency_type: &'a str,
    checksum: &'a Checksum,
    scopes: BTreeSet<&'a str>,
    requested_by: BTreeSet<&'a [String]>,
}

impl<'a> CanonicalDependency<'a> {
    fn of(dependency: &'a Dependency) -> Self {
        Self {
            id: &dependency.id,
            dependency_type: &dependency.dependency_type,
            checksum: &dependency.checksum,
            scopes: dependency.scopes.iter().map(String::as_str).collect(),
            requested_by: dependency.requested_by.iter().map(Vec::as_slice).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------


// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------
