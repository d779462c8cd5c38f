//! Fold a source build description into a target, entity by entity.
//!
//! The merge is a union, never a last-write-wins overwrite:
//!
//! 1. **Identical** identity + content: idempotent, keep the target's copy.
//! 2. **New** identity: append a deep copy of the incoming entity.
//! 3. **Matched** identity with differing content: accumulate list-valued
//!    fields (scopes, requester paths) and retain the target's scalars. The
//!    one exception is the artifact fill-in rule: a field the target never
//!    populated (empty `path`, empty checksum) is filled from the incoming
//!    record; populated fields are never overwritten.
//!
//! Nothing present in either input is lost, and no identity appears twice in
//! the result. Appended entities are clones; the source and target share no
//! storage after the call returns, so mutating one later cannot leak into
//! the other.

use std::collections::{HashMap, HashSet, hash_map::Entry};

use crate::model::types::{Artifact, BuildInfo, Dependency, Module};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

impl BuildInfo {
    /// Fold everything from `other` into `self`, in place.
    ///
    /// Modules are reconciled by `id`: an unseen id is appended wholesale
    /// (deep copy), a matching id has its artifact and dependency lists
    /// merged per the union rules above. The root `name`/`number` scalars
    /// stay the target's. `other` is left untouched.
    ///
    /// Both operands may be empty; the operation is total and cannot fail.
    /// Callers integrating fragments concurrently must serialize calls on
    /// one target; there is no internal locking.
    pub fn append(&mut self, other: &Self) {
        let mut index: HashMap<String, usize> = self
            .modules
            .iter()
            .enumerate()
            .map(|(position, module)| (module.id.clone(), position))
            .collect();
        for incoming in &other.modules {
            match index.entry(incoming.id.clone()) {
                Entry::Occupied(slot) => {
                    tracing::debug!(module = incoming.id.as_str(), "merging into existing module");
                    merge_module(&mut self.modules[*slot.get()], incoming);
                }
                Entry::Vacant(slot) => {
                    tracing::debug!(module = incoming.id.as_str(), "appending new module");
                    slot.insert(self.modules.len());
                    self.modules.push(incoming.clone());
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Module merge
// ---------------------------------------------------------------------------

fn merge_module(target: &mut Module, incoming: &Module) {
    merge_artifact_lists(&mut target.artifacts, &incoming.artifacts);
    merge_dependency_lists(&mut target.dependencies, &incoming.dependencies);
}

// ---------------------------------------------------------------------------
// Artifact merge
// ---------------------------------------------------------------------------

/// Union `incoming` into `target`, de-duplicated by `(name, type)`.
///
/// A matched target artifact is retained; only its unset fields are filled
/// from the incoming record.
fn merge_artifact_lists(target: &mut Vec<Artifact>, incoming: &[Artifact]) {
    let mut index: HashMap<(String, String), usize> = target
        .iter()
        .enumerate()
        .map(|(position, artifact)| {
            (
                (artifact.name.clone(), artifact.artifact_type.clone()),
                position,
            )
        })
        .collect();
    for artifact in incoming {
        let key = (artifact.name.clone(), artifact.artifact_type.clone());
        match index.entry(key) {
            Entry::Occupied(slot) => fill_missing_artifact_fields(&mut target[*slot.get()], artifact),
            Entry::Vacant(slot) => {
                slot.insert(target.len());
                target.push(artifact.clone());
            }
        }
    }
}

/// Fill-in rule for a matched artifact: an empty target field takes the
/// incoming value; a populated field is never overwritten.
fn fill_missing_artifact_fields(target: &mut Artifact, incoming: &Artifact) {
    if target.path.is_empty() && !incoming.path.is_empty() {
        target.path = incoming.path.clone();
    }
    if target.checksum.is_empty() && !incoming.checksum.is_empty() {
        target.checksum = incoming.checksum.clone();
    }
}

// ---------------------------------------------------------------------------
// Dependency merge
// ---------------------------------------------------------------------------

/// Union `incoming` into `target`, de-duplicated by `(id, type)`.
///
/// Matched dependencies accumulate scopes and requester paths; unmatched
/// ones are appended wholesale. Incoming entries are processed independently
/// in input order.
fn merge_dependency_lists(target: &mut Vec<Dependency>, incoming: &[Dependency]) {
    let mut index: HashMap<(String, String), usize> = target
        .iter()
        .enumerate()
        .map(|(position, dependency)| {
            (
                (dependency.id.clone(), dependency.dependency_type.clone()),
                position,
            )
        })
        .collect();
    for dependency in incoming {
        let key = (dependency.id.clone(), dependency.dependency_type.clone());
        match index.entry(key) {
            Entry::Occupied(slot) => merge_dependency(&mut target[*slot.get()], dependency),
            Entry::Vacant(slot) => {
                slot.insert(target.len());
                target.push(dependency.clone());
            }
        }
    }
}

/// Reconcile one matched dependency pair.
///
/// Scopes and requester paths become the de-duplicated union of both sides:
/// the target's entries first in their original order, then unseen incoming
/// entries in incoming order. The checksum and any other scalar keep the
/// target's value.
fn merge_dependency(target: &mut Dependency, incoming: &Dependency) {
    target.scopes = union_scopes(&target.scopes, &incoming.scopes);
    target.requested_by = union_request_paths(&target.requested_by, &incoming.requested_by);
}

/// De-duplicated union of two scope lists, order as documented above.
fn union_scopes(existing: &[String], incoming: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(existing.len() + incoming.len());
    let mut merged = Vec::with_capacity(existing.len() + incoming.len());
    for scope in existing.iter().chain(incoming) {
        if seen.insert(scope.as_str()) {
            merged.push(scope.clone());
        }
    }
    merged
}

/// De-duplicated union of two requester-path lists.
///
/// Two paths are equal iff their string sequences are identical in identical
/// order. Membership keys on the path itself rather than a joined encoding,
/// which could collide when components contain the separator.
fn union_request_paths(existing: &[Vec<String>], incoming: &[Vec<String>]) -> Vec<Vec<String>> {
    let mut seen: HashSet<&[String]> = HashSet::with_capacity(existing.len() + incoming.len());
    let mut merged = Vec::with_capacity(existing.len() + incoming.len());
    for path in existing.iter().chain(incoming) {
        if seen.insert(path.as_slice()) {
            merged.push(path.clone());
        }
    }
    merged
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------


// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------
