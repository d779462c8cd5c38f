//! Build-provenance entity types.
//!
//! A build description ([`BuildInfo`]) is produced incrementally: each build
//! step emits a fragment containing the modules it worked on, and fragments
//! are folded together afterwards. The types here are plain owned values with
//! public fields; they carry no behavior beyond identity accessors and small
//! constructors.
//!
//! Key types:
//! - [`BuildInfo`] — root aggregate: build metadata + a list of modules
//! - [`Module`] — one produced unit (an image, a package), grouping artifacts
//!   and dependencies
//! - [`Artifact`] — a file produced by a module, identified by `(name, type)`
//! - [`Dependency`] — an external unit consumed by a module, identified by
//!   `(id, type)`, carrying scopes and requester-path provenance
//! - [`Checksum`] — opaque hash strings, compared by exact field equality
//!
//! Derived `PartialEq` on these types is strict and order-sensitive. The
//! order-insensitive semantic comparison used to reconcile parallel producers
//! lives in [`crate::model::compare`].
//!
//! Serialization follows the camelCase/omitempty shape of build-provenance
//! JSON records: unset strings, empty collections, and empty checksums are
//! skipped, and absent arrays deserialize to empty ones. Persisting or
//! transmitting the records is the caller's concern.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// BuildInfo
// ---------------------------------------------------------------------------

/// Root aggregate describing one build.
///
/// Owns its modules exclusively. The `name` and `number` scalars identify the
/// build run on the accumulating side; [`BuildInfo::append`] folds modules
/// only and never touches them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    /// Build name (e.g. the CI job name). Informational.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Build number within the named build. Informational.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub number: String,
    /// The modules this build produced, in producer order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modules: Vec<Module>,
}

impl BuildInfo {
    /// Create an empty build description with the given name and number.
    #[must_use]
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
            modules: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Module
// ---------------------------------------------------------------------------

/// A named unit of a build, grouping produced artifacts and consumed
/// dependencies.
///
/// Semantic identity is `(type, id)`. During merge, modules are reconciled by
/// `id` alone; two logically distinct modules sharing an `id` are assumed not
/// to occur (a documented input assumption, not a checked invariant).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Module kind, e.g. `"docker"` or `"maven"`.
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub module_type: String,
    /// Module identifier, unique within one build description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Artifacts produced by this module, in producer order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<Artifact>,
    /// Dependencies consumed by this module, in producer order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<Dependency>,
}

impl Module {
    /// Create an empty module with the given type and id.
    #[must_use]
    pub fn new(module_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            module_type: module_type.into(),
            id: id.into(),
            artifacts: Vec::new(),
            dependencies: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Artifact
// ---------------------------------------------------------------------------

/// A file or unit produced by a module.
///
/// Identity within a module is `(name, type)`; `path` and `checksum` are
/// payload. Ordered so artifacts can key canonical maps during comparison.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Artifact {
    /// Artifact name, unique within its module for a given type.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Artifact kind, e.g. `"layer"` or `"jar"`. May be empty.
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub artifact_type: String,
    /// Producer-reported location of the artifact.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    /// Content checksums, opaque to this crate.
    #[serde(default, skip_serializing_if = "Checksum::is_empty")]
    pub checksum: Checksum,
}

impl Artifact {
    /// The `(name, type)` identity key used for de-duplication.
    #[must_use]
    pub fn identity(&self) -> (&str, &str) {
        (&self.name, &self.artifact_type)
    }
}

// ---------------------------------------------------------------------------
// Dependency
// ---------------------------------------------------------------------------

/// An external unit consumed by a module.
///
/// Identity within a module is `(id, type)`. `scopes` is semantically a set
/// (order irrelevant, duplicates meaningless). `requested_by` is a set of
/// request paths; the order of paths is not meaningful, but each path's
/// internal element order encodes the requester chain from this dependency
/// back toward the build root and is significant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Dependency identifier, e.g. a package coordinate.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Dependency kind, e.g. `"docker"` or `"gem"`. May be empty.
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub dependency_type: String,
    /// Content checksums, opaque to this crate.
    #[serde(default, skip_serializing_if = "Checksum::is_empty")]
    pub checksum: Checksum,
    /// Contexts in which the dependency applies (e.g. `"compile"`, `"test"`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
    /// Requester chains explaining how the dependency was pulled in.
    #[serde(rename = "requestedBy", default, skip_serializing_if = "Vec::is_empty")]
    pub requested_by: Vec<Vec<String>>,
}

impl Dependency {
    /// The `(id, type)` identity key used for de-duplication.
    #[must_use]
    pub fn identity(&self) -> (&str, &str) {
        (&self.id, &self.dependency_type)
    }
}

// ---------------------------------------------------------------------------
// Checksum
// ---------------------------------------------------------------------------

/// Opaque content hashes attached to artifacts and dependencies.
///
/// This crate never computes or validates hashes; fields are compared by
/// exact string equality and an all-empty checksum counts as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Checksum {
    /// SHA-1 hex digest, if the producer reported one.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sha1: String,
    /// MD5 hex digest, if the producer reported one.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub md5: String,
    /// SHA-256 hex digest, if the producer reported one.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sha256: String,
}

impl Checksum {
    /// Return `true` if no hash field is populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sha1.is_empty() && self.md5.is_empty() && self.sha256.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
