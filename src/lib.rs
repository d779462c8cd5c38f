//! provfold — deterministic merge and equality for build-provenance records.
//!
//! A build description ([`BuildInfo`]) is a list of modules, each carrying
//! the artifacts it produced and the dependencies it consumed. Independent
//! build steps emit fragments of the same description in whatever order
//! their tooling happens to run; this crate reconciles them:
//!
//! - [`BuildInfo::append`] folds a source description into a target in
//!   place, unioning artifact and dependency lists by identity without
//!   duplicating entries or losing provenance (which step requested a
//!   dependency, through which requester chain).
//! - [`is_equal_module_slices`] decides semantic equality of two module
//!   lists, ignoring the incidental ordering introduced by parallel
//!   producers.
//!
//! Both operations are pure value transformations over owned aggregates: no
//! I/O, no locking, no failure modes. Persisting, transmitting, and
//! collecting the records is the caller's concern, as is computing
//! checksums.

pub mod merge;
pub mod model;

pub use model::compare::is_equal_module_slices;
pub use model::types::{Artifact, BuildInfo, Checksum, Dependency, Module};
