//! In-place merge of build descriptions.
//!
//! [`crate::BuildInfo::append`] folds one build fragment into an accumulated
//! target: modules are reconciled by id, artifact and dependency lists are
//! unioned by identity, and the multi-valued dependency fields (scopes,
//! requester paths) accumulate rather than overwrite.
//!
//! # Determinism guarantee
//!
//! The same target + source always produce the same merged content,
//! regardless of how the inputs were ordered by their producers:
//!
//! - Entries are processed in input order; appended entries keep it.
//! - Maps and sets are used for identity membership only and never drive
//!   output order.
//! - Scalar fields are first-seen-wins, so which value survives depends only
//!   on which aggregate is the target, never on iteration order.

pub mod append;
