//! # scriptstr-engine
//!
//! Stateful front end over [`scriptstr_core`]: one owned [`StringOps`]
//! record per instance, holding the current string value and the
//! uint/bool/string-array result slots. Each operation is a pure
//! transformation from (inputs) to (new slot value); a slot is always
//! overwritten in full, never partially updated.
//!
//! The [`dispatch`] module is the call/response boundary external
//! harnesses go through: operations addressed by wire name with
//! JSON-encoded arguments, slot reads by slot name. Malformed
//! arguments fail there as [`OpsError::InvalidArgument`] before any
//! slot is written; every in-range and out-of-range string input has
//! a defined result and is never an error.

#![deny(unsafe_code)]

pub mod dispatch;
pub mod error;
pub mod ops;

pub use dispatch::{invoke, read};
pub use error::OpsError;
pub use ops::{NOT_FOUND, StringOps};
