//! Pure package order evaluation (no IO).
//!
//! Input: a package model constructed elsewhere and a package order notation.
//! Output: a verdict, findings, and summary data.

#![forbid(unsafe_code)]

pub mod fingerprint;
pub mod inventory;
pub mod model;
pub mod policy;
pub mod rank;
pub mod report;
pub mod validate;

mod engine;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod test_support;

pub use engine::evaluate;
pub use model::{ModelError, Package, PackageModel, Resolution, Symbol};
pub use rank::{RankParseError, RankTable};
pub use validate::{UpwardDependency, ValidationError, ValidationOutcome, validate};
