//! Dependency order validation.
//!
//! A package may depend on symbols exported by packages of the same or a lower rank.
//! Dependencies on symbols the model does not define are external and never checked.

use crate::model::{PackageModel, Resolution, Symbol};
use crate::policy::ValidationMode;
use crate::rank::RankTable;
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A package in the model is not mentioned by the package order.
    #[error("package order should rank ALL packages in swc. Package {package} is missing.")]
    MissingRank { package: String },
}

/// `package` (rank `package_rank`) uses `symbol`, exported by the higher-ranked `owner`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpwardDependency {
    pub package: String,
    pub package_rank: usize,
    pub symbol: Symbol,
    pub owner: String,
    pub owner_rank: usize,
}

impl fmt::Display for UpwardDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "package {} cannot import or use symbol: {}",
            self.package, self.symbol
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Violations in scan order: packages in discovery order, then dependencies in
    /// declaration order. A repeated dependency is reported once per package.
    pub violations: Vec<UpwardDependency>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Every package in the model must have a rank.
pub fn check_completeness(model: &PackageModel, ranks: &RankTable) -> Result<(), ValidationError> {
    match model.packages().find(|p| ranks.rank(p.name()).is_none()) {
        Some(p) => Err(ValidationError::MissingRank {
            package: p.name().to_string(),
        }),
        None => Ok(()),
    }
}

/// Check every internal dependency of every package against `ranks`.
///
/// Fails with [`ValidationError::MissingRank`] before any dependency is examined when
/// the order does not cover the model. Ordering violations are the `Ok` outcome.
pub fn validate(
    model: &PackageModel,
    ranks: &RankTable,
    mode: ValidationMode,
) -> Result<ValidationOutcome, ValidationError> {
    check_completeness(model, ranks)?;

    let mut outcome = ValidationOutcome::default();

    for pkg in model.packages() {
        let Some(package_rank) = ranks.rank(pkg.name()) else {
            continue;
        };
        let mut reported: BTreeSet<&Symbol> = BTreeSet::new();

        for dep in pkg.dependencies() {
            let Resolution::Internal(owner) = model.resolve(dep) else {
                continue;
            };
            let Some(owner_rank) = ranks.rank(owner.name()) else {
                continue;
            };
            if owner_rank <= package_rank || !reported.insert(dep) {
                continue;
            }

            outcome.violations.push(UpwardDependency {
                package: pkg.name().to_string(),
                package_rank,
                symbol: dep.clone(),
                owner: owner.name().to_string(),
                owner_rank,
            });

            if mode == ValidationMode::FirstViolation {
                return Ok(outcome);
            }
        }
    }

    Ok(outcome)
}
