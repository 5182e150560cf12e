//! Fuzz target for dependency order validation.
//!
//! Goal: Validation should **never panic**, and first-violation mode must report
//! the first violation that all-violations mode finds.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_validate
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use swcv_domain::policy::ValidationMode;
use swcv_domain::{PackageModel, RankTable, Symbol, validate};

#[derive(Arbitrary, Debug)]
struct ValidateInput {
    /// `(package index, symbol index)` definitions.
    defs: Vec<(u8, u8)>,
    /// `(from package, to package, symbol index)` dependencies.
    deps: Vec<(u8, u8, u8)>,
    notation: String,
}

fn symbol(package: u8, name: u8) -> Option<Symbol> {
    Symbol::new(format!("p{}", package % 8), format!("S{}", name % 4)).ok()
}

fuzz_target!(|input: ValidateInput| {
    if input.defs.len() > 64 || input.deps.len() > 256 || input.notation.len() > 512 {
        return;
    }

    let mut model = PackageModel::new();
    for (package, name) in input.defs {
        if let Some(def) = symbol(package, name) {
            model.define(def);
        }
    }
    for (from, to, name) in input.deps {
        if let Some(dep) = symbol(to, name) {
            model
                .package_mut(&format!("p{}", from % 8))
                .add_dependency(dep);
        }
    }

    let Ok(ranks) = RankTable::parse(&input.notation) else {
        return;
    };

    let first = validate(&model, &ranks, ValidationMode::FirstViolation);
    let all = validate(&model, &ranks, ValidationMode::AllViolations);
    match (first, all) {
        (Ok(first), Ok(all)) => assert_eq!(first.violations.first(), all.violations.first()),
        (Err(a), Err(b)) => assert_eq!(a, b),
        _ => panic!("modes disagree on completeness"),
    }
});
