//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Package order parsing determinism and grouping
//! - Rank table consistency between `rank` and `packages_at_rank`
//! - Validator soundness against a brute-force pairwise check

use crate::model::{PackageModel, Resolution, Symbol};
use crate::policy::ValidationMode;
use crate::rank::{RankParseError, RankTable};
use crate::validate::validate;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Dotted lowercase package names like `com.acme.util`.
fn arb_package_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9]{0,5}(\\.[a-z][a-z0-9]{0,5}){0,2}").unwrap()
}

/// A rank layout: each inner vec is one rank; singletons are written bare.
fn arb_layout() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(arb_package_name(), 1..4), 1..6)
}

fn render_layout(layout: &[Vec<String>], sep: &str) -> String {
    layout
        .iter()
        .map(|group| {
            if group.len() == 1 {
                group[0].clone()
            } else {
                format!("({})", group.join(sep))
            }
        })
        .collect::<Vec<_>>()
        .join(sep)
}

/// A small model: `n` packages `p0..pn`, each exporting `S`, with random edges.
fn arb_model() -> impl Strategy<Value = (PackageModel, Vec<usize>)> {
    (2usize..6).prop_flat_map(|n| {
        (
            prop::collection::vec((0..n, 0..n, any::<bool>()), 0..12),
            prop::collection::vec(0..n, n),
        )
            .prop_map(move |(edges, ranks)| {
                let mut model = PackageModel::new();
                for i in 0..n {
                    let name = format!("p{i}");
                    model.define(Symbol::new(name.as_str(), "S").unwrap());
                }
                for (from, to, external) in edges {
                    let dep = if external {
                        Symbol::new(format!("ext{to}"), "S").unwrap()
                    } else {
                        Symbol::new(format!("p{to}"), "S").unwrap()
                    };
                    model.package_mut(&format!("p{from}")).add_dependency(dep);
                }
                (model, ranks)
            })
    })
}

/// Notation that puts package `pi` at rank `ranks[i]`, one group per rank value.
fn notation_for(ranks: &[usize]) -> String {
    let max = ranks.iter().copied().max().unwrap_or(0);
    let layout: Vec<Vec<String>> = (0..=max)
        .map(|r| {
            let mut group: Vec<String> = ranks
                .iter()
                .enumerate()
                .filter(|(_, rank)| **rank == r)
                .map(|(i, _)| format!("p{i}"))
                .collect();
            if group.is_empty() {
                group.push(format!("unused{r}"));
            }
            group
        })
        .collect();
    render_layout(&layout, ",")
}

// ============================================================================
// Rank parser properties
// ============================================================================

proptest! {
    #[test]
    fn parsing_is_deterministic(input in "[a-c(), \\n]{0,40}") {
        let first = RankTable::parse(&input);
        let second = RankTable::parse(&input);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
            _ => prop_assert!(false, "parse results diverged for {:?}", input),
        }
    }

    #[test]
    fn parser_never_panics(input in ".*") {
        let _ = RankTable::parse(&input);
    }

    #[test]
    fn layout_round_trips_to_ranks(layout in arb_layout()) {
        // Duplicate names would make last-write-wins kick in; keep them unique.
        let mut seen = std::collections::BTreeSet::new();
        prop_assume!(layout.iter().flatten().all(|n| seen.insert(n.clone())));

        let table = RankTable::parse(&render_layout(&layout, ", ")).unwrap();
        prop_assert_eq!(table.rank_count(), layout.len());
        for (rank, group) in layout.iter().enumerate() {
            prop_assert_eq!(table.packages_at_rank(rank), group.as_slice());
            for name in group {
                prop_assert_eq!(table.rank(name), Some(rank));
            }
        }
    }

    #[test]
    fn whitespace_is_insignificant(layout in arb_layout()) {
        let tight = RankTable::parse(&render_layout(&layout, ",")).unwrap();
        let loose = RankTable::parse(&render_layout(&layout, " ,\n\t ")).unwrap();
        prop_assert_eq!(tight, loose);
    }

    #[test]
    fn every_ranked_name_is_listed_exactly_once_at_its_rank(input in "[a-d(),]{0,30}") {
        if let Ok(table) = RankTable::parse(&input) {
            for rank in 0..table.rank_count() {
                for name in table.packages_at_rank(rank) {
                    let listed = table
                        .packages_at_rank(rank)
                        .iter()
                        .filter(|n| *n == name)
                        .count();
                    prop_assert_eq!(listed, 1);
                }
            }
            for rank in 0..table.rank_count() {
                for name in table.packages_at_rank(rank) {
                    let r = table.rank(name).unwrap();
                    prop_assert!(table.packages_at_rank(r).contains(name));
                }
            }
        }
    }

    #[test]
    fn double_comma_always_fails(layout in arb_layout()) {
        let notation = format!("{},,x", render_layout(&layout, ","));
        let is_comma_error = matches!(
            RankTable::parse(&notation),
            Err(RankParseError::TooManyCommas { .. })
        );
        prop_assert!(is_comma_error);
    }

    #[test]
    fn unclosed_group_always_fails(layout in arb_layout()) {
        let notation = format!("{},(x,y", render_layout(&layout, ","));
        let is_paren_error = matches!(
            RankTable::parse(&notation),
            Err(RankParseError::ParenthesesMismatch)
        );
        prop_assert!(is_paren_error);
    }
}

// ============================================================================
// Validator properties
// ============================================================================

proptest! {
    #[test]
    fn validator_agrees_with_pairwise_check((model, ranks) in arb_model()) {
        let table = RankTable::parse(&notation_for(&ranks)).unwrap();

        let mut expected = Vec::new();
        for pkg in model.packages() {
            let own = table.rank(pkg.name()).unwrap();
            for dep in pkg.dependencies() {
                if let Resolution::Internal(owner) = model.resolve(dep) {
                    let theirs = table.rank(owner.name()).unwrap();
                    if theirs > own {
                        expected.push((pkg.name().to_string(), dep.clone()));
                    }
                }
            }
        }
        expected.dedup();

        let all = validate(&model, &table, ValidationMode::AllViolations).unwrap();
        let mut got: Vec<(String, Symbol)> = all
            .violations
            .iter()
            .map(|v| (v.package.clone(), v.symbol.clone()))
            .collect();
        got.sort();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(&got, &expected);

        let first = validate(&model, &table, ValidationMode::FirstViolation).unwrap();
        prop_assert_eq!(first.is_valid(), all.is_valid());
        prop_assert_eq!(first.violations.first(), all.violations.first());
        prop_assert!(first.violations.len() <= 1);
    }

    #[test]
    fn flattening_all_packages_into_one_group_always_passes((model, _ranks) in arb_model()) {
        let names: Vec<String> = model.packages().map(|p| p.name().to_string()).collect();
        let table = RankTable::parse(&format!("({})", names.join(","))).unwrap();
        let outcome = validate(&model, &table, ValidationMode::AllViolations).unwrap();
        prop_assert!(outcome.is_valid());
    }
}
