use crate::fingerprint::fingerprint_for;
use crate::inventory::dependency_counts;
use crate::model::PackageModel;
use crate::policy::EffectiveConfig;
use crate::rank::RankTable;
use crate::report::DomainReport;
use crate::validate::{UpwardDependency, ValidationError, validate};
use serde_json::json;
use swcv_types::{Finding, Severity, SwcvData, Verdict, ids};

/// Validate `model` against `ranks` and turn the result into findings.
///
/// Findings keep scan order. `data.archive` is left empty for the caller to fill.
pub fn evaluate(model: &PackageModel, ranks: &RankTable, cfg: &EffectiveConfig) -> DomainReport {
    let findings: Vec<Finding> = match validate(model, ranks, cfg.mode) {
        Ok(outcome) => outcome.violations.iter().map(upward_finding).collect(),
        Err(err) => vec![missing_rank_finding(&err)],
    };

    let total = findings.len() as u32;

    let mut emitted = findings;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    // Every finding is an error; truncation never turns a failure into a pass.
    let verdict = if total > 0 { Verdict::Fail } else { Verdict::Pass };

    let counts = dependency_counts(model);
    let data = SwcvData {
        archive: String::new(),
        mode: cfg.mode.as_str().to_string(),
        packages_scanned: model.len() as u32,
        dependencies_scanned: model.dependency_count() as u32,
        internal_dependencies: counts.internal as u32,
        external_dependencies: counts.external as u32,
        rank_groups: ranks.rank_count() as u32,
        package_order: (0..ranks.rank_count())
            .map(|rank| ranks.packages_at_rank(rank).to_vec())
            .collect(),
        findings_total: total,
        findings_emitted: emitted.len() as u32,
        truncated_reason,
    };

    DomainReport {
        verdict,
        findings: emitted,
        data,
    }
}

fn upward_finding(v: &UpwardDependency) -> Finding {
    let symbol = v.symbol.to_string();
    Finding {
        severity: Severity::Error,
        check_id: ids::CHECK_ORDER_LAYERING.to_string(),
        code: ids::CODE_UPWARD_DEPENDENCY.to_string(),
        message: v.to_string(),
        help: Some(format!(
            "'{}' (rank {}) may only depend on packages of rank {} or lower; '{}' has rank {}.",
            v.package, v.package_rank, v.package_rank, v.owner, v.owner_rank
        )),
        fingerprint: Some(fingerprint_for(
            ids::CHECK_ORDER_LAYERING,
            ids::CODE_UPWARD_DEPENDENCY,
            &v.package,
            Some(&symbol),
        )),
        data: json!({
            "package": v.package,
            "package_rank": v.package_rank,
            "symbol": symbol,
            "owner": v.owner,
            "owner_rank": v.owner_rank,
        }),
    }
}

fn missing_rank_finding(err: &ValidationError) -> Finding {
    let ValidationError::MissingRank { package } = err;
    Finding {
        severity: Severity::Error,
        check_id: ids::CHECK_ORDER_COMPLETENESS.to_string(),
        code: ids::CODE_MISSING_RANK.to_string(),
        message: format!("package '{package}' is not ranked by the package order"),
        help: Some("Add the package to the package order.".to_string()),
        fingerprint: Some(fingerprint_for(
            ids::CHECK_ORDER_COMPLETENESS,
            ids::CODE_MISSING_RANK,
            package,
            None,
        )),
        data: json!({ "package": package }),
    }
}
