use anyhow::Context;
use swcv_render::{
    RenderableData, RenderableFinding, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
use swcv_types::{Finding, SCHEMA_REPORT_V1, Severity, SwcvData, SwcvReport, Verdict, ids};
use time::OffsetDateTime;

use crate::check::tool_meta;

pub fn parse_report_json(text: &str) -> anyhow::Result<SwcvReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse swcv report")
}

pub fn serialize_report(report: &SwcvReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &SwcvReport) -> RenderableReport {
    let d = &report.data;
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            archive: d.archive.clone(),
            mode: d.mode.clone(),
            packages_scanned: d.packages_scanned,
            dependencies_scanned: d.dependencies_scanned,
            internal_dependencies: d.internal_dependencies,
            external_dependencies: d.external_dependencies,
            package_order: d.package_order.clone(),
            findings_emitted: d.findings_emitted,
            findings_total: d.findings_total,
            truncated_reason: d.truncated_reason.clone(),
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        check_id: f.check_id.clone(),
        code: f.code.clone(),
        message: f.message.clone(),
        package: f
            .data
            .get("package")
            .and_then(|v| v.as_str())
            .map(str::to_string),
        help: f.help.clone(),
    }
}

/// A failing report carrying a single `tool.runtime` finding, written when the check
/// could not run to completion.
pub fn runtime_error_report(archive: &str, message: &str) -> SwcvReport {
    let now = OffsetDateTime::now_utc();
    SwcvReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            help: Some("Fix the tool error and re-run swcv.".to_string()),
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        data: SwcvData {
            archive: archive.to_string(),
            findings_total: 1,
            findings_emitted: 1,
            ..SwcvData::default()
        },
    }
}
