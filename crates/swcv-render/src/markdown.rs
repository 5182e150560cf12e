use crate::{RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();
    let data = &report.data;

    out.push_str("# swcv report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    if !data.archive.is_empty() {
        out.push_str(&format!("- Archive: `{}`\n", data.archive));
    }
    out.push_str(&format!("- Verdict: **{verdict}**\n"));
    if !data.mode.is_empty() {
        out.push_str(&format!("- Mode: {}\n", data.mode));
    }
    out.push_str(&format!(
        "- Packages: {} / Dependencies: {} ({} internal, {} external)\n",
        data.packages_scanned,
        data.dependencies_scanned,
        data.internal_dependencies,
        data.external_dependencies
    ));
    out.push_str(&format!(
        "- Findings: {} (emitted) / {} (total)\n\n",
        data.findings_emitted, data.findings_total
    ));

    if let Some(r) = &data.truncated_reason {
        out.push_str(&format!("> Note: {r}\n\n"));
    }

    if !data.package_order.is_empty() {
        out.push_str("## Package order\n\n");
        out.push_str("| Rank | Packages |\n| --- | --- |\n");
        for (rank, group) in data.package_order.iter().enumerate() {
            let packages = if group.is_empty() {
                "_(empty)_".to_string()
            } else {
                group
                    .iter()
                    .map(|p| format!("`{}`", escape_table_pipes(p)))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            out.push_str(&format!("| {rank} | {packages} |\n"));
        }
        out.push('\n');
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        let sev = match f.severity {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        };
        out.push_str(&format!(
            "- [{sev}] `{}` / `{}`: {}\n",
            f.check_id, f.code, f.message
        ));
        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {help}\n"));
        }
    }

    out
}

/// A raw `|` ends a table cell, even inside a code span.
fn escape_table_pipes(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableData, RenderableFinding};

    fn data() -> RenderableData {
        RenderableData {
            archive: "lib.swc".to_string(),
            mode: "first".to_string(),
            packages_scanned: 3,
            dependencies_scanned: 3,
            internal_dependencies: 2,
            external_dependencies: 1,
            package_order: vec![
                vec!["c".to_string()],
                vec!["b".to_string()],
                vec!["a".to_string()],
            ],
            findings_emitted: 0,
            findings_total: 0,
            truncated_reason: None,
        }
    }

    #[test]
    fn renders_passing_report() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Pass,
            findings: Vec::new(),
            data: RenderableData {
                package_order: vec![vec!["a".to_string(), "b".to_string()], Vec::new()],
                ..data()
            },
        };

        insta::assert_snapshot!(render_markdown(&report), @r"
        # swcv report

        - Archive: `lib.swc`
        - Verdict: **PASS**
        - Mode: first
        - Packages: 3 / Dependencies: 3 (2 internal, 1 external)
        - Findings: 0 (emitted) / 0 (total)

        ## Package order

        | Rank | Packages |
        | --- | --- |
        | 0 | `a`, `b` |
        | 1 | _(empty)_ |

        No findings.
        ");
    }

    #[test]
    fn pipes_in_package_names_stay_inside_the_cell() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Pass,
            findings: Vec::new(),
            data: RenderableData {
                package_order: vec![vec!["a|b".to_string(), "c".to_string()]],
                ..data()
            },
        };

        let md = render_markdown(&report);
        assert!(md.contains("| 0 | `a\\|b`, `c` |\n"), "{md}");
    }

    #[test]
    fn renders_failing_report_with_findings() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            findings: vec![RenderableFinding {
                severity: RenderableSeverity::Error,
                check_id: "order.layering".to_string(),
                code: "upward_dependency".to_string(),
                message: "package b cannot import or use symbol: a:X".to_string(),
                package: Some("b".to_string()),
                help: Some("Move the symbol down.".to_string()),
            }],
            data: RenderableData {
                findings_emitted: 1,
                findings_total: 1,
                ..data()
            },
        };

        insta::assert_snapshot!(render_markdown(&report), @r"
        # swcv report

        - Archive: `lib.swc`
        - Verdict: **FAIL**
        - Mode: first
        - Packages: 3 / Dependencies: 3 (2 internal, 1 external)
        - Findings: 1 (emitted) / 1 (total)

        ## Package order

        | Rank | Packages |
        | --- | --- |
        | 0 | `c` |
        | 1 | `b` |
        | 2 | `a` |

        ## Findings

        - [ERROR] `order.layering` / `upward_dependency`: package b cannot import or use symbol: a:X
          - help: Move the symbol down.
        ");
    }

    #[test]
    fn truncation_note_and_missing_order_section() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            findings: Vec::new(),
            data: RenderableData {
                archive: String::new(),
                package_order: Vec::new(),
                findings_total: 4,
                truncated_reason: Some("findings truncated to max_findings=0".to_string()),
                ..data()
            },
        };

        let md = render_markdown(&report);
        assert!(!md.contains("Archive:"));
        assert!(!md.contains("## Package order"));
        assert!(md.contains("> Note: findings truncated to max_findings=0"));
        assert!(md.contains("Verdict: **FAIL**"));
    }
}
