//! The `explain` use case: look up check/code documentation.

use swcv_domain::RankTable;
use swcv_types::explain::{self, Explanation};

#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    /// Unknown identifier; carries the registry so the caller can list alternatives.
    NotFound {
        identifier: String,
        available_check_ids: &'static [&'static str],
        available_codes: &'static [&'static str],
    },
}

pub fn run_explain(identifier: &str) -> ExplainOutput {
    explain::lookup_explanation(identifier)
        .map(ExplainOutput::Found)
        .unwrap_or_else(|| ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_check_ids: explain::all_check_ids(),
            available_codes: explain::all_codes(),
        })
}

/// Format an explanation for the terminal.
///
/// The before/after package orders are shown as written and as the rank groups
/// they parse to, so the reader sees exactly how swcv layers them.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = heading(exp.title, '=');
    out.push('\n');
    out.push_str(exp.description);
    out.push_str("\n\n");

    out.push_str(&heading("Remediation", '-'));
    out.push_str(exp.remediation);
    out.push_str("\n\n");

    out.push_str(&heading("Package order", '-'));
    out.push('\n');
    out.push_str(&order_example("Before (violation)", exp.examples.before));
    out.push('\n');
    out.push_str(&order_example("After (fixed)", exp.examples.after));
    out
}

pub fn format_not_found(
    identifier: &str,
    check_ids: &[&'static str],
    codes: &[&'static str],
) -> String {
    let mut out = format!("Unknown check_id or code: {identifier}\n");
    for (title, names) in [("Available check_ids", check_ids), ("Available codes", codes)] {
        out.push_str(&format!("\n{title}:\n"));
        for name in names {
            out.push_str(&format!("  - {name}\n"));
        }
    }
    out
}

fn heading(title: &str, rule: char) -> String {
    let underline: String = std::iter::repeat_n(rule, title.chars().count()).collect();
    format!("{title}\n{underline}\n")
}

fn order_example(label: &str, notation: &str) -> String {
    let mut out = format!("{label}:\n    {notation}\n");
    match RankTable::parse(notation) {
        Ok(table) => {
            for rank in 0..table.rank_count() {
                let packages = table.packages_at_rank(rank).join(", ");
                out.push_str(&format!("  rank {rank}: {packages}\n"));
            }
        }
        Err(err) => out.push_str(&format!("  {err}\n")),
    }
    out
}
