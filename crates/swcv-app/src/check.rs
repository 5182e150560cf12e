//! The `check` use case: validate an archive against a package order and produce a report.

use anyhow::Context;
use camino::Utf8Path;
use swcv_domain::RankTable;
use swcv_domain::report::DomainReport;
use swcv_settings::{OrderSource, Overrides, ResolvedConfig, SwcvConfigV1};
use swcv_types::{SCHEMA_REPORT_V1, SwcvReport, ToolMeta, Verdict};
use time::OffsetDateTime;
use tracing::{debug, info};

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// The SWC archive, as named by the user.
    pub archive: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// Directory of the config file; `order_file` entries are relative to it.
    pub config_dir: &'a Utf8Path,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: SwcvReport,
    pub resolved_config: ResolvedConfig,
}

/// Run the check: resolve config, read the archive and the package order, validate.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let cfg = if input.config_text.trim().is_empty() {
        SwcvConfigV1::default()
    } else {
        swcv_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved = swcv_settings::resolve_config(cfg, input.config_dir, input.overrides.clone())
        .context("resolve config")?;

    let order = resolved
        .order
        .as_ref()
        .context("no package order given (use --order, --order-file, or `order` in swcv.toml)")?;

    let model = swcv_archive::read_swc(input.archive)
        .with_context(|| format!("read swc {}", input.archive))?;
    let ranks = load_rank_table(order)?;
    debug!(
        rank_groups = ranks.rank_count(),
        ranked_packages = ranks.len(),
        "parsed package order"
    );

    let DomainReport {
        verdict,
        findings,
        mut data,
    } = swcv_domain::evaluate(&model, &ranks, &resolved.effective);
    data.archive = input.archive.to_string();

    info!(
        archive = %input.archive,
        verdict = ?verdict,
        findings = data.findings_total,
        "check finished"
    );

    let report = SwcvReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict,
        findings,
        data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

fn load_rank_table(order: &OrderSource) -> anyhow::Result<RankTable> {
    match order {
        OrderSource::Inline(notation) => {
            RankTable::parse(notation).context("parse package order")
        }
        OrderSource::File(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("open package order file {path}"))?;
            RankTable::from_reader(file)
                .with_context(|| format!("parse package order file {path}"))
        }
    }
}

pub(crate) fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "swcv".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Map verdict to exit code: 0 = pass, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}
