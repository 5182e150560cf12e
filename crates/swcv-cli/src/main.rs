//! CLI entry point for swcv.
//!
//! This module is intentionally thin: it handles argument parsing, logging setup, I/O,
//! and exit codes. All business logic lives in the `swcv-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use swcv_app::{
    CheckInput, ExplainOutput, format_explanation, format_not_found, parse_report_json,
    render_annotations, render_inventory, render_markdown, render_text, run_check,
    run_explain, run_inventory, runtime_error_report, serialize_report, to_renderable,
    verdict_exit_code,
};
use swcv_settings::{DEFAULT_CONFIG_FILE, Overrides};
use swcv_types::SwcvReport;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive, e.g. `SWCV_LOG=debug`.
const LOG_ENV: &str = "SWCV_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "swcv",
    version,
    about = "Package dependency order validator for ActionScript 3 SWC libraries"
)]
struct Cli {
    /// Path to swcv config TOML (a missing file means defaults).
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: Utf8PathBuf,

    /// Log debug events to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate an archive against a package order and write artifacts.
    Check {
        /// The SWC archive to validate.
        archive: Utf8PathBuf,

        /// Package order notation, e.g. "core,(ui,net),app".
        #[arg(long, conflicts_with = "order_file")]
        order: Option<String>,

        /// File holding the package order notation.
        #[arg(long)]
        order_file: Option<Utf8PathBuf>,

        /// Stop at the first violation (first) or report all of them (all).
        #[arg(long)]
        mode: Option<String>,

        /// Override maximum findings to emit.
        #[arg(long)]
        max_findings: Option<u32>,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/swcv/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/swcv/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Print every package with its exports and internal/external dependencies.
    Inventory {
        /// The SWC archive to describe.
        archive: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/swcv/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/swcv/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g. "order.layering") or code (e.g. "upward_dependency").
        identifier: String,
    },
}

struct CheckArgs {
    archive: Utf8PathBuf,
    overrides: Overrides,
    report_out: Utf8PathBuf,
    write_markdown: bool,
    markdown_out: Utf8PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Commands::Check {
            archive,
            order,
            order_file,
            mode,
            max_findings,
            report_out,
            write_markdown,
            markdown_out,
        } => cmd_check(
            &cli.config,
            CheckArgs {
                archive,
                overrides: Overrides {
                    order,
                    order_file,
                    mode,
                    max_findings,
                },
                report_out,
                write_markdown,
                markdown_out,
            },
        ),
        Commands::Inventory { archive } => cmd_inventory(&archive),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Annotations { report, max } => cmd_annotations(report, max),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_check(config: &Utf8Path, args: CheckArgs) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        // Missing config file is allowed (defaults apply).
        let cfg_text = if config.exists() {
            std::fs::read_to_string(config).with_context(|| format!("read config {config}"))?
        } else {
            debug!(config = %config, "no config file; using defaults");
            String::new()
        };
        let config_dir = config.parent().unwrap_or_else(|| Utf8Path::new(""));

        let output = run_check(CheckInput {
            archive: &args.archive,
            config_text: &cfg_text,
            config_dir,
            overrides: args.overrides.clone(),
        })?;

        write_report_file(&args.report_out, &output.report).context("write report json")?;

        let renderable = to_renderable(&output.report);
        if args.write_markdown {
            let md = render_markdown(&renderable);
            write_text_file(&args.markdown_out, &md).context("write markdown")?;
        }
        print!("{}", render_text(&renderable));

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(args.archive.as_str(), &format!("{err:#}"));
            let _ = write_report_file(&args.report_out, &report);
            eprintln!("swcv error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_inventory(archive: &Utf8Path) -> anyhow::Result<()> {
    let packages = run_inventory(archive)?;
    print!("{}", render_inventory(&packages));
    Ok(())
}

fn write_report_file(path: &Utf8Path, report: &SwcvReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {path}"))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {path}"))?;
    Ok(())
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{md}");
    }

    Ok(())
}

fn cmd_annotations(report_path: Utf8PathBuf, max: usize) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;

    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{annotation}");
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}
