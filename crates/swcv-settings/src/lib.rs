//! Config parsing and override resolution.
//!
//! This crate is IO-free: it parses configuration provided as strings and resolves
//! relative paths against a directory supplied by the caller.

#![forbid(unsafe_code)]

mod model;
mod resolve;

use camino::Utf8Path;

pub use model::SwcvConfigV1;
pub use resolve::{OrderSource, Overrides, ResolvedConfig, parse_mode};

/// File name looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "swcv.toml";

/// Value accepted for the optional `schema` key.
pub const SCHEMA_CONFIG_V1: &str = "swcv.config.v1";

/// Parse `swcv.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<SwcvConfigV1> {
    let cfg: SwcvConfigV1 = toml::from_str(input)?;
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }
    Ok(cfg)
}

/// Resolve the effective config used by the check (file values, then overrides).
///
/// `config_dir` is the directory of the config file; a relative `order_file` from the
/// file is resolved against it. Paths given as overrides are used as-is.
pub fn resolve_config(
    cfg: SwcvConfigV1,
    config_dir: &Utf8Path,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, config_dir, overrides)
}
