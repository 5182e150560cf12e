use crate::model::SwcvConfigV1;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use swcv_domain::policy::{EffectiveConfig, ValidationMode};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub order: Option<String>,
    pub order_file: Option<Utf8PathBuf>,
    pub mode: Option<String>,
    pub max_findings: Option<u32>,
}

/// Where the package order notation comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrderSource {
    Inline(String),
    File(Utf8PathBuf),
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    /// `None` when neither the file nor the overrides name an order.
    pub order: Option<OrderSource>,
}

pub fn resolve_config(
    cfg: SwcvConfigV1,
    config_dir: &Utf8Path,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let mut effective = EffectiveConfig::default();

    if let Some(mode) = overrides.mode.as_deref().or(cfg.mode.as_deref()) {
        effective.mode = parse_mode(mode)?;
    }

    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    let from_overrides = order_source(overrides.order, overrides.order_file)
        .context("invalid command line order")?;
    let from_file = order_source(
        cfg.order,
        cfg.order_file.map(|p| config_dir.join(p)),
    )
    .context("invalid config order")?;

    Ok(ResolvedConfig {
        effective,
        order: from_overrides.or(from_file),
    })
}

fn order_source(
    inline: Option<String>,
    file: Option<Utf8PathBuf>,
) -> anyhow::Result<Option<OrderSource>> {
    match (inline, file) {
        (Some(_), Some(_)) => anyhow::bail!("`order` and `order_file` are mutually exclusive"),
        (Some(notation), None) => Ok(Some(OrderSource::Inline(notation))),
        (None, Some(path)) => Ok(Some(OrderSource::File(path))),
        (None, None) => Ok(None),
    }
}

pub fn parse_mode(v: &str) -> anyhow::Result<ValidationMode> {
    match v {
        "first" => Ok(ValidationMode::FirstViolation),
        "all" => Ok(ValidationMode::AllViolations),
        other => anyhow::bail!("unknown mode: {other} (expected 'first' or 'all')"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;

    fn dir() -> &'static Utf8Path {
        Utf8Path::new("conf")
    }

    #[test]
    fn empty_config_resolves_to_defaults() {
        let resolved = resolve_config(SwcvConfigV1::default(), dir(), Overrides::default())
            .expect("resolve");
        assert_eq!(resolved.effective.mode, ValidationMode::FirstViolation);
        assert_eq!(resolved.effective.max_findings, 200);
        assert!(resolved.order.is_none());
    }

    #[test]
    fn file_values_are_applied() {
        let cfg = parse_config_toml(
            r#"
order = "core,(ui,net),app"
mode = "all"
max_findings = 5
"#,
        )
        .expect("parse");
        let resolved = resolve_config(cfg, dir(), Overrides::default()).expect("resolve");
        assert_eq!(resolved.effective.mode, ValidationMode::AllViolations);
        assert_eq!(resolved.effective.max_findings, 5);
        assert_eq!(
            resolved.order,
            Some(OrderSource::Inline("core,(ui,net),app".to_string()))
        );
    }

    #[test]
    fn config_order_file_is_relative_to_config_dir() {
        let cfg = parse_config_toml(r#"order_file = "order.txt""#).expect("parse");
        let resolved = resolve_config(cfg, dir(), Overrides::default()).expect("resolve");
        assert_eq!(
            resolved.order,
            Some(OrderSource::File(Utf8PathBuf::from("conf/order.txt")))
        );
    }

    #[test]
    fn overrides_win_over_file_values() {
        let cfg = parse_config_toml(
            r#"
order_file = "order.txt"
mode = "all"
max_findings = 5
"#,
        )
        .expect("parse");
        let overrides = Overrides {
            order: Some("a,b".to_string()),
            mode: Some("first".to_string()),
            max_findings: Some(1),
            ..Overrides::default()
        };
        let resolved = resolve_config(cfg, dir(), overrides).expect("resolve");
        assert_eq!(resolved.effective.mode, ValidationMode::FirstViolation);
        assert_eq!(resolved.effective.max_findings, 1);
        assert_eq!(resolved.order, Some(OrderSource::Inline("a,b".to_string())));
    }

    #[test]
    fn override_order_file_is_used_as_given() {
        let overrides = Overrides {
            order_file: Some(Utf8PathBuf::from("layers/order.txt")),
            ..Overrides::default()
        };
        let resolved =
            resolve_config(SwcvConfigV1::default(), dir(), overrides).expect("resolve");
        assert_eq!(
            resolved.order,
            Some(OrderSource::File(Utf8PathBuf::from("layers/order.txt")))
        );
    }

    #[test]
    fn order_and_order_file_conflict() {
        let cfg = parse_config_toml(
            r#"
order = "a,b"
order_file = "order.txt"
"#,
        )
        .expect("parse");
        let err = resolve_config(cfg, dir(), Overrides::default()).unwrap_err();
        assert!(format!("{err:#}").contains("mutually exclusive"));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let cfg = parse_config_toml(r#"mode = "some""#).expect("parse");
        let err = resolve_config(cfg, dir(), Overrides::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown mode: some (expected 'first' or 'all')"
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_config_toml(r#"profile = "strict""#).is_err());
    }
}
