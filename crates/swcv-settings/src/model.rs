use serde::{Deserialize, Serialize};

/// `swcv.toml` schema v1.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwcvConfigV1 {
    /// Optional schema marker; must be `swcv.config.v1` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Inline package order notation, e.g. `"core,(ui,net),app"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,

    /// Path to a file holding the package order notation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_file: Option<String>,

    /// `first` (default) or `all`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// How many findings to emit before truncating the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_findings: Option<u32>,
}
