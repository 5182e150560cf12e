use std::fmt;

/// How far the validator goes once it finds a violation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Stop at the first violation, in scan order.
    #[default]
    FirstViolation,
    /// Report every violation.
    AllViolations,
}

impl ValidationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationMode::FirstViolation => "first",
            ValidationMode::AllViolations => "all",
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub mode: ValidationMode,
    pub max_findings: usize,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            mode: ValidationMode::FirstViolation,
            max_findings: 200,
        }
    }
}
