#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableFinding {
    pub severity: RenderableSeverity,
    pub check_id: String,
    pub code: String,
    pub message: String,
    /// The package the finding is about, when there is one.
    pub package: Option<String>,
    pub help: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderableData {
    pub archive: String,
    pub mode: String,
    pub packages_scanned: u32,
    pub dependencies_scanned: u32,
    pub internal_dependencies: u32,
    pub external_dependencies: u32,
    pub package_order: Vec<Vec<String>>,
    pub findings_emitted: u32,
    pub findings_total: u32,
    pub truncated_reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdictStatus,
    pub findings: Vec<RenderableFinding>,
    pub data: RenderableData,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderablePackageInventory {
    pub package: String,
    /// Local names, sorted.
    pub exports: Vec<String>,
    pub internal: Vec<String>,
    pub internal_packages: Vec<String>,
    pub external: Vec<String>,
    pub external_packages: Vec<String>,
}
