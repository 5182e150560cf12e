use crate::{RenderablePackageInventory, RenderableReport};

/// Plain console output for a check: one line per finding, nothing on a pass.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();

    for f in &report.findings {
        let line = match (f.code.as_str(), f.package.as_deref()) {
            ("missing_rank", Some(package)) => format!(
                "Package order file should rank ALL packages in swc. Package {package} is missing."
            ),
            ("upward_dependency", _) => format!("Dependency validation failure: {}", f.message),
            ("runtime_error", _) => format!("Error: {}", f.message),
            _ => format!("[{}:{}] {}", f.check_id, f.code, f.message),
        };
        out.push_str(&line);
        out.push('\n');
    }

    if let Some(r) = &report.data.truncated_reason {
        out.push_str(&format!("({r})\n"));
    }

    out
}

/// The package report: every package with its exports and its dependencies split
/// into internal and external lists.
pub fn render_inventory_text(packages: &[RenderablePackageInventory]) -> String {
    let mut out = String::new();

    for pkg in packages {
        out.push_str(&pkg.package);
        out.push('\n');
        section(&mut out, "Exports", &pkg.exports);
        section(&mut out, "Dependencies", &pkg.internal);
        section(&mut out, "Dependencies By Package", &pkg.internal_packages);
        section(&mut out, "External Dependencies", &pkg.external);
        section(&mut out, "External Dependencies By Package", &pkg.external_packages);
    }

    out
}

fn section(out: &mut String, heading: &str, items: &[String]) {
    out.push('\t');
    out.push_str(heading);
    out.push('\n');
    if items.is_empty() {
        out.push_str("\t\t<Empty>\n");
    }
    for item in items {
        out.push_str("\t\t");
        out.push_str(item);
        out.push('\n');
    }
}
