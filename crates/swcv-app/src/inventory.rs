//! The `inventory` use case: the per-package export and dependency report.

use anyhow::Context;
use camino::Utf8Path;
use swcv_domain::inventory::{PackageInventory, inventory};
use swcv_render::RenderablePackageInventory;

/// Read `archive` and describe every package in discovery order.
pub fn run_inventory(archive: &Utf8Path) -> anyhow::Result<Vec<RenderablePackageInventory>> {
    let model =
        swcv_archive::read_swc(archive).with_context(|| format!("read swc {archive}"))?;
    Ok(inventory(&model).iter().map(renderable).collect())
}

fn renderable(inv: &PackageInventory<'_>) -> RenderablePackageInventory {
    RenderablePackageInventory {
        package: inv.package.to_string(),
        exports: inv.exports.iter().map(|s| s.name().to_string()).collect(),
        internal: inv.internal.iter().map(|s| s.to_string()).collect(),
        internal_packages: owned(&inv.internal_packages),
        external: inv.external.iter().map(|s| s.to_string()).collect(),
        external_packages: owned(&inv.external_packages),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
