//! Per-package view of exports and dependencies, split into internal and external.

use crate::model::{Package, PackageModel, Resolution, Symbol};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageInventory<'a> {
    pub package: &'a str,
    /// Sorted.
    pub exports: Vec<&'a Symbol>,
    /// Declaration order, duplicates kept.
    pub internal: Vec<&'a Symbol>,
    /// First-seen order, deduplicated.
    pub internal_packages: Vec<&'a str>,
    pub external: Vec<&'a Symbol>,
    pub external_packages: Vec<&'a str>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DependencyCounts {
    pub internal: usize,
    pub external: usize,
}

/// One entry per package, in discovery order.
pub fn inventory(model: &PackageModel) -> Vec<PackageInventory<'_>> {
    model.packages().map(|p| package_inventory(model, p)).collect()
}

fn package_inventory<'a>(model: &'a PackageModel, pkg: &'a Package) -> PackageInventory<'a> {
    let mut inv = PackageInventory {
        package: pkg.name(),
        exports: pkg.exports().iter().collect(),
        internal: Vec::new(),
        internal_packages: Vec::new(),
        external: Vec::new(),
        external_packages: Vec::new(),
    };

    for dep in pkg.dependencies() {
        let (symbols, packages) = match model.resolve(dep) {
            Resolution::Internal(_) => (&mut inv.internal, &mut inv.internal_packages),
            Resolution::External => (&mut inv.external, &mut inv.external_packages),
        };
        symbols.push(dep);
        if !packages.contains(&dep.package()) {
            packages.push(dep.package());
        }
    }

    inv
}

/// Internal/external split over every dependency in the model, duplicates included.
pub fn dependency_counts(model: &PackageModel) -> DependencyCounts {
    let mut counts = DependencyCounts::default();
    for dep in model.packages().flat_map(|p| p.dependencies()) {
        match model.resolve(dep) {
            Resolution::Internal(_) => counts.internal += 1,
            Resolution::External => counts.external += 1,
        }
    }
    counts
}
