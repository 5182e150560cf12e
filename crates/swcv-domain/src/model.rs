use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Package assigned to symbols whose id carries no package part (`Foo` rather than `pkg:Foo`).
pub const DEFAULT_PACKAGE: &str = "default";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("symbol has an empty package name: {0:?}")]
    EmptyPackage(String),

    #[error("malformed symbol id: {0:?}")]
    MalformedId(String),

    #[error("package {package} cannot export symbol {symbol} owned by another package")]
    ForeignExport { package: String, symbol: String },
}

/// A qualified name: package part plus local name. Equality is by value.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    package: String,
    name: String,
}

impl Symbol {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Result<Self, ModelError> {
        let package = package.into();
        let name = name.into();
        if package.is_empty() {
            return Err(ModelError::EmptyPackage(format!("{package}:{name}")));
        }
        Ok(Self { package, name })
    }

    /// Parse a catalog id: `pkg.name:Local`, or `Local` for the default package.
    ///
    /// The local name must be non-empty: `Foo:` and `` are malformed.
    pub fn from_qualified_id(id: &str) -> Result<Self, ModelError> {
        let mut parts = id.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(""), None, None) | (Some(_), Some(""), None) => {
                Err(ModelError::MalformedId(id.to_string()))
            }
            (Some(name), None, None) => Symbol::new(DEFAULT_PACKAGE, name),
            (Some(package), Some(name), None) => {
                Symbol::new(package, name).map_err(|_| ModelError::EmptyPackage(id.to_string()))
            }
            _ => Err(ModelError::MalformedId(id.to_string())),
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.package, self.name)
    }
}

impl FromStr for Symbol {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::from_qualified_id(s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Package {
    name: String,
    exports: BTreeSet<Symbol>,
    /// Declaration order, duplicates kept.
    dependencies: Vec<Symbol>,
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exports: BTreeSet::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exports(&self) -> &BTreeSet<Symbol> {
        &self.exports
    }

    pub fn dependencies(&self) -> &[Symbol] {
        &self.dependencies
    }

    pub fn has_export(&self, symbol: &Symbol) -> bool {
        self.exports.contains(symbol)
    }

    pub fn add_export(&mut self, symbol: Symbol) -> Result<(), ModelError> {
        if symbol.package() != self.name {
            return Err(ModelError::ForeignExport {
                package: self.name.clone(),
                symbol: symbol.to_string(),
            });
        }
        self.exports.insert(symbol);
        Ok(())
    }

    pub fn add_dependency(&mut self, symbol: Symbol) {
        self.dependencies.push(symbol);
    }
}

/// How a dependency symbol resolves against the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Exported by a package in the model.
    Internal(&'a Package),
    /// Not defined by the archive; exempt from ordering checks.
    External,
}

/// All packages of one archive, in the order they were discovered.
#[derive(Clone, Debug, Default)]
pub struct PackageModel {
    packages: Vec<Package>,
    index: BTreeMap<String, usize>,
}

impl PackageModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Packages in discovery order.
    pub fn packages(&self) -> impl Iterator<Item = &Package> {
        self.packages.iter()
    }

    pub fn package(&self, name: &str) -> Option<&Package> {
        self.index.get(name).map(|&i| &self.packages[i])
    }

    /// Get the named package, creating it (at the end of discovery order) on first sight.
    pub fn package_mut(&mut self, name: &str) -> &mut Package {
        let i = match self.index.get(name) {
            Some(&i) => i,
            None => {
                self.packages.push(Package::new(name));
                let i = self.packages.len() - 1;
                self.index.insert(name.to_string(), i);
                i
            }
        };
        &mut self.packages[i]
    }

    /// Record `def` as an export of its own package and return that package.
    pub fn define(&mut self, def: Symbol) -> &mut Package {
        let pkg = self.package_mut(def.package());
        pkg.exports.insert(def);
        pkg
    }

    /// A dependency is internal only if its package is in the model and exports exactly it.
    pub fn resolve(&self, dep: &Symbol) -> Resolution<'_> {
        match self.package(dep.package()) {
            Some(owner) if owner.has_export(dep) => Resolution::Internal(owner),
            _ => Resolution::External,
        }
    }

    pub fn dependency_count(&self) -> usize {
        self.packages.iter().map(|p| p.dependencies.len()).sum()
    }
}
