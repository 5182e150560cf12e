//! Archive adapters: open SWC files and parse their `catalog.xml` manifest.
//!
//! This crate is allowed to do filesystem IO. Everything it learns from an archive is
//! returned as a [`PackageModel`]; validation happens in `swcv-domain`.

#![forbid(unsafe_code)]

mod catalog;

use anyhow::Context;
use camino::Utf8Path;
use std::io::{Read, Seek};
use swcv_domain::PackageModel;
use tracing::debug;
use zip::ZipArchive;
use zip::result::ZipError;

pub use catalog::{CatalogError, parse_catalog};

/// Name of the manifest entry inside a SWC archive.
pub const CATALOG_ENTRY: &str = "catalog.xml";

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use super::*;

    /// Parse arbitrary text as a `catalog.xml` manifest.
    ///
    /// Returns the number of packages found. **Never panics** on any input.
    pub fn parse_catalog_text(text: &str) -> Result<usize, CatalogError> {
        Ok(parse_catalog(text)?.len())
    }

    /// Treat arbitrary bytes as a SWC archive and read its catalog.
    ///
    /// **Never panics** on any input.
    pub fn read_archive_bytes(bytes: &[u8]) -> anyhow::Result<usize> {
        let model = read_catalog_from(std::io::Cursor::new(bytes), "<bytes>")?;
        Ok(model.len())
    }
}

/// Open the SWC archive at `path` and build its package model.
///
/// The archive handle is dropped before this function returns, on success and on error.
pub fn read_swc(path: &Utf8Path) -> anyhow::Result<PackageModel> {
    debug!(archive = %path, "opening swc archive");
    let file = std::fs::File::open(path).with_context(|| format!("open {path}"))?;
    let model = read_catalog_from(file, path.as_str())?;
    debug!(
        archive = %path,
        packages = model.len(),
        dependencies = model.dependency_count(),
        "parsed swc catalog"
    );
    Ok(model)
}

/// Read and parse the catalog from any seekable zip stream. `label` names the source
/// in error messages.
pub fn read_catalog_from<R: Read + Seek>(reader: R, label: &str) -> anyhow::Result<PackageModel> {
    let mut archive =
        ZipArchive::new(reader).with_context(|| format!("{label} is not a readable swc archive"))?;

    let text = match archive.by_name(CATALOG_ENTRY) {
        Ok(entry) => std::io::read_to_string(entry)
            .with_context(|| format!("read {CATALOG_ENTRY} from {label}"))?,
        Err(ZipError::FileNotFound) => {
            anyhow::bail!("{label} does not contain a {CATALOG_ENTRY}")
        }
        Err(err) => {
            return Err(err).with_context(|| format!("read {CATALOG_ENTRY} from {label}"));
        }
    };

    parse_catalog(&text).with_context(|| format!("parse {CATALOG_ENTRY} from {label}"))
}
