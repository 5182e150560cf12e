//! Shared test utilities for the swcv workspace.
//!
//! Golden-report normalization and builders for small SWC archives, used by the
//! archive, app and cli test suites.

use serde_json::Value;
use std::io::Write;
use std::path::Path;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// `tool.version` is replaced with `"__VERSION__"` only when the root object looks like
/// a report envelope, so finding payloads that carry a `tool` key stay untouched.
/// `started_at` and `finished_at` are replaced at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("verdict")
            && obj.contains_key("findings");
        if is_envelope
            && let Some(tool_obj) = obj.get_mut("tool").and_then(Value::as_object_mut)
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}

/// Write a zip archive at `path` holding `entries` as `(name, contents)` pairs.
///
/// Panics on IO failure; intended for tests only.
pub fn write_zip(path: &Path, entries: &[(&str, &str)]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dirs");
    }
    let file = std::fs::File::create(path).expect("create archive");
    let mut zip = ZipWriter::new(file);
    for (name, contents) in entries {
        zip.start_file(*name, SimpleFileOptions::default())
            .expect("start zip entry");
        zip.write_all(contents.as_bytes()).expect("write zip entry");
    }
    zip.finish().expect("finish archive");
}

/// Write a SWC archive whose `catalog.xml` is `catalog` verbatim.
pub fn write_swc(path: &Path, catalog: &str) {
    write_zip(
        path,
        &[("catalog.xml", catalog), ("library.swf", "FWS placeholder")],
    );
}

/// Builds a `catalog.xml` from `def`/`dep` ids, one script per definition.
#[derive(Clone, Debug, Default)]
pub struct SwcBuilder {
    scripts: Vec<(String, Vec<String>)>,
}

impl SwcBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a script defining `def` and depending on `deps` (ids like `pkg:Name`).
    pub fn script(mut self, def: &str, deps: &[&str]) -> Self {
        self.scripts.push((
            def.to_string(),
            deps.iter().map(|d| d.to_string()).collect(),
        ));
        self
    }

    pub fn catalog_xml(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
        out.push_str("<swc xmlns=\"http://www.adobe.com/flash/swccatalog/9\">\n");
        out.push_str("  <libraries>\n");
        out.push_str("    <library path=\"library.swf\">\n");
        for (def, deps) in &self.scripts {
            let script_name = def.replace(['.', ':'], "/");
            out.push_str(&format!(
                "      <script name=\"{script_name}\" mod=\"1300000000000\">\n"
            ));
            out.push_str(&format!("        <def id=\"{def}\" />\n"));
            for dep in deps {
                out.push_str(&format!("        <dep id=\"{dep}\" type=\"i\" />\n"));
            }
            out.push_str("      </script>\n");
        }
        out.push_str("    </library>\n");
        out.push_str("  </libraries>\n");
        out.push_str("</swc>\n");
        out
    }

    pub fn write(&self, path: &Path) {
        write_swc(path, &self.catalog_xml());
    }
}
