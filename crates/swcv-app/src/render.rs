//! Render use cases: markdown, GitHub annotations and console text.

use swcv_render::{RenderablePackageInventory, RenderableReport};

pub fn render_markdown(report: &RenderableReport) -> String {
    swcv_render::render_markdown(report)
}

pub fn render_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    swcv_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}

pub fn render_text(report: &RenderableReport) -> String {
    swcv_render::render_text(report)
}

pub fn render_inventory(packages: &[RenderablePackageInventory]) -> String {
    swcv_render::render_inventory_text(packages)
}
