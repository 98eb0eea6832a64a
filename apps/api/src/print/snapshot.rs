//! Builds the self-contained print snapshot of a rendered resume.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::layout::html::to_html;
use crate::layout::tree::Element;
use crate::print::divider::{self, DividerSource};
use crate::print::document::{document_title, file_name_for, print_document};
use crate::print::sanitize::sanitize_tree;
use crate::print::styles::inline_computed_styles;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("Resume content not found. Please try again.")]
    RenderTargetMissing,
}

#[derive(Debug, Clone)]
pub struct SnapshotMeta {
    /// Display name of the resume owner; drives file name and title.
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintSnapshot {
    pub html: String,
    pub file_name: String,
    pub title: String,
}

/// Produces the print snapshot for a rendered resume tree.
///
/// The input tree is cloned and never modified. Steps:
/// 1. inline each element's computed style,
/// 2. locate (or synthesize) the header divider,
/// 3. strip print-hostile effects everywhere but the divider,
/// 4. pin the divider's geometry,
/// 5. wrap the result in the A4 print shell.
#[instrument(skip_all, fields(full_name = %meta.full_name))]
pub fn build_snapshot(
    target: Option<&Element>,
    meta: &SnapshotMeta,
) -> Result<PrintSnapshot, SnapshotError> {
    let source = target.ok_or(SnapshotError::RenderTargetMissing)?;
    let mut tree = source.clone();

    inline_computed_styles(&mut tree);

    let (divider_path, divider_source) = divider::locate_or_insert(&mut tree);
    sanitize_tree(&mut tree, &divider_path);
    if let Some(rule) = tree.at_mut(&divider_path) {
        divider::finalize(rule);
    }
    if divider_source == DividerSource::Synthesized {
        debug!("no divider in layout; synthesized one");
    }

    let title = document_title(&meta.full_name);
    let html = print_document(&to_html(&tree), &title);

    Ok(PrintSnapshot {
        html,
        file_name: file_name_for(&meta.full_name),
        title,
    })
}
