use itertools::Itertools as _;

use crate::entities::ResolutionEntry;

/// Render resolver output as an indented report, one entry per line.
///
/// Indentation is four spaces per level below `root_depth`; counts keep two
/// decimal places. Negative counts (sentinel-rate items) render unmodified.
pub fn render_report(entries: &[ResolutionEntry], root_depth: u32) -> String {
    entries
        .iter()
        .map(|entry| {
            let indent = 4 * root_depth.saturating_sub(entry.depth) as usize;
            format!("{:indent$}{:.2} {}", "", entry.required, entry.name)
        })
        .join("\n")
}
