//! Report produced by a generation run.

use std::path::PathBuf;

use serde::Serialize;

use crate::layer::LayerKind;

/// Summary of one written layer.
#[derive(Debug, Clone, Serialize)]
pub struct LayerReport {
    /// Which layer.
    pub layer: LayerKind,
    /// Destination path.
    pub path: PathBuf,
    /// Size of the written output in bytes.
    pub bytes: u64,
}

/// Summary of a full generation run, printable as human text or JSON.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Memory type the run targeted.
    pub mem: String,
    /// PIM type the run targeted.
    pub pim: String,
    /// Number of commands in the matrix.
    pub commands: usize,
    /// Template file the run specialized, when loaded from disk.
    pub template: Option<PathBuf>,
    /// Per-layer outputs, in generation order.
    pub layers: Vec<LayerReport>,
    /// Wall-clock duration of the run.
    pub duration_ms: u64,
}

impl RunReport {
    /// Render the human-readable summary.
    pub fn human(&self) -> String {
        let mut lines = vec![format!(
            "Generated {} / {} simulator ({} commands, {} ms)",
            self.mem, self.pim, self.commands, self.duration_ms
        )];
        if let Some(template) = &self.template {
            lines.push(format!("  template: {}", template.display()));
        }
        for layer in &self.layers {
            lines.push(format!(
                "  {:<10} {} ({} bytes)",
                layer.layer.name(),
                layer.path.display(),
                layer.bytes
            ));
        }
        lines.join("\n")
    }
}
