//! Simulator layers and their output destinations.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// The four generated simulator layers, from shared scaffolding down to
/// per-command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    /// Foundational scaffolding shared by all commands.
    Base,
    /// Command-dispatch surface (request acceptance).
    Frontend,
    /// Timing / resource-arbitration hooks.
    Controller,
    /// Lowest-level per-command execution stubs.
    Device,
}

impl LayerKind {
    /// All layers, in generation order.
    pub const ALL: [LayerKind; 4] = [
        LayerKind::Base,
        LayerKind::Frontend,
        LayerKind::Controller,
        LayerKind::Device,
    ];

    /// Layer name as used in diagnostics and file stems.
    pub fn name(&self) -> &'static str {
        match self {
            LayerKind::Base => "base",
            LayerKind::Frontend => "frontend",
            LayerKind::Controller => "controller",
            LayerKind::Device => "device",
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One generated simulator source module, ready to be written.
#[derive(Debug, Clone)]
pub struct GeneratedLayer {
    /// Which layer this is.
    pub kind: LayerKind,
    /// Specialized source text.
    pub text: String,
    /// Destination path.
    pub path: PathBuf,
}

/// Destination resolution for generated layers: one file per layer under an
/// output directory. Injected into the pipeline by the caller.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    out_dir: PathBuf,
    ext: String,
}

impl OutputLayout {
    /// Layout writing `<out_dir>/<layer>.<ext>`.
    pub fn new(out_dir: impl Into<PathBuf>, ext: &str) -> Self {
        Self {
            out_dir: out_dir.into(),
            ext: ext.to_string(),
        }
    }

    /// The output directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Destination path for a layer.
    pub fn path_for(&self, kind: LayerKind) -> PathBuf {
        self.out_dir.join(format!("{}.{}", kind.name(), self.ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_names() {
        assert_eq!(LayerKind::Base.name(), "base");
        assert_eq!(LayerKind::Device.to_string(), "device");
    }

    #[test]
    fn layout_paths() {
        let layout = OutputLayout::new("/tmp/out", "cpp");
        assert_eq!(
            layout.path_for(LayerKind::Frontend),
            Path::new("/tmp/out/frontend.cpp")
        );
        assert_eq!(
            layout.path_for(LayerKind::Controller),
            Path::new("/tmp/out/controller.cpp")
        );
    }
}
