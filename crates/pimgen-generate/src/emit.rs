//! Writing generated layers to their destinations.

use std::fs::File;
use std::io::Write;

use crate::error::EmitError;
use crate::layer::GeneratedLayer;

/// Mechanical writer for generated layers. No decision logic and no content
/// validation; the file handle is scoped to the write and closed on every
/// exit path.
pub struct CodeEmitter;

impl CodeEmitter {
    /// Write one generated layer, creating parent directories as needed.
    pub fn write(layer: &GeneratedLayer) -> Result<(), EmitError> {
        let io = |source: std::io::Error| EmitError::Io {
            path: layer.path.clone(),
            source,
        };

        if let Some(parent) = layer.path.parent() {
            std::fs::create_dir_all(parent).map_err(io)?;
        }
        let mut file = File::create(&layer.path).map_err(io)?;
        file.write_all(layer.text.as_bytes()).map_err(io)
    }
}
