//! Errors for the generation engine, emitter, and pipeline.

use std::path::PathBuf;

use pimgen_templates::TemplateError;
use thiserror::Error;

use crate::layer::LayerKind;

/// Errors that can occur while specializing a template.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A marker required by a layer's injection policy is absent from the
    /// template text.
    #[error("{layer} layer: template is missing marker {marker}")]
    MissingMarker {
        /// Layer being generated.
        layer: LayerKind,
        /// The marker token that was expected (e.g. `@DISPATCH_CASES@`).
        marker: &'static str,
    },

    /// A layer's policy needs an attribute that no command carries.
    #[error("{layer} layer: no command carries any of the attributes it consumes ({wanted})")]
    MissingAttribute {
        /// Layer being generated.
        layer: LayerKind,
        /// Comma-separated attribute names the layer would have consumed.
        wanted: String,
    },

    /// Template lookup or read failure.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Errors that can occur while writing a generated layer.
#[derive(Debug, Error)]
pub enum EmitError {
    /// Destination could not be created or written.
    #[error("cannot write {}: {source}", path.display())]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O cause.
        #[source]
        source: std::io::Error,
    },
}

/// Errors surfaced by a full generation run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Template lookup or read failed.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// Layer generation failed.
    #[error("generation error: {0}")]
    Generate(#[from] GenerateError),

    /// Writing a generated layer failed.
    #[error("emit error: {0}")]
    Emit(#[from] EmitError),
}
