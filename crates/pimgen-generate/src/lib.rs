//! Generation engine for the PIM simulator code generator.
//!
//! Takes a parsed [`pimgen_spec::SpecModel`] and a loaded template and
//! produces four specialized simulator source modules (base, frontend,
//! controller, device) by substituting a closed set of named markers:
//! scalar markers for the memory/PIM identifiers, and one block marker per
//! layer expanded to a per-command fragment in matrix row order.

pub mod emit;
pub mod engine;
pub mod error;
pub mod layer;
pub mod layers;
pub mod marker;
pub mod pipeline;
pub mod report;

pub use emit::CodeEmitter;
pub use engine::{render_layer, specialize, TemplateEngine};
pub use error::{EmitError, GenerateError, PipelineError};
pub use layer::{GeneratedLayer, LayerKind, OutputLayout};
pub use layers::{ACCEPTANCE_ATTRS, TIMING_ATTRS};
pub use marker::Marker;
pub use pipeline::run;
pub use report::{LayerReport, RunReport};
