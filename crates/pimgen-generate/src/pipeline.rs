//! Run orchestrator: template load → four-layer generation → emission.

use std::time::Instant;

use pimgen_spec::SpecModel;
use pimgen_templates::TemplateStore;

use crate::emit::CodeEmitter;
use crate::engine::specialize;
use crate::error::PipelineError;
use crate::layer::OutputLayout;
use crate::report::{LayerReport, RunReport};

/// Run one generation to completion.
///
/// All four layers are generated in memory before anything is written, so a
/// generation failure leaves every destination untouched. A write failure
/// aborts the run with the failing path; earlier layers from the same run
/// may already be on disk, but the error makes the partial state explicit.
///
/// Single-threaded by design. Callers sharing destination paths across
/// concurrent runs must serialize them.
pub fn run(
    model: &SpecModel,
    store: &dyn TemplateStore,
    layout: &OutputLayout,
) -> Result<RunReport, PipelineError> {
    let start = Instant::now();

    let template = store.load(&model.mem)?;
    let layers = specialize(model, &template, layout)?;

    let mut layer_reports = Vec::with_capacity(layers.len());
    for layer in &layers {
        CodeEmitter::write(layer)?;
        layer_reports.push(LayerReport {
            layer: layer.kind,
            path: layer.path.clone(),
            bytes: layer.text.len() as u64,
        });
    }

    Ok(RunReport {
        mem: model.mem.to_string(),
        pim: model.pim.to_string(),
        commands: model.matrix.len(),
        template: template.path,
        layers: layer_reports,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}
