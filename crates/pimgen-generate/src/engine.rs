//! The generation core: specialize one loaded template into the four
//! simulator layers.

use pimgen_spec::SpecModel;
use pimgen_templates::{TemplateSource, TemplateStore};

use crate::error::GenerateError;
use crate::layer::{GeneratedLayer, LayerKind, OutputLayout};
use crate::layers::render_block;
use crate::marker::{substitute, Marker};

/// Template-driven generation engine.
///
/// Holds the template store it loads from; the store is injected so tests
/// can run against an in-memory fake instead of a directory tree.
pub struct TemplateEngine<'a> {
    store: &'a dyn TemplateStore,
}

impl<'a> TemplateEngine<'a> {
    /// Engine over the given template store.
    pub fn new(store: &'a dyn TemplateStore) -> Self {
        Self { store }
    }

    /// Load the template for the model's memory type and generate all four
    /// layers, in [`LayerKind::ALL`] order.
    ///
    /// Pure with respect to the filesystem apart from the template read:
    /// nothing is written here, so a failure in any layer leaves no
    /// destination touched.
    pub fn generate(
        &self,
        model: &SpecModel,
        layout: &OutputLayout,
    ) -> Result<Vec<GeneratedLayer>, GenerateError> {
        let template = self.store.load(&model.mem)?;
        specialize(model, &template, layout)
    }
}

/// Generate all four layers from an already-loaded template.
pub fn specialize(
    model: &SpecModel,
    template: &TemplateSource,
    layout: &OutputLayout,
) -> Result<Vec<GeneratedLayer>, GenerateError> {
    LayerKind::ALL
        .iter()
        .map(|&kind| {
            let text = render_layer(kind, model, template)?;
            Ok(GeneratedLayer {
                kind,
                text,
                path: layout.path_for(kind),
            })
        })
        .collect()
}

/// Specialize the template for a single layer.
///
/// Every layer requires the scalar markers and its own block marker to be
/// present in the template; a missing marker is a generation error, not a
/// silent no-op. The other layers' block markers are blanked so the emitted
/// file is concrete source with no marker tokens left behind.
pub fn render_layer(
    kind: LayerKind,
    model: &SpecModel,
    template: &TemplateSource,
) -> Result<String, GenerateError> {
    let block_marker = Marker::block_for(kind);
    for marker in [Marker::MemType, Marker::PimType, block_marker] {
        if !template.text.contains(marker.token()) {
            return Err(GenerateError::MissingMarker {
                layer: kind,
                marker: marker.token(),
            });
        }
    }

    let block = render_block(kind, model)?;
    let text = substitute(&template.text, Marker::MemType, model.mem.as_str());
    let text = substitute(&text, Marker::PimType, model.pim.as_str());
    let mut text = substitute(&text, block_marker, &block);
    for other in LayerKind::ALL {
        let foreign = Marker::block_for(other);
        if foreign != block_marker {
            text = substitute(&text, foreign, "");
        }
    }
    Ok(text)
}
