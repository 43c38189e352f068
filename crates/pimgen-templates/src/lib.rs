//! Template discovery and loading for the PIM simulator code generator.
//!
//! Base templates are per-memory-type source files (`<mem>_template.<ext>`)
//! located anywhere under a template root. The [`TemplateStore`] trait is
//! the seam between the generation engine and the filesystem.

pub mod error;
pub mod store;

pub use error::{Result, TemplateError};
pub use store::{
    discover, template_file_name, DirTemplateStore, MemTemplateStore, TemplateSource,
    TemplateStore, DEFAULT_TEMPLATE_EXT,
};
