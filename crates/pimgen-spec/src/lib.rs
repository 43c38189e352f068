//! Configuration model and parsing for the PIM simulator code generator.
//!
//! A generation run starts from a YAML configuration naming a memory
//! technology, a PIM architecture variant, and a command specification
//! matrix (header row + one row per hardware command). This crate parses
//! and validates that configuration into an immutable [`SpecModel`].

pub mod error;
pub mod model;
pub mod parse;

pub use error::{ConfigError, Result};
pub use model::{
    AttrValue, CommandSpec, CommandSpecMatrix, MemoryTypeId, PimTypeId, SpecModel,
    SUPPORTED_MEM_TYPES, SUPPORTED_PIM_TYPES,
};
