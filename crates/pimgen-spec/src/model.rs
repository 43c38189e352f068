//! In-memory specification model: identifiers, attribute values, and the
//! command specification matrix.

use std::fmt;

/// Memory technology identifiers the generator knows how to target.
pub const SUPPORTED_MEM_TYPES: &[&str] = &["DRAM", "GDDR6", "LPDDR5"];

/// PIM architecture variants the generator knows how to target.
pub const SUPPORTED_PIM_TYPES: &[&str] = &["near-bank", "bank-group", "AiM"];

/// Identifier for a memory technology (e.g. `GDDR6`).
///
/// Drives template selection: the template store looks for a file named
/// `<mem>_template.<ext>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryTypeId(pub(crate) String);

impl MemoryTypeId {
    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this identifier is in the supported set.
    pub fn is_supported(&self) -> bool {
        SUPPORTED_MEM_TYPES.contains(&self.0.as_str())
    }
}

impl fmt::Display for MemoryTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier for a PIM architecture variant (e.g. `AiM`, `near-bank`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PimTypeId(pub(crate) String);

impl PimTypeId {
    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this identifier is in the supported set.
    pub fn is_supported(&self) -> bool {
        SUPPORTED_PIM_TYPES.contains(&self.0.as_str())
    }
}

impl fmt::Display for PimTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A scalar attribute value from a command-spec-matrix cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// String cell, kept verbatim.
    Str(String),
    /// Integer cell.
    Int(i64),
    /// Boolean cell.
    Bool(bool),
}

impl AttrValue {
    /// Whether the value is an integer.
    pub fn is_int(&self) -> bool {
        matches!(self, AttrValue::Int(_))
    }

    /// Whether the value is a boolean.
    pub fn is_bool(&self) -> bool {
        matches!(self, AttrValue::Bool(_))
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Str(s) => f.write_str(s),
            AttrValue::Int(i) => write!(f, "{i}"),
            AttrValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// One row of the command specification matrix: a command name plus its
/// attributes in header order.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandSpec {
    /// Command name, unique within a matrix.
    pub name: String,
    /// (attribute name, value) pairs, ordered as in the matrix header.
    pub attrs: Vec<(String, AttrValue)>,
}

impl CommandSpec {
    /// Look up an attribute by name.
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }
}

/// The full command specification matrix, in configuration row order.
///
/// Row order is preserved end-to-end: generated output iterates commands in
/// the order they appear here, since command ordering may carry semantic
/// weight (priority, enumeration order) in the generated simulator.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandSpecMatrix {
    /// Attribute names from the header (command-name column excluded).
    pub attribute_names: Vec<String>,
    /// Commands in configuration row order.
    pub commands: Vec<CommandSpec>,
}

impl CommandSpecMatrix {
    /// Number of commands in the matrix.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the matrix has no commands. Parsing guarantees at least one,
    /// so this is only `true` for hand-built matrices.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate commands in row order.
    pub fn iter(&self) -> std::slice::Iter<'_, CommandSpec> {
        self.commands.iter()
    }

    /// Look up a command by name.
    pub fn command(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Whether any command carries the named attribute. All rows share the
    /// header's attribute set, so this is a header lookup.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute_names.iter().any(|a| a == name)
    }
}

/// Aggregate specification for one generation run: memory type, PIM type,
/// and the command matrix. Immutable once parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecModel {
    /// Chosen memory technology.
    pub mem: MemoryTypeId,
    /// Chosen PIM architecture variant.
    pub pim: PimTypeId,
    /// Parsed command specification matrix.
    pub matrix: CommandSpecMatrix,
}
