//! YAML parsing and validation for generator configurations.
//!
//! A configuration has two required sections: a `type` section naming the
//! memory and PIM identifiers, and a `cmd_spec_matrix` section whose first
//! row is the header (column 0 is the command-name label, columns 1..N are
//! attribute names) and whose remaining rows are command entries.
//!
//! Header/data pairing is positional: the header's column order defines
//! attribute identity for every row. Reordering header columns without
//! reordering every data row is a breaking configuration change that shape
//! checking cannot detect.

use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value;

use crate::error::{ConfigError, Result};
use crate::model::{
    AttrValue, CommandSpec, CommandSpecMatrix, MemoryTypeId, PimTypeId, SpecModel,
    SUPPORTED_MEM_TYPES, SUPPORTED_PIM_TYPES,
};

/// Raw configuration shape, before validation. Sections are optional here so
/// that absence is reported as a structured `ConfigError`, not a serde
/// message.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(rename = "type")]
    types: Option<RawTypes>,
    cmd_spec_matrix: Option<Vec<Vec<Value>>>,
}

#[derive(Debug, Deserialize)]
struct RawTypes {
    mem: Option<String>,
    pim: Option<String>,
}

impl SpecModel {
    /// Load a configuration from a YAML file.
    pub fn load(path: &Path) -> Result<SpecModel> {
        let content = std::fs::read_to_string(path)?;
        SpecModel::parse(&content)
    }

    /// Parse a configuration from a YAML string.
    pub fn parse(yaml_str: &str) -> Result<SpecModel> {
        let raw: RawConfig = serde_yaml::from_str(yaml_str)?;

        let types = raw.types.ok_or_else(|| ConfigError::MissingField {
            field: "type".into(),
        })?;
        let mem = required_id(types.mem, "type.mem")?;
        let pim = required_id(types.pim, "type.pim")?;

        let mem = MemoryTypeId(mem);
        if !mem.is_supported() {
            return Err(ConfigError::UnknownMemType {
                mem: mem.0,
                supported: SUPPORTED_MEM_TYPES.join(", "),
            });
        }
        let pim = PimTypeId(pim);
        if !pim.is_supported() {
            return Err(ConfigError::UnknownPimType {
                pim: pim.0,
                supported: SUPPORTED_PIM_TYPES.join(", "),
            });
        }

        let rows = raw.cmd_spec_matrix.ok_or_else(|| ConfigError::MissingField {
            field: "cmd_spec_matrix".into(),
        })?;
        let matrix = parse_matrix(&rows)?;

        Ok(SpecModel { mem, pim, matrix })
    }
}

fn required_id(value: Option<String>, field: &str) -> Result<String> {
    match value {
        None => Err(ConfigError::MissingField {
            field: field.into(),
        }),
        Some(s) if s.is_empty() => Err(ConfigError::EmptyField {
            field: field.into(),
        }),
        Some(s) => Ok(s),
    }
}

/// Build the command matrix by pairing the header row with each data row
/// positionally.
fn parse_matrix(rows: &[Vec<Value>]) -> Result<CommandSpecMatrix> {
    if rows.len() < 2 {
        return Err(ConfigError::MatrixTooSmall { rows: rows.len() });
    }

    let header = &rows[0];
    if header.is_empty() {
        return Err(ConfigError::RowShape {
            row: 0,
            expected: 1,
            found: 0,
        });
    }
    // Column 0 of the header is the command-name label; the rest are
    // attribute keys.
    let attribute_names: Vec<String> = header[1..]
        .iter()
        .enumerate()
        .map(|(i, cell)| scalar_cell(cell, 0, i + 1).map(|v| v.to_string()))
        .collect::<Result<_>>()?;

    let mut commands: Vec<CommandSpec> = Vec::with_capacity(rows.len() - 1);
    for (offset, row) in rows[1..].iter().enumerate() {
        let row_index = offset + 1;
        if row.len() != header.len() {
            return Err(ConfigError::RowShape {
                row: row_index,
                expected: header.len(),
                found: row.len(),
            });
        }

        let name = scalar_cell(&row[0], row_index, 0)?.to_string();
        if commands.iter().any(|c| c.name == name) {
            return Err(ConfigError::DuplicateCommand {
                command: name,
                row: row_index,
            });
        }

        let mut attrs = Vec::with_capacity(attribute_names.len());
        for (col, key) in attribute_names.iter().enumerate() {
            let value = scalar_cell(&row[col + 1], row_index, col + 1)?;
            attrs.push((key.clone(), value));
        }
        commands.push(CommandSpec { name, attrs });
    }

    Ok(CommandSpecMatrix {
        attribute_names,
        commands,
    })
}

/// Convert a YAML cell to a scalar attribute value.
///
/// Non-i64 numbers keep their YAML spelling as a string so they round-trip
/// verbatim into generated output.
fn scalar_cell(cell: &Value, row: usize, column: usize) -> Result<AttrValue> {
    match cell {
        Value::String(s) => Ok(AttrValue::Str(s.clone())),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Ok(AttrValue::Int(i)),
            None => Ok(AttrValue::Str(n.to_string())),
        },
        Value::Bool(b) => Ok(AttrValue::Bool(*b)),
        _ => Err(ConfigError::BadCell { row, column }),
    }
}
