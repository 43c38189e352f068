//! Per-layer injection policies: which attributes each layer consumes and
//! how a command renders into that layer's block fragment.
//!
//! Attribute routing follows simulator-layer convention: the frontend sees
//! acceptance-relevant attributes, the controller sees timing/resource
//! attributes, the device sees the complete set verbatim. The two routing
//! sets below are the single place to adjust if the simulator's layer
//! contracts change.

use pimgen_spec::{AttrValue, CommandSpec, SpecModel};

use crate::error::GenerateError;
use crate::layer::LayerKind;

/// Attributes the frontend turns into request-validity guards.
pub const ACCEPTANCE_ATTRS: &[&str] = &["opcode", "width", "operand", "target", "access"];

/// Attributes the controller turns into scheduling hooks.
pub const TIMING_ATTRS: &[&str] = &["latency", "cycles", "energy", "width", "bandwidth"];

/// Render a layer's block: one fragment per command, matrix row order,
/// fragments joined by newlines.
pub fn render_block(layer: LayerKind, model: &SpecModel) -> Result<String, GenerateError> {
    if layer == LayerKind::Frontend
        && !ACCEPTANCE_ATTRS.iter().any(|a| model.matrix.has_attribute(a))
    {
        return Err(GenerateError::MissingAttribute {
            layer,
            wanted: ACCEPTANCE_ATTRS.join(", "),
        });
    }

    let fragments: Vec<String> = model
        .matrix
        .iter()
        .enumerate()
        .map(|(index, cmd)| match layer {
            LayerKind::Base => base_fragment(index, cmd),
            LayerKind::Frontend => frontend_fragment(cmd),
            LayerKind::Controller => controller_fragment(cmd),
            LayerKind::Device => device_fragment(cmd),
        })
        .collect();

    Ok(fragments.join("\n"))
}

/// Base layer: one command-table entry per command. The index comment pins
/// the enumeration order the rest of the simulator relies on.
fn base_fragment(index: usize, cmd: &CommandSpec) -> String {
    format!("    \"{}\",    // command {}", cmd.name, index)
}

/// Frontend layer: a dispatch case with validity guards derived from the
/// acceptance-relevant attributes the command carries.
fn frontend_fragment(cmd: &CommandSpec) -> String {
    let mut lines = vec![format!("    case CommandId::{}: {{", cmd.name)];
    for (name, value) in &cmd.attrs {
        if !ACCEPTANCE_ATTRS.contains(&name.as_str()) {
            continue;
        }
        let guard = match value {
            AttrValue::Int(i) => {
                format!("      if (req.{name} > {i}) return reject(req, \"{name}\");")
            }
            AttrValue::Bool(true) => {
                format!("      if (!caps.{name}) return reject(req, \"{name}\");")
            }
            AttrValue::Bool(false) => {
                format!("      if (caps.{name}) return reject(req, \"{name}\");")
            }
            AttrValue::Str(s) => {
                format!("      if (req.{name} != \"{s}\") return reject(req, \"{name}\");")
            }
        };
        lines.push(guard);
    }
    lines.push("      return accept(req);".to_string());
    lines.push("    }".to_string());
    lines.join("\n")
}

/// Controller layer: a scheduling hook from the command's timing/resource
/// attributes, or a no-op hook when it carries none.
fn controller_fragment(cmd: &CommandSpec) -> String {
    let timing: Vec<String> = cmd
        .attrs
        .iter()
        .filter(|(name, _)| TIMING_ATTRS.contains(&name.as_str()))
        .map(|(name, value)| format!("{{\"{name}\", \"{value}\"}}"))
        .collect();
    if timing.is_empty() {
        format!(
            "    set_hook(\"{}\", {{}});    // not arbitrated",
            cmd.name
        )
    } else {
        format!("    set_hook(\"{}\", {{{}}});", cmd.name, timing.join(", "))
    }
}

/// Device layer: an execution stub carrying every attribute verbatim.
fn device_fragment(cmd: &CommandSpec) -> String {
    let mut lines = vec![format!("void execute_{}(Request& req) {{", cmd.name)];
    for (name, value) in &cmd.attrs {
        lines.push(format!("    req.meta[\"{name}\"] = \"{value}\";"));
    }
    lines.push(format!("    device_execute(\"{}\", req);", cmd.name));
    lines.push("}".to_string());
    lines.join("\n")
}
