//! The closed set of template markers.
//!
//! Substitution is a fixed, finite set of named injection points, not a
//! templating language. Scalar markers expand to a single value from the
//! spec model; block markers expand to one rendered fragment per command,
//! in matrix row order.

use crate::layer::LayerKind;

/// A named placeholder in template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Memory type identifier (scalar).
    MemType,
    /// PIM type identifier (scalar).
    PimType,
    /// Per-command declarations for the base layer (block).
    CommandDecls,
    /// Per-command dispatch cases for the frontend layer (block).
    DispatchCases,
    /// Per-command scheduling hooks for the controller layer (block).
    TimingHooks,
    /// Per-command execution stubs for the device layer (block).
    ExecStubs,
}

impl Marker {
    /// The literal token as it appears in template text.
    pub fn token(&self) -> &'static str {
        match self {
            Marker::MemType => "@MEM_TYPE@",
            Marker::PimType => "@PIM_TYPE@",
            Marker::CommandDecls => "@COMMAND_DECLS@",
            Marker::DispatchCases => "@DISPATCH_CASES@",
            Marker::TimingHooks => "@TIMING_HOOKS@",
            Marker::ExecStubs => "@EXEC_STUBS@",
        }
    }

    /// The block marker a layer's policy injects into.
    pub fn block_for(layer: LayerKind) -> Marker {
        match layer {
            LayerKind::Base => Marker::CommandDecls,
            LayerKind::Frontend => Marker::DispatchCases,
            LayerKind::Controller => Marker::TimingHooks,
            LayerKind::Device => Marker::ExecStubs,
        }
    }
}

/// Replace every occurrence of a marker's token with `replacement`.
///
/// Plain literal replacement: applying the same substitutions to the same
/// template text always yields identical output, and output containing no
/// marker tokens is a fixed point.
pub fn substitute(text: &str, marker: Marker, replacement: &str) -> String {
    text.replace(marker.token(), replacement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_distinct() {
        let all = [
            Marker::MemType,
            Marker::PimType,
            Marker::CommandDecls,
            Marker::DispatchCases,
            Marker::TimingHooks,
            Marker::ExecStubs,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.token(), b.token());
            }
        }
    }

    #[test]
    fn substitute_replaces_all_occurrences() {
        let out = substitute("x @MEM_TYPE@ y @MEM_TYPE@", Marker::MemType, "GDDR6");
        assert_eq!(out, "x GDDR6 y GDDR6");
    }

    #[test]
    fn substitute_is_idempotent_without_markers() {
        let once = substitute("class @MEM_TYPE@_Device;", Marker::MemType, "DRAM");
        let twice = substitute(&once, Marker::MemType, "DRAM");
        assert_eq!(once, twice);
    }

    #[test]
    fn block_marker_per_layer() {
        assert_eq!(Marker::block_for(LayerKind::Base), Marker::CommandDecls);
        assert_eq!(Marker::block_for(LayerKind::Device), Marker::ExecStubs);
    }
}
