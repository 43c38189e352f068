//! `pimgen scaffold` — write a starter template containing every marker.

use std::path::{Path, PathBuf};

use pimgen_spec::SUPPORTED_MEM_TYPES;

/// Starter template body. Every marker the engine knows about appears once,
/// so a scaffolded template generates all four layers out of the box.
const SCAFFOLD: &str = r#"// Auto-scaffolded simulator template for @MEM_TYPE@ (@PIM_TYPE@ PIM).
// Replace the surrounding scaffolding with the real device model; keep the
// markers where the generated code should land.

#include "base/request.h"

namespace sim {

// Command table, in configuration row order.
static const char* kCommands[] = {
@COMMAND_DECLS@
};

// Frontend: request acceptance.
bool dispatch(Request& req) {
  switch (req.id) {
@DISPATCH_CASES@
    default:
      return reject(req, "unknown command");
  }
}

// Controller: arbitration hooks.
void init_timing() {
@TIMING_HOOKS@
}

// Device: per-command execution.
@EXEC_STUBS@

}  // namespace sim
"#;

pub fn run(mem: &str, out: Option<&Path>, ext: &str) -> anyhow::Result<()> {
    if !SUPPORTED_MEM_TYPES.contains(&mem) {
        anyhow::bail!(
            "unknown memory type '{mem}' (supported: {})",
            SUPPORTED_MEM_TYPES.join(", ")
        );
    }

    let path: PathBuf = match out {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(format!("{mem}_template.{ext}")),
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, SCAFFOLD)?;
    println!("wrote {}", path.display());
    Ok(())
}
