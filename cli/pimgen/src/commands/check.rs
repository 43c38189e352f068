//! `pimgen check` — parse and validate a configuration without generating.

use std::path::Path;

use anyhow::Context;

use pimgen_spec::SpecModel;

pub fn run(config: &Path) -> anyhow::Result<()> {
    let model = SpecModel::load(config)
        .with_context(|| format!("loading configuration {}", config.display()))?;

    println!(
        "OK: {} / {} with {} commands",
        model.mem,
        model.pim,
        model.matrix.len()
    );
    println!("attributes: {}", model.matrix.attribute_names.join(", "));
    for cmd in model.matrix.iter() {
        println!("  {}", cmd.name);
    }
    Ok(())
}
