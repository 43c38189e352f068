//! `pimgen templates` — list template files under a root.

use std::path::Path;

use pimgen_templates::discover;

pub fn run(template_root: &Path, ext: &str) -> anyhow::Result<()> {
    let found = discover(template_root, ext)?;
    if found.is_empty() {
        println!(
            "no *_template.{ext} files under {}",
            template_root.display()
        );
        return Ok(());
    }
    for (mem, path) in found {
        println!("{mem:<10} {}", path.display());
    }
    Ok(())
}
