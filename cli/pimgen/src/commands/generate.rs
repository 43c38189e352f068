//! `pimgen generate` — run the full generation pipeline.

use std::path::Path;

use anyhow::Context;

use pimgen_generate::{pipeline, OutputLayout};
use pimgen_spec::SpecModel;
use pimgen_templates::DirTemplateStore;

enum ReportFormat {
    Human,
    Json,
}

pub fn run(
    config: &Path,
    template_root: &Path,
    out_dir: &Path,
    ext: &str,
    report_format: Option<&str>,
) -> anyhow::Result<()> {
    // Reject a bad format up front, before anything is written.
    let format = match report_format {
        Some("json") => ReportFormat::Json,
        Some("human") | None => ReportFormat::Human,
        Some(other) => anyhow::bail!("unknown report format '{other}' (expected human or json)"),
    };

    let model = SpecModel::load(config)
        .with_context(|| format!("loading configuration {}", config.display()))?;
    let store = DirTemplateStore::new(template_root).with_ext(ext);
    let layout = OutputLayout::new(out_dir, ext);

    let report = pipeline::run(&model, &store, &layout)?;

    match format {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        ReportFormat::Human => println!("{}", report.human()),
    }
    Ok(())
}
