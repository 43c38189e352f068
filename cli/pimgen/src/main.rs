//! pimgen CLI — generate PIM simulator source modules from a declarative
//! configuration.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pimgen", version, about = "PIM simulator source generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the four simulator layers from a configuration
    Generate {
        /// YAML configuration file
        #[arg(long)]
        config: PathBuf,
        /// Directory searched recursively for templates (default: src)
        #[arg(long, default_value = "src")]
        template_root: PathBuf,
        /// Output directory for generated layers (default: generated)
        #[arg(long, default_value = "generated")]
        out: PathBuf,
        /// Source extension for templates and outputs
        #[arg(long, default_value = "cpp")]
        ext: String,
        /// Report format (human, json)
        #[arg(long)]
        report: Option<String>,
    },
    /// Parse and validate a configuration without generating
    Check {
        /// YAML configuration file
        #[arg(long)]
        config: PathBuf,
    },
    /// List template files under a template root
    Templates {
        /// Directory searched recursively for templates (default: src)
        #[arg(long, default_value = "src")]
        template_root: PathBuf,
        /// Source extension for templates
        #[arg(long, default_value = "cpp")]
        ext: String,
    },
    /// Write a starter template for a memory type
    Scaffold {
        /// Memory type (e.g. GDDR6)
        mem: String,
        /// Output path (default: <mem>_template.<ext> in the current directory)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Source extension
        #[arg(long, default_value = "cpp")]
        ext: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            config,
            template_root,
            out,
            ext,
            report,
        } => commands::generate::run(&config, &template_root, &out, &ext, report.as_deref()),

        Commands::Check { config } => commands::check::run(&config),

        Commands::Templates { template_root, ext } => {
            commands::templates::run(&template_root, &ext)
        }

        Commands::Scaffold { mem, out, ext } => {
            commands::scaffold::run(&mem, out.as_deref(), &ext)
        }
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    const CONFIG: &str = r#"
type:
  mem: GDDR6
  pim: AiM
cmd_spec_matrix:
  - [cmd, opcode, latency, width]
  - [ACT, "0x01", 5, 0]
  - [RD, "0x02", 10, 64]
  - [MACSB, "0x21", 14, 64]
"#;

    /// Full workflow: scaffold a template, then generate from it.
    #[test]
    fn scaffold_then_generate_workflow() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("templates");
        let template = root.join("GDDR6_template.cpp");

        commands::scaffold::run("GDDR6", Some(&template), "cpp").unwrap();
        assert!(template.is_file());

        let config = dir.path().join("aim.yaml");
        std::fs::write(&config, CONFIG).unwrap();

        let out = dir.path().join("generated");
        commands::generate::run(&config, &root, &out, "cpp", None).unwrap();

        for name in ["base.cpp", "frontend.cpp", "controller.cpp", "device.cpp"] {
            assert!(out.join(name).is_file(), "missing {name}");
        }

        let base = std::fs::read_to_string(out.join("base.cpp")).unwrap();
        assert!(base.contains("GDDR6"));
        assert!(base.contains("\"ACT\","));

        let device = std::fs::read_to_string(out.join("device.cpp")).unwrap();
        assert!(device.contains("execute_MACSB"));
        assert!(device.contains("\"0x21\""));
    }

    /// JSON report output succeeds.
    #[test]
    fn generate_json_report() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("templates");
        commands::scaffold::run("GDDR6", Some(&root.join("GDDR6_template.cpp")), "cpp").unwrap();

        let config = dir.path().join("aim.yaml");
        std::fs::write(&config, CONFIG).unwrap();

        commands::generate::run(&config, &root, &dir.path().join("out"), "cpp", Some("json"))
            .unwrap();
    }

    /// A malformed matrix is rejected and no output is written.
    #[test]
    fn generate_rejects_short_row() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("templates");
        commands::scaffold::run("GDDR6", Some(&root.join("GDDR6_template.cpp")), "cpp").unwrap();

        let bad = CONFIG.replace("  - [RD, \"0x02\", 10, 64]\n", "  - [RD, \"0x02\", 10]\n");
        let config = dir.path().join("bad.yaml");
        std::fs::write(&config, &bad).unwrap();

        let out = dir.path().join("out");
        let result = commands::generate::run(&config, &root, &out, "cpp", None);
        assert!(result.is_err());
        assert!(!out.exists(), "no output files on config error");
    }

    /// A bad report format fails before any file is written.
    #[test]
    fn generate_rejects_bad_report_format_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("templates");
        commands::scaffold::run("GDDR6", Some(&root.join("GDDR6_template.cpp")), "cpp").unwrap();

        let config = dir.path().join("aim.yaml");
        std::fs::write(&config, CONFIG).unwrap();

        let out = dir.path().join("out");
        let result = commands::generate::run(&config, &root, &out, "cpp", Some("bogus"));
        assert!(result.is_err());
        assert!(!out.exists(), "no output files on bad report format");
    }

    /// Emitted files are concrete source with no marker tokens left.
    #[test]
    fn generate_emits_marker_free_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("templates");
        commands::scaffold::run("GDDR6", Some(&root.join("GDDR6_template.cpp")), "cpp").unwrap();

        let config = dir.path().join("aim.yaml");
        std::fs::write(&config, CONFIG).unwrap();

        let out = dir.path().join("out");
        commands::generate::run(&config, &root, &out, "cpp", None).unwrap();
        for name in ["base.cpp", "frontend.cpp", "controller.cpp", "device.cpp"] {
            let text = std::fs::read_to_string(out.join(name)).unwrap();
            assert!(!text.contains('@'), "{name}: marker token left in output");
        }
    }

    /// check validates without producing files.
    #[test]
    fn check_valid_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("aim.yaml");
        std::fs::write(&config, CONFIG).unwrap();
        commands::check::run(&config).unwrap();
    }

    #[test]
    fn check_unknown_mem_type_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("aim.yaml");
        std::fs::write(&config, CONFIG.replace("mem: GDDR6", "mem: SRAM")).unwrap();
        assert!(commands::check::run(&config).is_err());
    }

    /// templates lists scaffolded files.
    #[test]
    fn templates_lists_scaffolded() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("templates");
        commands::scaffold::run("GDDR6", Some(&root.join("a/GDDR6_template.cpp")), "cpp").unwrap();
        commands::scaffold::run("LPDDR5", Some(&root.join("b/LPDDR5_template.cpp")), "cpp")
            .unwrap();

        commands::templates::run(&root, "cpp").unwrap();
    }

    #[test]
    fn scaffold_unknown_mem_type_fails() {
        assert!(commands::scaffold::run("SRAM", None, "cpp").is_err());
    }

    /// Missing template surfaces the expected name and searched root.
    #[test]
    fn generate_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("templates");
        std::fs::create_dir_all(&root).unwrap();

        let config = dir.path().join("aim.yaml");
        std::fs::write(&config, CONFIG).unwrap();

        let err = commands::generate::run(&config, &root, &dir.path().join("out"), "cpp", None)
            .unwrap_err();
        assert!(format!("{err:#}").contains("GDDR6_template.cpp"));
    }
}
