//! Developer tasks (schema generation, fixture conformance, explain coverage).
//!
//! Kept out of the end-user CLI.

use anyhow::{Context, bail};
use lockdiag_test_util::normalize_nondeterministic;
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Workspace root (parent of the xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or(manifest_dir)
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(lockdiag_types::LockdiagReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(lockdiag_settings::LockdiagConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "lockdiag.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "lockdiag.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Run the built `lockdiag` binary over every fixture, validate each report against the
/// generated report schema and compare it with `expected.report.json` when present.
fn conform() -> anyhow::Result<()> {
    let schema = serde_json::to_value(generate_report_schema()).context("schema to JSON")?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile report schema: {}", e))?;

    let mut lockdiag_bin = project_root().join("target").join("debug").join("lockdiag");
    if cfg!(target_os = "windows") {
        lockdiag_bin.set_extension("exe");
    }
    if !lockdiag_bin.exists() {
        bail!(
            "lockdiag binary not found at {}.\nRun `cargo build -p lockdiag-cli` first.",
            lockdiag_bin.display()
        );
    }

    let mut errors = Vec::new();
    let mut checked = 0usize;

    for entry in fs::read_dir(fixtures_dir()).context("Failed to read tests/fixtures/")? {
        let fixture_dir = entry?.path();
        if !fixture_dir.join("project.assets.json").exists() {
            continue;
        }
        let fixture_name = fixture_dir
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let temp_dir = tempfile::tempdir().context("Failed to create temp dir")?;
        let report_out = temp_dir.path().join("report.json");

        let output = std::process::Command::new(&lockdiag_bin)
            .current_dir(&fixture_dir)
            .args(["report", "--assets-file", "project.assets.json", "--report-out"])
            .arg(&report_out)
            .output()
            .with_context(|| format!("Failed to run lockdiag on fixture '{}'", fixture_name))?;

        if !output.status.success() {
            errors.push(format!(
                "fixture '{}': lockdiag exited with {:?}: {}",
                fixture_name,
                output.status.code(),
                String::from_utf8_lossy(&output.stderr)
            ));
            continue;
        }

        let report_content = fs::read_to_string(&report_out)
            .with_context(|| format!("fixture '{}': no report written", fixture_name))?;
        let report: serde_json::Value = serde_json::from_str(&report_content)
            .with_context(|| format!("Failed to parse report for fixture '{}'", fixture_name))?;

        for err in validator.iter_errors(&report) {
            errors.push(format!("fixture '{}': schema validation: {}", fixture_name, err));
        }

        let golden_path = fixture_dir.join("expected.report.json");
        if golden_path.exists() {
            let golden: serde_json::Value = serde_json::from_str(
                &fs::read_to_string(&golden_path)
                    .with_context(|| format!("Failed to read {}", golden_path.display()))?,
            )
            .with_context(|| format!("Failed to parse {}", golden_path.display()))?;

            if normalize_nondeterministic(report) != normalize_nondeterministic(golden) {
                errors.push(format!(
                    "fixture '{}': output differs from expected.report.json",
                    fixture_name
                ));
                continue;
            }
        }

        checked += 1;
        println!("  ok {}", fixture_name);
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance failed with {} errors", errors.len());
    }

    println!("\n{} fixtures conform.", checked);
    Ok(())
}

/// Every known code must have a title, description and remediation.
fn explain_coverage() -> anyhow::Result<()> {
    let codes = lockdiag_types::explain::all_codes();
    let mut errors = Vec::new();

    for code in codes {
        match lockdiag_types::lookup_explanation(code) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("Code '{}' has empty title", code));
                }
                if exp.description.is_empty() {
                    errors.push(format!("Code '{}' has empty description", code));
                }
                if exp.remediation.is_empty() {
                    errors.push(format!("Code '{}' has empty remediation", code));
                }
            }
            None => errors.push(format!("Code '{}' has no explanation", code)),
        }
    }

    if errors.is_empty() {
        println!("{} codes have explanations.", codes.len());
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Run lockdiag over tests/fixtures and check the reports");
    eprintln!("  explain-coverage  Validate all known codes have explanations");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
