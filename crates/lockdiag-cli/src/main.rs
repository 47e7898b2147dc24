//! CLI entry point for lockdiag.
//!
//! Argument parsing, file IO and exit codes only. Everything else lives in `lockdiag-app`.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use lockdiag_app::{
    parse_report_json, render_annotations, render_markdown, run_explain, run_report,
    runtime_error_report, serialize_report, to_renderable, ExplainOutput, ReportInput,
};
use lockdiag_settings::Overrides;
use lockdiag_types::LockdiagReport;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "lockdiag",
    version,
    about = "Turn restore assets-file log messages into build diagnostics"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the log messages of an assets file, print build-log lines and write the report.
    Report(ReportArgs),

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/lockdiag/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/lockdiag/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a restore log code (e.g. NU1101).
    Explain {
        /// The code to explain, any case.
        code: String,
    },
}

#[derive(clap::Args, Debug)]
struct ReportArgs {
    /// Path to the restore assets file.
    #[arg(long, default_value = "obj/project.assets.json")]
    assets_file: Utf8PathBuf,

    /// Escalate every warning to an error.
    #[arg(long)]
    treat_warnings_as_errors: bool,

    /// Codes to escalate to error, separated by `,` or `;`.
    #[arg(long)]
    warn_as_error: Option<String>,

    /// Codes to suppress, separated by `,` or `;`.
    #[arg(long)]
    no_warn: Option<String>,

    /// Path to lockdiag config TOML. A missing file means defaults.
    #[arg(long, default_value = "lockdiag.toml")]
    config: Utf8PathBuf,

    /// Override profile (default|strict).
    #[arg(long)]
    profile: Option<String>,

    /// Where to write the JSON report.
    #[arg(long, default_value = "artifacts/lockdiag/report.json")]
    report_out: Utf8PathBuf,

    /// Write a Markdown report alongside the JSON.
    #[arg(long)]
    write_markdown: bool,

    /// Where to write the Markdown report (if enabled).
    #[arg(long, default_value = "artifacts/lockdiag/comment.md")]
    markdown_out: Utf8PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.cmd {
        Commands::Report(args) => cmd_report(args),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Annotations { report, max } => cmd_annotations(report, max),
        Commands::Explain { code } => cmd_explain(&code),
    }
}

/// Diagnostics for the tool itself go to stderr; `RUST_LOG` overrides the default level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn cmd_report(args: ReportArgs) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<()> {
        let config_text = if args.config.exists() {
            std::fs::read_to_string(&args.config)
                .with_context(|| format!("read config: {}", args.config))?
        } else {
            tracing::debug!(path = %args.config, "no config file, using defaults");
            String::new()
        };

        let overrides = Overrides {
            profile: args.profile.clone(),
            treat_warnings_as_errors: args.treat_warnings_as_errors.then_some(true),
            warn_as_error: args.warn_as_error.clone(),
            no_warn: args.no_warn.clone(),
        };

        let output = run_report(ReportInput {
            assets_file: &args.assets_file,
            config_text: &config_text,
            overrides,
        })?;

        for line in &output.log_lines {
            eprintln!("{line}");
        }

        write_report_file(&args.report_out, &output.report).context("write report json")?;

        if args.write_markdown {
            let md = render_markdown(&to_renderable(&output.report));
            write_text_file(&args.markdown_out, &md).context("write markdown")?;
        }

        Ok(())
    })();

    // A completed pass always exits 0, whatever the verdict.
    if let Err(err) = result {
        let report = runtime_error_report(args.assets_file.as_str(), &format!("{err:#}"));
        let _ = write_report_file(&args.report_out, &report);
        eprintln!("lockdiag error: {err:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn write_report_file(path: &Utf8Path, report: &LockdiagReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    let data = serialize_report(report)?;
    std::fs::write(path, data).with_context(|| format!("write report: {path}"))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {path}"))?;
    Ok(())
}

fn read_report(path: &Utf8Path) -> anyhow::Result<LockdiagReport> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read report: {path}"))?;
    parse_report_json(&text)
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report = read_report(&report_path)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{md}");
    }

    Ok(())
}

fn cmd_annotations(report_path: Utf8PathBuf, max: usize) -> anyhow::Result<()> {
    let report = read_report(&report_path)?;
    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{annotation}");
    }
    Ok(())
}

fn cmd_explain(code: &str) -> anyhow::Result<()> {
    match run_explain(code) {
        ExplainOutput::Found(exp) => {
            print!("{}", lockdiag_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_codes,
        } => {
            eprint!(
                "{}",
                lockdiag_app::format_not_found(&identifier, available_codes)
            );
            std::process::exit(1);
        }
    }
}
