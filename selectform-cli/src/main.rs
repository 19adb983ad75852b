use std::fmt::Write as FmtWrite;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use simplelog::{Config, LevelFilter, WriteLogger};

use selectform::{
    DocumentFormat, FormSpec, OutputDestination, OutputOptions, SelectFormUI, UiOptions,
    load_form_spec, parse_form_spec_str, resolve_option_files,
};

#[derive(Debug, Parser)]
#[command(
    name = "selectform",
    version,
    about = "Fill searchable-select forms in the terminal"
)]
struct Cli {
    /// Form spec: file path, inline payload, or "-" for stdin. Runs the demo form when omitted.
    #[arg(short = 's', long = "spec", value_name = "SPEC")]
    spec: Option<String>,

    /// Title shown at the top of the UI
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Output destinations ("-" writes to stdout). Accepts multiple values per flag use.
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Emit compact JSON/TOML rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Overwrite output files even if they already exist
    #[arg(short = 'f', long = "force", short_alias = 'y', alias = "yes")]
    force: bool,

    /// Hide the key binding hints in the footer
    #[arg(long = "no-help")]
    no_help: bool,

    /// Do not show the submitted values under the form
    #[arg(long = "no-snapshot")]
    no_snapshot: bool,

    /// Quit on the first Ctrl+Q even with unsubmitted edits
    #[arg(long = "no-confirm-exit")]
    no_confirm_exit: bool,

    /// Write logs here instead of the per-user config directory
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log debug output, including every selection event
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref(), cli.verbose)?;

    let mut diagnostics = DiagnosticCollector::default();

    let spec_hint = cli
        .spec
        .as_deref()
        .filter(|raw| *raw != "-")
        .and_then(|raw| DocumentFormat::from_extension(Path::new(raw)));
    let spec = cli
        .spec
        .as_deref()
        .and_then(|raw| load_spec(raw, &mut diagnostics));

    let (output, output_paths) = build_output_options(&cli, spec_hint, &mut diagnostics);
    ensure_output_paths_available(&output_paths, cli.force, &mut diagnostics);

    diagnostics.into_result()?;

    let mut ui = match spec {
        Some(spec) => SelectFormUI::from_spec(spec).map_err(Report::msg)?,
        None => {
            log::info!("no --spec given, running the demo form");
            SelectFormUI::demo()
        }
    };
    if let Some(title) = cli.title.as_ref() {
        ui = ui.with_title(title.clone());
    }
    ui = ui.with_options(
        UiOptions::default()
            .with_help(!cli.no_help)
            .with_snapshot(!cli.no_snapshot)
            .with_confirm_exit(!cli.no_confirm_exit),
    );
    if let Some(options) = output {
        ui = ui.with_output(options);
    }

    let _ = ui.run().map_err(Report::msg)?;

    Ok(())
}

/// The terminal belongs to the UI, so logs go to a file.
fn init_logging(path: Option<&Path>, verbose: bool) -> Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_path = match path {
        Some(path) => path.to_path_buf(),
        None => dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("selectform")
            .join("selectform.log"),
    };
    if let Some(parent) = log_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create log directory {}", parent.display()))?;
    }

    let log_file = File::create(&log_path)
        .wrap_err_with(|| format!("failed to create log file {}", log_path.display()))?;
    WriteLogger::init(level, Config::default(), log_file)
        .wrap_err("failed to initialize logger")?;

    log::info!("selectform starting (log level: {level:?})");
    Ok(())
}

fn load_spec(raw: &str, diagnostics: &mut DiagnosticCollector) -> Option<FormSpec> {
    let path = Path::new(raw);
    if raw != "-"
        && let Some(feature) = DocumentFormat::feature_for_extension(path)
    {
        diagnostics.push_input(
            "spec",
            format!("spec '{raw}' needs the '{feature}' feature, which this build lacks"),
        );
        return None;
    }

    let loaded = if raw == "-" {
        read_stdin().and_then(|contents| parse_inline_spec(&contents, "spec from stdin"))
    } else if path.is_file() {
        load_form_spec(path).map_err(|err| eyre!("{err:#}"))
    } else {
        parse_inline_spec(raw, "inline spec")
    };

    match loaded {
        Ok(spec) => Some(spec),
        Err(err) => {
            diagnostics.push_input("spec", err.to_string());
            None
        }
    }
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .wrap_err("failed to read from stdin")?;
    Ok(buffer)
}

/// Option files named by an inline spec resolve against the working directory.
fn parse_inline_spec(contents: &str, label: &str) -> Result<FormSpec> {
    let mut spec = parse_contents(contents, label)?;
    resolve_option_files(&mut spec, Path::new(".")).map_err(|err| eyre!("{err:#}"))?;
    Ok(spec)
}

fn parse_contents(contents: &str, label: &str) -> Result<FormSpec> {
    let mut first_error = None;
    for candidate in DocumentFormat::available_formats() {
        match parse_form_spec_str(contents, candidate) {
            Ok(spec) => return Ok(spec),
            Err(err) => {
                first_error.get_or_insert(err);
            }
        }
    }
    let primary = first_error
        .map(|err| format!("{err:#}"))
        .unwrap_or_else(|| "no formats enabled".to_string());
    Err(eyre!(
        "failed to parse {label}: tried {} (first error: {primary})",
        format_list()
    ))
}

fn format_list() -> String {
    let items: Vec<String> = DocumentFormat::available_formats()
        .into_iter()
        .map(|fmt| fmt.to_string())
        .collect();
    items.join(", ")
}

#[derive(Default)]
struct DiagnosticCollector {
    messages: Vec<String>,
}

impl DiagnosticCollector {
    fn push_input(&mut self, label: &str, message: impl Into<String>) {
        self.messages
            .push(format!("input ({label}): {}", message.into()));
    }

    fn push_output(&mut self, message: impl Into<String>) {
        self.messages.push(format!("output: {}", message.into()));
    }

    fn len(&self) -> usize {
        self.messages.len()
    }

    fn into_result(self) -> Result<()> {
        if self.messages.is_empty() {
            return Ok(());
        }
        let mut body = String::from("encountered input/output issues:\n");
        for (idx, msg) in self.messages.iter().enumerate() {
            let _ = writeln!(body, "  {}. {}", idx + 1, msg);
        }
        Err(eyre!(body))
    }
}

/// Without `-o` the submitted snapshot goes to stdout.
fn build_output_options(
    cli: &Cli,
    spec_hint: Option<DocumentFormat>,
    diagnostics: &mut DiagnosticCollector,
) -> (Option<OutputOptions>, Vec<PathBuf>) {
    let mut destinations = Vec::new();
    for raw in &cli.outputs {
        if raw.trim().is_empty() {
            diagnostics.push_output("output destination cannot be empty");
            continue;
        }
        if raw == "-" {
            destinations.push(OutputDestination::Stdout);
        } else {
            destinations.push(OutputDestination::file(raw));
        }
    }
    if cli.outputs.is_empty() {
        destinations.push(OutputDestination::Stdout);
    }
    if destinations.is_empty() {
        return (None, Vec::new());
    }

    let file_paths: Vec<PathBuf> = destinations
        .iter()
        .filter_map(|dest| match dest {
            OutputDestination::File(path) => Some(path.clone()),
            OutputDestination::Stdout => None,
        })
        .collect();

    let start = diagnostics.len();
    let format = if file_paths.is_empty() {
        spec_hint.unwrap_or_default()
    } else {
        infer_format_from_files(&file_paths, diagnostics).unwrap_or_default()
    };
    if diagnostics.len() > start {
        return (None, file_paths);
    }

    let options = OutputOptions::new(format)
        .with_pretty(!cli.no_pretty)
        .with_destinations(destinations);
    (Some(options), file_paths)
}

fn infer_format_from_files(
    file_paths: &[PathBuf],
    diagnostics: &mut DiagnosticCollector,
) -> Option<DocumentFormat> {
    let mut detected: Option<DocumentFormat> = None;
    for path in file_paths {
        if let Some(format) = DocumentFormat::from_extension(path) {
            match detected {
                Some(existing) if existing != format => diagnostics.push_output(format!(
                    "output file {} uses {format} but other destinations use {existing}; align extensions",
                    path.display()
                )),
                Some(_) => {}
                None => detected = Some(format),
            }
        } else if let Some(feature) = DocumentFormat::feature_for_extension(path) {
            diagnostics.push_output(format!(
                "output file {} needs the '{feature}' feature, which this build lacks",
                path.display()
            ));
        } else {
            diagnostics.push_output(format!(
                "cannot infer format from output file {}; use .json/.yaml/.toml",
                path.display()
            ));
        }
    }
    detected
}

fn ensure_output_paths_available(
    paths: &[PathBuf],
    force: bool,
    diagnostics: &mut DiagnosticCollector,
) {
    if force {
        return;
    }
    for path in paths {
        if path.exists() {
            diagnostics.push_output(format!(
                "file {} already exists (pass --force to overwrite)",
                path.display()
            ));
        }
    }
}
