// Command-line interface for docpush
//
// This binary converts meeting notes markdown into Google Docs edit batches, inspects the
// intermediate stages and publishes the result.
//
// The core capabilities use the docpush-babel crate. This crate is only the shell around it:
// argument parsing, configuration layering, file I/O and process exit codes.
//
// Usage:
//  docpush <input> [--to <format>] [--output <file>]          - Convert (default)
//  docpush convert <input> [--to <format>] [--output <file>]  - Same as above (explicit)
//  docpush inspect <input> [<transform>]                      - Show a stage (defaults to "blocks-simple")
//  docpush publish <input> [--title <title>] [--outbox <dir>] - Publish through the outbox
//  docpush --list-formats                                     - List formats and transforms
//
// Extra Parameters:
//
// Style overrides and format options can be passed using --extra-<parameter-name> <value>.
// Known style keys are applied to the configuration, the rest go to the output format.
// Example:
//  docpush notes.md --extra-mention-color 1,0,0 --extra-compact
//  docpush notes.md --extra-unchecked-symbol=-

use docpush_cli::transforms;

use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use docpush_babel::services::{OutboxService, RecordingService};
use docpush_babel::{
    document_title, publish, to_operations, DocumentService, Format, FormatRegistry,
    PublishSpec, StyleRules,
};
use docpush_config::{ColorConfig, DocpushConfig, Loader, LOCAL_CONFIG_FILE};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const DEFAULT_FORMAT: &str = "batch-json";

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports:
/// - `--extra-<key>=<value>` (any value, including one starting with `-`)
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            if let Some((key, value)) = key.split_once('=') {
                extra_params.insert(key.to_string(), value.to_string());
                i += 1;
                continue;
            }

            let has_value = args
                .get(i + 1)
                .map(|next| !next.starts_with('-'))
                .unwrap_or(false);

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("docpush")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert meeting notes markdown into Google Docs edits")
        .long_about(
            "docpush turns meeting notes markdown (headings, bullets, checkboxes, @mentions\n\
            and a --- footer) into an ordered Google Docs batchUpdate request.\n\n\
            Commands:\n  \
            - convert: Render the edit batch (default)\n  \
            - inspect: View classified lines or operations\n  \
            - publish: Create a document and submit the batch\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] for style overrides (mention-color, footer-color,\n  \
            bullet-preset, checked-symbol, unchecked-symbol, outbox) or format options.\n  \
            Values starting with '-' need the --extra-<name>=<value> form.\n\n\
            Examples:\n  \
            docpush notes.md                          # batchUpdate JSON on stdout\n  \
            docpush notes.md --to listing             # One line per operation\n  \
            docpush notes.md -o batch.json            # Format picked from the extension\n  \
            docpush publish notes.md --outbox out     # Write request bodies to out/",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats and transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a docpush.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Render the edit batch for a notes file (default command)")
                .long_about(
                    "Convert a notes file into its edit batch.\n\n\
                    Formats:\n  \
                    - batch-json: Google Docs batchUpdate request body (.json, default)\n  \
                    - listing:    One line per operation (.ops)\n  \
                    - text:       Document text once the batch is applied (.txt)\n\n\
                    Without --to, the format is detected from the -o extension.\n\
                    Output goes to stdout by default.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Output format (defaults to batch-json)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect the classification and assembly stages")
                .arg(
                    Arg::new("path")
                        .help("Input markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'blocks-simple'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("publish")
                .about("Create a document and submit the edit batch")
                .long_about(
                    "Publish a notes file.\n\n\
                    Request bodies are written to the outbox directory (configured by\n\
                    publish.outbox_dir, --outbox or --extra-outbox): <id>.create.json and\n\
                    <id>.batch.json. The document URL is printed on success.\n\n\
                    With --dry-run nothing is written; the batch is validated and\n\
                    summarised instead.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .help("Document title (defaults to the first level-1 heading)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("outbox")
                        .long("outbox")
                        .value_name("DIR")
                        .help("Directory the request bodies are written to")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .help("Validate and summarise without writing anything")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    init_logging();

    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !["convert", "inspect", "publish", "help"].contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if let Err(err) = run(&matches, &mut extra_params) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches, extra_params: &mut HashMap<String, String>) -> Result<()> {
    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return Ok(());
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()))?;
    apply_config_overrides(&mut config, extra_params)?;

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = required(sub_matches, "input")?;
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let to = resolve_format(sub_matches.get_one::<String>("to"), output);
            handle_convert_command(input, &to, output, extra_params, &config)
        }
        Some(("inspect", sub_matches)) => {
            let path = required(sub_matches, "path")?;
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or(transforms::DEFAULT_TRANSFORM);
            handle_inspect_command(path, transform, extra_params, &config)
        }
        Some(("publish", sub_matches)) => {
            let input = required(sub_matches, "input")?;
            let title = sub_matches.get_one::<String>("title").map(|s| s.as_str());
            if let Some(dir) = sub_matches.get_one::<String>("outbox") {
                config.publish.outbox_dir = PathBuf::from(dir);
            }
            handle_publish_command(input, title, sub_matches.get_flag("dry-run"), &config)
        }
        _ => bail!("Unknown subcommand. Use --help for usage information."),
    }
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a str> {
    matches
        .get_one::<String>(id)
        .map(|s| s.as_str())
        .with_context(|| format!("missing argument '{id}'"))
}

/// Explicit `--to` wins, then the output extension, then the default.
fn resolve_format(to: Option<&String>, output: Option<&str>) -> String {
    if let Some(format) = to {
        return format.clone();
    }
    output
        .and_then(|path| FormatRegistry::default().detect_format_from_filename(path))
        .unwrap_or_else(|| DEFAULT_FORMAT.to_string())
}

fn read_source(path: &str) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Error reading file '{path}'"))
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &DocpushConfig,
) -> Result<()> {
    let registry = FormatRegistry::default();
    let format = registry.get(to)?;

    let source = read_source(input)?;
    let rules = StyleRules::from(&config.style);
    let operations = to_operations(&source, &rules);
    debug!(input, format = to, operations = operations.len(), "converted");

    let rendered = format
        .render_with_options(&operations, extra_params)
        .context("Serialization error")?;

    match output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("Error writing file '{path}'"))?
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    transform: &str,
    extra_params: &HashMap<String, String>,
    config: &DocpushConfig,
) -> Result<()> {
    let source = read_source(path)?;
    let rules = StyleRules::from(&config.style);
    let output = transforms::execute_transform(&source, transform, &rules, extra_params)
        .map_err(|e| anyhow::anyhow!("Execution error: {e}"))?;
    print!("{output}");
    Ok(())
}

/// Handle the publish command
fn handle_publish_command(
    input: &str,
    title: Option<&str>,
    dry_run: bool,
    config: &DocpushConfig,
) -> Result<()> {
    let source = read_source(input)?;
    let title = match title {
        Some(title) => title.to_string(),
        None => default_title(&source, input),
    };

    let spec = PublishSpec::new(&source, &title)
        .with_rules(StyleRules::from(&config.style))
        .with_url_template(config.publish.url_template.clone());

    let mut service: Box<dyn DocumentService> = if dry_run {
        Box::new(RecordingService::new())
    } else {
        Box::new(
            OutboxService::new(&config.publish.outbox_dir).with_context(|| {
                format!(
                    "Error opening outbox '{}'",
                    config.publish.outbox_dir.display()
                )
            })?,
        )
    };

    let result = publish(spec, service.as_mut())?;
    info!(document = %result.document_id, operations = result.operation_count, "published");

    if dry_run {
        println!(
            "{title}: {} operations (dry run, nothing written)",
            result.operation_count
        );
    } else {
        println!("{}", result.url);
    }
    Ok(())
}

fn default_title(source: &str, input: &str) -> String {
    document_title(source).unwrap_or_else(|| {
        Path::new(input)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string())
    })
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Conversion formats:");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        let description = registry
            .get(&format_name)
            .map(|format| format.description())
            .unwrap_or_default();
        println!("  {format_name:<12} {description}");
    }
    println!("\nInspect transforms:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> Result<DocpushConfig> {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    loader.build().context("Failed to load configuration")
}

/// Moves the style and publish keys out of `extra_params` into `config`.
fn apply_config_overrides(
    config: &mut DocpushConfig,
    extra_params: &mut HashMap<String, String>,
) -> Result<()> {
    if let Some(raw) = extra_params.remove("mention-color") {
        config.style.mention_color = parse_color_arg("mention-color", &raw)?;
    }
    if let Some(raw) = extra_params.remove("footer-color") {
        config.style.footer_color = parse_color_arg("footer-color", &raw)?;
    }
    if let Some(raw) = extra_params.remove("bullet-preset") {
        config.style.bullet_preset = raw;
    }
    if let Some(raw) = extra_params.remove("checked-symbol") {
        config.style.checked_symbol = raw;
    }
    if let Some(raw) = extra_params.remove("unchecked-symbol") {
        config.style.unchecked_symbol = raw;
    }
    if let Some(raw) = extra_params.remove("outbox") {
        config.publish.outbox_dir = PathBuf::from(raw);
    }
    Ok(())
}

fn parse_color_arg(flag: &str, raw: &str) -> Result<ColorConfig> {
    raw.parse::<ColorConfig>()
        .with_context(|| format!("Invalid value for --extra-{flag}"))
}
