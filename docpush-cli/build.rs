use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the transforms from src/transforms.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_TRANSFORMS: &[&str] = &["blocks-simple", "blocks-json", "ops-json", "ops-listing"];

const AVAILABLE_FORMATS: &[&str] = &["batch-json", "listing", "text"];

fn input_arg(id: &'static str) -> Arg {
    Arg::new(id)
        .help("Input markdown file")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("docpush")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert meeting notes markdown into Google Docs edits")
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
                .help("Path to a docpush.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Render the edit batch for a notes file (default command)")
                .arg(input_arg("input"))
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Output format")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_FORMATS,
                        )),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect the classification and assembly stages")
                .arg(input_arg("path"))
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_TRANSFORMS,
                        ))
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("publish")
                .about("Create a document and submit the edit batch")
                .arg(input_arg("input"))
                .arg(Arg::new("title").long("title").help("Document title"))
                .arg(
                    Arg::new("outbox")
                        .long("outbox")
                        .help("Directory the request bodies are written to")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .help("Validate and summarise without writing anything")
                        .action(ArgAction::SetTrue),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "docpush", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "docpush", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "docpush", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
