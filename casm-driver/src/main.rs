//! casm Translator Driver
//!
//! Reads a parsed C module as JSON, translates it, and writes the asm.js
//! module as ESTree JSON.

use casm_common::{CompilerError, Diagnostic, ErrorReporter};
use casm_frontend::{Frontend, Grammar, TranslateOptions};
use clap::{Parser, ValueEnum};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "casmc")]
#[command(about = "Translate a restricted C syntax tree into an asm.js module")]
#[command(version = "0.1.0")]
struct Cli {
    /// Input syntax tree (JSON)
    input: PathBuf,

    /// Output file for the ESTree JSON (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Grammar of the input tree
    #[arg(long, value_enum, default_value_t = GrammarArg::Auto)]
    grammar: GrammarArg,

    /// Name of the generated module function
    #[arg(long)]
    module_name: Option<String>,

    /// JSON file with translation options
    #[arg(long)]
    options: Option<PathBuf>,

    /// Pretty-print the output JSON
    #[arg(long)]
    pretty: bool,

    /// Only check the input; write nothing
    #[arg(long)]
    check: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum GrammarArg {
    Tagged,
    Declarative,
    Auto,
}

impl From<GrammarArg> for Grammar {
    fn from(arg: GrammarArg) -> Self {
        match arg {
            GrammarArg::Tagged => Grammar::Tagged,
            GrammarArg::Declarative => Grammar::Declarative,
            GrammarArg::Auto => Grammar::Auto,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    if let Err(e) = run(&cli) {
        let mut reporter = ErrorReporter::new();
        reporter.report(Diagnostic::from(&e).with_note(format!("while translating {}", cli.input.display())));
        reporter.print_diagnostics();
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CompilerError> {
    let options = load_options(cli)?;
    let source = fs::read_to_string(&cli.input)?;
    let grammar = Grammar::from(cli.grammar);

    if cli.check {
        let ast = Frontend::parse_json(&source, grammar)?;
        let typed = Frontend::analyze(&ast)?;
        println!("{}: ok ({} function(s))", cli.input.display(), typed.functions.len());
        return Ok(());
    }

    let program = Frontend::translate_json(&source, grammar, &options)?;
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&program)
    } else {
        serde_json::to_string(&program)
    }
    .map_err(|e| CompilerError::InternalError {
        message: format!("failed to serialize output: {e}"),
    })?;

    write_output(cli.output.as_deref(), &rendered)
}

fn load_options(cli: &Cli) -> Result<TranslateOptions, CompilerError> {
    let mut options = match &cli.options {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            TranslateOptions::from_json(&text).map_err(|e| CompilerError::InputError {
                message: format!("invalid options file {}: {e}", path.display()),
            })?
        }
        None => TranslateOptions::default(),
    };

    if let Some(name) = &cli.module_name {
        options.module_name = name.clone();
    }
    Ok(options)
}

fn write_output(path: Option<&Path>, rendered: &str) -> Result<(), CompilerError> {
    match path {
        Some(path) => {
            fs::write(path, format!("{rendered}\n"))?;
            info!("module written to {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
