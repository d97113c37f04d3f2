//! Math Parser Result Renderer CLI
//!
//! Reads an engine result payload (file or stdin) and prints the output
//! transcript, the result transcript and the annotations for one source.

use std::io::{self, Read};
use std::process::ExitCode;
use std::sync::Once;

use mp_render::{
    render, DisplayOptions, Layout, LineOffsetTable, PositionError, RenderContext, Rendered,
    SourceRegistry,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Enable with `RUST_LOG=mp_render=debug` or `RUST_LOG=mp_fmt=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr).with_target(true))
                .with(filter)
                .init();
        }
    });
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot read `{path}`: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("cannot read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("missing value for `{0}`")]
    MissingValue(&'static str),
    #[error("invalid source index `{0}`")]
    InvalidSource(String),
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("result does not match the document: {0}")]
    Position(#[from] PositionError),
    #[error("cannot encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Parsed command line.
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    source: u32,
    names: Vec<String>,
    document: Option<String>,
    results: Option<String>,
    layout: Layout,
    hide_errors: bool,
    json: bool,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<Args, CliError> {
    let mut parsed = Args::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "--narrow" => parsed.layout = Layout::Narrow,
            "--no-errors" => parsed.hide_errors = true,
            "--json" => parsed.json = true,
            "--source" | "-s" => {
                let value = iter.next().ok_or(CliError::MissingValue("--source"))?;
                parsed.source = value
                    .parse()
                    .map_err(|_| CliError::InvalidSource(value.clone()))?;
            }
            "--names" => {
                let value = iter.next().ok_or(CliError::MissingValue("--names"))?;
                parsed.names = value.split(',').map(str::to_owned).collect();
            }
            "--document" | "-d" => {
                let value = iter.next().ok_or(CliError::MissingValue("--document"))?;
                parsed.document = Some(value.clone());
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::UnknownOption(other.to_owned()));
            }
            path => parsed.results = Some(path.to_owned()),
        }
    }
    Ok(parsed)
}

fn print_usage() {
    println!("Usage: mpr [options] [RESULTS.json]");
    println!();
    println!("Reads the result payload from RESULTS.json, or stdin when absent or `-`.");
    println!();
    println!("Options:");
    println!("  -s, --source <n>       Active source index (default: 0)");
    println!("      --names <a,b,..>   Source names, in engine order");
    println!("  -d, --document <path>  Text of the active source, for annotation offsets");
    println!("      --narrow           Narrow layout: bare values, no markers");
    println!("      --no-errors        No error/warning markers in the result transcript");
    println!("      --json             Print one JSON object instead of plain text");
    println!("  -h, --help             Show this help");
}

fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}

fn read_payload(path: Option<&str>) -> Result<String, CliError> {
    match path {
        Some(path) if path != "-" => read_file(path),
        _ => {
            let mut payload = String::new();
            io::stdin()
                .read_to_string(&mut payload)
                .map_err(CliError::Stdin)?;
            Ok(payload)
        }
    }
}

fn print_plain(rendered: &Rendered) {
    println!("== output");
    println!("{}", rendered.output_text);
    println!("== result");
    println!("{}", rendered.result_text);
    println!("== annotations");
    for annotation in &rendered.annotations {
        println!("{annotation}");
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let payload = read_payload(args.results.as_deref())?;
    let document = match &args.document {
        Some(path) => read_file(path)?,
        None => String::new(),
    };

    let ctx = RenderContext::new(args.source)
        .with_sources(SourceRegistry::from_names(args.names.iter().cloned()))
        .with_options(DisplayOptions {
            show_errors: !args.hide_errors,
            layout: args.layout,
        });
    let rendered = render(payload.as_str(), &ctx, &LineOffsetTable::build(&document))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        print_plain(&rendered);
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("Run `mpr --help` for usage.");
            return ExitCode::FAILURE;
        }
    };
    if args.help {
        print_usage();
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
