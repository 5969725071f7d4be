//! window-scatter CLI entry point.
//!
//! Lays out a list of cards for a given container size and prints the result
//! as JSON, SVG or a text preview.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use window_scatter::config::LayoutConfig;
use window_scatter::layout::{Container, Item};
use window_scatter::parsers::{default_items, parse_items};
use window_scatter::renderers::{AsciiRenderer, JsonRenderer, LayoutFrame, Renderer, SvgRenderer};
use window_scatter::session::{LayoutSession, ManualClock};
use window_scatter::{ScatterError, make_rng};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Svg,
    Ascii,
}

/// Scatter window cards over a container, avoiding heavy overlaps.
#[derive(Parser, Debug)]
#[command(
    name = "window-scatter",
    version = env!("WINDOW_SCATTER_VERSION"),
    about = "Scatter window cards over a container, avoiding heavy overlaps"
)]
struct Cli {
    /// Item file, JSON or compact syntax ("-" for stdin). Defaults to the
    /// built-in portfolio cards.
    input: Option<String>,

    /// Inline item list, e.g. "25%x200:who-am-i, 18x200"
    #[arg(short = 'i', long = "items", conflicts_with = "input")]
    items: Option<String>,

    /// Container width in px
    #[arg(short = 'W', long = "width", default_value = "1920")]
    width: f64,

    /// Container height in px
    #[arg(short = 'H', long = "height", default_value = "1080")]
    height: f64,

    /// RNG seed for a reproducible layout
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// JSON config file overriding layout constants
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "json")]
    format: OutputFormat,

    /// Number of shuffles to run before printing
    #[arg(long = "shuffles", default_value = "0")]
    shuffles: u32,

    /// Text preview width in columns
    #[arg(long = "columns", default_value = "96")]
    columns: usize,

    /// Use plain ASCII instead of Unicode box-drawing characters
    #[arg(short = 'a', long = "ascii")]
    use_ascii: bool,

    /// Single-line JSON
    #[arg(long = "compact")]
    compact: bool,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// More logging on stderr (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_items(cli: &Cli) -> Result<Vec<Item>, ScatterError> {
    let text = match (cli.input.as_deref(), cli.items.as_deref()) {
        (Some("-"), _) => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
        (Some(path), _) => fs::read_to_string(path)?,
        (None, Some(spec)) => spec.to_string(),
        (None, None) => return Ok(default_items()),
    };
    parse_items(&text)
}

fn run(cli: &Cli) -> Result<String, ScatterError> {
    let config = match cli.config.as_deref() {
        Some(path) => LayoutConfig::from_file(path)?,
        None => LayoutConfig::default(),
    };
    let items = read_items(cli)?;
    let container = Container::new(cli.width, cli.height);
    info!(items = items.len(), width = cli.width, height = cli.height, "laying out");

    let clock = ManualClock::new();
    let mut session = LayoutSession::new(items, config, make_rng(cli.seed));
    session.set_container(container);
    for _ in 0..cli.shuffles {
        session.regenerate(&clock);
        clock.advance(session.config().clear_delay());
        session.poll(&clock);
    }

    let frame = LayoutFrame::new(container, session.items(), session.placed(), session.config());
    let rendered = match cli.format {
        OutputFormat::Json => JsonRenderer::new(!cli.compact).render(&frame),
        OutputFormat::Svg => SvgRenderer::default().render(&frame),
        OutputFormat::Ascii => AsciiRenderer::new(!cli.use_ascii)
            .with_columns(cli.columns)
            .render(&frame),
    };
    Ok(rendered)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut rendered = match run(&cli) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    if !rendered.is_empty() && !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
