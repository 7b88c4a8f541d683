//! Command-line front end: expand a grammar file and print its segments.
//!
//! ```text
//! turtle-fractals dragon.txt 12 > dragon.m
//! turtle-fractals plant.txt 5 --format json --step 0.5
//! ```
//!
//! Segments go to stdout, logs to stderr (`RUST_LOG=debug` for per-pass detail).

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;
use turtle_fractals::{
    CsvWriter, Grammar, JsonLinesWriter, MatlabWriter, SegmentSink, TurtleConfig,
    TurtleInterpreter,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// `line([x0 x1],[y0 y1])` calls
    Matlab,
    /// `x0,y0,x1,y1` rows
    Csv,
    /// One JSON object per line
    Json,
}

#[derive(Parser)]
#[command(name = "turtle-fractals")]
#[command(about = "Draws Lindenmayer-system fractals as line segments")]
struct Cli {
    /// Grammar source file
    grammar: PathBuf,

    /// Generation to draw; 1 draws the axiom itself
    #[arg(allow_negative_numbers = true)]
    generations: i64,

    #[arg(long, value_enum, default_value = "matlab")]
    format: Format,

    /// Length of one forward step
    #[arg(long, default_value = "1.0")]
    step: f32,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let grammar = Grammar::load(&cli.grammar)?;
    info!(
        grammar = %cli.grammar.display(),
        directions = grammar.direction_count,
        rules = grammar.rules.len(),
        "grammar loaded"
    );

    let commands = grammar
        .expand(cli.generations)
        .with_context(|| format!("cannot expand {}", cli.grammar.display()))?;
    info!(generations = cli.generations, len = commands.len(), "expanded");

    let config = TurtleConfig {
        step_length: cli.step,
    };
    let interpreter = TurtleInterpreter::for_grammar(&grammar, config)?;
    info!(
        directions = interpreter.direction_count(),
        step = interpreter.config().step_length,
        "walking"
    );

    let out = BufWriter::new(io::stdout().lock());
    match cli.format {
        Format::Matlab => draw(
            &interpreter,
            &commands,
            MatlabWriter::new(out),
            MatlabWriter::into_inner,
        ),
        Format::Csv => draw(
            &interpreter,
            &commands,
            CsvWriter::new(out),
            CsvWriter::into_inner,
        ),
        Format::Json => draw(
            &interpreter,
            &commands,
            JsonLinesWriter::new(out),
            JsonLinesWriter::into_inner,
        ),
    }
}

/// Runs the walk and flushes whatever was written, even when the walk fails.
fn draw<S, W>(
    interpreter: &TurtleInterpreter,
    commands: &str,
    mut sink: S,
    into_inner: fn(S) -> W,
) -> anyhow::Result<()>
where
    S: SegmentSink,
    W: Write,
{
    let walk = interpreter.interpret(commands, &mut sink);
    into_inner(sink).flush().context("cannot flush segments")?;

    let report = walk.context("turtle walk aborted")?;
    info!(
        segments = report.segments,
        max_depth = report.max_depth,
        min_x = report.extent.0.x,
        min_y = report.extent.0.y,
        max_x = report.extent.1.x,
        max_y = report.extent.1.y,
        "done"
    );
    Ok(())
}
