#![warn(unused_extern_crates)]
//! Find the longest horizontal and vertical lines and the largest square in
//! a binary bitmap.

pub mod error;
pub mod grid;
pub mod logging;
pub mod matrix;
pub mod query;
pub mod runs;

use clap::{
    error::{ContextKind, ContextValue, ErrorKind},
    Parser, Subcommand,
};
use std::{
    fmt,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};
use textwrap::{fill, Options};
use tracing::debug;

pub use error::{LoadError, Result};
pub use grid::Grid;
pub use query::{Line, Square};
pub use runs::{Orientation, RunLengthIndex};

/// Search a bitmap for lines and squares of 1s.
#[derive(Parser, Debug)]
#[command(name = "figsearch", version, about, long_about = None)]
pub struct FigSearchArgs {
    /// Increase log verbosity (repeat for more).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Check that the bitmap is well formed.
    Test {
        /// Bitmap file; standard input when omitted or "-".
        file: Option<PathBuf>,
    },
    /// Find the longest horizontal line.
    Hline {
        /// Bitmap file; standard input when omitted or "-".
        file: Option<PathBuf>,
    },
    /// Find the longest vertical line.
    Vline {
        /// Bitmap file; standard input when omitted or "-".
        file: Option<PathBuf>,
    },
    /// Find the largest square whose edges are all 1s.
    Square {
        /// Require the whole square to be filled with 1s.
        #[arg(long)]
        solid: bool,

        /// Bitmap file; standard input when omitted or "-".
        file: Option<PathBuf>,
    },
    /// Run hline, vline and square over one load of the bitmap.
    All {
        /// Bitmap file; standard input when omitted or "-".
        file: Option<PathBuf>,
    },
}

/// What to compute once the bitmap is loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Query {
    Test,
    Line(Orientation),
    Square { solid: bool },
    All,
}

/// Outcome of a successful query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Report {
    Valid,
    Line(Option<Line>),
    Square(Option<Square>),
    All {
        hline: Option<Line>,
        vline: Option<Line>,
        square: Option<Square>,
    },
}

pub const EXIT_OK: u8 = 0;
pub const EXIT_INVALID: u8 = 1;
pub const EXIT_TOO_FEW_ARGS: u8 = 2;
pub const EXIT_TOO_MANY_ARGS: u8 = 3;
pub const EXIT_WRONG_ARG: u8 = 4;

const MAX_COL: usize = 80;
const SUB_COL: usize = 4;
const NOT_FOUND: &str = "Not found";

impl Command {
    pub fn query(&self) -> Query {
        match self {
            Command::Test { .. } => Query::Test,
            Command::Hline { .. } => Query::Line(Orientation::Horizontal),
            Command::Vline { .. } => Query::Line(Orientation::Vertical),
            Command::Square { solid, .. } => Query::Square { solid: *solid },
            Command::All { .. } => Query::All,
        }
    }

    /// Input path, or `None` for standard input.
    pub fn file(&self) -> Option<&Path> {
        let file = match self {
            Command::Test { file }
            | Command::Hline { file }
            | Command::Vline { file }
            | Command::Square { file, .. }
            | Command::All { file } => file.as_deref(),
        };
        file.filter(|p| *p != Path::new("-"))
    }
}

fn fmt_found<T: fmt::Display>(f: &mut fmt::Formatter, found: &Option<T>) -> fmt::Result {
    match found {
        Some(v) => write!(f, "{}", v),
        None => write!(f, "{}", NOT_FOUND),
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Report::Valid => write!(f, "Valid"),
            Report::Line(line) => fmt_found(f, line),
            Report::Square(square) => fmt_found(f, square),
            Report::All {
                hline,
                vline,
                square,
            } => {
                write!(f, "hline: ")?;
                fmt_found(f, hline)?;
                write!(f, "\nvline: ")?;
                fmt_found(f, vline)?;
                write!(f, "\nsquare: ")?;
                fmt_found(f, square)
            }
        }
    }
}

/// Answer `query` over an already loaded grid.
///
/// Fails only if the run tables cannot be allocated.
pub fn answer(query: Query, grid: &Grid) -> Result<Report> {
    let report = match query {
        Query::Test => Report::Valid,
        Query::Line(orientation) => {
            let index = RunLengthIndex::build(grid)?;
            Report::Line(query::longest_line(&index, orientation))
        }
        Query::Square { solid } => {
            let index = RunLengthIndex::build(grid)?;
            Report::Square(if solid {
                query::largest_solid_square(&index)
            } else {
                query::largest_square(&index)
            })
        }
        Query::All => {
            let index = RunLengthIndex::build(grid)?;
            Report::All {
                hline: query::longest_row(&index),
                vline: query::longest_column(&index),
                square: query::largest_square(&index),
            }
        }
    };
    Ok(report)
}

/// Load a bitmap from `reader` and answer `query`.
///
/// The grid and its index live only for the duration of this call.
pub fn run_query(query: Query, reader: impl Read) -> Result<Report> {
    let grid = Grid::load(reader)?;
    answer(query, &grid)
}

fn run_command(command: &Command) -> Result<Report> {
    let grid = match command.file() {
        Some(path) => Grid::open(path)?,
        None => Grid::load(io::stdin().lock())?,
    };
    answer(command.query(), &grid)
}

fn fmt_failure(err: &LoadError) -> String {
    fill(
        &format!("Failed to load the bitmap: {}", err),
        Options::new(MAX_COL)
            .subsequent_indent(&" ".repeat(SUB_COL))
            .word_splitter(textwrap::WordSplitter::NoHyphenation)
            .break_words(false),
    )
}

/// Run `command`, writing results to `out` and diagnostics to `err`.
///
/// Returns the process exit code.
pub fn execute(command: &Command, out: &mut impl Write, err: &mut impl Write) -> u8 {
    let outcome = run_command(command);
    let written = match (&outcome, command.query()) {
        (Ok(report), _) => writeln!(out, "{}", report),
        (Err(e), Query::Test) => {
            debug!(error = %e, "bitmap failed validation");
            writeln!(err, "Invalid")
        }
        (Err(e), _) => {
            debug!(error = %e, "bitmap failed to load");
            writeln!(err, "{}", fmt_failure(e))
        }
    };
    match (outcome, written) {
        (Ok(_), Ok(())) => EXIT_OK,
        _ => EXIT_INVALID,
    }
}

/// Map an argument parsing failure to the exit code the CLI reports.
pub fn usage_exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_OK,
        ErrorKind::MissingSubcommand
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => EXIT_TOO_FEW_ARGS,
        ErrorKind::UnknownArgument => match err.get(ContextKind::InvalidArg) {
            Some(ContextValue::String(arg)) if arg.starts_with('-') => EXIT_WRONG_ARG,
            _ => EXIT_TOO_MANY_ARGS,
        },
        ErrorKind::TooManyValues => EXIT_TOO_MANY_ARGS,
        _ => EXIT_WRONG_ARG,
    }
}

/// Run the command selected by `args` against the process streams.
pub fn fig_search(args: &FigSearchArgs) -> u8 {
    execute(
        &args.command,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}
