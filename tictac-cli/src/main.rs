//! Play N-in-a-row in the terminal.
//!
//! Usage:
//!   tictac                   # 3x3
//!   tictac --dimension 4     # 4x4, four in a row to win
//!   tictac --classic         # fixed 3x3 layout
//!
//! Moves are read as `x y` (or `x,y`), x across and y down, both 0-based.
//! Set RUST_LOG=debug to trace accepted moves on stderr.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tictac_core::{Board, ClassicBoard, PackedBoard, Phase, Session};

#[derive(Parser)]
#[command(name = "tictac", about = "Play N-in-a-row against a friend")]
struct Cli {
    /// Board side length (2-5)
    #[arg(short, long, default_value_t = 3)]
    dimension: i32,

    /// Use the fixed 3x3 board layout (ignores --dimension)
    #[arg(long)]
    classic: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    if cli.classic {
        run(Session::new(ClassicBoard::new()), stdin.lock(), stdout.lock())
    } else {
        let board = Board::new(cli.dimension).context("cannot create board")?;
        run(Session::new(board), stdin.lock(), stdout.lock())
    }
}

/// Drive `session` to completion, reading moves from `input`.
fn run<B, R, W>(mut session: Session<B>, mut input: R, mut out: W) -> Result<()>
where
    B: PackedBoard + Display,
    R: BufRead,
    W: Write,
{
    debug!(dimension = session.board().dimension(), "starting game");
    let mut line = String::new();

    loop {
        let player = match session.phase() {
            Phase::AwaitingMove(player) => player,
            Phase::Finished(outcome) => {
                writeln!(out, "{}\n\n{outcome}", session.board())?;
                return Ok(());
            }
        };

        writeln!(out, "{}\n", session.board())?;
        write!(out, "Player {player}, enter move (x y): ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line).context("failed to read move")? == 0 {
            bail!("input closed before the game finished");
        }

        let (x, y) = match parse_move(&line) {
            Ok(coords) => coords,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };

        if let Err(err) = session.play(x, y) {
            debug!(x, y, %err, "move rejected");
            writeln!(out, "{err}")?;
        }
    }
}

/// Parse `x y` or `x,y` into a coordinate pair.
fn parse_move(line: &str) -> Result<(i32, i32)> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());

    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        bail!("expected two numbers, e.g. `1 2`");
    };
    let x: i32 = x.parse().with_context(|| format!("invalid x coordinate `{x}`"))?;
    let y: i32 = y.parse().with_context(|| format!("invalid y coordinate `{y}`"))?;
    Ok((x, y))
}
