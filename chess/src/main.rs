use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use minichess_agents::{evaluate_board, Agent, MinimaxAgent, RandomAgent};
use minichess_core::{perft_divide, Board, Move, Side};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Opponent {
    /// Moves are typed on stdin
    Human,
    /// Moves are picked at random
    Random,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Material-only chess with a minimax advisor", long_about = None)]
struct Args {
    /// Board layout to start from
    #[arg(default_value = "board.chb")]
    board: PathBuf,

    /// Search depth in plies
    #[arg(long, default_value_t = 4)]
    depth: u32,

    /// Use alpha-beta instead of plain minimax
    #[arg(long)]
    alphabeta: bool,

    /// Threads for the root split (plain minimax only)
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Who makes the moves
    #[arg(long, value_enum, default_value_t = Opponent::Human)]
    opponent: Opponent,

    /// Seed for the random opponent
    #[arg(long)]
    seed: Option<u64>,

    /// Print per-move perft counts to this depth instead of playing
    #[arg(long, value_name = "DEPTH")]
    perft: Option<u8>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

/// What the move source decided to do.
#[derive(Debug, PartialEq, Eq)]
enum Turn {
    Play(Move),
    Quit,
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
    .init();
}

fn load_board(path: &Path) -> Result<Board> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read board file {}", path.display()))?;
    Board::from_layout(&content, Side::White)
        .with_context(|| format!("failed to parse board file {}", path.display()))
}

/// Prompts until a legal move or "q" is entered. End of input counts as "q".
fn read_human_move<R: BufRead, W: Write>(board: &Board, input: &mut R, out: &mut W) -> Result<Turn> {
    loop {
        write!(out, "Indicate your move (or q to stop): ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(Turn::Quit);
        }

        let token = line.trim();
        if token == "q" {
            return Ok(Turn::Quit);
        }
        match token.parse::<Move>() {
            Ok(mv) if board.is_legal_move(mv) => return Ok(Turn::Play(mv)),
            _ => writeln!(out, "Incorrect move!")?,
        }
    }
}

/// Counts the move tree below each root move and prints the totals.
fn run_perft<W: Write>(board: &mut Board, depth: u8, out: &mut W) -> Result<u64> {
    let mut total = 0;
    for (mv, nodes) in perft_divide(board, depth) {
        writeln!(out, "{mv}: {nodes}")?;
        total += nodes;
    }
    writeln!(out)?;
    writeln!(out, "Total: {total}")?;
    Ok(total)
}

/// Runs the advice loop until a king is taken or the move source quits.
/// Returns the winner, if there is one.
fn play<R: BufRead, W: Write>(
    args: &Args,
    mut board: Board,
    input: &mut R,
    out: &mut W,
) -> Result<Option<Side>> {
    let advisor = if args.alphabeta {
        MinimaxAgent::with_alphabeta(args.depth)
    } else {
        MinimaxAgent::new(args.depth).with_threads(args.threads)
    };
    let mut random = match args.seed {
        Some(seed) => RandomAgent::with_seed(seed),
        None => RandomAgent::new(),
    };
    info!("advisor: {}, opponent: {:?}", advisor.name(), args.opponent);

    loop {
        writeln!(out, "{board}")?;
        writeln!(out, "Current score: {}", evaluate_board(&board, args.depth))?;

        writeln!(out, "Calculating best move...")?;
        let result = advisor.search(&board);
        match result.best_move {
            Some(mv) => writeln!(out, "Best move: {mv}")?,
            None => writeln!(out, "Best move: none")?,
        }
        writeln!(out, "Score to achieve: {}", result.score)?;
        writeln!(out)?;

        let turn = match args.opponent {
            Opponent::Human => read_human_move(&board, input, out)?,
            Opponent::Random => match random.best_move(&board) {
                Some(mv) => {
                    writeln!(out, "{} plays {mv}", random.name())?;
                    Turn::Play(mv)
                }
                None => {
                    writeln!(out, "{} has no moves left", board.turn)?;
                    Turn::Quit
                }
            },
        };

        let mv = match turn {
            Turn::Play(mv) => mv,
            Turn::Quit => {
                writeln!(out, "Exiting program...")?;
                return Ok(None);
            }
        };

        board = board.make_move(mv);

        if let Some(winner) = board.winner() {
            writeln!(out, "{board}")?;
            writeln!(out, "{winner} wins!")?;
            return Ok(Some(winner));
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    println!("Reading from {}...", args.board.display());
    let mut board = load_board(&args.board)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    if let Some(depth) = args.perft {
        run_perft(&mut board, depth, &mut out)?;
        return Ok(());
    }

    play(&args, board, &mut input, &mut out)?;
    Ok(())
}
