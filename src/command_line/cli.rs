#![allow(clippy::cast_precision_loss)]

use clap::{Args, CommandFactory, Parser, Subcommand};
use puzzle_solver::puzzle::board::Board;
use puzzle_solver::puzzle::heuristics::Heuristic;
use puzzle_solver::puzzle::parse::{parse_file, parse_text};
use puzzle_solver::puzzle::search::{SearchEngine, SearchMethod, SearchStats};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface for the puzzle solver application.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "puzzle-solver", version, about = "A configurable sliding puzzle solver")]
pub(crate) struct Cli {
    /// An optional global path argument. If provided without a subcommand,
    /// it's treated as a `.puzzle` grid file to solve, or a directory of
    /// such files.
    #[arg(global = true)]
    pub path: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `file`, `text`, `random`).
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands for the puzzle solver.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Solve a puzzle grid file.
    File {
        /// Path to the puzzle file (rows of whitespace-separated tile
        /// values, `0` for the blank, `#` for comments).
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve a puzzle provided as plain text.
    Text {
        /// Inline grid with rows separated by `/` or newlines
        /// (e.g. "1 2 3 / 4 0 6 / 7 5 8").
        #[arg(short, long)]
        input: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate and solve a random solvable instance.
    Random {
        /// Side length of the board.
        #[arg(long, default_value_t = 3)]
        dim: usize,

        /// Scramble the goal board with this many random legal slides
        /// instead of drawing uniform permutations. The instance is then at
        /// most this many moves from solved.
        #[arg(long)]
        scramble: Option<usize>,

        /// Attempt budget for uniform permutation drawing.
        #[arg(long, default_value_t = 1000)]
        max_attempts: usize,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct CommonOptions {
    /// Enable debug output, providing more verbose logging during solving.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,

    /// Enable verification of the found solution: the move string is
    /// replayed on a copy of the board and checked against the goal.
    #[arg(short, long, default_value_t = true)]
    pub(crate) verify: bool,

    /// Enable printing of search statistics after solving.
    #[arg(short, long, default_value_t = true)]
    pub(crate) stats: bool,

    /// Enable printing of the move string if a solution is found.
    #[arg(short, long, default_value_t = true)]
    pub(crate) print_solution: bool,

    /// Specifies the search method to use.
    /// Supported values are "bfs", "dfs" and "astar".
    #[arg(long, default_value_t = SearchMethod::Bfs)]
    pub(crate) method: SearchMethod,

    /// Specifies the A* heuristic. Ignored by bfs and dfs.
    #[arg(long, default_value_t = Heuristic::Manhattan)]
    pub(crate) heuristic: Heuristic,
}

/// Entry point called from `main` after argument parsing.
pub(crate) fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Some(Commands::File { path, common }) => solve_path(&path, &common),
        Some(Commands::Text { input, common }) => {
            let time = std::time::Instant::now();
            let board = parse_text(&input).map_err(|e| e.to_string())?;
            solve_and_report(&board, &common, None, time.elapsed());
            Ok(())
        }
        Some(Commands::Random {
            dim,
            scramble,
            max_attempts,
            common,
        }) => {
            let time = std::time::Instant::now();
            let board = match scramble {
                Some(steps) => {
                    let mut board = Board::goal(dim);
                    board.scramble(steps);
                    board
                }
                None => Board::random_solvable(dim, max_attempts).map_err(|e| e.to_string())?,
            };
            solve_and_report(&board, &common, None, time.elapsed());
            Ok(())
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "puzzle-solver",
                &mut std::io::stdout(),
            );
            Ok(())
        }
        None => match cli.path {
            Some(path) if path.is_dir() => solve_dir(&path, &cli.common),
            Some(path) => solve_path(&path, &cli.common),
            None => Err("no input given; see --help for usage".to_string()),
        },
    }
}

/// Parses and solves a single puzzle file.
pub(crate) fn solve_path(path: &Path, common: &CommonOptions) -> Result<(), String> {
    let time = std::time::Instant::now();
    let board = parse_file(path).map_err(|e| e.to_string())?;
    solve_and_report(&board, common, Some(path), time.elapsed());
    Ok(())
}

/// Solves every `.puzzle` file under a directory, recursively.
pub(crate) fn solve_dir(path: &Path, common: &CommonOptions) -> Result<(), String> {
    for entry in walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
    {
        let file_path = entry.path().to_path_buf();

        if file_path.extension().is_none_or(|ext| ext != "puzzle") {
            continue;
        }

        if !file_path.is_file() {
            continue;
        }

        solve_path(&file_path, common)?;
    }

    Ok(())
}

/// Verifies a returned move string by replaying it on a copy of the board.
///
/// An empty move string on an unsolved board means the frontier was
/// exhausted; that is reported, not asserted against.
///
/// # Panics
///
/// If a non-empty move string fails to replay or does not reach the goal.
pub(crate) fn verify_solution(board: &Board, moves: &str) {
    if moves.is_empty() && !board.is_goal() {
        println!("No solution found! Make sure the board is solvable.");
        return;
    }

    let mut replay = board.clone();
    replay
        .apply_moves(moves)
        .unwrap_or_else(|e| panic!("Solution failed to replay: {e}"));
    let ok = replay.is_goal();
    println!("Verified: {ok:?}");
    assert!(ok, "Solution failed verification!");
}

/// Solves a board and reports results including stats and verification.
pub(crate) fn solve_and_report(
    board: &Board,
    common: &CommonOptions,
    label: Option<&Path>,
    parse_time: Duration,
) {
    epoch::advance().unwrap();

    if let Some(name) = label {
        println!("Solving: {}", name.display());
    }

    if common.debug {
        println!("Board:\n{board}");
        println!("Dim: {}", board.dim());
        println!("Key: {}", board.key());
        println!("Solvable: {}", board.is_solvable());
    }

    let time = std::time::Instant::now();
    let mut engine = SearchEngine::with_heuristic(common.method, common.heuristic);
    let moves = engine.solve(board);
    let elapsed = time.elapsed();

    if common.debug {
        println!("Solution: {moves:?}");
        println!("Time: {elapsed:?}");
    }

    epoch::advance().unwrap();

    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();

    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

    if common.verify {
        verify_solution(board, &moves);
    }

    if common.stats {
        print_stats(
            parse_time,
            elapsed,
            common,
            &moves,
            engine.stats(),
            allocated_mib,
            resident_mib,
        );
    }

    if common.print_solution {
        if moves.is_empty() {
            if board.is_goal() {
                println!("\nALREADY SOLVED");
            } else {
                println!("\nNO SOLUTION FOUND");
            }
        } else {
            println!("\nSolution: {moves}");
        }
    }
}

/// Helper function to print a single statistic line in a formatted table row.
pub(crate) fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate
/// (value/second).
pub(crate) fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of problem and search statistics.
pub(crate) fn print_stats(
    parse_time: Duration,
    elapsed: Duration,
    common: &CommonOptions,
    moves: &str,
    s: SearchStats,
    allocated: f64,
    resident: f64,
) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=======================[ Problem Statistics ]========================");
    stat_line("Parse time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line("Method", common.method);
    stat_line("Heuristic", common.heuristic);

    println!("========================[ Search Statistics ]========================");
    stat_line("Solution length", moves.len());
    stat_line_with_rate("States expanded", s.expanded, elapsed_secs);
    stat_line_with_rate("States generated", s.generated, elapsed_secs);
    stat_line("Frontier peak", s.frontier_peak);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}
