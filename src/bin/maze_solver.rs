use clap::Parser;
use log::{debug, info};
use maze_solver::grid::Coordinate;
use maze_solver::solver::MazeSolver;
use maze_solver::utils::grid_from_str_array;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Entry cell as ROW,COL
    #[clap(short, long, value_parser = parse_coordinate)]
    entry: Coordinate,

    /// Exit cell as ROW,COL
    #[clap(short = 'x', long, value_parser = parse_coordinate)]
    exit: Coordinate,

    /// Report the shortest path instead of the first one found
    #[clap(short, long)]
    shortest: bool,

    /// Also list every path found by the search
    #[clap(short, long)]
    all: bool,

    /// Path to the maze file (one row per line, 'o' open, 'x' wall)
    maze_file: PathBuf,
}

fn parse_coordinate(s: &str) -> Result<Coordinate, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, found '{}'", s))?;
    let row = row
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid row '{}': {}", row, e))?;
    let col = col
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid column '{}': {}", col, e))?;
    Ok(Coordinate::new(row, col))
}

fn read_maze_file(path: &PathBuf, entry: Coordinate, exit: Coordinate) -> Result<MazeSolver, Box<dyn Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    debug!("read {} maze rows from {}", lines.len(), path.display());

    let grid = grid_from_str_array(&lines)?;
    Ok(MazeSolver::new(grid, entry, exit)?)
}

fn init_logging() {
    let env = env_logger::Env::new()
        .filter("MAZE_LOG")
        .write_style("MAZE_LOG_STYLE");
    env_logger::init_from_env(env);
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let args = Args::parse();

    let mut solver = read_maze_file(&args.maze_file, args.entry, args.exit)?;
    println!("Loaded maze from {}\n", args.maze_file.display());
    println!("{}\n", solver.grid());
    println!("Entry: {}  Exit: {}\n", solver.entry(), solver.exit());

    let found = if args.shortest {
        solver.solve_shortest()
    } else {
        solver.solve()
    };
    info!("search recorded {} path(s)", solver.paths().len());

    match found {
        Some(path) => {
            let label = if args.shortest { "Shortest path" } else { "Path" };
            println!("{} ({} cells):", label, path.size());
            println!("  {}", path);
        }
        None => println!("No path found."),
    }

    if args.all {
        println!("\nAll paths ({}):", solver.paths().len());
        for (i, path) in solver.paths().iter().enumerate() {
            println!("  {:>3}: {}", i + 1, path);
        }
    }

    Ok(())
}
