//! Connect-K analysis CLI
//!
//! Builds the search tree for a configuration, reports its summary, and
//! optionally replays a move list showing the engine's answer at each step.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connectk::{BoardState, Engine, EngineConfig, SearchMode};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "connectk", about = "Solve connect-K positions with minimax search")]
struct Args {
    /// TOML configuration file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    rows: Option<usize>,

    #[arg(long)]
    cols: Option<usize>,

    /// Pieces in a row needed to win
    #[arg(long)]
    run_length: Option<usize>,

    /// plain, pruned or heuristic (also a, b, c)
    #[arg(long)]
    mode: Option<SearchMode>,

    /// Cutoff depth for heuristic mode
    #[arg(long)]
    depth: Option<u32>,

    /// Log every table insertion
    #[arg(long)]
    diagnostics: bool,

    /// Comma-separated columns to replay from the empty board
    #[arg(long, value_delimiter = ',')]
    moves: Vec<usize>,

    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn load_config(args: &Args) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::default(),
    };

    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.cols = cols;
    }
    if let Some(run_length) = args.run_length {
        config.run_length = run_length;
    }
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(depth) = args.depth {
        config.depth_limit = depth;
    }
    config.diagnostics |= args.diagnostics;

    config.validate()?;
    Ok(config)
}

fn report(engine: &mut Engine, state: &BoardState) {
    let result = engine.evaluate(state);
    println!("\n{}", state.to_grid_string());
    if engine.was_freshly_expanded() {
        println!("This is a state that was previously pruned; re-running alpha beta from here.");
    }
    let column = result
        .best_column
        .map_or_else(|| "none".to_string(), |c| c.to_string());
    println!("Minimax value for this state: {}, optimal move: {}", result.value, column);
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = load_config(&args)?;
    info!(
        rows = config.rows,
        cols = config.cols,
        run_length = config.run_length,
        mode = %config.mode,
        "building search tree"
    );

    let mut engine = Engine::new(config)?;
    engine.build_search_tree();

    println!("Transposition table has {} states.", engine.table_size());
    if engine.config().mode.prunes() {
        println!("The tree was pruned {} times.", engine.prune_count());
    }
    let root = engine.root().clone();
    println!("{}", engine.predicted_outcome(&root).describe());

    let mut state = root;
    if args.moves.is_empty() {
        return Ok(());
    }
    report(&mut engine, &state);
    for col in args.moves {
        if state.is_terminal() {
            break;
        }
        println!("{} plays column {}", state.to_move().name(), col);
        state = state
            .apply_move(col)
            .with_context(|| format!("move {} after {} moves", col, state.moves_made()))?;
        report(&mut engine, &state);
    }

    match state.winner() {
        Some(player) => println!("\nGame Over! The winner is {}.", player.name()),
        None if state.is_terminal() => println!("\nGame Over! It is a tie."),
        None => {}
    }
    Ok(())
}
