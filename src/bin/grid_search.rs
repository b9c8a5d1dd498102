use clap::Parser;
use pathsearch::{
    graphs::{Grid, GridError, GridGraph, Location},
    logging::{init_logging, Verbosity},
    search::{SearchEngineName, SearchError},
};
use std::{path::PathBuf, process::ExitCode};
use thiserror::Error;
use tracing::{error, info};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(version)]
/// Find shortest paths on a character grid. Cells marked `#` are obstacles,
/// every other cell costs 1 to enter, and movement wraps around the edges.
struct Cli {
    #[arg(help = "The grid file, one row of cells per line")]
    grid: PathBuf,
    #[arg(
        help = "The start location as x,y [default: the only lowercase letter \
        in the grid]",
        short = 's',
        long = "start",
        id = "START"
    )]
    start: Option<Location>,
    #[arg(
        help = "A goal location as x,y, may be repeated [default: every X in \
        the grid]",
        short = 'g',
        long = "goal",
        id = "GOAL"
    )]
    goals: Vec<Location>,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        default_value_t = SearchEngineName::AStarMultiPath
    )]
    search_engine_name: SearchEngineName,
    #[arg(
        value_enum,
        help = "How to print the results",
        short = 'f',
        long = "format",
        id = "FORMAT",
        default_value_t = OutputFormat::Text
    )]
    format: OutputFormat,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

#[derive(Debug, Error)]
enum GridSearchError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("expected exactly one lowercase letter to start from, found {0}")]
    AmbiguousStart(usize),
    #[error("{role} {location} is outside the {width}x{height} grid")]
    OutsideGrid {
        role: &'static str,
        location: Location,
        width: usize,
        height: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbosity, cli.colour);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), GridSearchError> {
    let grid = Grid::from_path(&cli.grid)?;
    info!(width = grid.width(), height = grid.height(), "loaded grid");

    let (start, goals) = resolve_endpoints(&grid, cli.start, &cli.goals)?;
    info!(%start, goals = goals.len(), engine = %cli.search_engine_name, "searching");

    let graph = GridGraph::new(&grid);
    let report = cli.search_engine_name.search(&graph, start, &goals)?;

    match cli.format {
        OutputFormat::Text => print!("{}", report),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

/// Pick the start and goals of a search, falling back to the grid's markings:
/// the only lowercase letter is the start and every `X` is a goal.
fn resolve_endpoints(
    grid: &Grid,
    start: Option<Location>,
    goals: &[Location],
) -> Result<(Location, Vec<Location>), GridSearchError> {
    let start = match start {
        Some(start) => start,
        None => {
            let candidates = grid.locations_where(|c| c.is_ascii_lowercase());
            match candidates.as_slice() {
                [start] => *start,
                _ => return Err(GridSearchError::AmbiguousStart(candidates.len())),
            }
        }
    };
    let goals = if goals.is_empty() {
        grid.locations_where(|c| c == 'X')
    } else {
        goals.to_vec()
    };

    let locations =
        std::iter::once(("start", &start)).chain(goals.iter().map(|goal| ("goal", goal)));
    for (role, location) in locations {
        if !grid.contains(*location) {
            return Err(GridSearchError::OutsideGrid {
                role,
                location: *location,
                width: grid.width(),
                height: grid.height(),
            });
        }
    }
    Ok((start, goals))
}
