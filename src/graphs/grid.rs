//! A 2-dimensional board of square cells, like a chessboard, with 4-way
//! movement (up, down, left, right) that wraps around at the edges.

use crate::search::GraphSpec;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    path::Path,
    str::FromStr,
};
use thiserror::Error;

/// Cells holding this character cannot be entered.
pub const OBSTACLE: char = '#';

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    pub x: usize,
    pub y: usize,
}

impl Location {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Shorthand for [`Location::new`].
pub fn loc(x: usize, y: usize) -> Location {
    Location::new(x, y)
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid location {input:?}, expected \"x,y\"")]
pub struct ParseLocationError {
    input: String,
}

impl FromStr for Location {
    type Err = ParseLocationError;

    /// Parses `"x,y"`, with optional whitespace and parentheses, e.g. `"(1, 3)"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParseLocationError {
            input: s.to_string(),
        };
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (x, y) = trimmed.split_once(',').ok_or_else(error)?;
        let x = x.trim().parse().map_err(|_| error())?;
        let y = y.trim().parse().map_err(|_| error())?;
        Ok(Self { x, y })
    }
}

#[derive(Debug, Error)]
pub enum GridError {
    #[error("failed to read grid file: {0}")]
    Io(#[from] std::io::Error),
    #[error("grid has no cells")]
    Empty,
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("location {location} is outside the grid")]
    OutOfBounds { location: Location },
}

/// A rectangular grid of characters, where `rows[y][x]` is the cell at
/// `(x, y)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Build a grid from its rows, top row first. All rows must have the same
    /// number of characters.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let rows: Vec<Vec<char>> = rows
            .iter()
            .map(|row| row.as_ref().chars().collect())
            .collect();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(GridError::Empty);
        }
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(GridError::RaggedRow {
                row,
                expected: width,
                actual: cells.len(),
            });
        }
        let height = rows.len();
        Ok(Self {
            rows,
            width,
            height,
        })
    }

    /// Parse a grid from text, one row per line. Blank lines and surrounding
    /// whitespace are ignored.
    pub fn from_text(text: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Self::from_rows(&rows)
    }

    pub fn from_path(path: &Path) -> Result<Self, GridError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, location: Location) -> bool {
        location.x < self.width && location.y < self.height
    }

    pub fn cell(&self, location: Location) -> Result<char, GridError> {
        self.rows
            .get(location.y)
            .and_then(|row| row.get(location.x))
            .copied()
            .ok_or(GridError::OutOfBounds { location })
    }

    pub fn is_obstacle(&self, location: Location) -> bool {
        self.cell(location).map_or(true, |cell| cell == OBSTACLE)
    }

    /// The cells above, below, left of and right of `location`, in that
    /// order, wrapping around the edges.
    pub fn adjacent(&self, location: Location) -> [Location; 4] {
        let Location { x, y } = location;
        let (width, height) = (self.width, self.height);
        [
            loc(x, (y + height - 1) % height),
            loc(x, (y + 1) % height),
            loc((x + width - 1) % width, y),
            loc((x + 1) % width, y),
        ]
    }

    /// The Manhattan distance between `a` and `b`, going around the edges
    /// whenever that is shorter.
    pub fn distance(&self, a: Location, b: Location) -> usize {
        let wrapped = |from: usize, to: usize, size: usize| {
            let forward = (to + size - from % size) % size;
            forward.min(size - forward)
        };
        wrapped(a.x, b.x, self.width) + wrapped(a.y, b.y, self.height)
    }

    /// Every location whose cell satisfies `predicate`, row by row.
    pub fn locations_where(&self, predicate: impl Fn(char) -> bool) -> Vec<Location> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, cell)| predicate(**cell))
                    .map(move |(x, _)| loc(x, y))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row.iter().collect::<String>())?;
        }
        Ok(())
    }
}

/// A [`Grid`] seen as a graph: moving into any open cell costs 1, obstacles
/// cannot be entered, and the heuristic is the wraparound Manhattan distance,
/// which is both admissible and consistent.
#[derive(Debug, Clone, Copy)]
pub struct GridGraph<'a> {
    grid: &'a Grid,
}

impl<'a> GridGraph<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }
}

impl GraphSpec<Location> for GridGraph<'_> {
    fn neighbors(&self, node: &Location) -> Vec<Location> {
        self.grid.adjacent(*node).to_vec()
    }

    fn cost(&self, _a: &Location, b: &Location) -> f64 {
        if self.grid.is_obstacle(*b) {
            f64::INFINITY
        } else {
            1.
        }
    }

    fn heuristic(&self, a: &Location, b: &Location) -> f64 {
        self.grid.distance(*a, *b) as f64
    }
}
