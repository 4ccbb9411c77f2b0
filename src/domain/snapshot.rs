//! Plain-text grid snapshots.
//!
//! One line per row, cells as `0`/`1` separated by single spaces. A file is
//! accepted only if every token is `0` or `1` and every row has the same
//! length; anything else rejects the whole file.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use super::{Cell, Grid};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("snapshot contains no rows")]
    Empty,

    #[error("line {line}, column {column}: expected `0` or `1`, found `{token}`")]
    InvalidToken {
        line: usize,
        column: usize,
        token: String,
    },

    #[error("line {line}: expected {expected} cells, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let mut tokens = row.iter().map(|cell| cell.as_token());
            if let Some(first) = tokens.next() {
                f.write_str(first)?;
            }
            for token in tokens {
                write!(f, " {}", token)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = SnapshotError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();

        // Blank lines carry no cells; a trailing newline must not add a row
        let rows = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        for (idx, line) in rows {
            let line_no = idx + 1;
            let row_start = cells.len();

            for (column, token) in line.split_whitespace().enumerate() {
                let cell = Cell::from_token(token).ok_or_else(|| SnapshotError::InvalidToken {
                    line: line_no,
                    column: column + 1,
                    token: token.to_owned(),
                })?;
                cells.push(cell);
            }

            let found = cells.len() - row_start;
            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(SnapshotError::RaggedRow { line: line_no, expected, found });
            }
            height += 1;
        }

        match width {
            Some(width) => Ok(Grid::from_cells(width, height, cells)),
            None => Err(SnapshotError::Empty),
        }
    }
}

/// Write `grid` to `path`, replacing any existing file
pub fn save(grid: &Grid, path: &Path) -> Result<(), SnapshotError> {
    fs::write(path, grid.to_string())?;
    Ok(())
}

/// Read a grid from `path`. A missing file is `Ok(None)`, not an error.
pub fn load(path: &Path) -> Result<Option<Grid>, SnapshotError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    text.parse().map(Some)
}
