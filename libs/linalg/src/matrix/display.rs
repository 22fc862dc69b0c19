//! Text rendering of matrices.

use crate::matrix::Matrix;
use std::fmt;

/// The number of decimals shown when printing a matrix.
pub const DISPLAY_DECIMALS: usize = 4;

/// A matrix rendered with a fixed number of decimals.
struct Rendered<'a> {
    matrix: &'a Matrix,
    decimals: usize,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = self.decimals;
        let width = self
            .matrix
            .data()
            .iter()
            .map(|entry| format!("{entry:.decimals$}").len())
            .fold(decimals + 2, usize::max);
        for (index, row) in self.matrix.data().chunks(self.matrix.columns()).enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "[ ")?;
            for entry in row {
                write!(f, "{entry:>width$.decimals$} ")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl Matrix {
    /// Renders the matrix one bracketed row per line, entries right aligned with `decimals` decimals.
    ///
    /// Every entry takes the width of the widest one, and at least `decimals + 2` characters.
    pub fn render(&self, decimals: usize) -> String {
        Rendered { matrix: self, decimals }.to_string()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Rendered { matrix: self, decimals: DISPLAY_DECIMALS }, f)
    }
}
