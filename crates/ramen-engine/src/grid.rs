//! Process-map grids.
//!
//! A [`ProcessGrid`] is the mesh of two evenly spaced axes (velocity on
//! `x`, a second process variable such as laser power on `y`). Fields over
//! the grid are stored row-major with shape `(ny, nx)`: row `i` holds
//! `y[i]`, column `j` holds `x[j]`.

use ramen_core::DomainError;
use serde::{Deserialize, Serialize};

const MODEL: &str = "process grid";

/// `n` evenly spaced values from `start` to `stop`, both included.
///
/// A single point is `[start]`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Two-axis mesh of process conditions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessGrid {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl ProcessGrid {
    /// Mesh of `num_points.0` values over `x_bounds` by `num_points.1`
    /// values over `y_bounds`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if either axis has no points or a bound is
    /// not finite.
    pub fn new(
        x_bounds: (f64, f64),
        y_bounds: (f64, f64),
        num_points: (usize, usize),
    ) -> Result<Self, DomainError> {
        for (quantity, (lo, hi)) in [("x bounds", x_bounds), ("y bounds", y_bounds)] {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(DomainError::new(
                    MODEL,
                    quantity,
                    format!("must be finite, got ({lo}, {hi})"),
                ));
            }
        }
        let (nx, ny) = num_points;
        if nx == 0 || ny == 0 {
            return Err(DomainError::new(
                MODEL,
                "grid points",
                format!("each axis needs at least one point, got {nx} x {ny}"),
            ));
        }
        Ok(Self {
            x: linspace(x_bounds.0, x_bounds.1, nx),
            y: linspace(y_bounds.0, y_bounds.1, ny),
        })
    }

    /// Values along the x axis.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Values along the y axis.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// `(ny, nx)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.y.len(), self.x.len())
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.x.len() * self.y.len()
    }

    /// Always false for a constructed grid.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(x, y)` of every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.y
            .iter()
            .flat_map(move |&y| self.x.iter().map(move |&x| (x, y)))
    }
}

/// Lamellar spacing over a [`ProcessGrid`].
///
/// Cells where the spacing model rejected its input hold `NaN` and are
/// counted in [`invalid_cells`](Self::invalid_cells).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpacingMap {
    shape: (usize, usize),
    values: Vec<f64>,
    invalid_cells: usize,
}

impl SpacingMap {
    pub(crate) fn new(shape: (usize, usize), values: Vec<f64>) -> Self {
        let invalid_cells = values.iter().filter(|v| v.is_nan()).count();
        Self {
            shape,
            values,
            invalid_cells,
        }
    }

    /// `(ny, nx)`.
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    /// Row-major spacing values (m).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Spacing at `row` (y index) and `col` (x index).
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        let (ny, nx) = self.shape;
        if row >= ny || col >= nx {
            return None;
        }
        self.values.get(row * nx + col).copied()
    }

    /// Number of cells the model could not evaluate.
    pub fn invalid_cells(&self) -> usize {
        self.invalid_cells
    }

    /// Smallest and largest valid spacing, if any cell is valid.
    pub fn range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
