// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use crate::{matrix::Coordinate, ships::Ship};

/// Size of a rectangular board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dimensions {
    /// Number of columns. This cooresponds to the `x` [`Coordinate`].
    columns: i32,
    /// Number of rows. This cooresponds to the `y` [`Coordinate`].
    rows: i32,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the given number of columns and rows.
    /// Panics if either is not positive or exceeds [`Coordinate::MAX`].
    pub fn new(columns: i32, rows: i32) -> Self {
        match Self::try_new(columns, rows) {
            Some(dim) => dim,
            None => panic!(
                "Dimensions must be in 1..={}, got {}x{}",
                Coordinate::MAX,
                columns,
                rows
            ),
        }
    }

    /// Create new [`Dimensions`] with the given number of columns and rows.
    /// Returns `None` if either is not positive or exceeds [`Coordinate::MAX`], which
    /// keeps every cell of the board packable.
    pub fn try_new(columns: i32, rows: i32) -> Option<Self> {
        let range = 1..=Coordinate::MAX;
        if range.contains(&columns) && range.contains(&rows) {
            Some(Self { columns, rows })
        } else {
            None
        }
    }

    /// Get the number of columns of these [`Dimensions`].
    pub fn columns(&self) -> i32 {
        self.columns
    }

    /// Get the number of rows of these [`Dimensions`].
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Total number of cells.
    pub fn total_size(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Check if the cell at `(column, row)` is on the board.
    pub fn contains(&self, column: i32, row: i32) -> bool {
        (0..self.columns).contains(&column) && (0..self.rows).contains(&row)
    }

    /// Check if every cell of the ship is on the board.
    pub fn contains_ship(&self, ship: &Ship) -> bool {
        self.contains(ship.left(), ship.top()) && self.contains(ship.right(), ship.bottom())
    }

    /// Get an iterator over rows of the board. Each row is an iterator over the
    /// coordinates of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let columns = self.columns;
        (0..self.rows).map(move |y| (0..columns).map(move |x| Coordinate::new(x, y)))
    }
}

impl Default for Dimensions {
    /// Construct the default dimensions, a 10x10 board.
    fn default() -> Self {
        Self {
            columns: 10,
            rows: 10,
        }
    }
}
