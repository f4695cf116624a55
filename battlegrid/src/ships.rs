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
//! Types used for defining ships and their placement.
use std::{convert::TryFrom, fmt, ops::RangeInclusive};

#[cfg(feature = "rng_gen")]
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::matrix::Coordinate;

pub use self::errors::ShipError;

mod errors;

/// Direction a ship extends from its origin.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// The ship covers a single row, extending towards larger columns.
    Horizontal,
    /// The ship covers a single column, extending towards larger rows.
    Vertical,
}

#[cfg(feature = "rng_gen")]
impl Distribution<Orientation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// An axis-aligned ship exactly one cell wide. Bounds are inclusive on both ends.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Ship {
    top: i32,
    left: i32,
    bottom: i32,
    right: i32,
}

impl Ship {
    /// Construct a ship from its inclusive bounds. Fails if the origin is negative, the
    /// bounds are inverted, the ship spans more than one row and more than one column, or
    /// its length does not fit in an `i32`.
    pub fn new(top: i32, left: i32, bottom: i32, right: i32) -> Result<Self, ShipError> {
        if top < 0 || left < 0 {
            Err(ShipError::NegativeOrigin { top, left })
        } else if bottom < top || right < left {
            Err(ShipError::Inverted)
        } else if bottom != top && right != left {
            Err(ShipError::NotStraight)
        } else if right - left == i32::MAX || bottom - top == i32::MAX {
            // One more cell than i32 can count.
            Err(ShipError::TooLong(i32::MAX as usize + 1))
        } else {
            Ok(Self {
                top,
                left,
                bottom,
                right,
            })
        }
    }

    /// Construct a ship of `size` cells starting at `(column, row)` and extending in the
    /// given direction.
    pub fn with_origin(
        column: i32,
        row: i32,
        size: usize,
        orientation: Orientation,
    ) -> Result<Self, ShipError> {
        let len = match i32::try_from(size) {
            Ok(0) => return Err(ShipError::Empty),
            Ok(len) => len,
            Err(_) => return Err(ShipError::TooLong(size)),
        };
        let end = |start: i32| {
            start
                .checked_add(len - 1)
                .ok_or(ShipError::TooLong(size))
        };
        match orientation {
            Orientation::Horizontal => Self::new(row, column, row, end(column)?),
            Orientation::Vertical => Self::new(row, column, end(row)?, column),
        }
    }

    /// Index of the first row covered by the ship.
    pub fn top(&self) -> i32 {
        self.top
    }

    /// Index of the first column covered by the ship.
    pub fn left(&self) -> i32 {
        self.left
    }

    /// Index of the last row covered by the ship.
    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    /// Index of the last column covered by the ship.
    pub fn right(&self) -> i32 {
        self.right
    }

    pub fn width(&self) -> i32 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top + 1
    }

    /// Number of cells covered by the ship.
    pub fn size(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Orientation of the ship. A ship of a single cell is reported as horizontal.
    pub fn orientation(&self) -> Orientation {
        if self.top == self.bottom {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Columns covered by the ship.
    pub fn column_range(&self) -> RangeInclusive<i32> {
        self.left..=self.right
    }

    /// Rows covered by the ship.
    pub fn row_range(&self) -> RangeInclusive<i32> {
        self.top..=self.bottom
    }

    /// Returns true if the two ships share at least one cell.
    pub fn overlaps(&self, other: &Ship) -> bool {
        other.right >= self.left
            && other.left <= self.right
            && other.bottom >= self.top
            && other.top <= self.bottom
    }

    /// Returns true if the cell at `(column, row)` is part of this ship.
    pub fn contains(&self, column: i32, row: i32) -> bool {
        self.column_range().contains(&column) && self.row_range().contains(&row)
    }

    /// Iterate the cells covered by this ship, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let columns = self.column_range();
        self.row_range()
            .flat_map(move |y| columns.clone().map(move |x| Coordinate::new(x, y)))
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({}, {})..=({}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
