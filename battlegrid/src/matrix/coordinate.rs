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
use std::fmt;

/// The coordinates of a cell in a [`Matrix`][crate::matrix::Matrix] or on a board.
///
/// Coordinates are signed so that boundary arithmetic may step outside of a board
/// without wrapping. A coordinate can be packed into a single `i32` key, with `x` in
/// the high half and `y` in the low half. Packing only round-trips for coordinates
/// whose axes both lie in `[`[`Coordinate::MIN`]`, `[`Coordinate::MAX`]`]`.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Horizontal position (the column).
    pub x: i32,
    /// Vertical position (the row).
    pub y: i32,
}

impl Coordinate {
    /// Smallest value of either axis that survives packing.
    pub const MIN: i32 = i16::MIN as i32;
    /// Largest value of either axis that survives packing.
    pub const MAX: i32 = i16::MAX as i32;

    /// Construct a [`Coordinate`] from the given `x` and `y`.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Pack this coordinate into a single integer key.
    ///
    /// Both axes must be within [`Coordinate::MIN`]..=[`Coordinate::MAX`]. This is only
    /// checked in debug builds.
    pub fn packed(self) -> i32 {
        debug_assert!(
            Self::packable(self.x) && Self::packable(self.y),
            "{:?} cannot be packed",
            self
        );
        let high = (self.x as i16 as u16 as u32) << 16;
        let low = self.y as i16 as u16 as u32;
        (high | low) as i32
    }

    /// Unpack a key produced by [`Coordinate::packed`].
    pub fn from_packed(packed: i32) -> Self {
        Self {
            // Arithmetic shift keeps the sign of the high half.
            x: packed >> 16,
            y: packed as i16 as i32,
        }
    }

    fn packable(v: i32) -> bool {
        (Self::MIN..=Self::MAX).contains(&v)
    }
}

impl From<(i32, i32)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(x, y)` pair.
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (i32, i32) {
    /// Convert the [`Coordinate`] into an `(x, y)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
