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
//! Errors used by [`Matrix`][crate::matrix::Matrix].

use thiserror::Error;

use crate::matrix::Coordinate;

/// Error returned when accessing a cell that is not part of a matrix, either because it
/// is outside of the matrix's range or because the matrix's validity predicate excludes
/// it.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("{coord} out of range: ({width}, {height})")]
pub struct OutOfRange {
    /// The coordinate that was accessed.
    coord: Coordinate,
    /// Declared width of the matrix.
    width: i32,
    /// Declared height of the matrix.
    height: i32,
}

impl OutOfRange {
    pub(crate) fn new(coord: Coordinate, width: i32, height: i32) -> Self {
        Self {
            coord,
            width,
            height,
        }
    }

    /// The coordinate that was rejected.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// The `(width, height)` of the matrix that rejected the coordinate.
    pub fn range(&self) -> (i32, i32) {
        (self.width, self.height)
    }
}

/// Error returned when combining two matrices whose shapes do not line up.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("matrix shapes do not line up: {left:?} and {right:?}")]
pub struct DimensionMismatch {
    /// `(width, height)` of the left operand.
    left: (i32, i32),
    /// `(width, height)` of the right operand.
    right: (i32, i32),
}

impl DimensionMismatch {
    pub(crate) fn new(left: (i32, i32), right: (i32, i32)) -> Self {
        Self { left, right }
    }

    /// `(width, height)` of the left operand.
    pub fn left(&self) -> (i32, i32) {
        self.left
    }

    /// `(width, height)` of the right operand.
    pub fn right(&self) -> (i32, i32) {
        self.right
    }
}
