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
use thiserror::Error;

/// Reason a ship's geometry was rejected.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ShipError {
    /// The top-left corner of the ship lies before the first row or column.
    #[error("ship origin must not be negative, got top {top} and left {left}")]
    NegativeOrigin { top: i32, left: i32 },
    /// The last row or column precedes the first one.
    #[error("ship bounds are inverted")]
    Inverted,
    /// The ship spans multiple rows and multiple columns.
    #[error("ship must cover a single row or a single column")]
    NotStraight,
    /// A ship must cover at least one cell.
    #[error("ship must have a length of at least 1")]
    Empty,
    /// The requested length does not fit in the coordinate space.
    #[error("ship length {0} is too long")]
    TooLong(usize),
}
