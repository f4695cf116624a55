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
//! Rules engine for the classic two-grid game of Battleship.
//!
//! The crate is built bottom up:
//!
//! * [`matrix`] provides bounded 2-D storage, dense or sparse, plus packed coordinates.
//! * [`ships`] defines straight ships and their geometry.
//! * [`board`] validates fleet layouts and resolves shots on a [`board::Grid`].
//! * [`ai`] picks random legal moves for a computer player.
//! * [`game`] ties several grids together.
//!
//! Random layouts and the computer player require the `rng_gen` feature, which is on by
//! default.

#[cfg(feature = "rng_gen")]
pub mod ai;
pub mod board;
pub mod game;
pub mod matrix;
pub mod ships;
