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
use std::ops::Not;

use crate::matrix::Matrix;

/// A matrix of flags.
pub type BooleanMatrix = Matrix<bool>;

impl Matrix<bool> {
    /// Number of valid cells that are set.
    pub fn count_true(&self) -> usize {
        self.iter().filter(|&&v| v).count()
    }

    /// Returns true if every valid cell is set.
    pub fn all_true(&self) -> bool {
        self.iter().all(|&v| v)
    }

    /// Render the matrix compactly, using `T` and `F` for the cells.
    pub fn to_flag_string(&self) -> String {
        self.map(|&v| if v { 'T' } else { 'F' }).to_string()
    }
}

impl Not for &Matrix<bool> {
    type Output = Matrix<bool>;

    fn not(self) -> Matrix<bool> {
        self.map(|v| !v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_inverts() {
        let m = BooleanMatrix::from_fn(3, 2, |x, y| x == y);
        assert_eq!(m.count_true(), 2);
        assert!(!m.all_true());
        let inverted = !&m;
        assert_eq!(inverted.count_true(), 4);
        assert_eq!(m.to_flag_string(), "T F F\nF T F");
        assert!(BooleanMatrix::new(2, 2, true).all_true());
    }
}
