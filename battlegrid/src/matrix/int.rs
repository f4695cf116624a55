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
//! Integer specific matrix operations.
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};

use crate::matrix::{DimensionMismatch, Matrix};

/// A matrix of integers.
pub type IntMatrix = Matrix<i32>;

impl Matrix<i32> {
    /// Sum of all valid cells. Overflow wraps around.
    pub fn sum(&self) -> i32 {
        self.iter().fold(0, |acc, &v| acc.wrapping_add(v))
    }

    /// Matrix product of `self` and `other`. Requires the width of `self` to equal the
    /// height of `other`. Cells that are not valid count as zero. Overflow wraps around.
    pub fn mul_matrix(&self, other: &IntMatrix) -> Result<IntMatrix, DimensionMismatch> {
        if self.width() != other.height() {
            return Err(DimensionMismatch::new(
                (self.width(), self.height()),
                (other.width(), other.height()),
            ));
        }
        let common = self.width();
        Ok(Matrix::from_fn(other.width(), self.height(), |x, y| {
            (0..common)
                .map(|n| {
                    let left = self.get(n, y).map_or(0, |v| *v);
                    let right = other.get(x, n).map_or(0, |v| *v);
                    left.wrapping_mul(right)
                })
                .fold(0, i32::wrapping_add)
        }))
    }
}

/// Scalar operators apply to every valid cell and wrap on overflow. Division and
/// remainder by zero panic.
macro_rules! scalar_ops {
    ($($op:ident :: $method:ident, $assign:ident :: $assign_method:ident => $wrapping:ident;)*) => {$(
        impl $op<i32> for &Matrix<i32> {
            type Output = Matrix<i32>;

            fn $method(self, rhs: i32) -> Matrix<i32> {
                self.map(|v| v.$wrapping(rhs))
            }
        }

        impl $op<i32> for Matrix<i32> {
            type Output = Matrix<i32>;

            fn $method(mut self, rhs: i32) -> Matrix<i32> {
                self.$assign_method(rhs);
                self
            }
        }

        impl $assign<i32> for Matrix<i32> {
            fn $assign_method(&mut self, rhs: i32) {
                for v in self.iter_mut() {
                    *v = v.$wrapping(rhs);
                }
            }
        }
    )*};
}

scalar_ops! {
    Add::add, AddAssign::add_assign => wrapping_add;
    Sub::sub, SubAssign::sub_assign => wrapping_sub;
    Mul::mul, MulAssign::mul_assign => wrapping_mul;
    Div::div, DivAssign::div_assign => wrapping_div;
    Rem::rem, RemAssign::rem_assign => wrapping_rem;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_valid_cells_only() {
        let m = IntMatrix::sparse(3, 3, |x, y| x == y, |x, _| x + 1);
        assert_eq!(m.sum(), 6);
        assert_eq!(IntMatrix::new(4, 5, 2).sum(), 40);
    }

    #[test]
    fn scalar_arithmetic() {
        let m = IntMatrix::from_fn(2, 2, |x, y| x + 2 * y);
        assert_eq!((&m + 1).iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!((&m * 3).iter().copied().collect::<Vec<_>>(), vec![0, 3, 6, 9]);
        assert_eq!((&m - 1)[(0, 0)], -1);
        assert_eq!((&m / 2)[(1, 1)], 1);
        assert_eq!((&m % 2)[(1, 1)], 1);
        // The borrowed forms leave the source untouched.
        assert_eq!(m.sum(), 6);

        let mut owned = m.clone() + 10;
        owned -= 10;
        owned *= 2;
        owned /= 2;
        owned %= 100;
        assert_eq!(owned, m);
    }

    #[test]
    fn arithmetic_wraps_on_overflow() {
        let max = IntMatrix::new(1, 1, i32::MAX);
        assert_eq!((&max + 1)[(0, 0)], i32::MIN);
        assert_eq!((&max * 2)[(0, 0)], -2);
        assert_eq!((&(&max + 1) - 1)[(0, 0)], i32::MAX);
        assert_eq!((IntMatrix::new(1, 1, i32::MIN) / -1)[(0, 0)], i32::MIN);
        assert_eq!((IntMatrix::new(1, 1, i32::MIN) % -1)[(0, 0)], 0);

        let mut owned = max.clone();
        owned += 1;
        assert_eq!(owned[(0, 0)], i32::MIN);

        assert_eq!(IntMatrix::new(2, 1, i32::MAX).sum(), -2);

        let product = IntMatrix::new(2, 1, i32::MAX)
            .mul_matrix(&IntMatrix::new(1, 2, 2))
            .unwrap();
        assert_eq!(product[(0, 0)], -4);
    }

    #[test]
    fn matrix_product() {
        // 2 wide, 3 high times 3 wide, 2 high.
        let left = IntMatrix::from_fn(2, 3, |x, y| x + y);
        let right = IntMatrix::from_fn(3, 2, |x, y| x * y + 1);
        let product = left.mul_matrix(&right).unwrap();
        assert_eq!(product.width(), 3);
        assert_eq!(product.height(), 3);
        // Row 1 of left is [1, 2]; column 2 of right is [1, 3].
        assert_eq!(product[(2, 1)], 1 * 1 + 2 * 3);
    }

    #[test]
    fn matrix_product_requires_matching_shapes() {
        let left = IntMatrix::new(2, 2, 1);
        let right = IntMatrix::new(2, 3, 1);
        let err = left.mul_matrix(&right).unwrap_err();
        assert_eq!(err.left(), (2, 2));
        assert_eq!(err.right(), (2, 3));
    }
}
