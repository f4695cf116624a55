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
//! Bounded two-dimensional storage.
//!
//! A single [`Matrix`] type covers both dense matrices, where every coordinate in
//! `[0, width) x [0, height)` holds a value, and sparse matrices, where a validity
//! predicate supplied at construction decides which of those coordinates exist. Every
//! operation (access, iteration, mapping, comparison) works the same way on both and
//! only ever observes valid cells.
//!
//! [`IntMatrix`] and [`BooleanMatrix`] are aliases which add element specific
//! operations on top of the shared storage.

use std::{
    fmt,
    ops::{Index, IndexMut},
    slice,
};

pub use self::{
    boolean::BooleanMatrix,
    coordinate::Coordinate,
    errors::{DimensionMismatch, OutOfRange},
    int::IntMatrix,
};

mod boolean;
mod coordinate;
mod errors;
mod int;

/// A bounded 2-D container. Cells are stored in row-major order.
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    /// Declared width. Valid `x` coordinates are in `[0, width)`.
    width: i32,
    /// Declared height. Valid `y` coordinates are in `[0, height)`.
    height: i32,
    /// One slot per coordinate in range. `None` marks a cell excluded by the validity
    /// predicate; dense matrices never contain `None`.
    cells: Box<[Option<T>]>,
}

impl<T> Matrix<T> {
    /// Create a dense matrix, initializing each cell with `init(x, y)`.
    /// Panics if `width` or `height` is negative or if `width * height` overflows.
    pub fn from_fn<F>(width: i32, height: i32, init: F) -> Self
    where
        F: FnMut(i32, i32) -> T,
    {
        Self::sparse(width, height, |_, _| true, init)
    }

    /// Create a sparse matrix. Only the coordinates for which `validator(x, y)` returns
    /// true are part of the matrix; each of those is initialized with `init(x, y)`.
    /// Panics if `width` or `height` is negative or if `width * height` overflows.
    pub fn sparse<V, F>(width: i32, height: i32, mut validator: V, mut init: F) -> Self
    where
        V: FnMut(i32, i32) -> bool,
        F: FnMut(i32, i32) -> T,
    {
        assert!(
            width >= 0 && height >= 0,
            "matrix dimensions must not be negative, got {}x{}",
            width,
            height
        );
        assert!(
            (width as usize).checked_mul(height as usize).is_some(),
            "matrix too large: {}x{}",
            width,
            height
        );
        let cells = (0..height)
            .flat_map(move |y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| {
                if validator(x, y) {
                    Some(init(x, y))
                } else {
                    None
                }
            })
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// Declared width of the matrix. For sparse matrices this is an upper bound on the
    /// valid `x` coordinates.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Declared height of the matrix. For sparse matrices this is an upper bound on the
    /// valid `y` coordinates.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns true if `(x, y)` is a cell of this matrix. Never fails.
    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        self.linearize(x, y)
            .map_or(false, |idx| self.cells[idx].is_some())
    }

    /// Number of valid cells.
    pub fn valid_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the value at `(x, y)`.
    pub fn get(&self, x: i32, y: i32) -> Result<&T, OutOfRange> {
        self.linearize(x, y)
            .and_then(|idx| self.cells[idx].as_ref())
            .ok_or_else(|| self.out_of_range(x, y))
    }

    /// Get a mutable reference to the value at `(x, y)`.
    pub fn get_mut(&mut self, x: i32, y: i32) -> Result<&mut T, OutOfRange> {
        let err = self.out_of_range(x, y);
        match self.linearize(x, y) {
            Some(idx) => self.cells[idx].as_mut().ok_or(err),
            None => Err(err),
        }
    }

    /// Replace the value at `(x, y)`.
    pub fn set(&mut self, x: i32, y: i32, value: T) -> Result<(), OutOfRange> {
        *self.get_mut(x, y)? = value;
        Ok(())
    }

    /// Set every valid cell to a clone of `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for cell in self.cells.iter_mut().flatten() {
            *cell = value.clone();
        }
    }

    /// Set every valid cell to `setter(x, y)`.
    pub fn fill_with<F>(&mut self, mut setter: F)
    where
        F: FnMut(i32, i32) -> T,
    {
        let width = self.width;
        for (idx, cell) in self.cells.iter_mut().enumerate() {
            if let Some(cell) = cell {
                let coord = un_linearize(width, idx);
                *cell = setter(coord.x, coord.y);
            }
        }
    }

    /// Iterate the values of all valid cells in row-major order. Each call starts again
    /// from the first cell.
    pub fn iter(&self) -> Iter<T> {
        Iter {
            cells: self.cells.iter(),
        }
    }

    /// Mutably iterate the values of all valid cells in row-major order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.cells.iter_mut().flatten()
    }

    /// Iterate the coordinates of all valid cells in row-major order.
    pub fn indices(&self) -> impl '_ + Iterator<Item = Coordinate> {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_some())
            .map(move |(idx, _)| un_linearize(width, idx))
    }

    /// Iterate the coordinates and values of all valid cells in row-major order.
    pub fn iter_cells(&self) -> impl '_ + Iterator<Item = (Coordinate, &T)> {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(idx, cell)| {
                cell.as_ref().map(|value| (un_linearize(width, idx), value))
            })
    }

    /// Get an iterator over the rows of the matrix. Each row iterates every `x` in range,
    /// yielding `None` for cells that are not valid.
    pub fn rows(&self) -> impl '_ + Iterator<Item = impl '_ + Iterator<Item = Option<&T>>> {
        let width = self.width as usize;
        self.cells
            .chunks(width.max(1))
            .take(self.height as usize)
            .map(|row| row.iter().map(Option::as_ref))
    }

    /// Build a new matrix with the same shape and validity, transforming each value.
    /// The source matrix is left untouched.
    pub fn map<R, F>(&self, mut transform: F) -> Matrix<R>
    where
        F: FnMut(&T) -> R,
    {
        Matrix {
            width: self.width,
            height: self.height,
            cells: self
                .cells
                .iter()
                .map(|cell| cell.as_ref().map(&mut transform))
                .collect(),
        }
    }

    /// Compare the content of two matrices. Every coordinate in the union of both
    /// declared ranges is checked: a cell that is valid in only one of the matrices is a
    /// mismatch and cells valid in both must hold equal values.
    pub fn content_equals<U>(&self, other: &Matrix<U>) -> bool
    where
        T: PartialEq<U>,
    {
        let width = self.width.max(other.width);
        let height = self.height.max(other.height);
        (0..height).all(|y| {
            (0..width).all(|x| match (self.get(x, y), other.get(x, y)) {
                (Ok(mine), Ok(theirs)) => mine == theirs,
                (Err(_), Err(_)) => true,
                _ => false,
            })
        })
    }

    fn linearize(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width && y >= 0 && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    fn out_of_range(&self, x: i32, y: i32) -> OutOfRange {
        OutOfRange::new(Coordinate::new(x, y), self.width, self.height)
    }
}

impl<T: Clone> Matrix<T> {
    /// Create a dense matrix with every cell set to `value`.
    pub fn new(width: i32, height: i32, value: T) -> Self {
        Self::from_fn(width, height, |_, _| value.clone())
    }
}

impl<T: Default> Matrix<T> {
    /// Create a dense matrix with every cell set to the default value of `T`.
    pub fn with_default(width: i32, height: i32) -> Self {
        Self::from_fn(width, height, |_, _| T::default())
    }
}

/// Convert a row-major index back into a coordinate.
fn un_linearize(width: i32, idx: usize) -> Coordinate {
    let width = width as usize;
    Coordinate::new((idx % width) as i32, (idx / width) as i32)
}

impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.content_equals(other)
    }
}

impl<T: Eq> Eq for Matrix<T> {}

impl<T> Index<(i32, i32)> for Matrix<T> {
    type Output = T;

    fn index(&self, (x, y): (i32, i32)) -> &T {
        match self.get(x, y) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<(i32, i32)> for Matrix<T> {
    fn index_mut(&mut self, (x, y): (i32, i32)) -> &mut T {
        match self.get_mut(x, y) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> Index<Coordinate> for Matrix<T> {
    type Output = T;

    fn index(&self, coord: Coordinate) -> &T {
        &self[(coord.x, coord.y)]
    }
}

impl<T> IndexMut<Coordinate> for Matrix<T> {
    fn index_mut(&mut self, coord: Coordinate) -> &mut T {
        &mut self[(coord.x, coord.y)]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    /// Print one line per row with the cells right aligned in columns. Invalid cells are
    /// left blank.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let strings = self.map(ToString::to_string);
        let col_width = strings.iter().map(String::len).max().unwrap_or(0);
        for (y, row) in strings.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, cell) in row.enumerate() {
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(
                    f,
                    "{:>width$}",
                    cell.map_or("", String::as_str),
                    width = col_width
                )?;
            }
        }
        Ok(())
    }
}

/// Iterator over the values of the valid cells of a [`Matrix`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    cells: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.cells.by_ref().find_map(Option::as_ref)
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard() -> Matrix<i32> {
        Matrix::sparse(4, 3, |x, y| (x + y) % 2 == 0, |x, y| x * 10 + y)
    }

    #[test]
    fn dense_access() {
        let mut m = Matrix::new(3, 2, 0);
        assert_eq!(m.width(), 3);
        assert_eq!(m.height(), 2);
        m.set(2, 1, 7).unwrap();
        assert_eq!(*m.get(2, 1).unwrap(), 7);
        assert_eq!(m[(2, 1)], 7);
        assert_eq!(m[Coordinate::new(0, 0)], 0);
    }

    #[test]
    fn out_of_range_access_fails() {
        let mut m = Matrix::new(3, 2, 0);
        for &(x, y) in &[(-1, 0), (0, -1), (3, 0), (0, 2), (i32::MIN, i32::MAX)] {
            assert!(!m.is_valid(x, y));
            let err = m.get(x, y).unwrap_err();
            assert_eq!(err.coord(), Coordinate::new(x, y));
            assert_eq!(err.range(), (3, 2));
            assert!(m.set(x, y, 1).is_err());
        }
        assert!(m.iter().all(|&v| v == 0));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_out_of_range_panics() {
        let m = Matrix::new(2, 2, 0);
        let _value: i32 = m[(2, 0)];
    }

    #[test]
    fn sparse_rejects_excluded_cells() {
        let mut m = checkerboard();
        assert!(m.is_valid(0, 0));
        assert!(!m.is_valid(1, 0));
        assert!(m.get(1, 0).is_err());
        assert!(m.set(1, 0, 5).is_err());
        assert_eq!(*m.get(1, 1).unwrap(), 11);
    }

    #[test]
    fn iteration_is_row_major() {
        let m = Matrix::from_fn(3, 2, |x, y| (x, y));
        let seen: Vec<_> = m.iter().copied().collect();
        assert_eq!(seen, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
        let indices: Vec<_> = m.indices().map(|c| (c.x, c.y)).collect();
        assert_eq!(indices, seen);
    }

    #[test]
    fn iteration_visits_every_dense_cell() {
        let m = Matrix::new(7, 5, 'x');
        assert_eq!(m.iter().count(), 35);
        assert_eq!(m.valid_count(), 35);
        // A fresh iterator restarts from the beginning.
        assert_eq!((&m).into_iter().count(), 35);
    }

    #[test]
    fn iteration_skips_invalid_sparse_cells() {
        let m = checkerboard();
        let expected: Vec<_> = (0..3)
            .flat_map(|y| (0..4).map(move |x| (x, y)))
            .filter(|&(x, y)| m.is_valid(x, y))
            .map(|(x, y)| x * 10 + y)
            .collect();
        assert_eq!(m.iter().copied().collect::<Vec<_>>(), expected);
        assert_eq!(m.valid_count(), 6);
        let cells: Vec<_> = m.iter_cells().map(|(c, &v)| (c.x, c.y, v)).collect();
        assert_eq!(cells[0], (0, 0, 0));
        assert_eq!(cells[1], (2, 0, 20));
        assert_eq!(cells[2], (1, 1, 11));
    }

    #[test]
    fn copies_are_independent() {
        let original = checkerboard();
        let mut copy = original.clone();
        assert!(copy.content_equals(&original));
        copy.set(0, 0, 99).unwrap();
        assert_eq!(original[(0, 0)], 0);
        assert!(!copy.content_equals(&original));
        assert!(!copy.is_valid(1, 0));
    }

    #[test]
    fn map_keeps_shape_and_source() {
        let source = checkerboard();
        let mapped = source.map(|v| v.to_string());
        assert_eq!(mapped.width(), 4);
        assert_eq!(mapped.height(), 3);
        assert!(!mapped.is_valid(1, 0));
        assert_eq!(mapped[(2, 2)], "22");
        assert_eq!(source[(2, 2)], 22);
    }

    #[test]
    fn content_equality_uses_union_of_valid_cells() {
        let dense = Matrix::new(2, 2, 1);
        let sparse = Matrix::sparse(2, 2, |x, _| x == 0, |_, _| 1);
        assert!(!dense.content_equals(&sparse));
        assert!(!sparse.content_equals(&dense));

        let wider = Matrix::sparse(3, 2, |x, _| x < 2, |_, _| 1);
        assert!(dense.content_equals(&wider));
        assert_eq!(dense, wider);

        let other_values = Matrix::new(2, 2, 2);
        assert_ne!(dense, other_values);
    }

    #[test]
    fn fill_only_touches_valid_cells() {
        let mut m = checkerboard();
        m.fill(3);
        assert!(m.iter().all(|&v| v == 3));
        m.fill_with(|x, y| x - y);
        assert_eq!(m[(3, 1)], 2);
        assert!(m.get(1, 0).is_err());
    }

    #[test]
    fn rows_include_gaps() {
        let m = checkerboard();
        let first: Vec<_> = m.rows().next().unwrap().map(|c| c.copied()).collect();
        assert_eq!(first, vec![Some(0), None, Some(20), None]);
        assert_eq!(m.rows().count(), 3);
    }

    #[test]
    fn display_aligns_columns() {
        let m = Matrix::from_fn(3, 2, |x, y| x * 10 + y);
        assert_eq!(m.to_string(), " 0 10 20\n 1 11 21");
        let sparse = Matrix::sparse(2, 1, |x, _| x == 1, |_, _| 5);
        assert_eq!(sparse.to_string(), "  5");
    }

    #[test]
    fn empty_matrix() {
        let m: Matrix<u8> = Matrix::with_default(0, 0);
        assert_eq!(m.iter().count(), 0);
        assert!(!m.is_valid(0, 0));
        assert_eq!(m.rows().count(), 0);
    }
}
