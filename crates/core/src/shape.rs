//! Shape matrices for falling pieces
//!
//! A shape is a small rectangular bounding box of color indices (0 = empty). All
//! occupied cells of one shape share a single color index.

use crate::types::{GameError, RotateDir, MAX_SHAPE_DIM};

/// An occupied cell of a shape, relative to the shape's top-left corner
pub type ShapeCell = (i32, i32, u8);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    width: usize,
    height: usize,
    /// Row-major, `height` rows of `width` cells
    cells: Vec<u8>,
}

impl Shape {
    /// Build a shape from rows, validating that it is a proper piece matrix.
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self, GameError> {
        let height = rows.len();
        if height == 0 {
            return Err(GameError::MalformedShape("no rows"));
        }
        let width = rows[0].len();
        if width == 0 {
            return Err(GameError::MalformedShape("empty row"));
        }
        if rows.iter().any(|r| r.len() != width) {
            return Err(GameError::MalformedShape("rows differ in length"));
        }
        if width > MAX_SHAPE_DIM || height > MAX_SHAPE_DIM {
            return Err(GameError::MalformedShape("larger than 4x4"));
        }

        let cells: Vec<u8> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        let mut colors = cells.iter().copied().filter(|&v| v != 0);
        let Some(color) = colors.next() else {
            return Err(GameError::MalformedShape("no occupied cells"));
        };
        if colors.any(|v| v != color) {
            return Err(GameError::MalformedShape("mixed color indices"));
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Copy a catalog template. Templates are checked by the catalog's own tests.
    pub(crate) fn from_template(rows: &[&[u8]]) -> Self {
        let width = rows.first().map_or(0, |r| r.len());
        Self {
            width,
            height: rows.len(),
            cells: rows.iter().flat_map(|r| r.iter().copied()).collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x])
    }

    /// Color index shared by every occupied cell
    pub fn color_index(&self) -> u8 {
        self.cells.iter().copied().find(|&v| v != 0).unwrap_or(0)
    }

    /// Occupied cells as `(x, y, value)`
    pub fn cells(&self) -> impl Iterator<Item = ShapeCell> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, &v)| {
            (v != 0).then(|| ((i % self.width) as i32, (i / self.width) as i32, v))
        })
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(self.width)
    }

    /// Rotate a quarter turn.
    ///
    /// Clockwise is transpose-then-reverse-rows, counter-clockwise is
    /// transpose-then-reverse-row-order. An `h x w` matrix becomes `w x h`, so the
    /// 1x4 bar turns into a 4x1 column and back.
    pub fn rotate(&mut self, dir: RotateDir) {
        let (w, h) = (self.width, self.height);
        let mut rotated = vec![0; w * h];
        // the result has `w` rows of `h` cells
        for i in 0..w {
            for j in 0..h {
                rotated[i * h + j] = match dir {
                    RotateDir::Clockwise => self.cells[(h - 1 - j) * w + i],
                    RotateDir::CounterClockwise => self.cells[j * w + (w - 1 - i)],
                };
            }
        }
        self.cells = rotated;
        self.width = h;
        self.height = w;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(shape: &Shape) -> Vec<Vec<u8>> {
        shape.rows().map(|r| r.to_vec()).collect()
    }

    #[test]
    fn rotate_clockwise_matches_transpose_then_reverse() {
        let mut t = Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]).unwrap();
        t.rotate(RotateDir::Clockwise);
        assert_eq!(rows(&t), vec![vec![0, 1, 0], vec![0, 1, 1], vec![0, 1, 0]]);
    }

    #[test]
    fn rotate_counter_clockwise_matches_transpose_then_flip() {
        let mut t = Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]).unwrap();
        t.rotate(RotateDir::CounterClockwise);
        assert_eq!(rows(&t), vec![vec![0, 1, 0], vec![1, 1, 0], vec![0, 1, 0]]);
    }

    #[test]
    fn bar_alternates_between_row_and_column() {
        let mut bar = Shape::from_rows(&[&[2, 2, 2, 2]]).unwrap();
        bar.rotate(RotateDir::Clockwise);
        assert_eq!((bar.width(), bar.height()), (1, 4));
        assert_eq!(bar.cells().count(), 4);
        bar.rotate(RotateDir::Clockwise);
        assert_eq!(rows(&bar), vec![vec![2, 2, 2, 2]]);
    }

    #[test]
    fn rejects_malformed_matrices() {
        assert!(Shape::from_rows(&[]).is_err());
        assert!(Shape::from_rows(&[&[]]).is_err());
        assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_err());
        assert!(Shape::from_rows(&[&[0, 0], &[0, 0]]).is_err());
        assert!(Shape::from_rows(&[&[1, 2]]).is_err());
        assert!(Shape::from_rows(&[&[1, 1, 1, 1, 1]]).is_err());
    }

    #[test]
    fn cells_reports_offsets_and_values() {
        let s = Shape::from_rows(&[&[0, 3, 3], &[3, 3, 0]]).unwrap();
        let cells: Vec<_> = s.cells().collect();
        assert_eq!(cells, vec![(1, 0, 3), (2, 0, 3), (0, 1, 3), (1, 1, 3)]);
        assert_eq!(s.color_index(), 3);
    }
}
