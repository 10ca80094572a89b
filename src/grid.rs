//! Row-major 2D grid shared by every stage of the conversion pipeline.

/// A sampled image: one RGB triple per cell
pub type PixelGrid = Grid<[u8; 3]>;

/// Per-cell brightness in `0..=255`
pub type IntensityGrid = Grid<u8>;

/// Per-cell glyph
pub type CharGrid = Grid<char>;

/// Immutable, row-major grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from row-major cells.
    ///
    /// Returns `None` when `cells.len()` is not `width * height`.
    pub fn from_cells(width: usize, height: usize, cells: Vec<T>) -> Option<Self> {
        if width.checked_mul(height)? != cells.len() {
            return None;
        }
        Some(Self { width, height, cells })
    }

    /// Build a grid by evaluating `f(x, y)` for every cell.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self { width, height, cells }
    }

    /// Build a grid from a list of equally long rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        let cells = rows.into_iter().flatten().collect();
        Self::from_cells(width, height, cells)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x)
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.height).map(move |y| &self.cells[y * self.width..(y + 1) * self.width])
    }

    /// Apply `f` to every cell, producing a grid with the same dimensions.
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cells_checks_length() {
        assert!(Grid::from_cells(2, 2, vec![0u8; 4]).is_some());
        assert!(Grid::from_cells(2, 2, vec![0u8; 3]).is_none());
        assert!(Grid::from_cells(0, 5, Vec::<u8>::new()).is_some());
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.get(2, 1), Some(&6));
        assert_eq!(grid.get(3, 0), None);

        assert!(Grid::from_rows(vec![vec![1, 2], vec![3]]).is_none());
    }

    #[test]
    fn test_rows_and_map() {
        let grid = Grid::from_rows(vec![vec![1u8, 2], vec![3, 4], vec![5, 6]]).unwrap();
        let doubled = grid.map(|v| u16::from(*v) * 2);

        assert_eq!(doubled.dimensions(), grid.dimensions());
        let rows: Vec<&[u16]> = doubled.rows().collect();
        assert_eq!(rows, vec![&[2, 4][..], &[6, 8][..], &[10, 12][..]]);
    }

    #[test]
    fn test_from_fn_is_row_major() {
        let grid = Grid::from_fn(3, 2, |x, y| (x, y));
        assert_eq!(grid.get(0, 0), Some(&(0, 0)));
        assert_eq!(grid.get(2, 1), Some(&(2, 1)));
        assert_eq!(grid.rows().next().unwrap(), &[(0, 0), (1, 0), (2, 0)][..]);
    }

    #[test]
    fn test_zero_width_grid_keeps_its_rows() {
        let grid: Grid<char> = Grid::from_fn(0, 3, |_, _| 'x');
        let rows: Vec<&[char]> = grid.rows().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.is_empty()));
    }

    #[test]
    fn test_empty_grid_has_no_rows() {
        let grid: Grid<u8> = Grid::from_rows(Vec::new()).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.rows().count(), 0);
    }
}
