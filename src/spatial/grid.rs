//! Raster state shared by all pipeline stages
//!
//! The grid is the sole owner of all cell memory. It is created once, mutated
//! in place by each stage in turn, and finally handed to an encoder. All
//! access is by coordinate; no component holds independent cell references.

use ndarray::Array2;

/// A grid coordinate pair
///
/// Pure value type compared by coordinates. Signed so that neighbor offsets
/// and distance differences never wrap during intermediate arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    /// Horizontal coordinate (column)
    pub x: i32,
    /// Vertical coordinate (row)
    pub y: i32,
}

impl Position {
    /// Create a position from grid coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position displaced by the given offsets
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Per-pixel state: a display color and the seed this cell believes is nearest
///
/// `owner` is `None` until a flood pass (or the scatterer) assigns one. The
/// explicit option means a legitimately black seed color can never be misread
/// as an unassigned cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// RGB channels
    pub color: [u8; 3],
    /// Coordinate of the claimed nearest seed, if any has reached this cell
    pub owner: Option<Position>,
}

impl Cell {
    /// Copy the color and claimed owner from another cell
    pub const fn adopt(&mut self, other: &Self) {
        self.color = other.color;
        self.owner = other.owner;
    }
}

/// Dense row-major raster of cells with fixed dimensions
///
/// Backed by a 2-D array in (row, col) layout. Dimensions are validated by
/// the pipeline configuration before construction, so building the grid
/// itself cannot fail short of allocation failure, which aborts.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Create a grid of unassigned cells
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), Cell::default()),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.dim().1
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.dim().0
    }

    /// Whether the position lies within the raster bounds
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width()
            && (pos.y as usize) < self.height()
    }

    /// The cell at a position, or `None` when out of bounds
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        self.cells.get((pos.y as usize, pos.x as usize))
    }

    /// Mutable access to the cell at a position, or `None` when out of bounds
    pub fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        self.cells.get_mut((pos.y as usize, pos.x as usize))
    }

    /// Iterate cells in row-major order, the order encoders emit them
    pub fn iter_row_major(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Iterate positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let width = self.width();
        let height = self.height();
        (0..height)
            .flat_map(move |y| (0..width).map(move |x| Position::new(x as i32, y as i32)))
    }
}
