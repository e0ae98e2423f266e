//! Grid planning from cell geometry
//!
//! Cells are laid out from the canvas origin with a fixed stride of
//! `cell + padding` on each axis. Only whole strides that start inside the
//! canvas produce a column or row, so a stride wider than the canvas yields
//! an empty grid rather than an error.

use crate::io::configuration::REFERENCE_GLYPH;
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::render::painter::GlyphPainter;

/// Size of one mosaic cell and the spacing added between neighbouring cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGeometry {
    /// Cell width in pixels
    pub width: u32,
    /// Cell height in pixels
    pub height: u32,
    /// Extra horizontal spacing between columns (negative overlaps cells)
    pub padding_x: i32,
    /// Extra vertical spacing between rows (negative overlaps cells)
    pub padding_y: i32,
}

impl CellGeometry {
    /// Derive the cell size from the painter's box for the full-block glyph
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for `font_path` if the painter has no
    /// outline for the reference glyph
    pub fn from_painter(
        painter: &impl GlyphPainter,
        padding_x: i32,
        padding_y: i32,
    ) -> Result<Self> {
        let glyph_box = painter
            .glyph_box(REFERENCE_GLYPH)
            .ok_or_else(|| {
                invalid_parameter(
                    "font_path",
                    &REFERENCE_GLYPH,
                    &"font has no outline for the reference glyph",
                )
            })?;

        Ok(Self {
            width: glyph_box.width,
            height: glyph_box.height,
            padding_x,
            padding_y,
        })
    }

    /// Horizontal distance between consecutive column origins
    ///
    /// # Errors
    ///
    /// Returns `InvalidGeometry` if the cell width is zero or the stride is not positive
    pub fn stride_x(&self) -> Result<u32> {
        stride("x", self.width, self.padding_x)
    }

    /// Vertical distance between consecutive row origins
    ///
    /// # Errors
    ///
    /// Returns `InvalidGeometry` if the cell height is zero or the stride is not positive
    pub fn stride_y(&self) -> Result<u32> {
        stride("y", self.height, self.padding_y)
    }

    /// Number of pixels covered by one cell
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

fn stride(axis: &'static str, cell: u32, padding: i32) -> Result<u32> {
    let invalid = MosaicError::InvalidGeometry {
        axis,
        cell,
        padding,
    };
    if cell == 0 {
        return Err(invalid);
    }

    let stride = i64::from(cell) + i64::from(padding);
    if stride <= 0 {
        return Err(invalid);
    }
    u32::try_from(stride).map_err(|_overflow| invalid)
}

/// Immutable cell layout over a canvas
///
/// Produced once by [`Grid::plan`] and borrowed by both the sampler and the
/// compositor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Canvas width in pixels
    pub canvas_width: u32,
    /// Canvas height in pixels
    pub canvas_height: u32,
    /// Geometry the grid was planned with
    pub cell: CellGeometry,
    /// Pixel x of each column origin, strictly increasing from 0
    pub col_coords: Vec<u32>,
    /// Pixel y of each row origin, strictly increasing from 0
    pub row_coords: Vec<u32>,
}

impl Grid {
    /// Lay out cells over a `canvas_width` x `canvas_height` canvas
    ///
    /// # Errors
    ///
    /// Returns `InvalidGeometry` if either stride is not positive
    pub fn plan(canvas_width: u32, canvas_height: u32, cell: CellGeometry) -> Result<Self> {
        let stride_x = cell.stride_x()?;
        let stride_y = cell.stride_y()?;

        Ok(Self {
            canvas_width,
            canvas_height,
            cell,
            col_coords: origins(canvas_width, stride_x),
            row_coords: origins(canvas_height, stride_y),
        })
    }

    /// Number of columns
    pub const fn cols(&self) -> usize {
        self.col_coords.len()
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.row_coords.len()
    }

    /// Grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Whether the grid has no cells at all
    pub const fn is_empty(&self) -> bool {
        self.col_coords.is_empty() || self.row_coords.is_empty()
    }

    /// Visit every cell in row-major order as `(row, col, [x, y])`
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, [u32; 2])> + '_ {
        self.row_coords.iter().enumerate().flat_map(move |(row, &y)| {
            self.col_coords
                .iter()
                .enumerate()
                .map(move |(col, &x)| (row, col, [x, y]))
        })
    }
}

fn origins(extent: u32, stride: u32) -> Vec<u32> {
    let count = extent / stride;
    (0..count).map(|index| index * stride).collect()
}
