//! Per-cell reduction of the source canvas to brightness or color samples

use crate::math::rounding::channel_ratio;
use crate::render::pipeline::{PipelineObserver, Stage};
use crate::spatial::Grid;
use image::{GenericImageView, Rgb, RgbImage, imageops};
use ndarray::Array2;

/// Which reduction the sampler applies to each cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleMode {
    /// Single brightness scalar per cell, used to scale a fixed font color
    Brightness,
    /// Mean red, green and blue per cell, drawn directly
    Color,
}

/// Sampled values for every grid cell, indexed `(row, col)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleTable {
    /// Mean brightness per cell
    Brightness(Array2<u8>),
    /// Mean channel values per cell, as three parallel tables
    Color {
        /// Red channel means
        red: Array2<u8>,
        /// Green channel means
        green: Array2<u8>,
        /// Blue channel means
        blue: Array2<u8>,
    },
}

impl SampleTable {
    /// Table dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        match self {
            Self::Brightness(values) => values.dim(),
            Self::Color { red, .. } => red.dim(),
        }
    }

    /// Mode this table was sampled in
    pub const fn mode(&self) -> SampleMode {
        match self {
            Self::Brightness(_) => SampleMode::Brightness,
            Self::Color { .. } => SampleMode::Color,
        }
    }

    /// Brightness of a cell, `None` for color tables or out-of-range indices
    pub fn brightness(&self, row: usize, col: usize) -> Option<u8> {
        match self {
            Self::Brightness(values) => values.get((row, col)).copied(),
            Self::Color { .. } => None,
        }
    }

    /// Color of a cell, `None` for brightness tables or out-of-range indices
    pub fn color(&self, row: usize, col: usize) -> Option<Rgb<u8>> {
        match self {
            Self::Brightness(_) => None,
            Self::Color { red, green, blue } => Some(Rgb([
                *red.get((row, col))?,
                *green.get((row, col))?,
                *blue.get((row, col))?,
            ])),
        }
    }
}

/// Channel totals over one cell crop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelSums {
    /// Sum of red values
    pub red: u64,
    /// Sum of green values
    pub green: u64,
    /// Sum of blue values
    pub blue: u64,
}

/// Reduces each cell of a grid to a sample from the source canvas
#[derive(Debug, Clone, Copy)]
pub struct RegionSampler<'a> {
    grid: &'a Grid,
}

impl<'a> RegionSampler<'a> {
    /// Create a sampler over the given grid
    pub const fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Sample every cell of the grid in row-major order
    ///
    /// Reports one progress step per grid row. The source canvas is only read.
    pub fn sample(
        &self,
        source: &RgbImage,
        mode: SampleMode,
        observer: &mut dyn PipelineObserver,
    ) -> SampleTable {
        let dimensions = self.grid.dimensions();
        observer.stage_started(Stage::Sample, dimensions.0);

        let table = match mode {
            SampleMode::Brightness => {
                let mut values = Array2::zeros(dimensions);
                self.visit_rows(source, observer, |row, col, sums| {
                    if let Some(value) = values.get_mut((row, col)) {
                        *value = self.brightness_of(sums);
                    }
                });
                SampleTable::Brightness(values)
            }
            SampleMode::Color => {
                let mut red = Array2::zeros(dimensions);
                let mut green = Array2::zeros(dimensions);
                let mut blue = Array2::zeros(dimensions);
                self.visit_rows(source, observer, |row, col, sums| {
                    let Rgb([r, g, b]) = self.color_of(sums);
                    if let Some(value) = red.get_mut((row, col)) {
                        *value = r;
                    }
                    if let Some(value) = green.get_mut((row, col)) {
                        *value = g;
                    }
                    if let Some(value) = blue.get_mut((row, col)) {
                        *value = b;
                    }
                });
                SampleTable::Color { red, green, blue }
            }
        };

        observer.stage_finished(Stage::Sample);
        table
    }

    fn visit_rows(
        &self,
        source: &RgbImage,
        observer: &mut dyn PipelineObserver,
        mut record: impl FnMut(usize, usize, ChannelSums),
    ) {
        let last_col = self.grid.cols().saturating_sub(1);
        for (row, col, origin) in self.grid.cells() {
            record(row, col, self.cell_sums(source, origin));
            if col == last_col {
                observer.row_completed(Stage::Sample, row);
            }
        }
    }

    /// Sum the channels of the cell whose top-left corner is `origin`
    ///
    /// The crop is clipped to the canvas; pixels beyond the edge contribute
    /// nothing, which the averaging step treats as black.
    pub fn cell_sums(&self, source: &RgbImage, origin: [u32; 2]) -> ChannelSums {
        let [x, y] = origin;
        let crop = imageops::crop_imm(source, x, y, self.grid.cell.width, self.grid.cell.height);

        crop.pixels()
            .fold(ChannelSums::default(), |mut sums, (_, _, Rgb([r, g, b]))| {
                sums.red += u64::from(r);
                sums.green += u64::from(g);
                sums.blue += u64::from(b);
                sums
            })
    }

    // Mean of per-pixel (r + g + b) / 3 over the full cell area
    fn brightness_of(&self, sums: ChannelSums) -> u8 {
        channel_ratio(
            sums.red + sums.green + sums.blue,
            self.grid.cell.area() * 3,
        )
    }

    fn color_of(&self, sums: ChannelSums) -> Rgb<u8> {
        let area = self.grid.cell.area();
        Rgb([
            channel_ratio(sums.red, area),
            channel_ratio(sums.green, area),
            channel_ratio(sums.blue, area),
        ])
    }
}
