//! Diamond-square heightfield generation.
//!
//! The working grid is one cell larger than the result on every edge so that
//! midpoint lookups near the border stay well defined. That ring is cropped
//! before the heightmap is returned.

use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

use crate::error::{Result, TerrainError};
use crate::grid::Grid;
use crate::random::RandomSource;

/// Factor applied to the displacement variance after every refinement pass.
pub const DAMPENING: f64 = 0.65;

/// Lower bound of the value seeded into the center cell.
pub const CENTER_SEED_MIN: f64 = 0.65;

/// Width of the center seed range, so seeds fall in `[0.65, 1.0)`.
pub const CENTER_SEED_SPAN: f64 = 0.35;

/// Largest supported grid exponent. Working grids are at most `2^14 + 1` wide.
pub const MAX_EXPONENT: u32 = 14;

/// Largest working grid side accepted by [`GeneratorParams::validate`].
pub const MAX_DIM: usize = (1 << MAX_EXPONENT) + 1;

/// Parameters for a single generation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneratorParams {
    /// Side of the working grid, `2^k + 1`. The result is `dim - 2` wide.
    pub dim: usize,
    /// Scale applied to normalized heights. `1.0` leaves them untouched.
    pub max_height: f64,
    /// Floor scaled heights to whole levels.
    pub discrete: bool,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            dim: 65,
            max_height: 1.0,
            discrete: false,
        }
    }
}

impl GeneratorParams {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            ..Default::default()
        }
    }

    /// Creates parameters for a working grid of side `2^exponent + 1`.
    ///
    /// Exponents too large for `usize` give a `dim` of 0, which fails validation.
    pub fn from_exponent(exponent: u32) -> Self {
        let dim = 1usize
            .checked_shl(exponent)
            .and_then(|side| side.checked_add(1))
            .unwrap_or(0);
        Self::new(dim)
    }

    /// Sets the height scale.
    pub fn with_max_height(mut self, max_height: f64) -> Self {
        self.max_height = max_height;
        self
    }

    /// Floors scaled heights to whole levels.
    pub fn discrete(mut self, discrete: bool) -> Self {
        self.discrete = discrete;
        self
    }

    /// Checks the parameters before any grid is allocated.
    pub fn validate(&self) -> Result<()> {
        if self.dim < 3 || self.dim > MAX_DIM || !(self.dim - 1).is_power_of_two() {
            return Err(TerrainError::InvalidDimension(self.dim));
        }
        if !self.max_height.is_finite() || self.max_height <= 0.0 {
            return Err(TerrainError::InvalidMaxHeight(self.max_height));
        }
        Ok(())
    }
}

/// A generated, cropped and normalized heightmap.
#[derive(Debug, Clone, PartialEq)]
pub struct Heightmap {
    heights: Grid<f64>,
    floored: bool,
}

impl Heightmap {
    /// Side length of the map.
    pub fn dim(&self) -> usize {
        self.heights.dim()
    }

    pub fn heights(&self) -> &Grid<f64> {
        &self.heights
    }

    pub fn height(&self, x: usize, y: usize) -> Option<f64> {
        self.heights.get(x, y).copied()
    }

    /// Whether heights were floored to whole levels.
    ///
    /// A discrete request with `max_height == 1` is left fractional, so this
    /// is false in that case.
    pub fn is_discrete(&self) -> bool {
        self.floored
    }

    /// Topmost occupied layer at `(x, y)`.
    pub fn level(&self, x: usize, y: usize) -> Option<u32> {
        self.height(x, y).map(to_level)
    }

    /// All heights as whole layers.
    pub fn levels(&self) -> Grid<u32> {
        self.heights.map(|h| to_level(*h))
    }
}

/// Discrete maps serialize as integers, everything else as reals.
impl Serialize for Heightmap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.floored {
            self.levels().serialize(serializer)
        } else {
            self.heights.serialize(serializer)
        }
    }
}

fn to_level(height: f64) -> u32 {
    height.max(0.0).floor() as u32
}

/// Generates a heightmap.
///
/// Returns a `(dim - 2) × (dim - 2)` map. Parameters are validated before any
/// work is done.
pub fn generate<R: RandomSource + ?Sized>(params: &GeneratorParams, rng: &mut R) -> Result<Heightmap> {
    params.validate()?;

    let mut generator = HeightfieldGenerator::new(params.dim, rng);
    generator.seed_center();
    let passes = generator.divide();
    let mut heights = generator.into_cropped();

    let floored = normalize(&mut heights, params.max_height, params.discrete);

    debug!(
        dim = params.dim,
        passes,
        max_height = params.max_height,
        discrete = floored,
        "generated heightfield"
    );

    Ok(Heightmap { heights, floored })
}

/// State for one diamond-square run. Nothing outlives the call that owns it.
struct HeightfieldGenerator<'a, R: RandomSource + ?Sized> {
    grid: Grid<f64>,
    dim: usize,
    variance: f64,
    rng: &'a mut R,
}

impl<'a, R: RandomSource + ?Sized> HeightfieldGenerator<'a, R> {
    fn new(dim: usize, rng: &'a mut R) -> Self {
        Self {
            grid: Grid::new(dim, 0.0),
            dim,
            variance: 1.0,
            rng,
        }
    }

    fn seed_center(&mut self) {
        let mid = (self.dim - 1) / 2;
        self.grid[(mid, mid)] = CENTER_SEED_MIN + CENTER_SEED_SPAN * self.rng.next_unit();
    }

    /// Runs every refinement pass and returns how many ran.
    fn divide(&mut self) -> u32 {
        let full = self.dim - 1;
        let mut size = full;
        let mut passes = 0;

        while size / 2 >= 1 {
            let half = size / 2;

            // The first pass has only the seeded center and no squares to fill.
            if size != full {
                for y in (half..self.dim - 1).step_by(size) {
                    for x in (half..self.dim - 1).step_by(size) {
                        self.visit_square(x, y, half);
                    }
                }
            }

            for y in (0..self.dim).step_by(half) {
                for x in ((y + half) % size..self.dim).step_by(size) {
                    self.visit_diamond(x, y, half);
                }
            }

            self.variance *= DAMPENING;
            size = half;
            passes += 1;
        }

        passes
    }

    fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x == self.dim - 1 || y == self.dim - 1
    }

    fn visit_square(&mut self, x: usize, y: usize, half: usize) {
        if self.is_border(x, y) {
            self.grid[(x, y)] /= 2.0;
        }

        let offset = self.rng.displacement(self.variance);
        let sum = self.grid[(x - half, y - half)]
            + self.grid[(x + half, y - half)]
            + self.grid[(x - half, y + half)]
            + self.grid[(x + half, y + half)];

        self.grid[(x, y)] = (sum / 4.0 + offset).clamp(0.0, 1.0);
    }

    fn visit_diamond(&mut self, x: usize, y: usize, half: usize) {
        if self.is_border(x, y) {
            return;
        }

        let offset = self.rng.displacement(self.variance);
        let sum: f64 = diamond_neighbours(x, y, half, self.dim)
            .iter()
            .map(|&cell| self.grid[cell])
            .sum();

        self.grid[(x, y)] = (sum / 4.0 + offset).clamp(0.0, 1.0);
    }

    fn into_cropped(self) -> Grid<f64> {
        self.grid.crop_border()
    }
}

/// Axis neighbours of a diamond cell, wrapped modulo `dim - 1`.
///
/// Order is left, right, up, down.
pub(crate) fn diamond_neighbours(x: usize, y: usize, half: usize, dim: usize) -> [(usize, usize); 4] {
    let period = dim - 1;
    [
        ((x + period - half) % period, y),
        ((x + half) % period, y),
        (x, (y + period - half) % period),
        (x, (y + half) % period),
    ]
}

/// Scales heights in place. Returns whether they were floored.
fn normalize(heights: &mut Grid<f64>, max_height: f64, discrete: bool) -> bool {
    if max_height == 1.0 {
        return false;
    }

    for h in heights.values_mut() {
        *h *= max_height;
        if discrete {
            *h = h.floor();
        }
    }

    discrete
}
