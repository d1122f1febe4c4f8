//! Radiating trajectory engine
//!
//! A spark leaves its start cell along `base_angle` and drifts sideways by an
//! offset that grows with the square of the distance travelled, so paths
//! start nearly straight and bend harder the further they go. The sign and
//! size of `arc_radius` pick the direction and sharpness of the bend.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::core::random::RandomSource;
use crate::grid::GridSurface;

use super::illumination::{clear_illumination, illuminate_with_glow};
use super::{Activity, Animation};

/// Scales the caller's speed multiplier into cells per frame
pub const SPEED_SCALE: f64 = 1.6;
/// Per-spark speed jitter is uniform in [MIN, MIN + SPAN)
const SPEED_JITTER_MIN: f64 = 0.8;
const SPEED_JITTER_SPAN: f64 = 0.4;
/// `arc_radius` is uniform in (-MAX, MAX)
pub const ARC_RADIUS_MAX: f64 = 3.0;
const CURVE_COEFFICIENT: f64 = 0.001;
/// Sparks stay alive this many cells past every grid edge
pub const OFF_GRID_MARGIN: i64 = 3;

/// (dx, dy) for E, W, S, N, SE, SW, NE, NW
pub const COMPASS_DIRECTIONS: [(f64, f64); 8] = [
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (1.0, 1.0),
    (-1.0, 1.0),
    (1.0, -1.0),
    (-1.0, -1.0),
];

/// Random-angle sparks curve this much harder than compass sparks
const RANDOM_SPARK_ARC_BOOST: f64 = 2.0;

/// One radiating spark
#[derive(Clone, Debug)]
pub struct TrajectoryParticle {
    start_row: f64,
    start_col: f64,
    row: f64,
    col: f64,
    speed: f64,
    arc_radius: f64,
    base_angle: f64,
    perp_angle: f64,
    travel_distance: f64,
    active: bool,
    frame_count: u32,
}

impl TrajectoryParticle {
    /// Spark heading along `(direction_x, direction_y)` (any length)
    /// with randomised speed and curvature
    pub fn new(
        start_row: f64,
        start_col: f64,
        direction_x: f64,
        direction_y: f64,
        speed: f64,
        rng: &mut dyn RandomSource,
    ) -> Self {
        let speed = speed * SPEED_SCALE * rng.range(SPEED_JITTER_MIN, SPEED_JITTER_MIN + SPEED_JITTER_SPAN);
        let arc_radius = rng.range(-ARC_RADIUS_MAX, ARC_RADIUS_MAX);
        let base_angle = direction_y.atan2(direction_x);
        Self::with_path(start_row, start_col, base_angle, speed, arc_radius)
    }

    /// Spark with a fully specified path
    pub fn with_path(start_row: f64, start_col: f64, base_angle: f64, speed: f64, arc_radius: f64) -> Self {
        Self {
            start_row,
            start_col,
            row: start_row,
            col: start_col,
            speed,
            arc_radius,
            base_angle,
            perp_angle: base_angle + FRAC_PI_2,
            travel_distance: 0.0,
            active: true,
            frame_count: 0,
        }
    }

    pub fn amplify_arc(&mut self, factor: f64) {
        self.arc_radius *= factor;
    }

    #[inline]
    pub fn position(&self) -> (f64, f64) {
        (self.row, self.col)
    }

    #[inline]
    pub fn start_position(&self) -> (f64, f64) {
        (self.start_row, self.start_col)
    }

    /// Current cell
    #[inline]
    pub fn rounded_position(&self) -> (i32, i32) {
        (round_half_up(self.row), round_half_up(self.col))
    }

    pub fn speed(&self) -> f64 { self.speed }

    pub fn arc_radius(&self) -> f64 { self.arc_radius }

    pub fn base_angle(&self) -> f64 { self.base_angle }

    pub fn travel_distance(&self) -> f64 { self.travel_distance }

    pub fn frame_count(&self) -> u32 { self.frame_count }

    /// Move one frame further along the arc
    fn advance(&mut self) {
        self.travel_distance += self.speed;

        let straight_x = self.base_angle.cos() * self.travel_distance;
        let straight_y = self.base_angle.sin() * self.travel_distance;

        let curve_factor = self.travel_distance * self.travel_distance * CURVE_COEFFICIENT;
        let curve_x = self.perp_angle.cos() * self.arc_radius * curve_factor;
        let curve_y = self.perp_angle.sin() * self.arc_radius * curve_factor;

        self.row = self.start_row + straight_y + curve_y;
        self.col = self.start_col + straight_x + curve_x;
        self.frame_count += 1;
    }
}

impl Animation for TrajectoryParticle {
    fn update(&mut self, grid: &mut dyn GridSurface) -> Activity {
        if !self.active {
            return Activity::Inactive;
        }

        let (row, col) = self.rounded_position();
        clear_illumination(grid, row, col);

        self.advance();

        // An overflowed path has no cell to land on
        if !(self.row.is_finite() && self.col.is_finite()) {
            self.active = false;
            return Activity::Inactive;
        }

        let (row, col) = self.rounded_position();
        let (rows, cols) = grid.bounds();
        if beyond_margin(row, col, rows, cols) {
            self.active = false;
            return Activity::Inactive;
        }

        illuminate_with_glow(grid, row, col);
        Activity::Active
    }

    fn cleanup(&self, grid: &mut dyn GridSurface) {
        if !(self.row.is_finite() && self.col.is_finite()) {
            return;
        }
        let (row, col) = self.rounded_position();
        clear_illumination(grid, row, col);
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// Round half toward +inf, matching how hosts round cell coordinates
#[inline]
pub fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

#[inline]
fn beyond_margin(row: i32, col: i32, rows: u32, cols: u32) -> bool {
    let (row, col) = (row as i64, col as i64);
    row < -OFF_GRID_MARGIN
        || row >= rows as i64 + OFF_GRID_MARGIN
        || col < -OFF_GRID_MARGIN
        || col >= cols as i64 + OFF_GRID_MARGIN
}

/// Seed a radiating batch from the middle of a `rows` x `cols` grid:
/// 8 compass sparks plus `random_sparks` at random angles with stronger arcs.
pub fn spawn_radiating_batch(
    rows: u32,
    cols: u32,
    speed: f64,
    random_sparks: u32,
    rng: &mut dyn RandomSource,
) -> Vec<TrajectoryParticle> {
    let center_row = (rows / 2) as f64;
    let center_col = (cols / 2) as f64;

    let mut batch = Vec::with_capacity(COMPASS_DIRECTIONS.len() + random_sparks as usize);
    for (dx, dy) in COMPASS_DIRECTIONS {
        batch.push(TrajectoryParticle::new(center_row, center_col, dx, dy, speed, rng));
    }

    for _ in 0..random_sparks {
        let angle = rng.next_f64() * TAU;
        let mut spark = TrajectoryParticle::new(center_row, center_col, angle.cos(), angle.sin(), speed, rng);
        spark.amplify_arc(RANDOM_SPARK_ARC_BOOST);
        batch.push(spark);
    }

    batch
}
