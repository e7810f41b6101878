//! Level domain: static collision geometry sources.
//!
//! All three sources answer the same two queries — candidate solids for a
//! swept region and ground lookup below a column — so the resolver and the
//! spawn scan never care which kind of world they are in.

use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;

/// Strict AABB overlap. Shared edges do not count: a body resting exactly on
/// a surface, or brushing a wall, is touching, not colliding.
pub fn overlaps(a: &Aabb2d, b: &Aabb2d) -> bool {
    a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
}

/// The solid geometry of the active level, read-only to the simulation.
#[derive(Resource, Debug)]
pub enum CollisionSource {
    /// Ordered static solid rectangles in world coordinates.
    Rects(Vec<Aabb2d>),
    /// Solid/empty tile classification on a regular grid.
    Tiles(TileGrid),
    /// Scrolling-background world: one unbroken ground surface. Modeled as an
    /// unbounded plane so the resolver path is identical to the other modes.
    FlatGround { surface_y: f32 },
}

impl Default for CollisionSource {
    fn default() -> Self {
        Self::FlatGround { surface_y: 0.0 }
    }
}

impl CollisionSource {
    /// Collect every solid that could intersect `region` into `out`.
    /// `out` is cleared first so callers can reuse one buffer per tick.
    pub fn candidates(&self, region: Aabb2d, out: &mut Vec<Aabb2d>) {
        out.clear();
        match self {
            Self::Rects(rects) => {
                out.extend(rects.iter().copied().filter(|r| overlaps(r, &region)));
            }
            Self::Tiles(grid) => grid.candidates(region, out),
            Self::FlatGround { surface_y } => {
                if region.min.y < *surface_y {
                    out.push(Aabb2d {
                        min: Vec2::new(region.min.x - 1.0, surface_y - 1000.0),
                        max: Vec2::new(region.max.x + 1.0, *surface_y),
                    });
                }
            }
        }
    }

    /// Top of the highest solid at or below `from_y` in the column at `x`.
    /// This is the downward spawn scan.
    pub fn ground_below(&self, x: f32, from_y: f32) -> Option<f32> {
        match self {
            Self::Rects(rects) => rects
                .iter()
                .filter(|r| r.min.x <= x && x <= r.max.x && r.max.y <= from_y)
                .map(|r| r.max.y)
                .max_by(f32::total_cmp),
            Self::Tiles(grid) => grid.ground_below(x, from_y),
            Self::FlatGround { surface_y } => (*surface_y <= from_y).then_some(*surface_y),
        }
    }

    /// True when the source holds no solids at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Rects(rects) => rects.is_empty(),
            Self::Tiles(grid) => !grid.solid.iter().any(|s| *s),
            Self::FlatGround { .. } => false,
        }
    }
}

/// Regular grid of solid/empty tiles. Row 0 is the top of the level.
#[derive(Debug, Clone)]
pub struct TileGrid {
    tile_size: f32,
    cols: usize,
    rows: usize,
    /// World-space y of the top of row 0.
    top: f32,
    solid: Vec<bool>,
}

impl TileGrid {
    /// Build from row strings (`#` solid, anything else empty), anchored so
    /// the grid hangs from `level_height` downward.
    pub fn from_rows(tile_size: f32, rows: &[String], level_height: f32) -> Self {
        let cols = rows.first().map(|r| r.len()).unwrap_or(0);
        let solid = rows
            .iter()
            .flat_map(|row| row.chars().map(|c| c == '#'))
            .collect();
        Self {
            tile_size,
            cols,
            rows: rows.len(),
            top: level_height,
            solid,
        }
    }

    /// Ground/non-ground classification for a single tile coordinate.
    pub fn is_solid(&self, col: usize, row: usize) -> bool {
        col < self.cols && row < self.rows && self.solid[row * self.cols + col]
    }

    fn tile_aabb(&self, col: usize, row: usize) -> Aabb2d {
        let min = Vec2::new(
            col as f32 * self.tile_size,
            self.top - (row + 1) as f32 * self.tile_size,
        );
        Aabb2d {
            min,
            max: min + Vec2::splat(self.tile_size),
        }
    }

    fn candidates(&self, region: Aabb2d, out: &mut Vec<Aabb2d>) {
        if self.cols == 0 || self.rows == 0 {
            return;
        }
        let col_min = (region.min.x / self.tile_size).floor().max(0.0) as usize;
        let col_max = ((region.max.x / self.tile_size).floor() as isize).min(self.cols as isize - 1);
        let row_min = ((self.top - region.max.y) / self.tile_size).floor().max(0.0) as usize;
        let row_max =
            (((self.top - region.min.y) / self.tile_size).floor() as isize).min(self.rows as isize - 1);
        if col_max < 0 || row_max < 0 {
            return;
        }
        for row in row_min..=row_max as usize {
            for col in col_min..=col_max as usize {
                if self.is_solid(col, row) {
                    out.push(self.tile_aabb(col, row));
                }
            }
        }
    }

    fn ground_below(&self, x: f32, from_y: f32) -> Option<f32> {
        if x < 0.0 {
            return None;
        }
        let col = (x / self.tile_size).floor() as usize;
        for row in 0..self.rows {
            let tile_top = self.top - row as f32 * self.tile_size;
            if tile_top > from_y {
                continue;
            }
            if self.is_solid(col, row) {
                return Some(tile_top);
            }
        }
        None
    }
}
