//! Coordinate conversion between screen space and world space.
//!
//! All gesture math runs in world coordinates; pointer positions are
//! converted on entry. The same formulas back the renderer's transform,
//! so the two layers can never drift apart.

use crate::geometry::{point, Point};

/// Context needed for coordinate conversions.
pub struct CoordinateContext<'a> {
    pub view_offset: &'a Point,
    pub zoom: f32,
}

impl<'a> CoordinateContext<'a> {
    #[inline]
    pub fn new(view_offset: &'a Point, zoom: f32) -> Self {
        Self { view_offset, zoom }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a screen position to world coordinates.
    #[inline]
    pub fn screen_to_world(screen: Point, ctx: &CoordinateContext<'_>) -> Point {
        point(
            (screen.x - ctx.view_offset.x) / ctx.zoom,
            (screen.y - ctx.view_offset.y) / ctx.zoom,
        )
    }

    /// Convert a world position to screen coordinates.
    #[inline]
    pub fn world_to_screen(world: Point, ctx: &CoordinateContext<'_>) -> Point {
        point(
            world.x * ctx.zoom + ctx.view_offset.x,
            world.y * ctx.zoom + ctx.view_offset.y,
        )
    }

    /// Convert a screen-space delta to world units (drag math).
    #[inline]
    pub fn delta_screen_to_world(delta: Point, zoom: f32) -> Point {
        point(delta.x / zoom, delta.y / zoom)
    }
}
