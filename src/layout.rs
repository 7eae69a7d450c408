use crate::constants::*;
use crate::state::ItemId;

/// A point in scene space. Carousel items always sit at `y == 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coord {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Coord {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Moves `x` and `z` towards `to` by `t`; `y` is taken from `to` as is.
    pub fn lerp_xz(self, to: Coord, t: f32) -> Coord {
        Coord {
            x: self.x + (to.x - self.x) * t,
            y: to.y,
            z: self.z + (to.z - self.z) * t,
        }
    }
}

/// Geometry parameters of the arrangement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub depth: f32,
    pub main_depth: f32,
    pub space_between: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            depth: DEPTH,
            main_depth: MAIN_DEPTH,
            space_between: SPACE_BETWEEN,
        }
    }
}

impl Layout {
    /// Target coordinate of `slot` in a carousel of `len` slots.
    pub fn slot_coord(&self, slot: usize, len: usize) -> Coord {
        let x = (slot as f32 - 1.0) * self.space_between;
        let z = if slot == len / 2 {
            -self.main_depth
        } else {
            -self.depth
        };
        Coord::new(x, 0.0, z)
    }
}

/// Target coordinate for every slot of `order`, indexed by slot.
///
/// Only the length of the order matters: coordinates belong to slots, the
/// order decides which item ends up in which slot.
pub fn targets_for(order: &[ItemId], layout: &Layout) -> Vec<Coord> {
    (0..order.len())
        .map(|slot| layout.slot_coord(slot, order.len()))
        .collect()
}
