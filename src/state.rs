use crate::error::{CarouselError, CarouselResult};
use crate::layout::{Coord, Layout};

/// Index into the fixed list of image sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Rotation {
    Left,  // First slot moves to the end
    Right, // Last slot moves to the front
}

/// What a call to [`CarouselState::center_on`] did.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Centering {
    pub rotation: Rotation,
    pub steps: usize,
}

/// Ordered arrangement of the carousel items.
///
/// Items live in a fixed arena; the order is a rotation of it, so slot `i`
/// holds item `(i + offset) % len`. Rotations are the only mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    offset: usize,
}

impl CarouselState {
    /// Creates a carousel of `len` items in source order.
    pub fn new(len: usize) -> Self {
        Self { len, offset: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The slot shown in front. Zero for an empty carousel.
    pub fn middle_index(&self) -> usize {
        self.len / 2
    }

    pub fn item_at(&self, slot: usize) -> Option<ItemId> {
        (slot < self.len).then(|| ItemId((slot + self.offset) % self.len))
    }

    pub fn slot_of(&self, item: ItemId) -> Option<usize> {
        (item.0 < self.len).then(|| (item.0 + self.len - self.offset) % self.len)
    }

    /// Items by slot.
    pub fn order(&self) -> Vec<ItemId> {
        (0..self.len)
            .map(|slot| ItemId((slot + self.offset) % self.len))
            .collect()
    }

    pub fn rotate_left(&mut self) {
        if self.len > 0 {
            self.offset = (self.offset + 1) % self.len;
        }
    }

    pub fn rotate_right(&mut self) {
        if self.len > 0 {
            self.offset = (self.offset + self.len - 1) % self.len;
        }
    }

    pub fn rotate(&mut self, rotation: Rotation) {
        match rotation {
            Rotation::Left => self.rotate_left(),
            Rotation::Right => self.rotate_right(),
        }
    }

    /// Brings the item in `slot` to the middle slot, one primitive rotation
    /// at a time, taking the direction that needs the fewest steps without
    /// wrapping around.
    ///
    /// Returns `None` when the slot is already centered (or the carousel is
    /// empty). An out of range slot is rejected and leaves the order intact.
    pub fn center_on(&mut self, slot: usize) -> CarouselResult<Option<Centering>> {
        if self.is_empty() {
            return Ok(None);
        }
        if slot >= self.len {
            return Err(CarouselError::invalid_slot(slot, self.len));
        }

        let middle = self.middle_index();
        let centering = match slot.cmp(&middle) {
            std::cmp::Ordering::Equal => return Ok(None),
            std::cmp::Ordering::Greater => Centering {
                rotation: Rotation::Left,
                steps: slot - middle,
            },
            std::cmp::Ordering::Less => Centering {
                rotation: Rotation::Right,
                steps: middle - slot,
            },
        };

        for _ in 0..centering.steps {
            self.rotate(centering.rotation);
        }
        Ok(Some(centering))
    }

    /// Every item paired with the target coordinate of the slot it occupies.
    pub fn targets(&self, layout: &Layout) -> Vec<(ItemId, Coord)> {
        let order = self.order();
        let coords = crate::layout::targets_for(&order, layout);
        order.into_iter().zip(coords).collect()
    }
}
