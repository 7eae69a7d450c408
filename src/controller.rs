use std::time::Duration;

use crate::animator::TransitionAnimator;
use crate::config::CarouselConfig;
use crate::error::CarouselResult;
use crate::input::Intent;
use crate::layout::Coord;
use crate::state::{CarouselState, ItemId, Rotation};

/// Whatever draws the items. The controller only tells it where each item is.
pub trait Renderer {
    /// Screen-space input a hit test understands (a pick ray, a cursor...).
    type Pointer;

    fn place(&mut self, item: ItemId, position: Coord);

    fn hit_test(&self, pointer: Self::Pointer) -> Option<ItemId>;
}

/// Owns the carousel order and its animation, and drives a [`Renderer`].
#[derive(Debug)]
pub struct CarouselController<R> {
    config: CarouselConfig,
    state: CarouselState,
    animator: TransitionAnimator,
    renderer: R,
}

impl<R: Renderer> CarouselController<R> {
    /// Builds a carousel of `item_count` items in source order and places
    /// every item at its resting position.
    pub fn new(item_count: usize, config: CarouselConfig, mut renderer: R) -> CarouselResult<Self> {
        config.validate()?;

        let state = CarouselState::new(item_count);
        let targets = state.targets(&config.layout);
        let mut initial = vec![Coord::default(); item_count];
        for &(item, coord) in &targets {
            initial[item.0] = coord;
            renderer.place(item, coord);
        }
        let animator = TransitionAnimator::new(initial, config.transition, config.easing);

        tracing::info!(items = item_count, middle = state.middle_index(), "carousel ready");
        Ok(Self {
            config,
            state,
            animator,
            renderer,
        })
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn animator(&self) -> &TransitionAnimator {
        &self.animator
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The item currently in the front slot.
    pub fn centered(&self) -> Option<ItemId> {
        self.state.item_at(self.state.middle_index())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn advance_left(&mut self, now: Duration) {
        self.rotate(Rotation::Left, now);
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn advance_right(&mut self, now: Duration) {
        self.rotate(Rotation::Right, now);
    }

    /// Brings `slot` to the front. Returns whether anything moved.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn center_on(&mut self, slot: usize, now: Duration) -> CarouselResult<bool> {
        let Some(centering) = self.state.center_on(slot)? else {
            return Ok(false);
        };
        tracing::debug!(
            rotation = ?centering.rotation,
            steps = centering.steps,
            order = ?self.state.order(),
            "centered"
        );
        self.animate(now);
        Ok(true)
    }

    /// Applies `intent`. Returns whether a transition was started.
    pub fn dispatch(&mut self, intent: Intent, now: Duration) -> CarouselResult<bool> {
        match intent {
            Intent::AdvanceLeft => self.advance_left(now),
            Intent::AdvanceRight => self.advance_right(now),
            Intent::CenterOn(slot) => return self.center_on(slot, now),
        }
        Ok(!self.state.is_empty())
    }

    /// Maps a tap to the slot of the item under it.
    pub fn resolve_tap(&self, pointer: R::Pointer) -> Option<Intent> {
        let item = self.renderer.hit_test(pointer)?;
        self.state.slot_of(item).map(Intent::CenterOn)
    }

    /// Advances the animation to `now` and hands every position to the
    /// renderer. Returns whether a transition is still running.
    pub fn frame(&mut self, now: Duration) -> bool {
        let animating = self.animator.advance(now);
        for (index, &position) in self.animator.positions().iter().enumerate() {
            self.renderer.place(ItemId(index), position);
        }
        animating
    }

    fn rotate(&mut self, rotation: Rotation, now: Duration) {
        if self.state.is_empty() {
            return;
        }
        self.state.rotate(rotation);
        tracing::debug!(?rotation, order = ?self.state.order(), "rotated");
        self.animate(now);
    }

    fn animate(&mut self, now: Duration) {
        let targets = self.state.targets(&self.config.layout);
        self.animator.retarget(targets, now);
    }
}
