use std::time::Duration;

use crate::ease::Easing;
use crate::layout::Coord;
use crate::state::ItemId;
use crate::tween::Tween;

/// Glides every item from where it is drawn to where the order says it
/// belongs.
///
/// Tweens are never cancelled. A retarget stacks a new tween on top of any
/// still running one for the same item; tweens are applied in start order,
/// so the newest one decides the drawn position until it finishes.
#[derive(Debug, Clone)]
pub struct TransitionAnimator {
    duration: Duration,
    easing: Easing,
    positions: Vec<Coord>,
    tweens: Vec<Tween>,
}

impl TransitionAnimator {
    /// `initial` holds the starting position of every item, indexed by item.
    pub fn new(initial: Vec<Coord>, duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            positions: initial,
            tweens: Vec::new(),
        }
    }

    pub fn position(&self, item: ItemId) -> Option<Coord> {
        self.positions.get(item.0).copied()
    }

    /// Current positions, indexed by item.
    pub fn positions(&self) -> &[Coord] {
        &self.positions
    }

    pub fn active_tweens(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_idle(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Starts a tween for each `(item, target)` from the item's current
    /// position. Unknown items are skipped. Returns the number of tweens
    /// started.
    pub fn retarget<I>(&mut self, targets: I, now: Duration) -> usize
    where
        I: IntoIterator<Item = (ItemId, Coord)>,
    {
        let before = self.tweens.len();
        for (item, to) in targets {
            let Some(from) = self.position(item) else {
                tracing::warn!(item = item.0, "retarget for unknown item ignored");
                continue;
            };
            self.tweens.push(Tween {
                item,
                started_at: now,
                duration: self.duration,
                from,
                to,
                easing: self.easing,
            });
        }
        let started = self.tweens.len() - before;
        tracing::debug!(started, active = self.tweens.len(), "retargeted");
        started
    }

    /// Moves every animated item to its position at `now`. Returns whether
    /// any tween is still running afterwards.
    pub fn advance(&mut self, now: Duration) -> bool {
        for tween in &self.tweens {
            if let Some(position) = self.positions.get_mut(tween.item.0) {
                *position = tween.sample(now);
            }
        }
        self.tweens.retain(|tween| !tween.is_finished(now));
        !self.tweens.is_empty()
    }
}
