use std::time::Duration;

use crate::ease::Easing;
use crate::layout::Coord;
use crate::state::ItemId;

/// Interpolation of one item from `from` to `to` over a fixed duration.
///
/// Time is read from the host clock on every sample, so the tween lands on
/// `to` after `duration` no matter how many frames were drawn meanwhile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub item: ItemId,
    pub started_at: Duration,
    pub duration: Duration,
    pub from: Coord,
    pub to: Coord,
    pub easing: Easing,
}

impl Tween {
    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        now.saturating_sub(self.started_at) >= self.duration
    }

    pub fn sample(&self, now: Duration) -> Coord {
        if self.is_finished(now) {
            return self.to;
        }
        let t = self.easing.apply(self.progress(now));
        self.from.lerp_xz(self.to, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tween(easing: Easing) -> Tween {
        Tween {
            item: ItemId(0),
            started_at: Duration::from_millis(1_000),
            duration: Duration::from_millis(500),
            from: Coord::new(0.0, 0.0, -10.0),
            to: Coord::new(4.0, 0.0, -5.0),
            easing,
        }
    }

    #[test]
    fn halfway_is_ahead_of_linear() {
        let tween = tween(Easing::CubicOut);
        let linear = self::tween(Easing::Linear);
        let now = Duration::from_millis(1_250);

        let eased = tween.sample(now);
        let straight = linear.sample(now);

        assert!(eased.x > 0.0 && eased.x < 4.0);
        assert!(eased.z > -10.0 && eased.z < -5.0);
        assert!(eased.x > straight.x);
        assert!(eased.z > straight.z);
        assert_eq!(eased.y, 0.0);
    }

    #[test]
    fn lands_exactly_on_target() {
        let tween = tween(Easing::CubicOut);
        assert_eq!(tween.sample(Duration::from_millis(1_500)), tween.to);
        assert_eq!(tween.sample(Duration::from_secs(60)), tween.to);
        assert!(tween.is_finished(Duration::from_millis(1_500)));
        assert!(!tween.is_finished(Duration::from_millis(1_499)));
    }

    #[test]
    fn before_start_stays_at_source() {
        let tween = tween(Easing::CubicOut);
        assert_eq!(tween.progress(Duration::from_millis(10)), 0.0);
        assert_eq!(tween.sample(Duration::from_millis(10)), tween.from);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let mut tween = tween(Easing::Linear);
        tween.duration = Duration::ZERO;
        assert_eq!(tween.progress(tween.started_at), 1.0);
        assert_eq!(tween.sample(tween.started_at), tween.to);
    }
}
