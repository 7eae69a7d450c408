use std::time::Duration;

use crate::constants::*;
use crate::ease::Easing;
use crate::error::{CarouselError, CarouselResult};
use crate::layout::Layout;

/// Tunable parameters of the carousel core.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    pub layout: Layout,
    /// Minimum horizontal drag, in pixels, recognised as a swipe.
    pub swipe_threshold: f32,
    pub transition: Duration,
    pub easing: Easing,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            swipe_threshold: SWIPE_THRESHOLD,
            transition: TRANSITION,
            easing: Easing::default(),
        }
    }
}

impl CarouselConfig {
    pub fn validate(&self) -> CarouselResult<()> {
        let Layout {
            depth,
            main_depth,
            space_between,
        } = self.layout;

        for (name, value) in [
            ("depth", depth),
            ("main depth", main_depth),
            ("space between", space_between),
            ("swipe threshold", self.swipe_threshold),
        ] {
            if !value.is_finite() {
                return Err(CarouselError::invalid_config(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if depth < 0.0 || main_depth < 0.0 {
            return Err(CarouselError::invalid_config(
                "depths are distances in front of the camera and must not be negative",
            ));
        }
        if main_depth >= depth {
            return Err(CarouselError::invalid_config(format!(
                "main depth ({main_depth}) must be smaller than depth ({depth})"
            )));
        }
        if self.swipe_threshold < 0.0 {
            return Err(CarouselError::invalid_config(format!(
                "swipe threshold must not be negative, got {}",
                self.swipe_threshold
            )));
        }
        Ok(())
    }
}
