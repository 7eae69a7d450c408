#![forbid(unsafe_code)]

pub mod animator;
pub mod config;
pub mod constants;
pub mod controller;
pub mod ease;
pub mod error;
pub mod input;
pub mod layout;
pub mod state;
pub mod tween;

pub use animator::TransitionAnimator;
pub use config::CarouselConfig;
pub use controller::{CarouselController, Renderer};
pub use ease::Easing;
pub use error::{CarouselError, CarouselResult};
pub use input::{Gesture, Intent, SwipeTracker};
pub use layout::{Coord, Layout, targets_for};
pub use state::{CarouselState, Centering, ItemId, Rotation};
pub use tween::Tween;
