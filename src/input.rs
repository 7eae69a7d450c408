//! Turns raw pointer movement into carousel intents.

/// Abstract requests understood by the controller.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Intent {
    AdvanceLeft,
    AdvanceRight,
    CenterOn(usize),
}

/// Outcome of one press/release cycle.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Gesture {
    Swipe(Intent),
    /// Press and release without movement; resolve with a hit test.
    Tap,
    Ignored,
}

/// Tracks a single horizontal drag between press and release.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: f32,
    end_x: f32,
    pressed: bool,
    moved: bool,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_x: 0.0,
            end_x: 0.0,
            pressed: false,
            moved: false,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn press(&mut self, x: f32) {
        self.start_x = x;
        self.end_x = x;
        self.pressed = true;
        self.moved = false;
    }

    pub fn drag(&mut self, x: f32) {
        if !self.pressed || x == self.end_x {
            return;
        }
        self.end_x = x;
        self.moved = true;
    }

    pub fn release(&mut self) -> Gesture {
        if !self.pressed {
            return Gesture::Ignored;
        }
        self.pressed = false;

        if !self.moved {
            return Gesture::Tap;
        }
        if self.end_x < self.start_x - self.threshold {
            Gesture::Swipe(Intent::AdvanceLeft)
        } else if self.end_x > self.start_x + self.threshold {
            Gesture::Swipe(Intent::AdvanceRight)
        } else {
            Gesture::Ignored
        }
    }
}
