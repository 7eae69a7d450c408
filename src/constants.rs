use std::time::Duration;

pub const DEPTH: f32 = 10.0;                   // Depth of every slot except the centered one
pub const MAIN_DEPTH: f32 = 5.0;               // Depth of the centered slot
pub const SPACE_BETWEEN: f32 = 4.0;            // Horizontal distance between two slots
pub const SWIPE_THRESHOLD: f32 = 50.0;         // Drag distance (px) needed to count as a swipe
pub const TRANSITION: Duration = Duration::from_millis(500);

pub const WINDOW_WIDTH: i32 = 1280;            // Initial window size
pub const WINDOW_HEIGHT: i32 = 720;
pub const FPS: u32 = 60;                       // Target frame rate, not guaranteed

pub const FIELD_OF_VIEW: f32 = 60.0;           // Vertical fov (degrees)
pub const ITEM_RADIUS: f32 = 1.0;              // Radius of a disc, also used for picking
pub const FLOOR_Y: f32 = -2.3;                 // Height of the floor receiving shadows
