use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::Parser;
use raylib::prelude::*;

use carousel::constants::*;
use carousel::{CarouselConfig, CarouselController, Easing, Gesture, Intent, Layout, SwipeTracker};

mod logging;
mod scene;
mod slide;
mod texture_loader;

use crate::scene::Scene;
use crate::texture_loader::{load_disc_texture, resolve_image_sources};

/// Images as discs in a 3D carousel. Swipe, click or use the arrow keys.
#[derive(Parser, Debug)]
#[command(name = "carousel", version)]
struct Cli {
    /// Image files or directories, in display order.
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Depth of the slots in the back.
    #[arg(long, default_value_t = DEPTH)]
    depth: f32,

    /// Depth of the centered slot.
    #[arg(long, default_value_t = MAIN_DEPTH)]
    main_depth: f32,

    /// Horizontal distance between two slots.
    #[arg(long, default_value_t = SPACE_BETWEEN)]
    space_between: f32,

    /// Drag distance in pixels needed for a swipe.
    #[arg(long, default_value_t = SWIPE_THRESHOLD)]
    swipe_threshold: f32,

    /// Transition duration in milliseconds.
    #[arg(long, default_value_t = TRANSITION.as_millis() as u64)]
    transition_ms: u64,

    /// Easing curve of the transition.
    #[arg(long, value_enum, default_value_t = Easing::CubicOut)]
    easing: Easing,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,

    #[arg(long, default_value_t = FPS)]
    fps: u32,

    /// Default log filter, overridden by CAROUSEL_LOG or RUST_LOG.
    #[arg(long, default_value = "info")]
    log: String,
}

impl Cli {
    fn carousel_config(&self) -> CarouselConfig {
        CarouselConfig {
            layout: Layout {
                depth: self.depth,
                main_depth: self.main_depth,
                space_between: self.space_between,
            },
            swipe_threshold: self.swipe_threshold,
            transition: Duration::from_millis(self.transition_ms),
            easing: self.easing,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log)?;

    let config = cli.carousel_config();
    config.validate().context("invalid carousel settings")?;

    let image_paths =
        resolve_image_sources(&cli.images).context("failed to resolve image sources")?;

    let (mut rl, thread) = raylib::init()
        .size(cli.width, cli.height)
        .title("Carousel")
        .vsync()
        .msaa_4x()
        .resizable()
        .build();
    rl.set_target_fps(cli.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load one disc texture per image, skipping the broken ones ---
    let mut textures = Vec::new();
    for path in &image_paths {
        match load_disc_texture(&mut rl, &thread, path) {
            Ok(texture) => textures.push(texture),
            Err(e) => tracing::warn!(error = %e, "skipping image"),
        }
    }
    if textures.is_empty() {
        bail!("none of the {} image(s) could be loaded", image_paths.len());
    }

    let scene = Scene::new(textures);
    tracing::info!(items = scene.len(), "textures loaded");

    let mut controller = CarouselController::new(scene.len(), config, scene)?;
    let mut swipe = SwipeTracker::new(controller.config().swipe_threshold);

    // --- Main Loop ---
    while !rl.window_should_close() {
        let now = Duration::from_secs_f64(rl.get_time());

        if rl.is_window_resized() {
            tracing::info!(
                width = rl.get_screen_width(),
                height = rl.get_screen_height(),
                "window resized"
            );
        }

        // --- Input: everything is handled before the frame is drawn ---
        let mut intents = Vec::new();
        let mouse = rl.get_mouse_position();

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            swipe.press(mouse.x);
        } else if rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
            swipe.drag(mouse.x);
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            swipe.drag(mouse.x);
            match swipe.release() {
                Gesture::Swipe(intent) => intents.push(intent),
                Gesture::Tap => {
                    let ray = rl.get_screen_to_world_ray(mouse, controller.renderer().camera);
                    intents.extend(controller.resolve_tap(ray));
                }
                Gesture::Ignored => {}
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            intents.push(Intent::AdvanceLeft);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            intents.push(Intent::AdvanceRight);
        }

        for intent in intents {
            if let Err(e) = controller.dispatch(intent, now) {
                tracing::warn!(?intent, error = %e, "intent rejected");
            }
        }

        // --- Animate, then draw ---
        controller.frame(now);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::RAYWHITE);
        controller.renderer().draw(&mut d);
    }

    Ok(())
}
