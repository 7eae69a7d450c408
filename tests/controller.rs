use std::time::Duration;

use carousel::{
    CarouselConfig, CarouselController, CarouselError, Coord, Gesture, Intent, ItemId, Renderer,
    SwipeTracker,
};

/// Remembers the last position of every item. Pointers are plain x
/// coordinates matched against the drawn x of each item.
#[derive(Debug, Default)]
struct RecordingRenderer {
    placed: Vec<Option<Coord>>,
    calls: usize,
}

impl Renderer for RecordingRenderer {
    type Pointer = f32;

    fn place(&mut self, item: ItemId, position: Coord) {
        if self.placed.len() <= item.0 {
            self.placed.resize(item.0 + 1, None);
        }
        self.placed[item.0] = Some(position);
        self.calls += 1;
    }

    fn hit_test(&self, x: f32) -> Option<ItemId> {
        self.placed
            .iter()
            .position(|p| p.is_some_and(|p| (p.x - x).abs() <= 1.0))
            .map(ItemId)
    }
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn controller(items: usize) -> CarouselController<RecordingRenderer> {
    CarouselController::new(items, CarouselConfig::default(), RecordingRenderer::default())
        .unwrap()
}

fn placed(controller: &CarouselController<RecordingRenderer>, item: usize) -> Coord {
    controller.renderer().placed[item].unwrap()
}

#[test]
fn starts_in_source_order_at_rest() {
    let c = controller(3);
    assert_eq!(c.renderer().calls, 3);
    assert_eq!(placed(&c, 0), Coord::new(-4.0, 0.0, -10.0));
    assert_eq!(placed(&c, 1), Coord::new(0.0, 0.0, -5.0));
    assert_eq!(placed(&c, 2), Coord::new(4.0, 0.0, -10.0));
    assert_eq!(c.centered(), Some(ItemId(1)));
    assert!(c.animator().is_idle());
}

#[test]
fn swipe_left_glides_items_to_new_slots() {
    let mut c = controller(3);
    c.advance_left(ms(0));
    assert_eq!(c.centered(), Some(ItemId(2)));

    assert!(c.frame(ms(250)));
    let mid = placed(&c, 2);
    assert!(mid.x > 0.0 && mid.x < 4.0);
    assert!(mid.z > -10.0 && mid.z < -5.0);

    assert!(!c.frame(ms(500)));
    assert_eq!(placed(&c, 1), Coord::new(-4.0, 0.0, -10.0));
    assert_eq!(placed(&c, 2), Coord::new(0.0, 0.0, -5.0));
    assert_eq!(placed(&c, 0), Coord::new(4.0, 0.0, -10.0));
}

#[test]
fn swipe_right_then_left_returns_home() {
    let mut c = controller(4);
    c.advance_right(ms(0));
    c.advance_left(ms(100));
    c.frame(ms(2_000));
    assert_eq!(c.state().order(), (0..4).map(ItemId).collect::<Vec<_>>());
    assert_eq!(placed(&c, 2), Coord::new(4.0, 0.0, -5.0));
}

#[test]
fn center_on_last_of_five_takes_two_left_steps() {
    let mut c = controller(5);
    assert_eq!(c.center_on(4, ms(0)), Ok(true));
    assert_eq!(c.centered(), Some(ItemId(4)));
    // One batched animation pass, one tween per item.
    assert_eq!(c.animator().active_tweens(), 5);
}

#[test]
fn center_on_middle_dispatches_nothing() {
    let mut c = controller(5);
    assert_eq!(c.center_on(2, ms(0)), Ok(false));
    assert!(c.animator().is_idle());
}

#[test]
fn center_on_out_of_range_is_rejected() {
    let mut c = controller(3);
    assert_eq!(
        c.center_on(5, ms(0)),
        Err(CarouselError::InvalidSlot { slot: 5, len: 3 })
    );
    assert_eq!(c.centered(), Some(ItemId(1)));
    assert!(c.animator().is_idle());
}

#[test]
fn rapid_rotations_settle_on_final_order() {
    let mut c = controller(5);
    c.advance_left(ms(0));
    c.frame(ms(100));
    c.advance_left(ms(120));
    c.frame(ms(200));
    c.center_on(0, ms(210)).unwrap();

    assert!(c.frame(ms(600)));
    assert!(!c.frame(ms(710)));

    let targets = c.state().targets(&c.config().layout);
    for (item, coord) in targets {
        assert_eq!(placed(&c, item.0), coord, "item {item:?}");
    }
}

#[test]
fn tap_resolves_through_hit_test() {
    let mut c = controller(3);
    let intent = c.resolve_tap(4.2).unwrap();
    assert_eq!(intent, Intent::CenterOn(2));
    assert_eq!(c.dispatch(intent, ms(0)), Ok(true));
    assert_eq!(c.centered(), Some(ItemId(2)));

    assert_eq!(c.resolve_tap(100.0), None);
}

#[test]
fn swipe_gestures_drive_the_controller() {
    let mut c = controller(3);
    let mut tracker = SwipeTracker::new(c.config().swipe_threshold);

    tracker.press(400.0);
    tracker.drag(300.0);
    let Gesture::Swipe(intent) = tracker.release() else {
        panic!("expected a swipe");
    };
    c.dispatch(intent, ms(0)).unwrap();
    assert_eq!(c.centered(), Some(ItemId(2)));
}

#[test]
fn empty_carousel_accepts_every_intent() {
    let mut c = controller(0);
    assert_eq!(c.dispatch(Intent::AdvanceLeft, ms(0)), Ok(false));
    assert_eq!(c.dispatch(Intent::AdvanceRight, ms(0)), Ok(false));
    assert_eq!(c.dispatch(Intent::CenterOn(0), ms(0)), Ok(false));
    assert!(!c.frame(ms(10)));
    assert_eq!(c.centered(), None);
}

#[test]
fn single_item_stays_centered() {
    let mut c = controller(1);
    c.advance_left(ms(0));
    c.advance_right(ms(0));
    assert_eq!(c.center_on(0, ms(0)), Ok(false));
    c.frame(ms(1_000));
    assert_eq!(placed(&c, 0), Coord::new(-4.0, 0.0, -5.0));
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let mut config = CarouselConfig::default();
    config.layout.depth = f32::INFINITY;
    let err = CarouselController::new(3, config, RecordingRenderer::default()).unwrap_err();
    assert!(matches!(err, CarouselError::InvalidConfig(_)));
}
