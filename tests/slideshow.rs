// Lifecycle tests for the slideshow against real background renders: frames
// are produced on the rayon pool at frame resolution and land in their slots
// no matter the arrival order.

use std::time::{Duration, Instant};

use padforge::canvas::FRAME_DIMS;
use padforge::catalog::photo_items;
use padforge::slideshow::{Slideshow, ROTATE_INTERVAL};

/// Poll until every slot is filled, failing the test after `limit`.
fn wait_for_all_frames(show: &mut Slideshow, limit: Duration) {
    let start = Instant::now();
    while show.ready_count() < show.item_count() {
        show.poll();
        assert!(
            start.elapsed() < limit,
            "only {}/{} frames after {:?}",
            show.ready_count(),
            show.item_count(),
            limit
        );
        std::thread::sleep(Duration::from_millis(25));
    }
}

#[test]
fn background_renders_fill_every_slot() {
    let mut show = Slideshow::spawn(photo_items());
    assert_eq!(show.item_count(), photo_items().len());
    assert_eq!(show.current_index(), 0);

    wait_for_all_frames(&mut show, Duration::from_secs(120));

    let (w, h) = FRAME_DIMS;
    for idx in 0..show.item_count() {
        let frame = show.frame(idx).unwrap();
        assert_eq!((frame.width(), frame.height()), (w, h), "slot {}", idx);
    }
}

#[test]
fn navigation_follows_the_catalog_order() {
    let t0 = Instant::now();
    let mut show = Slideshow::spawn_at(photo_items(), t0);
    wait_for_all_frames(&mut show, Duration::from_secs(120));

    show.select(2);
    assert_eq!(show.current_item().unwrap().title, photo_items()[2].title);
    show.next();
    show.next();
    assert_eq!(show.current_item().unwrap().title, photo_items()[0].title);

    // Rotation keeps its spawn-time schedule regardless of the navigation
    // above. The clock is passed in, so real render time cannot skew this.
    assert_eq!(show.until_rotation(t0), ROTATE_INTERVAL);
    assert!(!show.advance_if_due(t0 + ROTATE_INTERVAL - Duration::from_millis(1)));
    assert!(show.advance_if_due(t0 + ROTATE_INTERVAL));
    assert_eq!(show.current_item().unwrap().title, photo_items()[1].title);
}

#[test]
fn teardown_during_inflight_renders_is_clean() {
    // Dropped immediately: workers that have not finished find the cancel
    // flag raised or the channel closed, and no test thread is left waiting.
    let show = Slideshow::spawn(photo_items());
    drop(show);
}
