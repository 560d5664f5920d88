// ============================================================================
// SLIDESHOW — background frame rendering + rotation state
// ============================================================================
//
// Owns the export pipeline for the photo catalog: one background render per
// item at frame resolution, results delivered over a channel and written
// into a slot array by catalog index (arrival order does not matter). The
// GUI polls each frame, reads the slots, and draws a skeleton for any slot
// that has not arrived yet.
//
// Teardown drops the receiver and raises the cancel flag; a worker that
// finishes afterwards finds a closed channel and its frame is discarded
// without touching freed state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::{Duration, Instant};

use image::RgbaImage;

use crate::canvas::{Surface, FRAME_DIMS};
use crate::catalog::MockupItem;
use crate::ops::mockup::render_mockup;

/// Automatic rotation period.
pub const ROTATE_INTERVAL: Duration = Duration::from_millis(5000);

pub struct Slideshow {
    items: Vec<MockupItem>,
    slots: Vec<Option<RgbaImage>>,
    current: usize,
    next_rotation: Instant,
    receiver: Receiver<(usize, RgbaImage)>,
    cancel: Arc<AtomicBool>,
}

impl Slideshow {
    /// Start one background render per item and return the rotation state.
    pub fn spawn(items: &[MockupItem]) -> Self {
        Self::spawn_at(items, Instant::now())
    }

    pub fn spawn_at(items: &[MockupItem], now: Instant) -> Self {
        let (sender, receiver) = mpsc::channel();
        let cancel = Arc::new(AtomicBool::new(false));

        for (idx, item) in items.iter().enumerate() {
            let sender = sender.clone();
            let cancel = Arc::clone(&cancel);
            let item = *item;
            rayon::spawn(move || {
                // Torn down before we started? Skip the render entirely.
                if cancel.load(Ordering::Relaxed) {
                    return;
                }
                let (w, h) = FRAME_DIMS;
                let mut surface = Surface::new(w, h);
                render_mockup(&mut surface, &item);
                // The receiver may be gone if teardown raced us; the frame
                // is simply dropped here.
                let _ = sender.send((idx, surface.into_pixels()));
            });
        }
        crate::log_info!("slideshow: spawned {} frame renders", items.len());

        Self::with_receiver(items.to_vec(), receiver, cancel, now)
    }

    /// Assemble the state around an existing channel. Workers are whatever
    /// feeds `receiver`; `spawn_at` is the production wiring.
    fn with_receiver(
        items: Vec<MockupItem>,
        receiver: Receiver<(usize, RgbaImage)>,
        cancel: Arc<AtomicBool>,
        now: Instant,
    ) -> Self {
        let slots = items.iter().map(|_| None).collect();
        Self {
            items,
            slots,
            current: 0,
            next_rotation: now + ROTATE_INTERVAL,
            receiver,
            cancel,
        }
    }

    /// Drain finished renders into their slots. Returns how many arrived.
    pub fn poll(&mut self) -> usize {
        let mut arrived = 0;
        while let Ok((idx, frame)) = self.receiver.try_recv() {
            if let Some(slot) = self.slots.get_mut(idx) {
                *slot = Some(frame);
                arrived += 1;
            }
        }
        arrived
    }

    /// Advance to the next frame if the rotation period has elapsed.
    /// Manual navigation does not reschedule the rotation.
    pub fn advance_if_due(&mut self, now: Instant) -> bool {
        if self.items.is_empty() || now < self.next_rotation {
            return false;
        }
        self.current = (self.current + 1) % self.items.len();
        self.next_rotation = now + ROTATE_INTERVAL;
        true
    }

    /// Time left until the next automatic rotation.
    pub fn until_rotation(&self, now: Instant) -> Duration {
        self.next_rotation.saturating_duration_since(now)
    }

    pub fn next(&mut self) {
        if !self.items.is_empty() {
            self.current = (self.current + 1) % self.items.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.items.is_empty() {
            self.current = (self.current + self.items.len() - 1) % self.items.len();
        }
    }

    /// Jump to an absolute index (pagination dots).
    pub fn select(&mut self, idx: usize) {
        if !self.items.is_empty() {
            self.current = idx % self.items.len();
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[MockupItem] {
        &self.items
    }

    pub fn current_item(&self) -> Option<&MockupItem> {
        self.items.get(self.current)
    }

    /// Rendered frame for a slot, if its background render has finished.
    pub fn frame(&self, idx: usize) -> Option<&RgbaImage> {
        self.slots.get(idx).and_then(|slot| slot.as_ref())
    }

    pub fn ready_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

impl Drop for Slideshow {
    fn drop(&mut self) {
        // Lets in-flight workers skip their render; the channel closing as
        // `receiver` drops is what guarantees no write lands after this.
        self.cancel.store(true, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::photo_items;

    fn idle_show(count: usize, now: Instant) -> (Slideshow, mpsc::Sender<(usize, RgbaImage)>) {
        let (sender, receiver) = mpsc::channel();
        let items: Vec<MockupItem> = photo_items().iter().cycle().take(count).copied().collect();
        let show = Slideshow::with_receiver(items, receiver, Arc::new(AtomicBool::new(false)), now);
        (show, sender)
    }

    #[test]
    fn test_navigation_wraps_both_ways() {
        let now = Instant::now();
        let (mut show, _tx) = idle_show(4, now);
        assert_eq!(show.current_index(), 0);
        show.prev();
        assert_eq!(show.current_index(), 3);
        show.next();
        assert_eq!(show.current_index(), 0);
        for _ in 0..5 {
            show.next();
        }
        assert_eq!(show.current_index(), 1);
        show.select(7);
        assert_eq!(show.current_index(), 3);
    }

    #[test]
    fn test_rotation_fires_once_per_period() {
        let now = Instant::now();
        let (mut show, _tx) = idle_show(4, now);
        assert!(!show.advance_if_due(now));
        assert!(!show.advance_if_due(now + Duration::from_millis(4999)));
        assert!(show.advance_if_due(now + Duration::from_millis(5000)));
        assert_eq!(show.current_index(), 1);
        // Just fired — not due again until a full period later
        assert!(!show.advance_if_due(now + Duration::from_millis(5001)));
        assert!(show.advance_if_due(now + Duration::from_millis(10_000)));
        assert_eq!(show.current_index(), 2);
    }

    #[test]
    fn test_manual_navigation_keeps_rotation_schedule() {
        let now = Instant::now();
        let (mut show, _tx) = idle_show(4, now);
        show.next();
        show.next();
        assert_eq!(show.current_index(), 2);
        // The rotation that was scheduled at spawn still fires on time.
        assert!(show.advance_if_due(now + ROTATE_INTERVAL));
        assert_eq!(show.current_index(), 3);
    }

    #[test]
    fn test_out_of_order_results_land_by_index() {
        let now = Instant::now();
        let (mut show, tx) = idle_show(3, now);
        assert_eq!(show.ready_count(), 0);
        assert!(show.frame(2).is_none());

        tx.send((2, RgbaImage::new(4, 4))).unwrap();
        tx.send((0, RgbaImage::new(8, 8))).unwrap();
        assert_eq!(show.poll(), 2);

        assert_eq!(show.frame(0).unwrap().width(), 8);
        assert!(show.frame(1).is_none());
        assert_eq!(show.frame(2).unwrap().width(), 4);
        assert_eq!(show.ready_count(), 2);
    }

    #[test]
    fn test_result_for_unknown_slot_is_discarded() {
        let now = Instant::now();
        let (mut show, tx) = idle_show(2, now);
        tx.send((9, RgbaImage::new(4, 4))).unwrap();
        assert_eq!(show.poll(), 0);
        assert_eq!(show.ready_count(), 0);
    }

    #[test]
    fn test_teardown_closes_channel_for_late_workers() {
        let now = Instant::now();
        let (show, tx) = idle_show(2, now);
        let cancel = Arc::clone(&show.cancel);
        assert!(!cancel.load(Ordering::Relaxed));
        drop(show);
        assert!(cancel.load(Ordering::Relaxed));
        // A completion racing the teardown hits a closed channel.
        assert!(tx.send((0, RgbaImage::new(4, 4))).is_err());
    }

    #[test]
    fn test_empty_catalog_is_inert() {
        let now = Instant::now();
        let (mut show, _tx) = idle_show(0, now);
        show.next();
        show.prev();
        show.select(3);
        assert_eq!(show.current_index(), 0);
        assert!(!show.advance_if_due(now + ROTATE_INTERVAL));
        assert!(show.current_item().is_none());
    }
}
