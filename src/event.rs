//! Input-event boundary between the gamepad session and the host.
//!
//! The driver does not know how the host delivers input events (a queue, a
//! HID report builder, a log). [`EventSink`] is that seam: each poll cycle
//! decodes one [`GamepadState`] and republishes it as a batch of sink calls
//! closed by [`sync()`](EventSink::sync).

use crate::gamepad::GamepadState;
use crate::keymap::{Axis, Button, KeyEntry};

/// Receiver for decoded gamepad input events.
///
/// One poll cycle produces one batch: a key event per keymap entry (in
/// table order), the two axis positions, then a single
/// [`sync()`](EventSink::sync) marking the sample complete. Levels are
/// reported every cycle whether or not they changed; de-duplication is the
/// receiver's business.
///
/// Implementations should be non-blocking: hand the event to a queue and
/// return. Returning `Err` rejects that single event; the rest of the
/// batch is still delivered, so one full queue does not cost the host the
/// sync marker.
pub trait EventSink {
    /// Rejection reason. Only used for diagnostics; a rejected event is
    /// dropped, never retried.
    type Error;

    /// A button level: `pressed` is true while the button is held down.
    fn key(&mut self, button: Button, pressed: bool) -> Result<(), Self::Error>;

    /// An absolute axis position, `0..=AXIS_MAX`.
    fn abs(&mut self, axis: Axis, value: u16) -> Result<(), Self::Error>;

    /// Batch separator: everything since the previous `sync` belongs to
    /// one sample.
    fn sync(&mut self) -> Result<(), Self::Error>;
}

/// Republish one decoded sample as a batch of sink calls.
///
/// GPIO bits without a keymap entry are never reported. Rejected events are
/// skipped individually; the returned count is how many were dropped.
pub(crate) fn dispatch_state<S: EventSink>(
    state: &GamepadState,
    keymap: &[KeyEntry],
    sink: &mut S,
) -> usize {
    let mut dropped = 0;

    for entry in keymap {
        if sink.key(entry.button, state.pressed(entry.pin)).is_err() {
            dropped += 1;
        }
    }
    if sink.abs(Axis::X, state.x).is_err() {
        dropped += 1;
    }
    if sink.abs(Axis::Y, state.y).is_err() {
        dropped += 1;
    }
    if sink.sync().is_err() {
        dropped += 1;
    }

    #[cfg(feature = "defmt")]
    if dropped > 0 {
        defmt::warn!("Dropped {=usize} gamepad input events", dropped);
    }

    dropped
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{RecordingSink, SinkEvent};

    fn sample(buttons: u32, x: u16, y: u16) -> GamepadState {
        GamepadState { buttons, x, y }
    }

    static X_ONLY: &[KeyEntry] = &[KeyEntry { pin: 6, button: Button::X }];

    #[test]
    fn batch_is_keys_then_axes_then_sync() {
        let mut sink = RecordingSink::new();
        let dropped = dispatch_state(&sample(1 << 6, 1023, 512), X_ONLY, &mut sink);

        assert_eq!(dropped, 0);
        let expected = [
            SinkEvent::Key(Button::X, true),
            SinkEvent::Abs(Axis::X, 1023),
            SinkEvent::Abs(Axis::Y, 512),
            SinkEvent::Sync,
        ];
        assert_eq!(&sink.events[..], &expected[..]);
    }

    #[test]
    fn unmapped_bits_are_not_reported() {
        // Pins 0 and 3 are pressed, but only pin 6 is mapped.
        let mut sink = RecordingSink::new();
        dispatch_state(&sample(0b1001, 0, 0), X_ONLY, &mut sink);

        let expected = [
            SinkEvent::Key(Button::X, false),
            SinkEvent::Abs(Axis::X, 0),
            SinkEvent::Abs(Axis::Y, 0),
            SinkEvent::Sync,
        ];
        assert_eq!(&sink.events[..], &expected[..]);
    }

    #[test]
    fn keys_follow_table_order_not_pin_order() {
        static REVERSED: &[KeyEntry] = &[
            KeyEntry { pin: 16, button: Button::Start },
            KeyEntry { pin: 0, button: Button::Select },
        ];

        let mut sink = RecordingSink::new();
        dispatch_state(&sample(1 << 16, 100, 200), REVERSED, &mut sink);

        let expected = [
            SinkEvent::Key(Button::Start, true),
            SinkEvent::Key(Button::Select, false),
            SinkEvent::Abs(Axis::X, 100),
            SinkEvent::Abs(Axis::Y, 200),
            SinkEvent::Sync,
        ];
        assert_eq!(&sink.events[..], &expected[..]);
    }

    #[test]
    fn rejected_event_does_not_stop_the_batch() {
        let mut sink = RecordingSink::new();
        sink.reject_at = Some(0); // reject the first key event

        let dropped = dispatch_state(&sample(1 << 6, 10, 20), X_ONLY, &mut sink);

        assert_eq!(dropped, 1);
        // Everything after the rejected key still arrives, sync included.
        let expected = [
            SinkEvent::Abs(Axis::X, 10),
            SinkEvent::Abs(Axis::Y, 20),
            SinkEvent::Sync,
        ];
        assert_eq!(&sink.events[..], &expected[..]);
    }

    #[test]
    fn rejected_sync_is_counted() {
        let mut sink = RecordingSink::new();
        sink.reject_at = Some(3); // batch for X_ONLY: key, abs, abs, sync

        let dropped = dispatch_state(&sample(0, 0, 0), X_ONLY, &mut sink);

        assert_eq!(dropped, 1);
        assert!(!sink.events.contains(&SinkEvent::Sync));
    }
}
