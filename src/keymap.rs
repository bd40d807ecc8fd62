//! Button and axis definitions for the Adafruit Mini I2C Gamepad.
//!
//! The gamepad wires its six buttons to Seesaw GPIO pins and its analog
//! stick to two ADC channels. [`GAMEPAD_KEYMAP`] records the button wiring
//! as a declarative table: the session derives its GPIO configuration mask
//! from it, and the poll loop emits key events in the same table order.

/// All physical buttons on the gamepad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    A,
    B,
    X,
    Y,
    Start,
    Select,
}

impl Button {
    pub const fn name(self) -> &'static str {
        match self {
            Button::A => "A",
            Button::B => "B",
            Button::X => "X",
            Button::Y => "Y",
            Button::Start => "Start",
            Button::Select => "Select",
        }
    }
}

impl core::fmt::Display for Button {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// The two analog stick axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
}

/// One keymap entry: a Seesaw GPIO pin and the button wired to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEntry {
    /// Seesaw GPIO pin number (0–31).
    pub pin: u8,
    /// Button reported for this pin.
    pub button: Button,
}

/// Factory button wiring of the Adafruit Mini I2C Gamepad.
///
/// This table drives both halves of button handling: the pins are collected
/// into the 32-bit mask used to configure GPIO direction and pull-ups at
/// initialisation, and each poll cycle reports one key event per entry, in
/// table order.
///
/// **Invariant:** every pin must be in 0–31. A table violating this is
/// rejected with `InvalidKeymap` before any I2C traffic.
pub const GAMEPAD_KEYMAP: &[KeyEntry] = &[
    KeyEntry { pin: 5, button: Button::A },
    KeyEntry { pin: 1, button: Button::B },
    KeyEntry { pin: 6, button: Button::X },
    KeyEntry { pin: 2, button: Button::Y },
    KeyEntry { pin: 16, button: Button::Start },
    KeyEntry { pin: 0, button: Button::Select },
];

/// Collect the pins of `entries` into a 32-bit GPIO mask.
///
/// Returns `None` if any entry references a pin outside 0–31.
pub(crate) fn button_mask(entries: &[KeyEntry]) -> Option<u32> {
    let mut mask = 0u32;
    for entry in entries {
        if entry.pin >= 32 {
            return None;
        }
        mask |= 1 << entry.pin;
    }
    Some(mask)
}

// ── Unit Tests ───────────────────────────────────────────────────────
