//! Async driver for the Adafruit Mini I2C Gamepad.
//!
//! This crate provides an `embedded-hal-async` driver for the Adafruit
//! Seesaw-based Mini I2C Gamepad (Product #5743): six buttons on Seesaw
//! GPIO pins and a two-axis analog stick on Seesaw ADC channels, polled
//! over I2C and republished as input events.
//!
//! # Architecture
//!
//! The crate is split into two layers:
//!
//! - **`driver`** (crate-private) — Low-level Seesaw protocol primitives
//!   that handle I2C timing, endianness, and register addressing.
//! - **[`SeesawGamepad`]** (public) — The device session: software reset
//!   and pin-configuration handshake, whole-sample reads, and a poll cycle
//!   that feeds decoded events to an [`EventSink`].
//!
//! # Quick start
//!
//! ```no_run
//! use gamepad_driver::{SeesawGamepad, DEFAULT_ADDRESS};
//!
//! # async fn example(
//! #     i2c: impl embedded_hal_async::i2c::I2c,
//! #     delay: impl embedded_hal_async::delay::DelayNs,
//! # ) {
//! // Construct with any `embedded-hal-async` I2C and delay implementation.
//! let mut pad = SeesawGamepad::new(i2c, delay, DEFAULT_ADDRESS);
//! pad.initialize().await.unwrap();
//!
//! // Read one decoded sample.
//! let state = pad.read_state().await.unwrap();
//! if state.pressed(5) {
//!     // The A button is held down.
//! }
//! # }
//! ```
//!
//! For continuous input, implement [`EventSink`] and call
//! [`SeesawGamepad::poll()`] from a timer loop; [`POLL_INTERVAL_MS`] is the
//! cadence the board is designed for.
//!
//! # Features
//!
//! - **`defmt`** — Enable `defmt::Format` implementations and diagnostic
//!   logging for embedded targets.

#![no_std]

pub use error::GamepadError;
pub use event::EventSink;
pub use gamepad::{GamepadState, SeesawGamepad};
pub use keymap::{Axis, Button, KeyEntry, GAMEPAD_KEYMAP};
pub use registers::{
    AXIS_FLAT, AXIS_FUZZ, AXIS_MAX, DEFAULT_ADDRESS, POLL_INTERVAL_MAX_MS,
    POLL_INTERVAL_MIN_MS, POLL_INTERVAL_MS,
};

mod driver;
mod error;
mod event;
mod gamepad;
mod keymap;
#[cfg(test)]
mod mock;
mod registers;
