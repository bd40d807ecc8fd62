//! Error types for the gamepad driver.

use core::fmt;

/// Errors that can occur when communicating with the gamepad.
#[derive(Debug)]
pub enum GamepadError<E> {
    /// Underlying I2C bus error.
    I2c(E),

    /// An operation requiring bus setup was called before
    /// [`initialize()`](crate::SeesawGamepad::initialize) succeeded.
    NotInitialized,

    /// The keymap references a pin outside the Seesaw GPIO range (0–31).
    InvalidKeymap,
}

// Allow ergonomic `?` propagation from raw I2C errors.
impl<E> From<E> for GamepadError<E> {
    fn from(error: E) -> Self {
        GamepadError::I2c(error)
    }
}

impl<E: fmt::Debug> fmt::Display for GamepadError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GamepadError::I2c(e) => write!(f, "I2C error: {:?}", e),
            GamepadError::NotInitialized => write!(f, "Gamepad not initialized"),
            GamepadError::InvalidKeymap => {
                write!(f, "Keymap pin out of range (must be 0-31)")
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for GamepadError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            GamepadError::I2c(e) => defmt::write!(f, "I2C error: {}", e),
            GamepadError::NotInitialized => defmt::write!(f, "Gamepad not initialized"),
            GamepadError::InvalidKeymap => defmt::write!(f, "Keymap pin out of range"),
        }
    }
}
