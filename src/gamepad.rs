//! High-level interface for the Adafruit Mini I2C Gamepad.
//!
//! [`SeesawGamepad`] wraps the low-level Seesaw driver with the device
//! lifecycle: a reset-and-configure handshake at startup, then a polling
//! loop that decodes button and stick samples and republishes them as
//! input events.

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use crate::driver::SeesawDriver;
use crate::error::GamepadError;
use crate::event::{dispatch_state, EventSink};
use crate::keymap::{button_mask, KeyEntry, GAMEPAD_KEYMAP};
use crate::registers::{
    ADC_OFFSET, ANALOG_X_PIN, ANALOG_Y_PIN, AXIS_MAX, GPIO_BULK, GPIO_BULK_SET,
    GPIO_DIRCLR_BULK, GPIO_PULLENSET, MODULE_ADC, MODULE_GPIO, MODULE_STATUS,
    RESET_SETTLE_MS, STATUS_HW_ID, STATUS_SWRST, SWRST_KEY,
};

/// One complete gamepad sample: decoded button levels and calibrated axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GamepadState {
    /// Button levels after active-low decoding: bit `n` set means the
    /// button on pin `n` is held down.
    pub buttons: u32,
    /// Stick X position, 0 (full left) to 1023 (full right).
    pub x: u16,
    /// Stick Y position, 0 to 1023.
    pub y: u16,
}

impl GamepadState {
    /// Whether the button wired to `pin` is currently held down.
    pub fn pressed(&self, pin: u8) -> bool {
        pin < 32 && (self.buttons >> pin) & 1 != 0
    }
}

/// High-level interface for the Adafruit Mini I2C Gamepad.
///
/// # Lifecycle
///
/// 1. [`SeesawGamepad::new()`] — constructs the session without any I2C
///    traffic.
/// 2. [`SeesawGamepad::initialize()`] — resets the firmware and configures
///    the button pins. Must succeed before anything else.
/// 3. [`SeesawGamepad::poll()`] — called by the host on a fixed cadence
///    (16 ms works well; see [`POLL_INTERVAL_MS`](crate::POLL_INTERVAL_MS)),
///    delivering each sample to an [`EventSink`].
///
/// # Example
///
/// ```no_run
/// use gamepad_driver::{SeesawGamepad, DEFAULT_ADDRESS};
///
/// # async fn example(
/// #     i2c: impl embedded_hal_async::i2c::I2c,
/// #     delay: impl embedded_hal_async::delay::DelayNs,
/// # ) {
/// let mut pad = SeesawGamepad::new(i2c, delay, DEFAULT_ADDRESS);
/// pad.initialize().await.unwrap();
///
/// let state = pad.read_state().await.unwrap();
/// if state.pressed(5) {
///     // The A button is held down.
/// }
/// # }
/// ```
pub struct SeesawGamepad<I2C, D> {
    driver: SeesawDriver<I2C, D>,
    keymap: &'static [KeyEntry],
    hardware_id: Option<u8>,
    initialized: bool,
    fault_streak: u32,
}

impl<I2C, D> SeesawGamepad<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a session with the factory button wiring
    /// ([`GAMEPAD_KEYMAP`](crate::GAMEPAD_KEYMAP)).
    ///
    /// No I2C traffic is generated. You **must** call
    /// [`initialize()`](Self::initialize) before polling.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access)
    /// * `delay` — delay source used for protocol timing
    /// * `address` — 7-bit I2C device address (typically 0x50)
    pub fn new(i2c: I2C, delay: D, address: u8) -> Self {
        Self::with_keymap(i2c, delay, address, GAMEPAD_KEYMAP)
    }

    /// Create a session with a custom keymap, for rewired boards or for
    /// reporting only a subset of the buttons.
    ///
    /// The keymap drives everything: only its pins are configured as
    /// pulled-up inputs, and only its entries produce key events.
    pub fn with_keymap(
        i2c: I2C,
        delay: D,
        address: u8,
        keymap: &'static [KeyEntry],
    ) -> Self {
        Self {
            driver: SeesawDriver::new(i2c, delay, address),
            keymap,
            hardware_id: None,
            initialized: false,
            fault_streak: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Setup
    // -----------------------------------------------------------------------

    /// Reset the Seesaw firmware and configure the button pins.
    ///
    /// Runs the full startup handshake:
    /// 1. Software reset, then wait for the firmware to come back up.
    /// 2. Read the hardware ID byte. Any value is accepted; it is kept for
    ///    diagnostics (see [`hardware_id()`](Self::hardware_id)).
    /// 3. Switch the keymap's pins to input mode and enable their pull-ups.
    ///
    /// # Errors
    ///
    /// * [`GamepadError::InvalidKeymap`] if any keymap pin is outside 0–31;
    ///   detected before any bus traffic.
    /// * [`GamepadError::I2c`] on communication failure. The session stays
    ///   unready and a later retry is safe: the handshake always starts
    ///   from a fresh reset.
    pub async fn initialize(&mut self) -> Result<(), GamepadError<I2C::Error>> {
        let mask = button_mask(self.keymap).ok_or(GamepadError::InvalidKeymap)?;

        if let Err(e) = self.run_handshake(mask).await {
            #[cfg(feature = "defmt")]
            defmt::error!("Gamepad initialisation failed");
            return Err(e);
        }

        self.initialized = true;
        Ok(())
    }

    async fn run_handshake(&mut self, mask: u32) -> Result<(), GamepadError<I2C::Error>> {
        // Restart the firmware so every module starts from power-on defaults.
        self.driver
            .write_u8(MODULE_STATUS, STATUS_SWRST, SWRST_KEY)
            .await?;

        // The firmware ignores all bus traffic while it reboots.
        self.driver.settle(RESET_SETTLE_MS).await;

        let id = self.driver.read_u8(MODULE_STATUS, STATUS_HW_ID).await?;
        self.hardware_id = Some(id);
        #[cfg(feature = "defmt")]
        defmt::debug!("Seesaw gamepad hardware ID: {=u8:#x}", id);

        // Button pins: input mode first, then pull enable, then pull-up
        // selection. The firmware expects this order.
        self.driver
            .write_u32(MODULE_GPIO, GPIO_DIRCLR_BULK, mask)
            .await?;
        self.driver
            .write_u32(MODULE_GPIO, GPIO_PULLENSET, mask)
            .await?;
        self.driver
            .write_u32(MODULE_GPIO, GPIO_BULK_SET, mask)
            .await?;

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Polling
    // -----------------------------------------------------------------------

    /// Read one complete sample from the device.
    ///
    /// Issues three register reads (buttons, stick X, stick Y). The first
    /// failure aborts the whole sample so callers never see a state mixing
    /// fresh and stale values.
    ///
    /// # Errors
    ///
    /// * [`GamepadError::NotInitialized`] if [`initialize()`](Self::initialize)
    ///   has not succeeded.
    /// * [`GamepadError::I2c`] on communication failure.
    pub async fn read_state(&mut self) -> Result<GamepadState, GamepadError<I2C::Error>> {
        if !self.initialized {
            return Err(GamepadError::NotInitialized);
        }

        let raw = self.driver.read_u32(MODULE_GPIO, GPIO_BULK).await?;
        // Buttons are active-low on the wire; invert once here so that set
        // bits mean pressed everywhere downstream.
        let buttons = !raw;

        let raw_x = self
            .driver
            .read_u16(MODULE_ADC, ADC_OFFSET + ANALOG_X_PIN)
            .await?;
        // The X channel is wired so the raw sample runs backwards (full
        // left reads 1023, full right reads 0); flip it so reported values
        // grow to the right. Samples past full scale wrap rather than clamp.
        let x = AXIS_MAX.wrapping_sub(raw_x);

        let raw_y = self
            .driver
            .read_u16(MODULE_ADC, ADC_OFFSET + ANALOG_Y_PIN)
            .await?;
        // The Y channel already runs the right way; no flip.
        let y = raw_y;

        Ok(GamepadState { buttons, x, y })
    }

    /// Run one poll cycle: read a sample and deliver it to `sink`.
    ///
    /// This is the method to call from the host's timer loop. Transport
    /// failures are absorbed: the cycle is skipped, the failure is logged
    /// once per outage (see [`fault_streak()`](Self::fault_streak)), and
    /// the session stays ready for the next tick. Sink rejections drop the
    /// affected event only.
    ///
    /// # Errors
    ///
    /// * [`GamepadError::NotInitialized`] if [`initialize()`](Self::initialize)
    ///   has not succeeded. This is the only error `poll` returns.
    pub async fn poll<S: EventSink>(
        &mut self,
        sink: &mut S,
    ) -> Result<(), GamepadError<I2C::Error>> {
        let state = match self.read_state().await {
            Ok(state) => state,
            Err(GamepadError::NotInitialized) => {
                return Err(GamepadError::NotInitialized)
            }
            Err(_) => {
                // First failure of a streak gets logged; repeats stay quiet
                // until the bus recovers.
                #[cfg(feature = "defmt")]
                if self.fault_streak == 0 {
                    defmt::warn!("Gamepad poll failed; suppressing repeats");
                }
                self.fault_streak = self.fault_streak.saturating_add(1);
                return Ok(());
            }
        };

        if self.fault_streak > 0 {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "Gamepad polling recovered after {=u32} failed cycles",
                self.fault_streak
            );
            self.fault_streak = 0;
        }

        dispatch_state(&state, self.keymap, sink);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Hardware ID byte captured during [`initialize()`](Self::initialize).
    ///
    /// `None` until the handshake has reached the identity read. The driver
    /// accepts any value; hosts that want to pin a specific board revision
    /// can check it here.
    pub fn hardware_id(&self) -> Option<u8> {
        self.hardware_id
    }

    /// Whether [`initialize()`](Self::initialize) has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of consecutive failed poll cycles, 0 while healthy.
    ///
    /// Resets on the first successful cycle. Hosts can watch this to
    /// decide when a flaky bus has become a dead one.
    pub fn fault_streak(&self) -> u32 {
        self.fault_streak
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
