//! Low-level Seesaw protocol driver.
//!
//! Implements the I2C communication primitives required by the Seesaw
//! firmware, including the mandatory 125µs delay between write and read
//! phases.
//!
//! This module is crate-private — consumers interact with `SeesawGamepad`
//! in `gamepad.rs` instead.

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use crate::error::GamepadError;
use crate::registers::SEESAW_DELAY_US;

/// Low-level Seesaw protocol driver.
///
/// Owns an I2C peripheral and a delay source, and provides read/write
/// primitives that respect the Seesaw timing requirements. Registers are
/// addressed by `(module, function)` byte pairs.
pub(crate) struct SeesawDriver<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
}

impl<I2C, D> SeesawDriver<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a new Seesaw driver.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access)
    /// * `delay` — delay source used for protocol timing
    /// * `address` — 7-bit I2C device address (typically 0x50)
    pub fn new(i2c: I2C, delay: D, address: u8) -> Self {
        Self { i2c, delay, address }
    }

    // -----------------------------------------------------------------------
    // Core protocol primitives
    // -----------------------------------------------------------------------

    /// Write a register address, wait the required delay, then read the
    /// response.
    ///
    /// This implements the Seesaw protocol timing requirement:
    /// 1. Write register address (2 bytes)
    /// 2. Wait 125µs for firmware to prepare data
    /// 3. Read response bytes
    ///
    /// Uses separate `write()` and `read()` operations rather than
    /// `write_read()` because many I2C implementations use a repeated-start
    /// for `write_read()` which does not allow sufficient delay for the
    /// Seesaw firmware.
    async fn write_then_read(
        &mut self,
        module: u8,
        function: u8,
        buffer: &mut [u8],
    ) -> Result<(), GamepadError<I2C::Error>> {
        // Write register address
        self.i2c.write(self.address, &[module, function]).await?;

        // Seesaw firmware needs this gap to stage the response
        self.delay.delay_us(SEESAW_DELAY_US).await;

        // Read response
        self.i2c.read(self.address, buffer).await?;

        Ok(())
    }

    /// Wait out a firmware settle period, e.g. after a software reset.
    pub async fn settle(&mut self, ms: u32) {
        self.delay.delay_ms(ms).await;
    }

    // -----------------------------------------------------------------------
    // Typed read/write helpers
    // -----------------------------------------------------------------------

    /// Read a single byte from a register.
    pub async fn read_u8(
        &mut self,
        module: u8,
        function: u8,
    ) -> Result<u8, GamepadError<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.write_then_read(module, function, &mut buf).await?;
        Ok(buf[0])
    }

    /// Read a 16-bit unsigned integer from a register.
    ///
    /// Reads 2 bytes and converts from big-endian (Seesaw byte order) to
    /// the host's native representation.
    pub async fn read_u16(
        &mut self,
        module: u8,
        function: u8,
    ) -> Result<u16, GamepadError<I2C::Error>> {
        let mut buf = [0u8; 2];
        self.write_then_read(module, function, &mut buf).await?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Read a 32-bit unsigned integer from a register.
    pub async fn read_u32(
        &mut self,
        module: u8,
        function: u8,
    ) -> Result<u32, GamepadError<I2C::Error>> {
        let mut buf = [0u8; 4];
        self.write_then_read(module, function, &mut buf).await?;
        Ok(u32::from_be_bytes(buf))
    }

    /// Write a single byte to a register.
    pub async fn write_u8(
        &mut self,
        module: u8,
        function: u8,
        value: u8,
    ) -> Result<(), GamepadError<I2C::Error>> {
        let buf = [module, function, value];
        self.i2c.write(self.address, &buf).await?;

        Ok(())
    }

    /// Write a 32-bit unsigned integer to a register.
    ///
    /// Converts `value` to big-endian bytes and sends them together with the
    /// 2-byte register address in a single I2C write transaction.
    pub async fn write_u32(
        &mut self,
        module: u8,
        function: u8,
        value: u32,
    ) -> Result<(), GamepadError<I2C::Error>> {
        // Full write buffer: [module, function, b3, b2, b1, b0]
        let mut buf = [0u8; 6];
        buf[0] = module;
        buf[1] = function;
        buf[2..6].copy_from_slice(&value.to_be_bytes());

        self.i2c.write(self.address, &buf).await?;

        Ok(())
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
