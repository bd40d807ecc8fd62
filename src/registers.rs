//! Seesaw register address constants for the Adafruit Mini I2C Gamepad.
//!
//! The Seesaw firmware uses a two-byte register addressing scheme:
//! - Byte 1: Module ID
//! - Byte 2: Register offset within the module
//!
//! Analog channels live in the ADC module at `ADC_OFFSET + pin`, where `pin`
//! is the Seesaw pin number wired to that channel on the gamepad PCB.

// ---------------------------------------------------------------------------
// Module IDs
// ---------------------------------------------------------------------------

/// Seesaw status module identifier.
pub const MODULE_STATUS: u8 = 0x00;

/// Seesaw GPIO module identifier.
pub const MODULE_GPIO: u8 = 0x01;

/// Seesaw ADC module identifier.
pub const MODULE_ADC: u8 = 0x09;

// ---------------------------------------------------------------------------
// Status module registers
// ---------------------------------------------------------------------------

/// Hardware ID register (8-bit, read-only). Identifies the MCU the Seesaw
/// firmware runs on (e.g. 0x55 for SAMD09, 0x87 for ATtiny817).
pub const STATUS_HW_ID: u8 = 0x01;

/// Software reset register. Writing [`SWRST_KEY`] restarts the firmware and
/// returns every module to its power-on defaults.
pub const STATUS_SWRST: u8 = 0x7F;

/// Magic byte that triggers a software reset when written to [`STATUS_SWRST`].
pub const SWRST_KEY: u8 = 0xFF;

// ---------------------------------------------------------------------------
// GPIO module registers
// ---------------------------------------------------------------------------

/// Bulk direction-clear register (32-bit write): each set bit switches that
/// pin to input mode.
pub const GPIO_DIRCLR_BULK: u8 = 0x03;

/// Bulk read register (32-bit read): raw wire level of all 32 pins.
/// Button pins idle high and read low while pressed.
pub const GPIO_BULK: u8 = 0x04;

/// Bulk set register (32-bit write): for input pins with pull resistors
/// enabled, each set bit selects pull-up rather than pull-down.
pub const GPIO_BULK_SET: u8 = 0x05;

/// Bulk pull-enable register (32-bit write): each set bit enables the pull
/// resistor on that pin.
pub const GPIO_PULLENSET: u8 = 0x0B;

// ---------------------------------------------------------------------------
// ADC module registers
// ---------------------------------------------------------------------------

/// Base offset for per-channel ADC reads. The channel register for a pin is
/// `ADC_OFFSET + pin`; each read returns a big-endian 10-bit sample.
pub const ADC_OFFSET: u8 = 0x07;

/// Seesaw pin wired to the analog stick X axis.
pub const ANALOG_X_PIN: u8 = 0x0E;

/// Seesaw pin wired to the analog stick Y axis.
pub const ANALOG_Y_PIN: u8 = 0x0F;

// ---------------------------------------------------------------------------
// Protocol constants
// ---------------------------------------------------------------------------

/// Required delay in microseconds between I2C write and read operations
/// per Seesaw firmware specification.
pub const SEESAW_DELAY_US: u32 = 125;

/// Settle time in milliseconds after a software reset, before the firmware
/// responds to register traffic again.
pub const RESET_SETTLE_MS: u32 = 10;

/// Default I2C address for the Adafruit Mini I2C Gamepad.
pub const DEFAULT_ADDRESS: u8 = 0x50;

// ---------------------------------------------------------------------------
// Board constants
// ---------------------------------------------------------------------------

/// Maximum calibrated value of each analog axis (10-bit ADC).
pub const AXIS_MAX: u16 = 1023;

/// Recommended noise filter (fuzz) for axis consumers, in axis units.
pub const AXIS_FUZZ: u16 = 2;

/// Recommended centre dead zone (flat) for axis consumers, in axis units.
pub const AXIS_FLAT: u16 = 4;

/// Default interval between poll cycles, in milliseconds.
pub const POLL_INTERVAL_MS: u64 = 16;

/// Shortest poll interval the board keeps up with, in milliseconds.
pub const POLL_INTERVAL_MIN_MS: u64 = 8;

/// Longest poll interval that still feels responsive, in milliseconds.
pub const POLL_INTERVAL_MAX_MS: u64 = 32;
