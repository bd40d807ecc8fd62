//! Gamepad monitor example
//!
//! Demonstrates basic usage of the gamepad-driver crate on the Raspberry Pi
//! Pico 2. Polls an Adafruit Mini I2C Gamepad every 16 ms and logs button
//! presses and stick movement via defmt.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes                        |
//! |-----------|------------|------------------------------|
//! | I2C0 SDA  | GP20       |                              |
//! | I2C0 SCL  | GP21       |                              |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Delay, Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use gamepad_driver::{
    Axis, Button, EventSink, SeesawGamepad, AXIS_FLAT, DEFAULT_ADDRESS, POLL_INTERVAL_MS,
};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

// Wire the I2C0 interrupt to Embassy's handler.
bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

/// Sink that logs key edges and stick movement.
///
/// The driver reports full state every cycle; this sink de-duplicates so
/// the log only shows changes, the way an input core would.
struct LogSink {
    down: [bool; 6],
    x: u16,
    y: u16,
}

impl LogSink {
    const fn new() -> Self {
        LogSink {
            down: [false; 6],
            x: 512,
            y: 512,
        }
    }
}

impl EventSink for LogSink {
    type Error = core::convert::Infallible;

    fn key(&mut self, button: Button, pressed: bool) -> Result<(), Self::Error> {
        let slot = &mut self.down[button as usize];
        if *slot != pressed {
            *slot = pressed;
            if pressed {
                info!("{=str} pressed", button.name());
            } else {
                info!("{=str} released", button.name());
            }
        }
        Ok(())
    }

    fn abs(&mut self, axis: Axis, value: u16) -> Result<(), Self::Error> {
        let slot = match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        };
        // Only log movement past the recommended dead zone; at rest the
        // ADC jitters by a count or two every cycle.
        if value.abs_diff(*slot) > AXIS_FLAT {
            *slot = value;
            match axis {
                Axis::X => info!("X = {=u16}", value),
                Axis::Y => info!("Y = {=u16}", value),
            }
        }
        Ok(())
    }

    fn sync(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- I2C bus (GP20 = SDA, GP21 = SCL) ---
    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_21, // SCL
        p.PIN_20, // SDA
        Irqs,
        i2c::Config::default(),
    );

    // --- Gamepad session ---
    let mut pad = SeesawGamepad::new(i2c, Delay, DEFAULT_ADDRESS);

    if let Err(e) = pad.initialize().await {
        error!("Gamepad initialisation failed: {}", e);
        return;
    }
    if let Some(id) = pad.hardware_id() {
        info!("Gamepad ready, hardware ID {=u8:#x}", id);
    }

    let mut sink = LogSink::new();
    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    info!("Polling every {=u64} ms; press buttons or move the stick", POLL_INTERVAL_MS);

    // Main loop: one poll per tick. Bus glitches are absorbed inside
    // poll(); only usage errors land in the Err arm.
    loop {
        ticker.next().await;
        if let Err(e) = pad.poll(&mut sink).await {
            error!("Poll failed: {}", e);
            return;
        }
    }
}
