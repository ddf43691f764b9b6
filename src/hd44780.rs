//! Minimal HD44780 character LCD driver (4-bit parallel bus) for embassy-rp.
//!
//! Drives the classic 16x2 module through six GPIOs: register select, enable,
//! and the upper four data lines. Write-only - the R/W pin is assumed tied to
//! ground, so busy-flag polling is replaced by fixed worst-case delays from
//! the HD44780 datasheet.
//!
//! The surface is exactly what the control loop needs: `init`, `clear`,
//! `set_cursor`, and fixed-width text writes.

use embassy_rp::gpio::{Level, Output};
use embassy_time::Timer;

// HD44780 Commands
const CLEAR_DISPLAY: u8 = 0x01;
const ENTRY_MODE_INCREMENT: u8 = 0x06;
const DISPLAY_ON_CURSOR_OFF: u8 = 0x0C;
const FUNCTION_SET_4BIT_2LINE: u8 = 0x28;
const SET_DDRAM_ADDR: u8 = 0x80;

/// DDRAM base address of each display row.
const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

/// Post-command settle time (datasheet max 37 us, rounded up).
const COMMAND_SETTLE_US: u64 = 50;

/// Settle time for clear/home (datasheet max 1.52 ms, rounded up).
const CLEAR_SETTLE_MS: u64 = 2;

/// 16x2 character LCD on a 4-bit parallel bus.
pub struct Hd44780<'d> {
    rs: Output<'d>,
    en: Output<'d>,
    /// Data lines DB4..DB7, least significant nibble bit first.
    data: [Output<'d>; 4],
}

impl<'d> Hd44780<'d> {
    /// Create the driver from its six control pins. Call [`init`](Self::init)
    /// before any other operation.
    pub fn new(
        rs: Output<'d>,
        en: Output<'d>,
        db4: Output<'d>,
        db5: Output<'d>,
        db6: Output<'d>,
        db7: Output<'d>,
    ) -> Self {
        Self {
            rs,
            en,
            data: [db4, db5, db6, db7],
        }
    }

    /// Bring the controller into 4-bit, 2-line mode with the display on and
    /// the cursor hidden, then clear it.
    pub async fn init(&mut self) {
        // Power-on ramp before the controller accepts commands
        Timer::after_millis(50).await;

        // Nibble sync sequence from the datasheet: three 8-bit function-set
        // probes, then the switch to 4-bit mode
        self.rs.set_low();
        self.write_nibble(0x03).await;
        Timer::after_millis(5).await;
        self.write_nibble(0x03).await;
        Timer::after_micros(150).await;
        self.write_nibble(0x03).await;
        Timer::after_micros(150).await;
        self.write_nibble(0x02).await;
        Timer::after_micros(COMMAND_SETTLE_US).await;

        self.command(FUNCTION_SET_4BIT_2LINE).await;
        self.command(DISPLAY_ON_CURSOR_OFF).await;
        self.command(ENTRY_MODE_INCREMENT).await;
        self.clear().await;
    }

    /// Clear the whole display and return the cursor to (0, 0).
    pub async fn clear(&mut self) {
        self.command(CLEAR_DISPLAY).await;
        Timer::after_millis(CLEAR_SETTLE_MS).await;
    }

    /// Move the cursor to the given column and row.
    pub async fn set_cursor(
        &mut self,
        col: u8,
        row: u8,
    ) {
        let row = (row as usize).min(ROW_OFFSETS.len() - 1);
        self.command(SET_DDRAM_ADDR | (ROW_OFFSETS[row] + col)).await;
    }

    /// Write text at the current cursor position. Only single-byte characters
    /// map onto the HD44780 character ROM; the rendered lines are plain ASCII.
    pub async fn write_str(
        &mut self,
        text: &str,
    ) {
        for byte in text.bytes() {
            self.write_data(byte).await;
        }
    }

    async fn command(
        &mut self,
        cmd: u8,
    ) {
        self.rs.set_low();
        self.write_byte(cmd).await;
        Timer::after_micros(COMMAND_SETTLE_US).await;
    }

    async fn write_data(
        &mut self,
        byte: u8,
    ) {
        self.rs.set_high();
        self.write_byte(byte).await;
        Timer::after_micros(COMMAND_SETTLE_US).await;
    }

    async fn write_byte(
        &mut self,
        byte: u8,
    ) {
        self.write_nibble(byte >> 4).await;
        self.write_nibble(byte & 0x0F).await;
    }

    async fn write_nibble(
        &mut self,
        nibble: u8,
    ) {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            pin.set_level(if nibble & (1 << bit) != 0 { Level::High } else { Level::Low });
        }
        self.pulse_enable().await;
    }

    async fn pulse_enable(&mut self) {
        self.en.set_high();
        Timer::after_micros(1).await;
        self.en.set_low();
        Timer::after_micros(1).await;
    }
}
