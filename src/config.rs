//! Centralized controller configuration.
//!
//! All thresholds, duties, and timing values are compile-time constants with
//! validation assertions. This keeps the band table, the PWM scale, and the
//! display geometry consistent across the classifier, the actuator writes,
//! and the rendered lines.
//!
//! # Compile-Time Validation
//!
//! Each constant group includes `const` assertions that verify ordering at
//! compile time. If values are configured incorrectly (e.g. a band threshold
//! out of order, or a duty that breaks OFF < LOW < MED < HIGH), compilation
//! fails with a clear error.

use crate::convert::SensorCalibration;

// =============================================================================
// Control Loop Timing
// =============================================================================

/// Inter-cycle delay of the polling loop in milliseconds.
/// Each cycle reads the sensor, classifies, actuates, and redraws the display.
pub const CYCLE_INTERVAL_MS: u64 = 200;

/// How long the boot message stays on the display before the first cycle.
pub const BOOT_SETTLE_MS: u64 = 2000;

// =============================================================================
// Display Geometry
// =============================================================================

/// Character columns of the LCD. Rendered lines are padded to exactly this
/// width so a shorter label fully erases a longer previous one.
pub const LCD_COLS: usize = 16;

/// Character rows of the LCD (row 0: temperature, row 1: fan label).
pub const LCD_ROWS: usize = 2;

// =============================================================================
// Band Thresholds (degrees Celsius)
// =============================================================================

/// Upper bound of the COLD band. At or above this value the fan turns on.
pub const BAND_COLD_MAX: f32 = 15.0;

/// Upper bound of the COOL band.
pub const BAND_COOL_MAX: f32 = 25.0;

/// Upper bound of the WARM band. At or above this value the band is HOT.
pub const BAND_WARM_MAX: f32 = 50.0;

// Compile-time validation: thresholds must be in ascending order
const _: () = assert!(BAND_COLD_MAX < BAND_COOL_MAX);
const _: () = assert!(BAND_COOL_MAX < BAND_WARM_MAX);

// =============================================================================
// Fan PWM Scale
// =============================================================================

/// PWM counter wrap value. Duties below are compare values against this top,
/// giving the same 8-bit duty scale as the reference hardware.
pub const PWM_TOP: u16 = 255;

/// Fan duty in the COLD band (fan off).
pub const FAN_DUTY_OFF: u8 = 0;

/// Fan duty in the COOL band (~8% of scale).
pub const FAN_DUTY_LOW: u8 = 20;

/// Fan duty in the WARM band (~12% of scale).
pub const FAN_DUTY_MED: u8 = 30;

/// Fan duty in the HOT band (~16% of scale).
pub const FAN_DUTY_HIGH: u8 = 40;

// Compile-time validation: duty must strictly increase with band severity
const _: () = assert!(FAN_DUTY_OFF < FAN_DUTY_LOW);
const _: () = assert!(FAN_DUTY_LOW < FAN_DUTY_MED);
const _: () = assert!(FAN_DUTY_MED < FAN_DUTY_HIGH);
const _: () = assert!(FAN_DUTY_HIGH as u16 <= PWM_TOP);

// =============================================================================
// Sensor Calibration
// =============================================================================

/// Calibration used by the firmware build: TMP36 on the RP2350 ADC
/// (12-bit, 3.3 V reference).
pub const CALIBRATION: SensorCalibration = SensorCalibration::tmp36_12bit_3v3();
