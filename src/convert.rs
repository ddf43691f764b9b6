//! Raw ADC code to temperature conversion.
//!
//! A fixed linear transform maps a raw converter code to degrees Celsius:
//! `(raw * full_scale_v / resolution_steps - offset_v) * scale_c_per_v`.
//! The transform is applied unconditionally every cycle - out-of-range or
//! noisy codes are not filtered or clamped, they simply classify into
//! whichever band they algebraically fall into.

/// Linear calibration of an analog temperature sensor on an ADC channel.
///
/// The constants describe both the converter (full-scale voltage, resolution)
/// and the sensor's transfer function (offset voltage at 0 degrees, degrees
/// per volt). For a TMP36 the offset is 0.5 V and the slope is 10 mV/degree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensorCalibration {
    /// ADC reference voltage (volts at full-scale code).
    pub full_scale_v: f32,
    /// Number of converter steps (code range is `0..resolution_steps`).
    pub resolution_steps: f32,
    /// Sensor output voltage at 0 degrees Celsius.
    pub offset_v: f32,
    /// Degrees Celsius per volt above the offset.
    pub scale_c_per_v: f32,
}

impl SensorCalibration {
    /// TMP36 on a 10-bit, 5 V converter (the reference hardware).
    pub const fn tmp36_10bit_5v() -> Self {
        Self {
            full_scale_v: 5.0,
            resolution_steps: 1024.0,
            offset_v: 0.5,
            scale_c_per_v: 100.0,
        }
    }

    /// TMP36 on the RP2350 ADC (12-bit, 3.3 V reference).
    pub const fn tmp36_12bit_3v3() -> Self {
        Self {
            full_scale_v: 3.3,
            resolution_steps: 4096.0,
            offset_v: 0.5,
            scale_c_per_v: 100.0,
        }
    }

    /// Convert a raw converter code to degrees Celsius.
    #[inline]
    pub fn celsius_from_raw(
        &self,
        raw: u16,
    ) -> f32 {
        (raw as f32 * self.full_scale_v / self.resolution_steps - self.offset_v) * self.scale_c_per_v
    }
}
