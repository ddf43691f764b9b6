//! Band classification and actuator mapping.
//!
//! The entire control policy is one ordered table: four contiguous,
//! mutually exclusive temperature bands, each carrying the fan duty, the
//! RGB indicator pattern, and the display label for that band. Classification
//! is a first-match scan over ascending upper bounds, so every temperature -
//! however extreme - lands in exactly one band. Boundary values belong to the
//! upper band (15.0 is COOL, 25.0 is WARM, 50.0 is HOT).
//!
//! The mapping is a pure function of the current temperature only: there is
//! no hysteresis and no memory of the previous cycle.

use crate::config::{
    BAND_COLD_MAX,
    BAND_COOL_MAX,
    BAND_WARM_MAX,
    FAN_DUTY_HIGH,
    FAN_DUTY_LOW,
    FAN_DUTY_MED,
    FAN_DUTY_OFF,
};

// =============================================================================
// Bands and Actuator Values
// =============================================================================

/// The four thermal bands, in ascending severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThermalBand {
    /// Below 15 degrees: fan off, blue indicator.
    Cold,
    /// 15 to 25 degrees: low duty, magenta indicator.
    Cool,
    /// 25 to 50 degrees: medium duty, red indicator.
    Warm,
    /// 50 degrees and above: high duty, yellow indicator.
    Hot,
}

/// On/off pattern for the three color channels of the status indicator.
/// Channels are binary (not dimmable); colors mix additively.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorPattern {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

impl ColorPattern {
    pub const OFF: Self = Self::new(false, false, false);
    pub const BLUE: Self = Self::new(false, false, true);
    pub const MAGENTA: Self = Self::new(true, false, true);
    pub const RED: Self = Self::new(true, false, false);
    pub const YELLOW: Self = Self::new(true, true, false);

    const fn new(
        red: bool,
        green: bool,
        blue: bool,
    ) -> Self {
        Self { red, green, blue }
    }
}

/// Everything the actuators need for one cycle, fully determined by the band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActuatorState {
    /// Fan PWM compare value on the 8-bit duty scale.
    pub fan_duty: u8,
    /// Status indicator channel pattern.
    pub color: ColorPattern,
    /// Label shown on the fan line of the display.
    pub label: &'static str,
}

// =============================================================================
// Band Table
// =============================================================================

/// One row of the band table.
pub struct BandPolicy {
    /// Exclusive upper temperature bound; `None` marks the unbounded top band.
    pub upper_bound: Option<f32>,
    pub band: ThermalBand,
    pub fan_duty: u8,
    pub color: ColorPattern,
    pub label: &'static str,
}

impl BandPolicy {
    /// Actuator values carried by this row.
    #[inline]
    pub const fn actuators(&self) -> ActuatorState {
        ActuatorState {
            fan_duty: self.fan_duty,
            color: self.color,
            label: self.label,
        }
    }
}

/// The band table, ordered by ascending upper bound. The last row is
/// unbounded so the scan is total over all inputs. A `static` item so
/// classification can hand out `'static` row references.
pub static BAND_TABLE: [BandPolicy; 4] = [
    BandPolicy {
        upper_bound: Some(BAND_COLD_MAX),
        band: ThermalBand::Cold,
        fan_duty: FAN_DUTY_OFF,
        color: ColorPattern::BLUE,
        label: "OFF",
    },
    BandPolicy {
        upper_bound: Some(BAND_COOL_MAX),
        band: ThermalBand::Cool,
        fan_duty: FAN_DUTY_LOW,
        color: ColorPattern::MAGENTA,
        label: "LOW",
    },
    BandPolicy {
        upper_bound: Some(BAND_WARM_MAX),
        band: ThermalBand::Warm,
        fan_duty: FAN_DUTY_MED,
        color: ColorPattern::RED,
        label: "MED",
    },
    BandPolicy {
        upper_bound: None,
        band: ThermalBand::Hot,
        fan_duty: FAN_DUTY_HIGH,
        color: ColorPattern::YELLOW,
        label: "HIGH",
    },
];

/// Classify a temperature into its band row: first row whose upper bound
/// exceeds the temperature wins. Boundary values fall through to the next
/// row, preserving the open-below / closed-above semantics.
pub fn classify(temp_c: f32) -> &'static BandPolicy {
    for row in &BAND_TABLE {
        if let Some(bound) = row.upper_bound
            && temp_c < bound
        {
            return row;
        }
    }
    // The last row has no bound and catches everything else (including NaN,
    // which fails every `<` comparison).
    &BAND_TABLE[BAND_TABLE.len() - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_for_typical_temperatures() {
        assert_eq!(classify(10.0).band, ThermalBand::Cold);
        assert_eq!(classify(20.0).band, ThermalBand::Cool);
        assert_eq!(classify(35.0).band, ThermalBand::Warm);
        assert_eq!(classify(75.0).band, ThermalBand::Hot);
    }

    #[test]
    fn test_boundaries_belong_to_upper_band() {
        assert_eq!(classify(15.0).band, ThermalBand::Cool);
        assert_eq!(classify(25.0).band, ThermalBand::Warm);
        assert_eq!(classify(50.0).band, ThermalBand::Hot);
    }

    #[test]
    fn test_just_below_boundaries() {
        assert_eq!(classify(14.999).band, ThermalBand::Cold);
        assert_eq!(classify(24.999).band, ThermalBand::Cool);
        assert_eq!(classify(49.999).band, ThermalBand::Warm);
    }

    #[test]
    fn test_extreme_inputs_are_covered() {
        assert_eq!(classify(f32::MIN).band, ThermalBand::Cold);
        assert_eq!(classify(f32::NEG_INFINITY).band, ThermalBand::Cold);
        assert_eq!(classify(f32::MAX).band, ThermalBand::Hot);
        assert_eq!(classify(f32::INFINITY).band, ThermalBand::Hot);
    }

    #[test]
    fn test_duty_strictly_increases_with_severity() {
        let cold = classify(0.0).fan_duty;
        let cool = classify(20.0).fan_duty;
        let warm = classify(35.0).fan_duty;
        let hot = classify(60.0).fan_duty;
        assert_eq!(cold, 0);
        assert!(cold < cool);
        assert!(cool < warm);
        assert!(warm < hot);
    }

    #[test]
    fn test_color_patterns_are_pairwise_distinct() {
        let colors = [
            classify(0.0).color,
            classify(20.0).color,
            classify(35.0).color,
            classify(60.0).color,
        ];
        for i in 0..colors.len() {
            for j in (i + 1)..colors.len() {
                assert_ne!(colors[i], colors[j], "bands {i} and {j} share a color");
            }
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(classify(0.0).label, "OFF");
        assert_eq!(classify(20.0).label, "LOW");
        assert_eq!(classify(35.0).label, "MED");
        assert_eq!(classify(60.0).label, "HIGH");
    }

    #[test]
    fn test_classification_has_no_cycle_memory() {
        // A non-monotonic sequence must classify each temperature exactly as
        // it would in isolation - no hysteresis, no cross-cycle coupling.
        let sequence = [60.0, 10.0, 30.0, 10.0, 60.0, 20.0, 49.9, 50.0, 14.9];
        for &t in &sequence {
            let in_sequence = classify(t);
            let fresh = classify(t);
            assert_eq!(in_sequence.band, fresh.band);
            assert_eq!(in_sequence.actuators(), fresh.actuators());
        }
    }

    #[test]
    fn test_raw_code_to_actuators_on_reference_calibration() {
        // Full chain on the 10-bit reference calibration: raw code ->
        // Celsius -> band -> (duty, label). Raw 205 converts to 50.098
        // degrees, just past the boundary, and must land in HOT.
        let cal = crate::convert::SensorCalibration::tmp36_10bit_5v();
        let cases = [
            (0u16, ThermalBand::Cold, 0u8, "OFF"),
            (102, ThermalBand::Cold, 0, "OFF"),
            (143, ThermalBand::Cool, 20, "LOW"),
            (205, ThermalBand::Hot, 40, "HIGH"),
        ];
        for (raw, band, duty, label) in cases {
            let row = classify(cal.celsius_from_raw(raw));
            assert_eq!(row.band, band, "raw={raw}");
            assert_eq!(row.fan_duty, duty, "raw={raw}");
            assert_eq!(row.label, label, "raw={raw}");
        }
    }

    #[test]
    fn test_table_is_ordered_and_ends_unbounded() {
        let mut prev: Option<f32> = None;
        for row in &BAND_TABLE[..BAND_TABLE.len() - 1] {
            let bound = row.upper_bound.expect("only the last row is unbounded");
            if let Some(p) = prev {
                assert!(p < bound);
            }
            prev = Some(bound);
        }
        assert!(BAND_TABLE[BAND_TABLE.len() - 1].upper_bound.is_none());
    }
}
