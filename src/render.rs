//! Fixed-width line rendering for the 16x2 character display.
//!
//! Both rows are rebuilt from scratch and overwritten wholesale every cycle -
//! no diffing. Each line is space-padded to exactly [`LCD_COLS`] characters so
//! that a transition from a longer label to a shorter one (HIGH -> OFF) leaves
//! no stale characters on the display. That padding is a correctness
//! requirement, not cosmetic.

use core::fmt::Write;

use heapless::String;

use crate::config::LCD_COLS;

/// The two rendered display rows for one cycle.
#[derive(Debug, PartialEq, Eq)]
pub struct DisplayLines {
    /// Row 0: `"Temp: {t} C"` with the temperature rounded to 0 decimals.
    pub temp_line: String<LCD_COLS>,
    /// Row 1: `"Fan: {label}"`.
    pub fan_line: String<LCD_COLS>,
}

/// Build both display rows for the given temperature and band label.
///
/// The temperature is rounded to 0 decimal places by the formatter (24.6
/// renders as "25"); the label is one of the four fixed band labels.
pub fn render_lines(
    temp_c: f32,
    label: &str,
) -> DisplayLines {
    let mut temp_line: String<LCD_COLS> = String::new();
    let _ = write!(temp_line, "Temp: {temp_c:.0} C");
    pad_to_width(&mut temp_line);

    let mut fan_line: String<LCD_COLS> = String::new();
    let _ = write!(fan_line, "Fan: {label}");
    pad_to_width(&mut fan_line);

    DisplayLines { temp_line, fan_line }
}

/// Pad a line with trailing spaces to the full display width.
fn pad_to_width(line: &mut String<LCD_COLS>) {
    while line.len() < LCD_COLS {
        let _ = line.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_line_rounds_to_whole_degrees() {
        let lines = render_lines(24.6, "LOW");
        assert_eq!(lines.temp_line.trim_end(), "Temp: 25 C");
        let lines = render_lines(24.4, "LOW");
        assert_eq!(lines.temp_line.trim_end(), "Temp: 24 C");
    }

    #[test]
    fn test_temp_line_has_no_decimal_point() {
        let lines = render_lines(19.82, "LOW");
        assert!(!lines.temp_line.contains('.'));
        assert_eq!(lines.temp_line.trim_end(), "Temp: 20 C");
    }

    #[test]
    fn test_negative_temperature_renders() {
        let lines = render_lines(-50.0, "OFF");
        assert_eq!(lines.temp_line.trim_end(), "Temp: -50 C");
    }

    #[test]
    fn test_fan_line_shows_label() {
        for label in ["OFF", "LOW", "MED", "HIGH"] {
            let lines = render_lines(30.0, label);
            assert_eq!(lines.fan_line.trim_end(), format!("Fan: {label}"));
        }
    }

    #[test]
    fn test_lines_are_constant_width_across_bands() {
        // Constant width is what guarantees a wholesale overwrite erases the
        // previous cycle's text.
        for (temp, label) in [(-50.0, "OFF"), (20.0, "LOW"), (35.0, "MED"), (120.0, "HIGH")] {
            let lines = render_lines(temp, label);
            assert_eq!(lines.temp_line.len(), LCD_COLS);
            assert_eq!(lines.fan_line.len(), LCD_COLS);
        }
    }

    #[test]
    fn test_high_then_off_leaves_no_residue() {
        let high = render_lines(60.0, "HIGH");
        let off = render_lines(10.0, "OFF");
        // Same length, so writing `off` over `high` covers every column.
        assert_eq!(high.fan_line.len(), off.fan_line.len());
        assert!(off.fan_line.ends_with("      "));
    }
}
