//! Value-to-color policy: encode magnitude as a hue on a warm-to-cool scale.

use crate::color::hsv::{hsv_to_rgb, rgb_to_hex};
use crate::models::VariableType;
use crate::utils::constants::{
    MISSING_SENTINEL, PRECIP_HUE_OFFSET, PRECIP_HUE_SCALE, TEMP_HUE_OFFSET, TEMP_HUE_SCALE,
    WHITE_HEX,
};

/// Resolve the display color for one observation.
///
/// Precipitation and average temperature are hue-encoded at full saturation
/// and brightness; missing observations and zero precipitation render white.
/// Min/max temperature have no color policy yet and return `None`, but their
/// values are still recorded by the builder.
pub fn display_color(variable: VariableType, raw: i32, value: f32) -> Option<String> {
    match variable {
        VariableType::Precipitation => {
            if raw != MISSING_SENTINEL && value > 0.0 {
                Some(hue_color((value * PRECIP_HUE_SCALE).floor() + PRECIP_HUE_OFFSET))
            } else {
                Some(WHITE_HEX.to_string())
            }
        }
        VariableType::TempAvg => {
            if raw != MISSING_SENTINEL {
                Some(hue_color((value * TEMP_HUE_SCALE).floor() + TEMP_HUE_OFFSET))
            } else {
                Some(WHITE_HEX.to_string())
            }
        }
        VariableType::TempMin | VariableType::TempMax => None,
    }
}

fn hue_color(hue: f32) -> String {
    let (r, g, b) = hsv_to_rgb(hue, 1.0, 1.0);
    rgb_to_hex(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_precipitation_is_white() {
        assert_eq!(
            display_color(VariableType::Precipitation, 0, 0.0),
            Some("#FFFFFF".to_string())
        );
    }

    #[test]
    fn test_positive_precipitation_hue() {
        // 5.0 mm -> hue floor(5.0 * 0.75) + 180 = 183
        let color = display_color(VariableType::Precipitation, 50, 5.0).unwrap();
        let (r, g, b) = hsv_to_rgb(183.0, 1.0, 1.0);
        assert_eq!(color, rgb_to_hex(r, g, b));
        assert_ne!(color, "#FFFFFF");
    }

    #[test]
    fn test_missing_precipitation_is_white() {
        assert_eq!(
            display_color(VariableType::Precipitation, -9999, -999.9),
            Some("#FFFFFF".to_string())
        );
    }

    #[test]
    fn test_temp_avg_hue() {
        // 12.0 degrees -> hue floor(-7 * 12.0) + 240 = 156
        let color = display_color(VariableType::TempAvg, 120, 12.0).unwrap();
        let (r, g, b) = hsv_to_rgb(156.0, 1.0, 1.0);
        assert_eq!(color, rgb_to_hex(r, g, b));
    }

    #[test]
    fn test_warm_temp_wraps_negative_hue() {
        // 40.0 degrees -> hue -40, wrapped into [0, 360) by the mapper
        let color = display_color(VariableType::TempAvg, 400, 40.0).unwrap();
        let (r, g, b) = hsv_to_rgb(-40.0, 1.0, 1.0);
        assert_eq!(color, rgb_to_hex(r, g, b));
    }

    #[test]
    fn test_missing_temp_avg_is_white() {
        assert_eq!(
            display_color(VariableType::TempAvg, -9999, -999.9),
            Some("#FFFFFF".to_string())
        );
    }

    #[test]
    fn test_min_max_have_no_policy() {
        assert_eq!(display_color(VariableType::TempMin, 50, 5.0), None);
        assert_eq!(display_color(VariableType::TempMax, 250, 25.0), None);
    }
}
