//! HSV to sRGB conversion and hex formatting.

/// Convert an HSV triple to an 8-bit RGB triple.
///
/// `h` is in degrees and may be any real value: it is wrapped into [0, 360)
/// before the six-sector decomposition. `s` and `v` are in [0, 1].
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (u8, u8, u8) {
    let h60 = h / 60.0;
    let h60f = h60.floor();
    let sector = (h60f as i32).rem_euclid(6);
    let f = h60 - h60f;

    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    ((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

/// Format an RGB triple as an uppercase `#RRGGBB` string.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), (255, 0, 0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), (0, 255, 0));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), (0, 0, 255));
    }

    #[test]
    fn test_hue_wraps_outside_range() {
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), hsv_to_rgb(0.0, 1.0, 1.0));
        assert_eq!(hsv_to_rgb(480.0, 1.0, 1.0), hsv_to_rgb(120.0, 1.0, 1.0));
        assert_eq!(hsv_to_rgb(-120.0, 1.0, 1.0), hsv_to_rgb(240.0, 1.0, 1.0));
    }

    #[test]
    fn test_zero_saturation_is_grey() {
        assert_eq!(hsv_to_rgb(200.0, 0.0, 1.0), (255, 255, 255));
        assert_eq!(hsv_to_rgb(200.0, 0.0, 0.0), (0, 0, 0));
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(rgb_to_hex(255, 255, 255), "#FFFFFF");
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
        assert_eq!(rgb_to_hex(26, 171, 188), "#1AABBC");
    }

    #[test]
    fn test_hue_sweep_yields_valid_hex() {
        for h in 0..360 {
            let (r, g, b) = hsv_to_rgb(h as f32, 1.0, 1.0);
            let hex = rgb_to_hex(r, g, b);
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
            assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
        }
    }
}
