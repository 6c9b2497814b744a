//! Default colors and sizes for the column slider

use column_slider_core::SliderError;
use iced::Color;

/// Filled (lower) part of the track
pub const MINIMUM_TRACK_TINT: Color = Color::WHITE;
/// Unfilled (upper) part of the track
pub const MAXIMUM_TRACK_TINT: Color = Color::from_rgb8(0xee, 0xee, 0xee);
/// Value label
pub const TEXT_COLOR: Color = Color::from_rgb8(0x18, 0x90, 0xff);
/// Drop shadow under the track
pub const SHADOW_COLOR: Color = Color::from_rgba8(0xcc, 0xcc, 0xcc, 0.8);

pub const TEXT_SIZE: f32 = 36.0;
pub const TRACK_WIDTH: f32 = 100.0;
/// Gap between label, track and icon
pub const SPACING: f32 = 16.0;

/// Parse `#rgb` or `#rrggbb` (leading `#` optional)
pub fn parse_hex_color(hex: &str) -> Result<Color, SliderError> {
    let invalid = || SliderError::InvalidColor(hex.to_string());
    let digits = hex.trim().trim_start_matches('#');

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

    match digits.len() {
        3 => {
            // #abc == #aabbcc
            let expand = |i: usize| -> Result<u8, SliderError> {
                let c = digits.get(i..i + 1).ok_or_else(invalid)?;
                channel(&c.repeat(2))
            };
            Ok(Color::from_rgb8(expand(0)?, expand(1)?, expand(2)?))
        }
        6 => {
            let pair = |i: usize| -> Result<u8, SliderError> {
                channel(digits.get(i..i + 2).ok_or_else(invalid)?)
            };
            Ok(Color::from_rgb8(pair(0)?, pair(2)?, pair(4)?))
        }
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        assert_eq!(parse_hex_color("#ffc069").unwrap(), Color::from_rgb8(0xff, 0xc0, 0x69));
        assert_eq!(parse_hex_color("1890ff").unwrap(), Color::from_rgb8(0x18, 0x90, 0xff));
    }

    #[test]
    fn test_parse_short_form() {
        assert_eq!(parse_hex_color("#fff").unwrap(), Color::from_rgb8(255, 255, 255));
        assert_eq!(parse_hex_color("#e0a").unwrap(), Color::from_rgb8(0xee, 0x00, 0xaa));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_hex_color("#ff").is_err());
        assert!(parse_hex_color("#gggggg").is_err());
        assert!(parse_hex_color("").is_err());
        assert_eq!(
            parse_hex_color("#12345"),
            Err(SliderError::InvalidColor("#12345".to_string()))
        );
    }
}
