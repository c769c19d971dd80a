//! Hex, RGB, and HSL colour conversions for the colour picker.

use crate::error::ToolError;
use serde::Serialize;

/// 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees [0, 360), saturation and lightness as percentages,
/// all rounded to the nearest integer for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

/// Parse a six-digit hex colour, with or without the leading `#`.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ToolError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ToolError::InvalidFormat(format!(
            "'{hex}' is not a 6-digit hex colour"
        )));
    }
    // Length and digit checks above make these infallible.
    let r = u8::from_str_radix(&digits[0..2], 16).expect("checked hex digits");
    let g = u8::from_str_radix(&digits[2..4], 16).expect("checked hex digits");
    let b = u8::from_str_radix(&digits[4..6], 16).expect("checked hex digits");
    Ok(Rgb { r, g, b })
}

/// Format as `#rrggbb`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Standard max/min/delta conversion. Grey inputs (max == min) report
/// zero hue and saturation.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl {
            h: 0,
            s: 0,
            l: (l * 100.0).round() as u8,
        };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let mut h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    h /= 6.0;

    Hsl {
        h: ((h * 360.0).round() as u16) % 360,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

/// Inverse of [`rgb_to_hsl`]; exact only up to the rounding the display
/// representation already applies.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h as f64 / 360.0;
    let s = hsl.s as f64 / 100.0;
    let l = hsl.l as f64 / 100.0;

    if s == 0.0 {
        let grey = (l * 255.0).round() as u8;
        return Rgb {
            r: grey,
            g: grey,
            b: grey,
        };
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb {
        r: (hue_channel(p, q, h + 1.0 / 3.0) * 255.0).round() as u8,
        g: (hue_channel(p, q, h) * 255.0).round() as u8,
        b: (hue_channel(p, q, h - 1.0 / 3.0) * 255.0).round() as u8,
    }
}

fn hue_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
