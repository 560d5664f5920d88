//! 24-bit sRGB color and `#rrggbb` hex parsing.
//!
//! All color input (CLI flags, the designer's hex field) passes through
//! [`Color::from_hex`] before it reaches a renderer, so the render core
//! only ever sees valid values.

/// Opaque sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string. The leading `#` is optional and the
    /// digits are case-insensitive. Anything else returns `None`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let v = u32::from_str_radix(hex, 16).ok()?;
        Some(Self {
            r: (v >> 16) as u8,
            g: (v >> 8) as u8,
            b: v as u8,
        })
    }

    /// Format as `#rrggbb` (lowercase).
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear interpolation toward `other` in sRGB space, `t` in [0, 1].
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let mix = |a: u8, b: u8| -> u8 {
            (a as f32 + (b as f32 - a as f32) * t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_with_hash() {
        assert_eq!(Color::from_hex("#06b6d4"), Some(Color::rgb(6, 182, 212)));
    }

    #[test]
    fn test_parse_hex_without_hash() {
        assert_eq!(Color::from_hex("FDE68A"), Some(Color::rgb(253, 230, 138)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Color::from_hex(""), None);
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_hex("#gggggg"), None);
        assert_eq!(Color::from_hex("#0f172a0"), None);
        assert_eq!(Color::from_hex("not a color"), None);
    }

    #[test]
    fn test_hex_round_trip() {
        let c = Color::rgb(15, 23, 42);
        assert_eq!(Color::from_hex(&c.to_hex()), Some(c));
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Color::rgb(0, 0, 0);
        let b = Color::rgb(255, 128, 64);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Color::rgb(128, 64, 32));
    }
}
