//! Team palette resolution and the fixed broadcast color vocabulary.

use crate::foundation::error::{LeagueError, LeagueResult};

/// A renderable RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Accent gold used for titles, badges and glow borders.
pub const GOLD: Rgb = Rgb(255, 215, 0);
pub const WHITE: Rgb = Rgb(255, 255, 255);
/// Gradient tones for the three phase backgrounds.
pub const NIGHT_TOP: Rgb = Rgb(15, 15, 25);
pub const NIGHT_BOTTOM: Rgb = Rgb(30, 30, 45);
pub const DUSK_BOTTOM: Rgb = Rgb(25, 25, 40);
/// Header/footer bar fill.
pub const BAR: Rgb = Rgb(20, 20, 35);
/// Badge fill behind "VS" and the turn counter.
pub const BADGE: Rgb = Rgb(40, 40, 55);
/// Neutral text tones, brightest to dimmest.
pub const MIST: Rgb = Rgb(180, 180, 180);
pub const STONE: Rgb = Rgb(150, 150, 150);
pub const ASH: Rgb = Rgb(100, 100, 100);

impl Rgb {
    /// Decode a team color token: exactly 6 hex digits, optionally prefixed
    /// with `#`.
    pub fn from_hex(token: &str) -> LeagueResult<Self> {
        let s = token.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(LeagueError::InvalidColorFormat(format!(
                "expected 6 hex digits with an optional leading '#', got \"{token}\""
            )));
        }

        let byte = |i: usize| {
            u8::from_str_radix(&s[i..i + 2], 16).map_err(|_| {
                LeagueError::InvalidColorFormat(format!("invalid hex byte in \"{token}\""))
            })
        };
        Ok(Self(byte(0)?, byte(2)?, byte(4)?))
    }

    /// Derived glow tone: every channel brightened by exactly `30 * level`,
    /// clamped to 255. Glow borders draw these at decreasing levels (3, 2, 1)
    /// to fake a soft bloom.
    pub fn glow(self, level: u8) -> Self {
        let lift = |c: u8| (u16::from(c) + 30 * u16::from(level)).min(255) as u8;
        Self(lift(self.0), lift(self.1), lift(self.2))
    }

    /// Per-channel linear interpolation toward `other`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| {
            (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
        };
        Self(
            mix(self.0, other.0),
            mix(self.1, other.1),
            mix(self.2, other.2),
        )
    }

    pub fn to_pixel(self) -> image::Rgb<u8> {
        image::Rgb([self.0, self.1, self.2])
    }
}
