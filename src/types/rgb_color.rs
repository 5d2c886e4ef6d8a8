// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color type with 24-bit packing and hue extraction.
//!
//! Remotes only know a color wheel position, so the only color property this
//! crate needs from an RGB value is its hue (or the fact that it has none).
//!
//! # Remote Methods
//!
//! Use [`RgbColor`] with this [`Remote`](crate::Remote) method:
//! - [`set_color()`](crate::Remote::set_color) - Set color using RGB values

use std::fmt;

use crate::error::ValueError;

/// RGB color with 8-bit channels (0-255).
///
/// # Examples
///
/// ```
/// use limitless_rf::types::RgbColor;
///
/// let color = RgbColor::new(255, 128, 0);
/// assert_eq!(color.red(), 255);
/// assert_eq!(color.to_rgb24(), 0xFF8000);
/// assert_eq!(color.to_string(), "#FF8000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Creates a color from a packed `0xRRGGBB` value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidRgb` if any bit above bit 23 is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use limitless_rf::types::RgbColor;
    ///
    /// let green = RgbColor::from_rgb24(0x00FF00).unwrap();
    /// assert_eq!(green.green(), 255);
    /// assert!(RgbColor::from_rgb24(0x0100_0000).is_err());
    /// ```
    pub fn from_rgb24(rgb: u32) -> Result<Self, ValueError> {
        if rgb > 0x00FF_FFFF {
            return Err(ValueError::InvalidRgb(rgb));
        }
        Ok(Self::from_rgb24_masked(rgb))
    }

    /// Creates a color from the low 24 bits of `rgb`, ignoring the rest.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_rgb24_masked(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the color packed as `0xRRGGBB`.
    #[must_use]
    pub const fn to_rgb24(&self) -> u32 {
        ((self.red as u32) << 16) | ((self.green as u32) << 8) | self.blue as u32
    }

    /// Returns `true` when all three channels are equal (a shade of grey).
    #[must_use]
    pub const fn is_achromatic(&self) -> bool {
        self.red == self.green && self.green == self.blue
    }

    /// Returns the HSV hue of this color in degrees, in `[0, 360)`.
    ///
    /// Ties on the brightest channel are broken in the order red, green,
    /// blue. Achromatic colors have a hue of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use limitless_rf::types::RgbColor;
    ///
    /// assert!((RgbColor::new(0, 0, 255).hue() - 240.0).abs() < 1e-9);
    /// assert!((RgbColor::new(255, 255, 0).hue() - 60.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn hue(&self) -> f64 {
        let (r, g, b) = (
            f64::from(self.red),
            f64::from(self.green),
            f64::from(self.blue),
        );
        let max = self.red.max(self.green).max(self.blue);
        let min = self.red.min(self.green).min(self.blue);
        if max == min {
            return 0.0;
        }
        let delta = f64::from(max - min);

        let hue = if max == self.red {
            60.0 * ((g - b) / delta) + 360.0
        } else if max == self.green {
            60.0 * ((b - r) / delta) + 120.0
        } else {
            60.0 * ((r - g) / delta) + 240.0
        };
        hue.rem_euclid(360.0)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.to_rgb24())
    }
}

impl TryFrom<u32> for RgbColor {
    type Error = ValueError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_rgb24(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb24_packing() {
        let color = RgbColor::from_rgb24(0x12_34_56).unwrap();
        assert_eq!(color, RgbColor::new(0x12, 0x34, 0x56));
        assert_eq!(color.to_rgb24(), 0x12_34_56);
        assert_eq!(
            RgbColor::from_rgb24_masked(0xAB_12_34_56),
            RgbColor::new(0x12, 0x34, 0x56)
        );
        assert_eq!(
            RgbColor::try_from(0x0100_0000),
            Err(ValueError::InvalidRgb(0x0100_0000))
        );
    }

    #[test]
    fn achromatic_detection() {
        assert!(RgbColor::new(0x7F, 0x7F, 0x7F).is_achromatic());
        assert!(RgbColor::new(0, 0, 0).is_achromatic());
        assert!(!RgbColor::new(0x7F, 0x7F, 0x7E).is_achromatic());
    }

    #[test]
    fn hue_primaries() {
        assert!(RgbColor::new(255, 0, 0).hue().abs() < 1e-9);
        assert!((RgbColor::new(0, 255, 0).hue() - 120.0).abs() < 1e-9);
        assert!((RgbColor::new(0, 0, 255).hue() - 240.0).abs() < 1e-9);
    }

    #[test]
    fn hue_ties_prefer_red_then_green() {
        // yellow: red and green tie, red branch wins
        assert!((RgbColor::new(255, 255, 0).hue() - 60.0).abs() < 1e-9);
        // cyan: green and blue tie, green branch wins
        assert!((RgbColor::new(0, 255, 255).hue() - 180.0).abs() < 1e-9);
        // magenta: red and blue tie
        assert!((RgbColor::new(255, 0, 255).hue() - 300.0).abs() < 1e-9);
    }

    #[test]
    fn hue_wraps_below_zero() {
        // red with some blue lands just under 360
        let hue = RgbColor::new(255, 0, 10).hue();
        assert!(hue > 357.0 && hue < 360.0, "hue was {hue}");
    }

    #[test]
    fn display_pads_to_six_digits() {
        assert_eq!(RgbColor::new(255, 128, 0).to_string(), "#FF8000");
        assert_eq!(RgbColor::new(0, 0, 0x0A).to_string(), "#00000A");
    }
}
