// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB to remote color-wheel conversion.
//!
//! The remotes select colors by position on a 256-step wheel whose position
//! 0 sits 26 steps before pure red. Greys have no position on the wheel; they
//! are reported as a white level instead, which callers turn into a
//! "white + brightness" sequence.

use std::fmt;

use crate::types::RgbColor;

/// Offset of hue 0 (red) on the device color wheel.
const WHEEL_OFFSET: f64 = 26.0;

/// A color as the remote can express it.
///
/// # Examples
///
/// ```
/// use limitless_rf::convert::DeviceColor;
/// use limitless_rf::types::RgbColor;
///
/// assert_eq!(DeviceColor::from_rgb(RgbColor::new(255, 0, 0)), DeviceColor::Wheel(26));
/// assert_eq!(
///     DeviceColor::from_rgb(RgbColor::new(0x7F, 0x7F, 0x7F)),
///     DeviceColor::White { level: 0x7F }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceColor {
    /// A position on the 256-step color wheel.
    Wheel(u8),
    /// An achromatic color: white at the given 0-255 level.
    White {
        /// Level of the grey, 0 (black) to 255 (white).
        level: u8,
    },
}

impl DeviceColor {
    /// Converts an RGB color to its device representation.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_rgb(rgb: RgbColor) -> Self {
        if rgb.is_achromatic() {
            return Self::White { level: rgb.red() };
        }

        let position = (rgb.hue() / 360.0 * 255.0 + WHEEL_OFFSET).rem_euclid(256.0);
        // rounding 255.5.. up wraps back to the start of the wheel
        let position = ((position + 0.5).trunc() as u32 % 256) as u8;
        Self::Wheel(position)
    }

    /// Returns the signed encoding used by [`rgb_to_device_color`].
    ///
    /// Wheel positions are returned as-is (0-255); a white level `l` is
    /// returned as `-l - 1`.
    #[must_use]
    pub fn to_signed(self) -> i16 {
        match self {
            Self::Wheel(position) => i16::from(position),
            Self::White { level } => -i16::from(level) - 1,
        }
    }

    /// Decodes the signed encoding produced by [`to_signed`](Self::to_signed).
    ///
    /// Returns `None` for values outside `-256..=255`.
    #[must_use]
    pub fn from_signed(value: i16) -> Option<Self> {
        if value >= 0 {
            u8::try_from(value).ok().map(Self::Wheel)
        } else {
            u8::try_from(-i32::from(value) - 1)
                .ok()
                .map(|level| Self::White { level })
        }
    }
}

impl From<RgbColor> for DeviceColor {
    fn from(rgb: RgbColor) -> Self {
        Self::from_rgb(rgb)
    }
}

impl fmt::Display for DeviceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wheel(position) => write!(f, "color {position}"),
            Self::White { level } => write!(f, "white at {level}"),
        }
    }
}

/// Converts a packed `0xRRGGBB` value to a device color.
///
/// Chromatic colors yield their wheel position (0-255). Greys yield the
/// negative sentinel `-level - 1`, so `brightness = -value - 1`. Bits above
/// bit 23 are ignored.
///
/// # Examples
///
/// ```
/// use limitless_rf::convert::rgb_to_device_color;
///
/// assert_eq!(rgb_to_device_color(0xFF0000), 26);
/// assert_eq!(rgb_to_device_color(0x00FF00), 111);
/// assert_eq!(rgb_to_device_color(0x7F7F7F), -128);
/// ```
#[must_use]
pub fn rgb_to_device_color(rgb: u32) -> i16 {
    DeviceColor::from_rgb(RgbColor::from_rgb24_masked(rgb)).to_signed()
}
