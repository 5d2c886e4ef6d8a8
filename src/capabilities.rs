// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Remote capabilities.
//!
//! Each protocol variant supports a fixed set of features. The
//! [`Remote`](crate::Remote) consults them before every operation and returns
//! `Ok(false)` instead of transmitting when a feature is missing, so callers
//! that need to tell "unsupported" apart from "sent" should check
//! [`Capabilities::supports`] first.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single named capability flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Brightness can be adjusted at all.
    HasBrightness,
    /// Brightness can be set to an absolute value in one message.
    CanSetBrightness,
    /// A single button jumps straight to maximum brightness.
    HasMaxBrightness,
    /// Color temperature can be adjusted.
    HasTemperature,
    /// Color temperature can be set to an absolute value in one message.
    CanSetTemperature,
    /// The bulbs can be switched to a white mode.
    HasWhite,
    /// The bulbs are white-only, so they are always in "white mode".
    IsWhite,
    /// The bulbs have a night-light mode.
    HasNight,
    /// The bulbs can be set to a color-wheel position.
    HasColor,
}

impl Feature {
    /// Returns the snake-case feature name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HasBrightness => "has_brightness",
            Self::CanSetBrightness => "can_set_brightness",
            Self::HasMaxBrightness => "has_max_brightness",
            Self::HasTemperature => "has_temperature",
            Self::CanSetTemperature => "can_set_temperature",
            Self::HasWhite => "has_white",
            Self::IsWhite => "is_white",
            Self::HasNight => "has_night",
            Self::HasColor => "has_color",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capabilities of a remote type.
///
/// # Examples
///
/// ```
/// use limitless_rf::{Capabilities, Feature};
///
/// let rgbw = Capabilities::rgbw();
/// assert!(rgbw.supports(Feature::HasColor));
/// assert!(!rgbw.supports(Feature::HasTemperature));
///
/// let custom: Capabilities = [Feature::HasBrightness, Feature::HasNight].into_iter().collect();
/// assert!(custom.night);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
// Each boolean represents an independent feature flag of the remote protocol.
#[allow(clippy::struct_excessive_bools)]
pub struct Capabilities {
    /// Brightness can be adjusted.
    pub brightness: bool,
    /// Brightness can be set directly rather than stepped.
    pub set_brightness: bool,
    /// A "max brightness" button exists.
    pub max_brightness: bool,
    /// Color temperature can be adjusted.
    pub temperature: bool,
    /// Color temperature can be set directly rather than stepped.
    pub set_temperature: bool,
    /// A white mode exists.
    pub white: bool,
    /// The bulbs are inherently white.
    pub is_white: bool,
    /// A night mode exists.
    pub night: bool,
    /// Color-wheel control exists.
    pub color: bool,
}

impl Capabilities {
    /// Capabilities of RGBW remotes.
    #[must_use]
    pub const fn rgbw() -> Self {
        Self {
            brightness: true,
            set_brightness: true,
            max_brightness: false,
            temperature: false,
            set_temperature: false,
            white: true,
            is_white: false,
            night: true,
            color: true,
        }
    }

    /// Capabilities of CCT (dual white) remotes.
    #[must_use]
    pub const fn cct() -> Self {
        Self {
            brightness: true,
            set_brightness: false,
            max_brightness: true,
            temperature: true,
            set_temperature: false,
            white: false,
            is_white: true,
            night: true,
            color: false,
        }
    }

    /// Capabilities of LYH CCT remotes: CCT without night mode.
    #[must_use]
    pub const fn lyh_cct() -> Self {
        Self {
            night: false,
            ..Self::cct()
        }
    }

    /// Returns `true` if the given feature is supported.
    #[must_use]
    pub const fn supports(&self, feature: Feature) -> bool {
        match feature {
            Feature::HasBrightness => self.brightness,
            Feature::CanSetBrightness => self.set_brightness,
            Feature::HasMaxBrightness => self.max_brightness,
            Feature::HasTemperature => self.temperature,
            Feature::CanSetTemperature => self.set_temperature,
            Feature::HasWhite => self.white,
            Feature::IsWhite => self.is_white,
            Feature::HasNight => self.night,
            Feature::HasColor => self.color,
        }
    }

    /// Returns a copy with the given feature enabled.
    #[must_use]
    pub const fn with(mut self, feature: Feature) -> Self {
        match feature {
            Feature::HasBrightness => self.brightness = true,
            Feature::CanSetBrightness => self.set_brightness = true,
            Feature::HasMaxBrightness => self.max_brightness = true,
            Feature::HasTemperature => self.temperature = true,
            Feature::CanSetTemperature => self.set_temperature = true,
            Feature::HasWhite => self.white = true,
            Feature::IsWhite => self.is_white = true,
            Feature::HasNight => self.night = true,
            Feature::HasColor => self.color = true,
        }
        self
    }

    /// Lists the supported features.
    #[must_use]
    pub fn features(&self) -> Vec<Feature> {
        ALL_FEATURES
            .iter()
            .copied()
            .filter(|feature| self.supports(*feature))
            .collect()
    }
}

const ALL_FEATURES: [Feature; 9] = [
    Feature::HasBrightness,
    Feature::CanSetBrightness,
    Feature::HasMaxBrightness,
    Feature::HasTemperature,
    Feature::CanSetTemperature,
    Feature::HasWhite,
    Feature::IsWhite,
    Feature::HasNight,
    Feature::HasColor,
];

impl FromIterator<Feature> for Capabilities {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::default(), |caps, feature| caps.with(feature))
    }
}
