// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A single button press to be sent.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::codec::ButtonInfo;

/// A button press with optional payload and per-call overrides.
///
/// Intents exist only for one send. Without `remote_id` the press is sent
/// as the remote's own address; without `message_id` the remote's counter
/// supplies the next id.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use limitless_rf::ButtonIntent;
///
/// let intent = ButtonIntent::new("zone_set_brightness")
///     .with_zone(2)
///     .with_brightness(12)
///     .with_retries(20)
///     .with_delay(Duration::from_millis(200));
/// assert_eq!(intent.zone, Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonIntent {
    /// Symbolic button name, without zone suffix.
    pub button: String,
    /// Target zone (1-based).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<u8>,
    /// Device brightness level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u8>,
    /// Device color-wheel position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u8>,
    /// Device color temperature value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<u8>,
    /// Send as another remote address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<u16>,
    /// Explicit message id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<u8>,
    /// Retransmission count for this press only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,
    /// Retransmission delay for this press only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<Duration>,
}

impl ButtonIntent {
    /// Creates an intent for `button`.
    #[must_use]
    pub fn new(button: impl Into<String>) -> Self {
        Self {
            button: button.into(),
            ..Self::default()
        }
    }

    /// Creates `all_zones` without a zone, or `per_zone` for the given zone.
    #[must_use]
    pub fn zoned(all_zones: &str, per_zone: &str, zone: Option<u8>) -> Self {
        match zone {
            Some(zone) => Self::new(per_zone).with_zone(zone),
            None => Self::new(all_zones),
        }
    }

    /// Sets the zone.
    #[must_use]
    pub fn with_zone(mut self, zone: u8) -> Self {
        self.zone = Some(zone);
        self
    }

    /// Sets the zone if one is given.
    #[must_use]
    pub fn with_optional_zone(mut self, zone: Option<u8>) -> Self {
        self.zone = zone;
        self
    }

    /// Sets the brightness level.
    #[must_use]
    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = Some(brightness);
        self
    }

    /// Sets the color-wheel position.
    #[must_use]
    pub fn with_color(mut self, color: u8) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the color temperature value.
    #[must_use]
    pub fn with_temperature(mut self, temperature: u8) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sends as another remote address.
    #[must_use]
    pub fn with_remote_id(mut self, remote_id: u16) -> Self {
        self.remote_id = Some(remote_id);
        self
    }

    /// Uses an explicit message id.
    #[must_use]
    pub fn with_message_id(mut self, message_id: u8) -> Self {
        self.message_id = Some(message_id);
        self
    }

    /// Overrides the retransmission count.
    #[must_use]
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = Some(retries);
        self
    }

    /// Overrides the retransmission delay.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Builds the codec view of this press.
    pub(crate) fn to_button_info(&self, remote_id: u16, message_id: u8) -> ButtonInfo {
        ButtonInfo {
            button: self.button.clone(),
            zone: self.zone,
            brightness: self.brightness,
            color: self.color,
            temperature: self.temperature,
            remote_id,
            message_id,
        }
    }
}
