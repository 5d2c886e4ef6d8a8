// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-variant message encoding and decoding.
//!
//! Every layout starts with a magic byte followed by the 16-bit remote
//! address (big-endian); the rest of the message is variant specific:
//!
//! | Variant | Layout |
//! |---------|--------|
//! | rgbw | `B0 addr_hi addr_lo color brightness\|zone button message_id` |
//! | cct | `5A addr_hi addr_lo zone button message_id checksum` |
//! | `lyh_cct` | unknown; received bytes are passed through untouched |
//!
//! Decoding never fails: a message with the wrong magic byte (or too short
//! for the layout) is "not this protocol" and yields `None`, and an unknown
//! button code yields a button named `unknown=<code>`.
//!
//! # Examples
//!
//! ```
//! use limitless_rf::ProtocolKind;
//! use limitless_rf::codec::{self, ButtonInfo, Decoded};
//!
//! let info = ButtonInfo::new("zone_on", 0x1234, 7).with_zone(2);
//! let message = codec::encode(ProtocolKind::Cct, &info).unwrap();
//! assert_eq!(message, [0x5A, 0x12, 0x34, 0x02, 0x0D, 0x07, 0xBD]);
//!
//! assert_eq!(codec::decode(ProtocolKind::Cct, &message), Some(Decoded::Button(info)));
//! assert_eq!(codec::decode(ProtocolKind::Rgbw, &message), None);
//! ```

mod cct;
mod lyh_cct;
pub mod rgbw;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::variant::{ButtonTable, ProtocolKind, zone_qualified};

/// Symbolic content of one message, as encoded or decoded.
///
/// Zone 0 ("all zones") is always represented as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonInfo {
    /// Button name without zone suffix, e.g. `zone_on` or `unknown=66`.
    pub button: String,
    /// Target zone (1-based).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<u8>,
    /// Device brightness value carried by the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u8>,
    /// Device color-wheel position carried by the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u8>,
    /// Device color temperature value carried by the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<u8>,
    /// Address of the remote that sent the message.
    pub remote_id: u16,
    /// Rolling message sequence number.
    pub message_id: u8,
}

impl ButtonInfo {
    /// Creates a button press without zone or value.
    #[must_use]
    pub fn new(button: impl Into<String>, remote_id: u16, message_id: u8) -> Self {
        Self {
            button: button.into(),
            zone: None,
            brightness: None,
            color: None,
            temperature: None,
            remote_id,
            message_id,
        }
    }

    /// Sets the target zone.
    #[must_use]
    pub fn with_zone(mut self, zone: u8) -> Self {
        self.zone = Some(zone);
        self
    }

    /// Sets the brightness value.
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
}

/// Result of decoding a received message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Decoded {
    /// A recognised button press.
    Button(ButtonInfo),
    /// The variant has no known layout; the received bytes as-is.
    Raw {
        /// Received bytes.
        raw: Vec<u8>,
    },
}

impl Decoded {
    /// Returns the button press, if the message was decoded symbolically.
    #[must_use]
    pub fn button(&self) -> Option<&ButtonInfo> {
        match self {
            Self::Button(info) => Some(info),
            Self::Raw { .. } => None,
        }
    }
}

/// Encodes a button press into the variant's wire format.
///
/// # Errors
///
/// Returns `CodecError` if the button is not in the variant's table, a
/// zone or value the button needs is missing, or the variant has no known
/// message layout.
pub fn encode(kind: ProtocolKind, info: &ButtonInfo) -> Result<Vec<u8>, CodecError> {
    match kind {
        ProtocolKind::Rgbw => rgbw::encode(info),
        ProtocolKind::Cct => cct::encode(info),
        ProtocolKind::LyhCct => lyh_cct::encode(info),
    }
}

/// Decodes a received message.
///
/// Returns `None` if the message does not belong to this variant.
#[must_use]
pub fn decode(kind: ProtocolKind, message: &[u8]) -> Option<Decoded> {
    let decoded = match kind {
        ProtocolKind::Rgbw => rgbw::decode(message).map(Decoded::Button),
        ProtocolKind::Cct => cct::decode(message).map(Decoded::Button),
        ProtocolKind::LyhCct => Some(lyh_cct::decode(message)),
    };
    if decoded.is_none() {
        tracing::trace!(kind = %kind, len = message.len(), "Ignoring foreign message");
    }
    decoded
}

/// Looks up the code of `button`, zone-qualifying it when it is one of
/// `zone_buttons`.
fn lookup_code(
    kind: ProtocolKind,
    buttons: &ButtonTable,
    zone_buttons: &[&str],
    button: &str,
    zone: Option<u8>,
) -> Result<u8, CodecError> {
    let name = if zone_buttons.contains(&button) {
        let zone = zone.ok_or_else(|| CodecError::MissingZone(button.to_string()))?;
        zone_qualified(button, zone)
    } else {
        button.to_string()
    };
    buttons
        .code(&name)
        .ok_or(CodecError::UnknownButton { kind, button: name })
}
