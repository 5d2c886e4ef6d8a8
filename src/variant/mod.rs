// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Protocol variant registry.
//!
//! A [`ProtocolVariant`] describes everything that differs between remote
//! families: radio channels, sync word, retransmission defaults, feature
//! set, value ranges, zones and the button table. Variants are built once on
//! first use and shared read-only by every [`Remote`](crate::Remote).
//!
//! | Kind | Magic | Channels | Sync word | Zones |
//! |------|-------|----------|-----------|-------|
//! | [`ProtocolKind::Rgbw`] | `0xB0` | 9, 40, 71 | `0x258B 0x147A` | 1-4 |
//! | [`ProtocolKind::Cct`] | `0x5A` | 4, 39, 74 | `0x55AA 0x050A` | 1-4 |
//! | [`ProtocolKind::LyhCct`] | - | 24 | `0x6F67 0xA118` | 1-3 |

mod buttons;

pub use buttons::{ButtonTable, ResolvedButton, ZONE_SEPARATOR, zone_qualified};

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::LazyLock;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::capabilities::Capabilities;
use crate::error::ConfigError;

/// The closed set of supported remote protocol families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtocolKind {
    /// RGB + white bulbs with a 26-step direct brightness and color wheel.
    Rgbw,
    /// Dual-white (color temperature) bulbs with stepped brightness.
    Cct,
    /// LYH dual-white bulbs; message layout not known.
    LyhCct,
}

impl ProtocolKind {
    /// All supported kinds.
    pub const ALL: [Self; 3] = [Self::Rgbw, Self::Cct, Self::LyhCct];

    /// Returns the remote type name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rgbw => "rgbw",
            Self::Cct => "cct",
            Self::LyhCct => "lyh_cct",
        }
    }

    /// Returns the shared, immutable descriptor of this kind.
    #[must_use]
    pub fn variant(self) -> &'static ProtocolVariant {
        let index = match self {
            Self::Rgbw => 0,
            Self::Cct => 1,
            Self::LyhCct => 2,
        };
        &REGISTRY[index]
    }
}

impl fmt::Display for ProtocolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProtocolKind {
    type Err = ConfigError;

    /// Parses a remote type name.
    ///
    /// Known but unimplemented remote types (and their aliases) are rejected
    /// with [`ConfigError::UnimplementedRemoteType`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = REMOTE_TYPE_ALIASES
            .iter()
            .find(|(alias, _)| *alias == s)
            .map_or(s, |(_, target)| *target);

        if let Some(kind) = Self::ALL.into_iter().find(|kind| kind.as_str() == name) {
            return Ok(kind);
        }
        if UNIMPLEMENTED_REMOTES.iter().any(|remote| remote.name == name) {
            return Err(ConfigError::UnimplementedRemoteType(name.to_string()));
        }
        Err(ConfigError::UnknownRemoteType(s.to_string()))
    }
}

/// Radio-level framing pattern, two 16-bit words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SyncWord(pub u16, pub u16);

impl fmt::Display for SyncWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06X} {:#06X}", self.0, self.1)
    }
}

/// Receiver framing flags for variants whose packets are not self-delimiting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
// Each flag maps to an independent radio register bit.
#[allow(clippy::struct_excessive_bools)]
pub struct FormatConfig {
    /// Hardware CRC checking.
    pub crc_enabled: bool,
    /// Packet length is encoded in the first payload byte.
    pub packet_length_encoded: bool,
    /// Transmission terminates automatically after the payload.
    pub auto_term_tx: bool,
}

/// Color temperature ranges of a white-capable variant.
///
/// The kelvin endpoints are given coldest first, so the range is usually
/// descending (6500 K down to 3000 K).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemperatureRange {
    /// Coldest supported temperature, in kelvin.
    pub kelvin_coldest: u16,
    /// Warmest supported temperature, in kelvin.
    pub kelvin_warmest: u16,
    /// Device value for the coldest temperature.
    pub device_coldest: u8,
    /// Device value for the warmest temperature.
    pub device_warmest: u8,
}

impl TemperatureRange {
    /// Returns `true` when only one temperature is supported.
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        self.kelvin_coldest == self.kelvin_warmest
    }

    /// Clamps a kelvin value into the supported range.
    #[must_use]
    pub fn clamp_kelvin(&self, kelvin: u16) -> u16 {
        let low = self.kelvin_coldest.min(self.kelvin_warmest);
        let high = self.kelvin_coldest.max(self.kelvin_warmest);
        kelvin.clamp(low, high)
    }
}

/// Immutable descriptor of one protocol variant.
#[derive(Debug, Clone)]
pub struct ProtocolVariant {
    kind: ProtocolKind,
    magic: Option<u8>,
    channels: &'static [u8],
    sync_word: SyncWord,
    retries: u32,
    delay: Duration,
    capabilities: Capabilities,
    brightness_range: RangeInclusive<u8>,
    temperature: Option<TemperatureRange>,
    zones: &'static [u8],
    buttons: ButtonTable,
    message_length: Option<usize>,
    format_config: Option<FormatConfig>,
}

impl ProtocolVariant {
    /// Returns the protocol kind.
    #[must_use]
    pub const fn kind(&self) -> ProtocolKind {
        self.kind
    }

    /// Returns the header magic byte, if the message layout is known.
    #[must_use]
    pub const fn magic(&self) -> Option<u8> {
        self.magic
    }

    /// Returns the radio channels, in transmission order.
    #[must_use]
    pub const fn channels(&self) -> &'static [u8] {
        self.channels
    }

    /// Returns the radio sync word.
    #[must_use]
    pub const fn sync_word(&self) -> SyncWord {
        self.sync_word
    }

    /// Returns the default number of retransmissions.
    #[must_use]
    pub const fn retries(&self) -> u32 {
        self.retries
    }

    /// Returns the default delay between retransmissions.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns the supported features.
    #[must_use]
    pub const fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Returns the device brightness range.
    #[must_use]
    pub fn brightness_range(&self) -> RangeInclusive<u8> {
        self.brightness_range.clone()
    }

    /// Returns the color temperature ranges, if temperature is adjustable.
    #[must_use]
    pub const fn temperature(&self) -> Option<&TemperatureRange> {
        self.temperature.as_ref()
    }

    /// Returns the addressable zone ids.
    #[must_use]
    pub const fn zones(&self) -> &'static [u8] {
        self.zones
    }

    /// Returns the button table.
    #[must_use]
    pub const fn buttons(&self) -> &ButtonTable {
        &self.buttons
    }

    /// Returns the fixed receive length for non-self-delimiting variants.
    #[must_use]
    pub const fn message_length(&self) -> Option<usize> {
        self.message_length
    }

    /// Returns the receiver framing flags for non-self-delimiting variants.
    #[must_use]
    pub const fn format_config(&self) -> Option<FormatConfig> {
        self.format_config
    }
}

/// A remote family that is recognised but has no protocol implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnimplementedRemote {
    /// Remote type name.
    pub name: &'static str,
    /// Radio channels.
    pub channels: &'static [u8],
    /// Radio sync word.
    pub sync_word: SyncWord,
}

/// Remote families whose radio parameters are known but whose messages are not.
pub const UNIMPLEMENTED_REMOTES: &[UnimplementedRemote] = &[
    UnimplementedRemote {
        name: "rgbcct",
        channels: &[8, 39, 70],
        sync_word: SyncWord(0x1809, 0x7236),
    },
    UnimplementedRemote {
        name: "rgb",
        channels: &[3, 38, 73],
        sync_word: SyncWord(0xBCCD, 0x9AAB),
    },
    UnimplementedRemote {
        name: "fut020",
        channels: &[6, 41, 76],
        sync_word: SyncWord(0xAA55, 0x50A0),
    },
];

/// Alternative remote type names.
const REMOTE_TYPE_ALIASES: &[(&str, &str)] = &[("fut089", "rgbcct")];

const DEFAULT_RETRIES: u32 = 10;
const DEFAULT_DELAY: Duration = Duration::from_millis(100);

const CCT_TEMPERATURE: TemperatureRange = TemperatureRange {
    kelvin_coldest: 6500,
    kelvin_warmest: 3000,
    device_coldest: 0,
    device_warmest: 9,
};

static REGISTRY: LazyLock<[ProtocolVariant; 3]> = LazyLock::new(|| {
    [
        ProtocolVariant {
            kind: ProtocolKind::Rgbw,
            magic: Some(0xB0),
            channels: &[9, 40, 71],
            sync_word: SyncWord(0x258B, 0x147A),
            retries: DEFAULT_RETRIES,
            delay: DEFAULT_DELAY,
            capabilities: Capabilities::rgbw(),
            brightness_range: 0..=25,
            temperature: None,
            zones: &[1, 2, 3, 4],
            buttons: ButtonTable::new(buttons::RGBW_BUTTONS),
            message_length: None,
            format_config: None,
        },
        ProtocolVariant {
            kind: ProtocolKind::Cct,
            magic: Some(0x5A),
            channels: &[4, 39, 74],
            sync_word: SyncWord(0x55AA, 0x050A),
            retries: DEFAULT_RETRIES,
            delay: DEFAULT_DELAY,
            capabilities: Capabilities::cct(),
            brightness_range: 0..=9,
            temperature: Some(CCT_TEMPERATURE),
            zones: &[1, 2, 3, 4],
            buttons: ButtonTable::new(buttons::CCT_BUTTONS),
            message_length: None,
            format_config: None,
        },
        ProtocolVariant {
            kind: ProtocolKind::LyhCct,
            magic: None,
            channels: &[24],
            sync_word: SyncWord(0x6F67, 0xA118),
            retries: DEFAULT_RETRIES,
            delay: DEFAULT_DELAY,
            capabilities: Capabilities::lyh_cct(),
            brightness_range: 0..=9,
            temperature: Some(CCT_TEMPERATURE),
            zones: &[1, 2, 3],
            buttons: ButtonTable::new(buttons::CCT_BUTTONS),
            message_length: Some(14),
            format_config: Some(FormatConfig::default()),
        },
    ]
});
