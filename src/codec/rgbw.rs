// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGBW remote messages.
//!
//! Layout (7 bytes): `B0 addr_hi addr_lo color brightness button message_id`.
//!
//! The brightness byte packs a 5-bit rotated brightness level in its upper
//! bits and the zone (0 = all zones) in its low 3 bits. The 26 brightness
//! levels 0-25 are sent as 16, 15, ... 0, 31, 30, ... 23.

use crate::codec::{ButtonInfo, lookup_code};
use crate::error::CodecError;
use crate::variant::ProtocolKind;

/// Header magic byte.
pub const MAGIC: u8 = 0xB0;

/// Encoded message length.
pub const MESSAGE_LENGTH: usize = 7;

/// Highest brightness level the bulbs accept.
pub const MAX_BRIGHTNESS: u8 = 25;

const ZONE_MASK: u8 = 0b111;

/// Buttons that exist once per zone and are named `name:zone` in the table.
const ZONE_BUTTONS: &[&str] = &["zone_on", "zone_off", "zone_white", "zone_night"];

const SET_BRIGHTNESS: &str = "set_brightness";
const ZONE_SET_BRIGHTNESS: &str = "zone_set_brightness";
const SET_COLOR: &str = "set_color";
const ZONE_SET_COLOR: &str = "zone_set_color";

/// The rotation is its own inverse, so it both packs and unpacks.
const fn rotate_level(level: u8) -> u8 {
    31 - ((level + 15) % 32)
}

/// Packs a brightness level (clamped to 0-25) and a zone into one byte.
///
/// # Examples
///
/// ```
/// use limitless_rf::codec::rgbw::{pack_brightness, unpack_brightness};
///
/// assert_eq!(pack_brightness(0, 0), 0x80);
/// assert_eq!(pack_brightness(25, 2), 0xBA);
/// assert_eq!(unpack_brightness(0xBA), (25, 2));
/// ```
#[must_use]
pub const fn pack_brightness(level: u8, zone: u8) -> u8 {
    let level = if level > MAX_BRIGHTNESS {
        MAX_BRIGHTNESS
    } else {
        level
    };
    (rotate_level(level) << 3) | (zone & ZONE_MASK)
}

/// Unpacks a brightness byte into `(level, zone)`.
#[must_use]
pub const fn unpack_brightness(byte: u8) -> (u8, u8) {
    (rotate_level(byte >> 3), byte & ZONE_MASK)
}

pub(super) fn encode(info: &ButtonInfo) -> Result<Vec<u8>, CodecError> {
    let buttons = ProtocolKind::Rgbw.variant().buttons();

    // the all-zones forms are the zone forms with zone 0
    let (button, zone) = match info.button.as_str() {
        SET_COLOR => (ZONE_SET_COLOR, None),
        SET_BRIGHTNESS => (ZONE_SET_BRIGHTNESS, None),
        other => (other, info.zone),
    };

    let code = lookup_code(ProtocolKind::Rgbw, buttons, ZONE_BUTTONS, button, zone)?;

    let zone = zone.unwrap_or(0);
    let (color, brightness) = match button {
        ZONE_SET_BRIGHTNESS => {
            let level = info.brightness.ok_or_else(|| CodecError::MissingValue {
                button: info.button.clone(),
                field: "brightness",
            })?;
            (0, pack_brightness(level, zone))
        }
        ZONE_SET_COLOR => {
            let color = info.color.ok_or_else(|| CodecError::MissingValue {
                button: info.button.clone(),
                field: "color",
            })?;
            (color, zone & ZONE_MASK)
        }
        _ => (0, zone & ZONE_MASK),
    };

    let [addr_hi, addr_lo] = info.remote_id.to_be_bytes();
    Ok(vec![
        MAGIC,
        addr_hi,
        addr_lo,
        color,
        brightness,
        code,
        info.message_id,
    ])
}

pub(super) fn decode(message: &[u8]) -> Option<ButtonInfo> {
    let &[magic, addr_hi, addr_lo, color, brightness, code, message_id, ..] = message else {
        return None;
    };
    if magic != MAGIC {
        return None;
    }

    let resolved = ProtocolKind::Rgbw.variant().buttons().resolve(code);
    let mut info = ButtonInfo::new(
        resolved.button,
        u16::from_be_bytes([addr_hi, addr_lo]),
        message_id,
    );
    info.zone = resolved.zone;

    let (level, zone) = unpack_brightness(brightness);
    match info.button.as_str() {
        ZONE_SET_BRIGHTNESS => {
            info.brightness = Some(level);
            apply_packed_zone(&mut info, zone, SET_BRIGHTNESS);
        }
        ZONE_SET_COLOR => {
            info.color = Some(color);
            apply_packed_zone(&mut info, zone, SET_COLOR);
        }
        _ => {}
    }

    Some(info)
}

/// Zone 0 turns the zone form of a button back into its all-zones form.
fn apply_packed_zone(info: &mut ButtonInfo, zone: u8, all_zones_button: &str) {
    if zone == 0 {
        all_zones_button.clone_into(&mut info.button);
    } else {
        info.zone = Some(zone);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_matches_remote_sequence() {
        let sent: Vec<u8> = (0..=MAX_BRIGHTNESS).map(rotate_level).collect();
        let expected: Vec<u8> = (0..=16).rev().chain((23..=31).rev()).collect();
        assert_eq!(sent, expected);
    }

    #[test]
    fn brightness_packing_round_trips() {
        for level in 0..=MAX_BRIGHTNESS {
            for zone in 0..=4 {
                assert_eq!(unpack_brightness(pack_brightness(level, zone)), (level, zone));
            }
        }
    }

    #[test]
    fn brightness_is_clamped() {
        assert_eq!(pack_brightness(200, 0), pack_brightness(MAX_BRIGHTNESS, 0));
    }

    #[test]
    fn encode_set_color_for_all_zones() {
        let info = ButtonInfo::new("set_color", 0x1234, 1).with_color(26);
        assert_eq!(
            encode(&info).unwrap(),
            [MAGIC, 0x12, 0x34, 26, 0x00, 0x0F, 0x01]
        );
    }

    #[test]
    fn encode_set_color_drops_zone() {
        let info = ButtonInfo::new("set_color", 0x1234, 1)
            .with_color(26)
            .with_zone(3);
        assert_eq!(encode(&info).unwrap()[4], 0x00);
    }

    #[test]
    fn encode_zone_set_brightness() {
        let info = ButtonInfo::new("zone_set_brightness", 0xBEEF, 0x42)
            .with_zone(2)
            .with_brightness(0);
        assert_eq!(
            encode(&info).unwrap(),
            [MAGIC, 0xBE, 0xEF, 0x00, 0x82, 0x0E, 0x42]
        );
    }

    #[test]
    fn encode_zone_button_packs_zone_bits() {
        let info = ButtonInfo::new("zone_on", 0x0001, 5).with_zone(3);
        assert_eq!(
            encode(&info).unwrap(),
            [MAGIC, 0x00, 0x01, 0x00, 0x03, 0x07, 0x05]
        );
    }

    #[test]
    fn encode_errors() {
        assert_eq!(
            encode(&ButtonInfo::new("set_brightness", 1, 1)),
            Err(CodecError::MissingValue {
                button: "set_brightness".to_string(),
                field: "brightness"
            })
        );
        assert_eq!(
            encode(&ButtonInfo::new("zone_on", 1, 1).with_zone(5)),
            Err(CodecError::UnknownButton {
                kind: ProtocolKind::Rgbw,
                button: "zone_on:5".to_string()
            })
        );
        assert!(matches!(
            encode(&ButtonInfo::new("max", 1, 1)),
            Err(CodecError::UnknownButton { .. })
        ));
    }

    #[test]
    fn round_trip_canonical_buttons() {
        let cases = [
            ButtonInfo::new("on", 0x1234, 0),
            ButtonInfo::new("off", 0x1234, 255),
            ButtonInfo::new("white", 0xFFFF, 3),
            ButtonInfo::new("night", 0x0000, 4),
            ButtonInfo::new("slider", 0x1234, 5),
            ButtonInfo::new("speed_up", 0x1234, 6),
            ButtonInfo::new("change_color_mode", 0x1234, 7),
            ButtonInfo::new("set_color", 0x1234, 8).with_color(111),
            ButtonInfo::new("zone_set_color", 0x1234, 9)
                .with_zone(4)
                .with_color(0),
        ];
        for info in cases {
            assert_eq!(decode(&encode(&info).unwrap()), Some(info));
        }
    }

    #[test]
    fn round_trip_zone_buttons() {
        for button in ZONE_BUTTONS {
            for zone in 1..=4 {
                let info = ButtonInfo::new(*button, 0xA5A5, zone).with_zone(zone);
                assert_eq!(decode(&encode(&info).unwrap()), Some(info));
            }
        }
    }

    #[test]
    fn round_trip_brightness() {
        for level in 0..=MAX_BRIGHTNESS {
            let all = ButtonInfo::new("set_brightness", 0x1234, level).with_brightness(level);
            assert_eq!(decode(&encode(&all).unwrap()), Some(all));

            for zone in 1..=4 {
                let info = ButtonInfo::new("zone_set_brightness", 0x1234, level)
                    .with_zone(zone)
                    .with_brightness(level);
                assert_eq!(decode(&encode(&info).unwrap()), Some(info));
            }
        }
    }

    #[test]
    fn decode_rejects_foreign_messages() {
        assert_eq!(decode(&[0x5A, 0x12, 0x34, 0x00, 0x00, 0x01, 0x01]), None);
        assert_eq!(decode(&[MAGIC, 0x12, 0x34]), None);
        assert_eq!(decode(&[]), None);
    }

    #[test]
    fn decode_unknown_code() {
        let info = decode(&[MAGIC, 0x12, 0x34, 0x00, 0x00, 0x7F, 0x01]).unwrap();
        assert_eq!(info.button, "unknown=127");
        assert_eq!(info.zone, None);
        assert_eq!(info.remote_id, 0x1234);
    }
}
