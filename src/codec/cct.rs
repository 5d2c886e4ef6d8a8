// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CCT remote messages.
//!
//! Layout (7 bytes): `5A addr_hi addr_lo zone button message_id checksum`.
//!
//! The checksum is the low byte of the sum of the six preceding bytes plus
//! seven. Receivers need it; decoding does not verify it, so captures with a
//! bad checksum still decode.

use crate::codec::{ButtonInfo, lookup_code};
use crate::error::CodecError;
use crate::variant::ProtocolKind;

const MAGIC: u8 = 0x5A;

const ZONE_BUTTONS: &[&str] = &["zone_on", "zone_off", "zone_max", "zone_night"];

fn checksum(message: &[u8]) -> u8 {
    let seed = message.len() + 1;
    let sum = message
        .iter()
        .fold(seed, |sum, byte| sum + usize::from(*byte));
    sum.to_le_bytes()[0]
}

pub(super) fn encode(info: &ButtonInfo) -> Result<Vec<u8>, CodecError> {
    let buttons = ProtocolKind::Cct.variant().buttons();
    let code = lookup_code(
        ProtocolKind::Cct,
        buttons,
        ZONE_BUTTONS,
        &info.button,
        info.zone,
    )?;

    let [addr_hi, addr_lo] = info.remote_id.to_be_bytes();
    let mut message = vec![
        MAGIC,
        addr_hi,
        addr_lo,
        info.zone.unwrap_or(0),
        code,
        info.message_id,
    ];
    message.push(checksum(&message));
    Ok(message)
}

pub(super) fn decode(message: &[u8]) -> Option<ButtonInfo> {
    // the trailing checksum is not read
    let &[magic, addr_hi, addr_lo, zone, code, message_id, ..] = message else {
        return None;
    };
    if magic != MAGIC {
        return None;
    }

    let resolved = ProtocolKind::Cct.variant().buttons().resolve(code);
    let mut info = ButtonInfo::new(
        resolved.button,
        u16::from_be_bytes([addr_hi, addr_lo]),
        message_id,
    );
    // the table's zone wins over the zone byte
    info.zone = resolved.zone.or((zone != 0).then_some(zone));
    Some(info)
}
