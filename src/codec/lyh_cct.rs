// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LYH CCT remote messages.
//!
//! The 14-byte message layout of these remotes is not documented, so
//! nothing can be encoded and received frames are returned as raw bytes.

use crate::codec::{ButtonInfo, Decoded};
use crate::error::CodecError;
use crate::variant::ProtocolKind;

pub(super) fn encode(_info: &ButtonInfo) -> Result<Vec<u8>, CodecError> {
    Err(CodecError::NotImplemented(ProtocolKind::LyhCct))
}

pub(super) fn decode(message: &[u8]) -> Decoded {
    Decoded::Raw {
        raw: message.to_vec(),
    }
}
