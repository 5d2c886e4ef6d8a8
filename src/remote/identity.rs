// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Remote address and rolling message id.

/// The address a remote transmits as, plus its message sequence number.
///
/// The sequence number is incremented (wrapping at 256) before every
/// transmission that does not carry its own id. It is seeded randomly unless
/// given, so independent processes driving the same address are unlikely to
/// send duplicate ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteIdentity {
    address: u16,
    message_id: u8,
}

impl RemoteIdentity {
    /// Creates an identity with an explicit starting message id.
    #[must_use]
    pub const fn new(address: u16, message_id: u8) -> Self {
        Self {
            address,
            message_id,
        }
    }

    /// Creates an identity with a random starting message id.
    #[must_use]
    pub fn with_random_message_id(address: u16) -> Self {
        Self::new(address, rand::random())
    }

    /// Returns the 16-bit remote address.
    #[must_use]
    pub const fn address(&self) -> u16 {
        self.address
    }

    /// Returns the last message id used.
    #[must_use]
    pub const fn message_id(&self) -> u8 {
        self.message_id
    }

    /// Advances and returns the message id.
    pub const fn next_message_id(&mut self) -> u8 {
        self.message_id = self.message_id.wrapping_add(1);
        self.message_id
    }

    /// Returns the id the next transmission will use, without advancing.
    #[must_use]
    pub const fn peek_next_message_id(&self) -> u8 {
        self.message_id.wrapping_add(1)
    }

    /// Continues the sequence from `message_id`.
    pub const fn reseed(&mut self, message_id: u8) {
        self.message_id = message_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_id_increments_before_use() {
        let mut identity = RemoteIdentity::new(0x1234, 0);
        assert_eq!(identity.next_message_id(), 1);
        assert_eq!(identity.next_message_id(), 2);
        assert_eq!(identity.message_id(), 2);
    }

    #[test]
    fn message_id_wraps() {
        let mut identity = RemoteIdentity::new(0x1234, 255);
        assert_eq!(identity.next_message_id(), 0);
    }

    #[test]
    fn peek_does_not_advance() {
        let identity = RemoteIdentity::new(0x1234, 255);
        assert_eq!(identity.peek_next_message_id(), 0);
        assert_eq!(identity.message_id(), 255);
    }

    #[test]
    fn reseed_continues_from_given_id() {
        let mut identity = RemoteIdentity::new(0x1234, 10);
        identity.reseed(200);
        assert_eq!(identity.next_message_id(), 201);
        assert_eq!(identity.address(), 0x1234);
    }
}
