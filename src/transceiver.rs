// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The radio collaborator.
//!
//! This crate never touches radio hardware. A [`Remote`](crate::Remote)
//! hands encoded messages to a [`Transceiver`], which owns channel hopping,
//! the retry loop and any submission queueing. All calls are blocking.
//!
//! A single radio can be shared by several remotes by wrapping it in
//! `Arc<parking_lot::Mutex<_>>`, which implements the trait itself:
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use parking_lot::Mutex;
//! use limitless_rf::transceiver::{Receive, SubmitQueue, Transceiver};
//! use limitless_rf::variant::SyncWord;
//! use limitless_rf::error::TransceiverError;
//!
//! #[derive(Default)]
//! struct NullRadio;
//!
//! impl Transceiver for NullRadio {
//!     fn multi_transmit(
//!         &mut self,
//!         _message: &[u8],
//!         _channels: &[u8],
//!         _retries: u32,
//!         _delay: Duration,
//!         _sync_word: SyncWord,
//!         _submit_queue: &SubmitQueue,
//!     ) -> Result<(), TransceiverError> {
//!         Ok(())
//!     }
//!
//!     fn set_syncword(
//!         &mut self,
//!         _sync_word: SyncWord,
//!         _submit_queue: Option<&SubmitQueue>,
//!     ) -> Result<(), TransceiverError> {
//!         Ok(())
//!     }
//!
//!     fn start_listening(&mut self, _channel: u8) -> Result<(), TransceiverError> {
//!         Ok(())
//!     }
//!
//!     fn receive(&mut self, _request: &Receive) -> Result<Option<Vec<u8>>, TransceiverError> {
//!         Ok(None)
//!     }
//! }
//!
//! # fn main() -> limitless_rf::Result<()> {
//! use limitless_rf::{ProtocolKind, Remote};
//!
//! let shared = Arc::new(Mutex::new(NullRadio));
//! let mut kitchen = Remote::builder(Arc::clone(&shared), ProtocolKind::Rgbw, 0x1234).build()?;
//! let mut hallway = Remote::builder(shared, ProtocolKind::Cct, 0x4321).build()?;
//!
//! kitchen.on(None, false)?;
//! hallway.on(None, false)?;
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::TransceiverError;
use crate::variant::{FormatConfig, SyncWord};

/// Identifier of a transmission submission queue.
///
/// Radios that serialise transmissions from many remotes group them by
/// queue; the name is opaque to this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmitQueue(String);

impl SubmitQueue {
    /// Name of the queue used when none is configured.
    pub const DEFAULT_NAME: &'static str = "__DEFAULT__";

    /// Creates a queue identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the queue name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SubmitQueue {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME)
    }
}

impl fmt::Display for SubmitQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parameters of a blocking receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receive {
    /// Channel to receive on.
    pub channel: u8,
    /// Block until a message arrives or `wait_time` elapses.
    pub wait: bool,
    /// Maximum time to block.
    pub wait_time: Duration,
    /// Fixed message length for variants that are not length encoded.
    pub length: Option<usize>,
    /// Receiver framing flags for variants that are not length encoded.
    pub format_config: Option<FormatConfig>,
}

/// A sub-GHz radio able to send and receive remote messages.
pub trait Transceiver {
    /// Transmits `message` on each of `channels`, `retries` times with
    /// `delay` between attempts.
    ///
    /// # Errors
    ///
    /// Returns error if the transmission could not be submitted.
    fn multi_transmit(
        &mut self,
        message: &[u8],
        channels: &[u8],
        retries: u32,
        delay: Duration,
        sync_word: SyncWord,
        submit_queue: &SubmitQueue,
    ) -> Result<(), TransceiverError>;

    /// Configures receiver framing.
    ///
    /// # Errors
    ///
    /// Returns error if the radio rejects the sync word.
    fn set_syncword(
        &mut self,
        sync_word: SyncWord,
        submit_queue: Option<&SubmitQueue>,
    ) -> Result<(), TransceiverError>;

    /// Switches the receiver to `channel`.
    ///
    /// # Errors
    ///
    /// Returns error if the radio cannot tune to the channel.
    fn start_listening(&mut self, channel: u8) -> Result<(), TransceiverError>;

    /// Receives one message, or `None` if nothing arrived in time.
    ///
    /// # Errors
    ///
    /// Returns error if the receiver fails.
    fn receive(&mut self, request: &Receive) -> Result<Option<Vec<u8>>, TransceiverError>;
}

impl<T: Transceiver + ?Sized> Transceiver for &mut T {
    fn multi_transmit(
        &mut self,
        message: &[u8],
        channels: &[u8],
        retries: u32,
        delay: Duration,
        sync_word: SyncWord,
        submit_queue: &SubmitQueue,
    ) -> Result<(), TransceiverError> {
        (**self).multi_transmit(message, channels, retries, delay, sync_word, submit_queue)
    }

    fn set_syncword(
        &mut self,
        sync_word: SyncWord,
        submit_queue: Option<&SubmitQueue>,
    ) -> Result<(), TransceiverError> {
        (**self).set_syncword(sync_word, submit_queue)
    }

    fn start_listening(&mut self, channel: u8) -> Result<(), TransceiverError> {
        (**self).start_listening(channel)
    }

    fn receive(&mut self, request: &Receive) -> Result<Option<Vec<u8>>, TransceiverError> {
        (**self).receive(request)
    }
}

/// A radio shared between remotes; each call holds the lock for its duration.
impl<T: Transceiver + ?Sized> Transceiver for Arc<Mutex<T>> {
    fn multi_transmit(
        &mut self,
        message: &[u8],
        channels: &[u8],
        retries: u32,
        delay: Duration,
        sync_word: SyncWord,
        submit_queue: &SubmitQueue,
    ) -> Result<(), TransceiverError> {
        self.lock()
            .multi_transmit(message, channels, retries, delay, sync_word, submit_queue)
    }

    fn set_syncword(
        &mut self,
        sync_word: SyncWord,
        submit_queue: Option<&SubmitQueue>,
    ) -> Result<(), TransceiverError> {
        self.lock().set_syncword(sync_word, submit_queue)
    }

    fn start_listening(&mut self, channel: u8) -> Result<(), TransceiverError> {
        self.lock().start_listening(channel)
    }

    fn receive(&mut self, request: &Receive) -> Result<Option<Vec<u8>>, TransceiverError> {
        self.lock().receive(request)
    }
}
