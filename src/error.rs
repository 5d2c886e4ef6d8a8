// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `limitless_rf` library.
//!
//! Expected outcomes such as "this remote has no night mode" or "this is not
//! one of our messages" are not errors: they are reported as `Ok(false)` or
//! `None` by the remote and codec APIs. The types here cover the genuine
//! failures: malformed intents, radio faults and bad configuration.

use thiserror::Error;

use crate::variant::ProtocolKind;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// A button intent could not be turned into a message.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// The radio collaborator reported a failure.
    #[error("transceiver error: {0}")]
    Transceiver(#[from] TransceiverError),

    /// Configuration could not be loaded or applied.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to value validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A 24-bit color value has bits set above bit 23.
    #[error("color value {0:#x} does not fit in 24 bits")]
    InvalidRgb(u32),
}

/// Errors raised while encoding a button intent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The button name has no code in the variant's table.
    #[error("{kind} remotes have no button named {button:?}")]
    UnknownButton {
        /// The variant that was asked to encode.
        kind: ProtocolKind,
        /// The (possibly zone-qualified) button name.
        button: String,
    },

    /// A zone-qualified button was pressed without a zone.
    #[error("button {0:?} requires a zone")]
    MissingZone(String),

    /// A value-carrying button was pressed without its value.
    #[error("button {button:?} requires a {field} value")]
    MissingValue {
        /// The button name.
        button: String,
        /// The missing field.
        field: &'static str,
    },

    /// The variant has no known message layout.
    #[error("{0} messages cannot be encoded")]
    NotImplemented(ProtocolKind),
}

/// Errors reported by a [`Transceiver`](crate::transceiver::Transceiver).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransceiverError {
    /// Transmission could not be submitted.
    #[error("transmit failed: {0}")]
    Transmit(String),

    /// The receiver failed while waiting for a message.
    #[error("receive failed: {0}")]
    Receive(String),

    /// The radio rejected a configuration change (channel, sync word).
    #[error("radio configuration failed: {0}")]
    Configuration(String),
}

/// Errors related to remote configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The remote type name is not known at all.
    #[error("unknown remote type: {0}")]
    UnknownRemoteType(String),

    /// The remote type is known but has no protocol implementation.
    #[error("remote type {0} is not implemented")]
    UnimplementedRemoteType(String),

    /// A configuration field holds an unusable value.
    #[error("invalid {field}: {message}")]
    InvalidValue {
        /// The field that failed validation.
        field: String,
        /// Description of the problem.
        message: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
