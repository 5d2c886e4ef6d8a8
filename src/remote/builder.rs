// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Remote builder.

use std::fmt;

use crate::config::{RemoteConfig, TransmitSettings};
use crate::error::Error;
use crate::observer::Observer;
use crate::remote::{Remote, RemoteIdentity};
use crate::transceiver::Transceiver;
use crate::variant::ProtocolKind;

/// Builder for [`Remote`].
///
/// # Examples
///
/// ```no_run
/// use limitless_rf::{ProtocolKind, Remote, config::RemoteConfig};
/// # fn example(radio: impl limitless_rf::transceiver::Transceiver) -> limitless_rf::Result<()> {
/// let mut remote = Remote::builder(radio, ProtocolKind::Rgbw, 0x1234)
///     .with_message_id(0)
///     .with_config(RemoteConfig::new().with_retries(3))
///     .build()?;
///
/// remote.set_color(0xFF0000, None)?;
/// # Ok(())
/// # }
/// ```
pub struct RemoteBuilder<T> {
    transceiver: T,
    kind: ProtocolKind,
    address: u16,
    message_id: Option<u8>,
    config: RemoteConfig,
    observer: Option<Observer>,
}

impl<T: Transceiver> RemoteBuilder<T> {
    pub(crate) fn new(transceiver: T, kind: ProtocolKind, address: u16) -> Self {
        Self {
            transceiver,
            kind,
            address,
            message_id: None,
            config: RemoteConfig::default(),
            observer: None,
        }
    }

    /// Sets the starting message id instead of a random one.
    ///
    /// Takes precedence over [`RemoteConfig::message_id`].
    #[must_use]
    pub fn with_message_id(mut self, message_id: u8) -> Self {
        self.message_id = Some(message_id);
        self
    }

    /// Overrides the variant's transmission defaults.
    #[must_use]
    pub fn with_config(mut self, config: RemoteConfig) -> Self {
        self.config = config;
        self
    }

    /// Installs an observer called at every trace point.
    #[must_use]
    pub fn with_observer(mut self, observer: Observer) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Builds the remote.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration fails validation.
    pub fn build(self) -> Result<Remote<T>, Error> {
        self.config.validate()?;

        let variant = self.kind.variant();
        let settings = TransmitSettings::resolve(variant, &self.config);
        let identity = match self.message_id.or(self.config.message_id) {
            Some(message_id) => RemoteIdentity::new(self.address, message_id),
            None => RemoteIdentity::with_random_message_id(self.address),
        };

        tracing::debug!(
            kind = %self.kind,
            remote = self.address,
            message_id = identity.message_id(),
            queue = %settings.submit_queue,
            "Created remote"
        );

        Ok(Remote::new(
            self.transceiver,
            variant,
            identity,
            settings,
            self.observer,
        ))
    }
}

impl<T> fmt::Debug for RemoteBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteBuilder")
            .field("kind", &self.kind)
            .field("address", &self.address)
            .field("message_id", &self.message_id)
            .field("config", &self.config)
            .field("observer", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}
