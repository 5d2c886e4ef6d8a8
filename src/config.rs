// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-remote configuration overrides.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::transceiver::SubmitQueue;
use crate::variant::{ProtocolVariant, SyncWord};

/// How long a CCT bulb must not see another "on" after pairing.
pub const DEFAULT_PAIR_SETTLE: Duration = Duration::from_secs(5);

/// Optional overrides of a variant's transmission defaults.
///
/// Every field is optional; unset fields fall back to the variant's values.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use limitless_rf::config::RemoteConfig;
///
/// let config = RemoteConfig::from_json(r#"{"retries": 3, "radio_queue": "lights"}"#).unwrap();
/// assert_eq!(config.retries, Some(3));
///
/// let config = RemoteConfig::new()
///     .with_retries(5)
///     .with_delay(Duration::from_millis(50));
/// assert_eq!(config.delay_ms, Some(50));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemoteConfig {
    /// Number of retransmissions per button press.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,
    /// Delay between retransmissions, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,
    /// Radio channels, in transmission order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<u8>>,
    /// Radio sync word, as `[high, low]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_word: Option<SyncWord>,
    /// Transceiver submission queue name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radio_queue: Option<String>,
    /// Settling delay after a CCT pair, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair_settle_ms: Option<u64>,
    /// Initial message id; random when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<u8>,
}

impl RemoteConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON is malformed, contains unknown fields, or
    /// fails [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the overrides for values no remote can use.
    ///
    /// # Errors
    ///
    /// Returns error if the channel list is empty or the queue name is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channels.as_ref().is_some_and(Vec::is_empty) {
            return Err(ConfigError::InvalidValue {
                field: "channels".to_string(),
                message: "at least one channel is required".to_string(),
            });
        }
        if self
            .radio_queue
            .as_ref()
            .is_some_and(|queue| queue.trim().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: "radio_queue".to_string(),
                message: "queue name must not be blank".to_string(),
            });
        }
        Ok(())
    }

    /// Sets the number of retransmissions.
    #[must_use]
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = Some(retries);
        self
    }

    /// Sets the delay between retransmissions.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay_ms = Some(duration_to_millis(delay));
        self
    }

    /// Sets the radio channels.
    #[must_use]
    pub fn with_channels(mut self, channels: impl Into<Vec<u8>>) -> Self {
        self.channels = Some(channels.into());
        self
    }

    /// Sets the radio sync word.
    #[must_use]
    pub fn with_sync_word(mut self, sync_word: SyncWord) -> Self {
        self.sync_word = Some(sync_word);
        self
    }

    /// Sets the submission queue name.
    #[must_use]
    pub fn with_radio_queue(mut self, queue: impl Into<String>) -> Self {
        self.radio_queue = Some(queue.into());
        self
    }

    /// Sets the settling delay after pairing.
    #[must_use]
    pub fn with_pair_settle(mut self, settle: Duration) -> Self {
        self.pair_settle_ms = Some(duration_to_millis(settle));
        self
    }

    /// Sets the initial message id.
    #[must_use]
    pub fn with_message_id(mut self, message_id: u8) -> Self {
        self.message_id = Some(message_id);
        self
    }
}

fn duration_to_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Effective transmission parameters of one remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransmitSettings {
    /// Radio channels, in transmission order.
    pub channels: Vec<u8>,
    /// Radio sync word.
    pub sync_word: SyncWord,
    /// Number of retransmissions per button press.
    pub retries: u32,
    /// Delay between retransmissions.
    pub delay: Duration,
    /// Transceiver submission queue.
    pub submit_queue: SubmitQueue,
    /// Settling delay after a CCT pair.
    pub pair_settle: Duration,
}

impl TransmitSettings {
    /// Returns the variant's defaults.
    #[must_use]
    pub fn defaults(variant: &ProtocolVariant) -> Self {
        Self {
            channels: variant.channels().to_vec(),
            sync_word: variant.sync_word(),
            retries: variant.retries(),
            delay: variant.delay(),
            submit_queue: SubmitQueue::default(),
            pair_settle: DEFAULT_PAIR_SETTLE,
        }
    }

    /// Applies `config` over the variant's defaults.
    #[must_use]
    pub fn resolve(variant: &ProtocolVariant, config: &RemoteConfig) -> Self {
        let defaults = Self::defaults(variant);
        Self {
            channels: config.channels.clone().unwrap_or(defaults.channels),
            sync_word: config.sync_word.unwrap_or(defaults.sync_word),
            retries: config.retries.unwrap_or(defaults.retries),
            delay: config
                .delay_ms
                .map_or(defaults.delay, Duration::from_millis),
            submit_queue: config
                .radio_queue
                .as_deref()
                .map_or(defaults.submit_queue, SubmitQueue::new),
            pair_settle: config
                .pair_settle_ms
                .map_or(defaults.pair_settle, Duration::from_millis),
        }
    }

    /// Returns the channel receives happen on.
    #[must_use]
    pub fn listen_channel(&self) -> Option<u8> {
        self.channels.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::ProtocolKind;

    #[test]
    fn defaults_follow_variant() {
        let settings = TransmitSettings::defaults(ProtocolKind::Cct.variant());
        assert_eq!(settings.channels, vec![4, 39, 74]);
        assert_eq!(settings.sync_word, SyncWord(0x55AA, 0x050A));
        assert_eq!(settings.retries, 10);
        assert_eq!(settings.delay, Duration::from_millis(100));
        assert_eq!(settings.submit_queue.as_str(), "__DEFAULT__");
        assert_eq!(settings.pair_settle, Duration::from_secs(5));
        assert_eq!(settings.listen_channel(), Some(4));
    }

    #[test]
    fn overrides_replace_defaults() {
        let config = RemoteConfig::from_json(
            r#"{
                "retries": 3,
                "delay_ms": 20,
                "channels": [9],
                "sync_word": [4660, 22136],
                "radio_queue": "kitchen",
                "pair_settle_ms": 0
            }"#,
        )
        .unwrap();
        let settings = TransmitSettings::resolve(ProtocolKind::Rgbw.variant(), &config);

        assert_eq!(settings.retries, 3);
        assert_eq!(settings.delay, Duration::from_millis(20));
        assert_eq!(settings.channels, vec![9]);
        assert_eq!(settings.sync_word, SyncWord(0x1234, 0x5678));
        assert_eq!(settings.submit_queue, SubmitQueue::new("kitchen"));
        assert_eq!(settings.pair_settle, Duration::ZERO);
    }

    #[test]
    fn empty_config_keeps_defaults() {
        let variant = ProtocolKind::Rgbw.variant();
        let config = RemoteConfig::from_json("{}").unwrap();
        assert_eq!(
            TransmitSettings::resolve(variant, &config),
            TransmitSettings::defaults(variant)
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = RemoteConfig::from_json(r#"{"retry": 3}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn empty_channel_list_is_rejected() {
        let err = RemoteConfig::from_json(r#"{"channels": []}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field, .. } if field == "channels"));
    }

    #[test]
    fn blank_queue_is_rejected() {
        let err = RemoteConfig::new().with_radio_queue(" ").validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field, .. } if field == "radio_queue"));
    }

    #[test]
    fn builder_methods() {
        let config = RemoteConfig::new()
            .with_retries(2)
            .with_delay(Duration::from_millis(250))
            .with_channels([71, 40])
            .with_pair_settle(Duration::from_secs(1))
            .with_message_id(9);
        assert_eq!(config.retries, Some(2));
        assert_eq!(config.delay_ms, Some(250));
        assert_eq!(config.channels, Some(vec![71, 40]));
        assert_eq!(config.pair_settle_ms, Some(1000));
        assert_eq!(config.message_id, Some(9));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn serializes_only_set_fields() {
        let json = serde_json::to_string(&RemoteConfig::new().with_retries(4)).unwrap();
        assert_eq!(json, r#"{"retries":4}"#);
    }
}
