// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level remote control.
//!
//! A [`Remote`] impersonates one physical remote: it owns the address and
//! rolling message id, turns intents such as "set zone 2 to 40% brightness"
//! into button presses, encodes them and hands them to the
//! [`Transceiver`].
//!
//! # Outcomes
//!
//! Operations return `Result<bool>`:
//!
//! - `Ok(true)`: the presses were handed to the transceiver (delivery is
//!   never confirmed by the bulbs)
//! - `Ok(false)`: the variant does not support the operation, or the input
//!   was out of range; nothing was sent
//! - `Err(_)`: a malformed raw intent or a transceiver failure
//!
//! Some operations send several presses. A brightness change on a remote
//! that can only step sends the range width in saturating presses plus up to
//! half of it again, each retransmitted `retries` times.
//!
//! # Examples
//!
//! ```no_run
//! use limitless_rf::{ProtocolKind, Remote};
//!
//! # fn example(radio: impl limitless_rf::transceiver::Transceiver) -> limitless_rf::Result<()> {
//! let mut remote = Remote::builder(radio, ProtocolKind::Cct, 0x1234).build()?;
//!
//! remote.on(Some(1), true)?;
//! remote.set_brightness(128, Some(1))?;
//! remote.set_temperature(4000, Some(1))?;
//! # Ok(())
//! # }
//! ```

mod builder;
mod identity;
mod intent;
mod shared;

pub use builder::RemoteBuilder;
pub use identity::RemoteIdentity;
pub use intent::ButtonIntent;
pub use shared::SharedRemote;

use std::fmt;
use std::ops::RangeInclusive;
use std::thread;
use std::time::Duration;

use crate::capabilities::Capabilities;
use crate::codec::{self, Decoded};
use crate::config::TransmitSettings;
use crate::convert::{DeviceColor, scale};
use crate::error::{CodecError, Error};
use crate::observer::{Observer, TraceEvent};
use crate::stepper::{Axis, Press, StepPlan};
use crate::transceiver::{Receive, Transceiver};
use crate::types::RgbColor;
use crate::variant::{ProtocolKind, ProtocolVariant};

/// Number of "zone on" presses that unpair a CCT bulb.
const CCT_UNPAIR_PRESSES: usize = 7;

/// User-facing brightness range.
const BRIGHTNESS_RANGE: RangeInclusive<u8> = 0..=u8::MAX;

/// One impersonated remote.
pub struct Remote<T> {
    transceiver: T,
    variant: &'static ProtocolVariant,
    identity: RemoteIdentity,
    settings: TransmitSettings,
    observer: Option<Observer>,
}

impl<T> Remote<T> {
    pub(crate) fn new(
        transceiver: T,
        variant: &'static ProtocolVariant,
        identity: RemoteIdentity,
        settings: TransmitSettings,
        observer: Option<Observer>,
    ) -> Self {
        Self {
            transceiver,
            variant,
            identity,
            settings,
            observer,
        }
    }

    // ========== Queries ==========

    /// Returns the protocol kind.
    #[must_use]
    pub fn kind(&self) -> ProtocolKind {
        self.variant.kind()
    }

    /// Returns the remote address.
    #[must_use]
    pub const fn id(&self) -> u16 {
        self.identity.address()
    }

    /// Returns the last message id used.
    #[must_use]
    pub const fn message_id(&self) -> u8 {
        self.identity.message_id()
    }

    /// Returns the addressable zone ids.
    #[must_use]
    pub fn zone_ids(&self) -> &'static [u8] {
        self.variant.zones()
    }

    /// Returns the supported features.
    #[must_use]
    pub fn capabilities(&self) -> &Capabilities {
        self.variant.capabilities()
    }

    /// Returns the brightness range accepted by [`set_brightness`](Self::set_brightness).
    ///
    /// This is always 0-255 regardless of the bulbs' own resolution.
    #[must_use]
    pub const fn brightness_range(&self) -> RangeInclusive<u8> {
        BRIGHTNESS_RANGE
    }

    /// Returns the supported color temperatures as `(coldest, warmest)` kelvin.
    #[must_use]
    pub fn temperature_range(&self) -> Option<(u16, u16)> {
        self.variant
            .temperature()
            .map(|range| (range.kelvin_coldest, range.kelvin_warmest))
    }

    /// Returns the effective transmission parameters.
    #[must_use]
    pub const fn settings(&self) -> &TransmitSettings {
        &self.settings
    }

    /// Returns the transceiver.
    #[must_use]
    pub const fn transceiver(&self) -> &T {
        &self.transceiver
    }

    /// Consumes the remote, returning the transceiver.
    #[must_use]
    pub fn into_transceiver(self) -> T {
        self.transceiver
    }

    /// Wraps the remote for use from several threads.
    #[must_use]
    pub fn into_shared(self) -> SharedRemote<T> {
        SharedRemote::new(self)
    }

    /// Whether the variant has a known message layout to send with.
    fn can_transmit(&self) -> bool {
        self.variant.magic().is_some()
    }

    fn trace(&self, event: TraceEvent) {
        if let Some(observer) = &self.observer {
            observer(&event);
        }
    }
}

impl<T: Transceiver> Remote<T> {
    /// Creates a builder for a remote of `kind` transmitting as `address`.
    #[must_use]
    pub fn builder(transceiver: T, kind: ProtocolKind, address: u16) -> RemoteBuilder<T> {
        RemoteBuilder::new(transceiver, kind, address)
    }

    // ========== Power ==========

    /// Turns the bulbs on.
    ///
    /// `try_hard` doubles the retransmission count and delay for this press.
    ///
    /// # Errors
    ///
    /// Returns error if the transceiver fails.
    pub fn on(&mut self, zone: Option<u8>, try_hard: bool) -> Result<bool, Error> {
        let intent = self.insistent(ButtonIntent::zoned("on", "zone_on", zone), try_hard);
        self.send_button(&intent)
    }

    /// Turns the bulbs off.
    ///
    /// With `dim`, brightness is first set to the minimum so the bulbs do
    /// not come back on at full brightness. `try_hard` doubles the
    /// retransmission count and delay of the "off" press.
    ///
    /// # Errors
    ///
    /// Returns error if the transceiver fails.
    pub fn off(&mut self, zone: Option<u8>, dim: bool, try_hard: bool) -> Result<bool, Error> {
        if dim {
            self.set_brightness(1, zone)?;
        }
        let intent = self.insistent(ButtonIntent::zoned("off", "zone_off", zone), try_hard);
        self.send_button(&intent)
    }

    fn insistent(&self, intent: ButtonIntent, try_hard: bool) -> ButtonIntent {
        if try_hard {
            intent
                .with_retries(self.settings.retries.saturating_mul(2))
                .with_delay(self.settings.delay.saturating_mul(2))
        } else {
            intent
        }
    }

    // ========== Modes ==========

    /// Switches the bulbs to night mode.
    ///
    /// # Errors
    ///
    /// Returns error if the transceiver fails.
    pub fn night(&mut self, zone: Option<u8>) -> Result<bool, Error> {
        if !self.capabilities().night {
            return Ok(false);
        }
        self.send_button(&ButtonIntent::zoned("night", "zone_night", zone))
    }

    /// Switches the bulbs to white mode.
    ///
    /// White-only bulbs are always in white mode, so this returns `true`
    /// without sending anything.
    ///
    /// # Errors
    ///
    /// Returns error if the transceiver fails.
    pub fn white(&mut self, zone: Option<u8>) -> Result<bool, Error> {
        let capabilities = *self.capabilities();
        if capabilities.is_white {
            return Ok(true);
        }
        if !capabilities.white {
            return Ok(false);
        }
        self.send_button(&ButtonIntent::zoned("white", "zone_white", zone))
    }

    // ========== Brightness ==========

    /// Sets the brightness on a 0-255 scale.
    ///
    /// 0 turns the bulbs off (dimming first). 255 uses the "max" button
    /// where the remote has one. Other values are scaled to the bulbs' own
    /// range and either set directly or reached by stepping.
    ///
    /// Returns `false` for values outside 0-255.
    ///
    /// # Errors
    ///
    /// Returns error if the transceiver fails.
    pub fn set_brightness(&mut self, brightness: i32, zone: Option<u8>) -> Result<bool, Error> {
        let capabilities = *self.capabilities();
        if !capabilities.brightness || !self.can_transmit() {
            return Ok(false);
        }
        let Ok(brightness) = u8::try_from(brightness) else {
            tracing::debug!(remote = self.id(), brightness, "Brightness out of range");
            return Ok(false);
        };

        tracing::debug!(remote = self.id(), brightness, zone, "Setting brightness");
        if brightness == 0 {
            return self.off(zone, true, false);
        }
        if brightness == u8::MAX && capabilities.max_brightness {
            return self.max_brightness(zone);
        }

        let range = self.variant.brightness_range();
        let Some(level) = scale_to_device(brightness.into(), 1, 255, &range) else {
            return Ok(false);
        };
        tracing::trace!(remote = self.id(), brightness, level, "Scaled brightness");
        self.trace(TraceEvent::BrightnessScaled {
            requested: brightness,
            device: level,
        });

        if capabilities.set_brightness {
            let intent = ButtonIntent::zoned("set_brightness", "zone_set_brightness", zone)
                .with_brightness(level);
            self.send_button(&intent)
        } else {
            self.step(Axis::Brightness, level, range, zone)
        }
    }

    fn max_brightness(&mut self, zone: Option<u8>) -> Result<bool, Error> {
        self.send_button(&ButtonIntent::zoned("max", "zone_max", zone))
    }

    // ========== Color ==========

    /// Sets the color from a packed `0xRRGGBB` value.
    ///
    /// Greys switch the bulbs to white mode at the grey's level instead of
    /// selecting a color.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidRgb` if `rgb` has bits set above bit 23,
    /// or error if the transceiver fails.
    pub fn set_color(&mut self, rgb: u32, zone: Option<u8>) -> Result<bool, Error> {
        let rgb = RgbColor::from_rgb24(rgb)?;
        let color = DeviceColor::from_rgb(rgb);
        tracing::trace!(remote = self.id(), rgb = %rgb, color = %color, "Converted color");
        self.trace(TraceEvent::ColorConverted {
            rgb,
            hue: rgb.hue(),
            color,
        });

        match color {
            DeviceColor::White { level } => {
                if self.white(zone)? {
                    self.set_brightness(level.into(), zone)
                } else {
                    Ok(false)
                }
            }
            DeviceColor::Wheel(position) => {
                if !self.capabilities().color {
                    return Ok(false);
                }
                let intent =
                    ButtonIntent::zoned("set_color", "zone_set_color", zone).with_color(position);
                self.send_button(&intent)
            }
        }
    }

    // ========== Color Temperature ==========

    /// Sets the color temperature in kelvin.
    ///
    /// The value is clamped to the supported range. Remotes with a single
    /// fixed temperature report success without sending anything.
    ///
    /// # Errors
    ///
    /// Returns error if the transceiver fails.
    pub fn set_temperature(&mut self, kelvin: u32, zone: Option<u8>) -> Result<bool, Error> {
        let capabilities = *self.capabilities();
        let Some(range) = self.variant.temperature().copied() else {
            return Ok(false);
        };
        if !capabilities.temperature || !self.can_transmit() {
            return Ok(false);
        }
        if range.is_fixed() {
            return Ok(true);
        }

        let kelvin = range.clamp_kelvin(u16::try_from(kelvin).unwrap_or(u16::MAX));
        let Some(temperature) = scale(
            kelvin.into(),
            range.kelvin_coldest.into(),
            range.kelvin_warmest.into(),
            range.device_coldest.into(),
            range.device_warmest.into(),
        )
        .and_then(|value| u8::try_from(value).ok()) else {
            return Ok(false);
        };
        tracing::debug!(remote = self.id(), kelvin, temperature, "Scaled temperature");
        self.trace(TraceEvent::TemperatureScaled {
            kelvin,
            device: temperature,
        });

        if capabilities.set_temperature {
            let intent = ButtonIntent::zoned("set_temperature", "zone_set_temperature", zone)
                .with_temperature(temperature);
            self.send_button(&intent)
        } else {
            let low = range.device_coldest.min(range.device_warmest);
            let high = range.device_coldest.max(range.device_warmest);
            self.step(Axis::Temperature, temperature, low..=high, zone)
        }
    }

    // ========== Stepping ==========

    fn step(
        &mut self,
        axis: Axis,
        target: u8,
        range: RangeInclusive<u8>,
        zone: Option<u8>,
    ) -> Result<bool, Error> {
        let has_max = axis == Axis::Brightness && self.capabilities().max_brightness;
        let plan = StepPlan::new(axis, target, range, has_max);
        tracing::debug!(
            remote = self.id(),
            axis = %axis,
            target,
            presses = plan.len(),
            "Stepping"
        );

        for (phase, press) in plan.presses() {
            self.trace(TraceEvent::Step { phase, press });
            let sent = match press {
                Press::Max => self.max_brightness(zone)?,
                Press::Step(..) => {
                    let intent = ButtonIntent::new(press.button()).with_optional_zone(zone);
                    self.send_button(&intent)?
                }
            };
            if !sent {
                return Ok(false);
            }
        }
        Ok(true)
    }

    // ========== Pairing ==========

    /// Pairs bulbs that were just powered on with `zone`.
    ///
    /// RGBW bulbs give no indication, so `false` is returned even though the
    /// press was sent. CCT pairing waits for the settling delay afterwards.
    ///
    /// # Errors
    ///
    /// Returns error if the transceiver fails.
    pub fn pair(&mut self, zone: u8) -> Result<bool, Error> {
        tracing::debug!(remote = self.id(), zone, "Pairing");
        match self.kind() {
            ProtocolKind::Rgbw => {
                self.send_button(&ButtonIntent::new("zone_on").with_zone(zone))?;
                Ok(false)
            }
            ProtocolKind::Cct => {
                self.send_button(&ButtonIntent::new("zone_on").with_zone(zone))?;
                // another "on" soon after would start unpairing
                thread::sleep(self.settings.pair_settle);
                Ok(true)
            }
            ProtocolKind::LyhCct => Ok(false),
        }
    }

    /// Unpairs bulbs that were just powered on from `zone`.
    ///
    /// # Errors
    ///
    /// Returns error if the transceiver fails.
    pub fn unpair(&mut self, zone: u8) -> Result<bool, Error> {
        tracing::debug!(remote = self.id(), zone, "Unpairing");
        let zone_on = ButtonIntent::new("zone_on").with_zone(zone);
        match self.kind() {
            ProtocolKind::Rgbw => {
                self.send_button(&zone_on)?;
                self.send_button(&ButtonIntent::new("zone_white").with_zone(zone))?;
                Ok(false)
            }
            ProtocolKind::Cct => {
                for _ in 0..CCT_UNPAIR_PRESSES {
                    self.send_button(&zone_on)?;
                }
                Ok(true)
            }
            ProtocolKind::LyhCct => Ok(false),
        }
    }

    // ========== Raw Access ==========

    /// Sends an arbitrary button press.
    ///
    /// # Errors
    ///
    /// Returns error if the intent names a button the variant does not
    /// have, lacks a zone or value its button needs, or the transceiver
    /// fails.
    pub fn raw_send_button(&mut self, intent: &ButtonIntent) -> Result<bool, Error> {
        self.send_button(intent)
    }

    /// Listens on the first channel for up to `wait_time` and decodes what
    /// arrives.
    ///
    /// Returns `None` if nothing was received or the message belongs to
    /// another protocol.
    ///
    /// # Errors
    ///
    /// Returns error if the transceiver fails.
    pub fn read_button(&mut self, wait_time: Duration) -> Result<Option<Decoded>, Error> {
        let Some(channel) = self.settings.listen_channel() else {
            return Ok(None);
        };
        self.transceiver
            .set_syncword(self.settings.sync_word, None)?;
        self.transceiver.start_listening(channel)?;

        let request = Receive {
            channel,
            wait: true,
            wait_time,
            length: self.variant.message_length(),
            format_config: self.variant.format_config(),
        };
        let Some(message) = self.transceiver.receive(&request)? else {
            return Ok(None);
        };
        if message.is_empty() {
            return Ok(None);
        }

        let decoded = codec::decode(self.kind(), &message);
        tracing::debug!(
            remote = self.id(),
            channel,
            len = message.len(),
            recognised = decoded.is_some(),
            "Received message"
        );
        self.trace(TraceEvent::ButtonReceived {
            message,
            recognised: decoded.is_some(),
        });
        Ok(decoded)
    }

    /// Encodes and transmits one press.
    fn send_button(&mut self, intent: &ButtonIntent) -> Result<bool, Error> {
        let remote_id = intent.remote_id.unwrap_or(self.identity.address());
        // Ids supplied for a foreign address leave the counter alone
        let (message_id, advances_counter) = match (intent.remote_id, intent.message_id) {
            (Some(_), Some(message_id)) => (message_id, false),
            (None, Some(message_id)) => (message_id, true),
            (_, None) => (self.identity.peek_next_message_id(), true),
        };

        let info = intent.to_button_info(remote_id, message_id);
        let message = match codec::encode(self.kind(), &info) {
            Ok(message) => message,
            Err(CodecError::NotImplemented(kind)) => {
                tracing::warn!(kind = %kind, button = %info.button, "Remote type cannot transmit");
                return Ok(false);
            }
            Err(e) => return Err(e.into()),
        };
        if advances_counter {
            self.identity.reseed(message_id);
        }

        let retries = intent.retries.unwrap_or(self.settings.retries);
        let delay = intent.delay.unwrap_or(self.settings.delay);
        tracing::debug!(
            remote = remote_id,
            button = %info.button,
            zone = info.zone,
            message_id,
            retries,
            delay = ?delay,
            queue = %self.settings.submit_queue,
            "Sending button"
        );
        self.trace(TraceEvent::ButtonSent {
            info,
            message: message.clone(),
            retries,
            delay,
            queue: self.settings.submit_queue.clone(),
        });

        self.transceiver.multi_transmit(
            &message,
            &self.settings.channels,
            retries,
            delay,
            self.settings.sync_word,
            &self.settings.submit_queue,
        )?;
        Ok(true)
    }
}

/// Scales `value` from `[src_low, src_high]` into a device range.
fn scale_to_device(
    value: i64,
    src_low: i64,
    src_high: i64,
    range: &RangeInclusive<u8>,
) -> Option<u8> {
    scale(
        value,
        src_low,
        src_high,
        (*range.start()).into(),
        (*range.end()).into(),
    )
    .and_then(|level| u8::try_from(level).ok())
}

impl<T> fmt::Debug for Remote<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Remote")
            .field("kind", &self.variant.kind())
            .field("identity", &self.identity)
            .field("settings", &self.settings)
            .field("observer", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}
