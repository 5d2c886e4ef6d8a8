// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-remote trace observer.
//!
//! Every trace point of a [`Remote`](crate::Remote) emits a `tracing` event.
//! A remote can additionally be given an [`Observer`], which is called
//! synchronously with the same information as a [`TraceEvent`]. The observer
//! runs on the caller's thread, before the operation continues, so it should
//! return quickly.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use limitless_rf::observer::{Observer, TraceEvent};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let observer: Observer = Arc::new(move |event: &TraceEvent| sink.lock().push(event.to_string()));
//! # let _ = observer;
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::codec::ButtonInfo;
use crate::convert::DeviceColor;
use crate::stepper::{Phase, Press};
use crate::transceiver::SubmitQueue;
use crate::types::RgbColor;

/// Callback invoked at every trace point of a remote.
pub type Observer = Arc<dyn Fn(&TraceEvent) + Send + Sync>;

/// Something a remote did or computed.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    /// A message was handed to the transceiver.
    ButtonSent {
        /// The symbolic button press.
        info: ButtonInfo,
        /// The encoded message.
        message: Vec<u8>,
        /// Number of retransmissions requested.
        retries: u32,
        /// Delay between retransmissions.
        delay: Duration,
        /// Submission queue.
        queue: SubmitQueue,
    },
    /// A press of a stepping plan is about to be sent.
    Step {
        /// Saturating or final walk.
        phase: Phase,
        /// The press.
        press: Press,
    },
    /// An RGB value was mapped onto the device color space.
    ColorConverted {
        /// Requested color.
        rgb: RgbColor,
        /// Hue in degrees.
        hue: f64,
        /// Resulting device color.
        color: DeviceColor,
    },
    /// A 0-255 brightness was scaled to device units.
    BrightnessScaled {
        /// Requested brightness.
        requested: u8,
        /// Device brightness level.
        device: u8,
    },
    /// A kelvin value was clamped and scaled to device units.
    TemperatureScaled {
        /// Clamped color temperature.
        kelvin: u16,
        /// Device temperature value.
        device: u8,
    },
    /// A received message was decoded.
    ButtonReceived {
        /// The received bytes.
        message: Vec<u8>,
        /// `true` if the message belonged to the remote's protocol.
        recognised: bool,
    },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ButtonSent {
                info,
                message,
                retries,
                delay,
                queue,
            } => write!(
                f,
                "Sending {} ({}) n={retries} times with a {}ms delay to queue {queue}",
                info.button,
                hex(message),
                delay.as_millis()
            ),
            Self::Step { phase, press } => {
                let phase = match phase {
                    Phase::Initial => "INITIAL",
                    Phase::Final => "FINAL",
                };
                write!(f, "[{phase}] {}", press.button())
            }
            Self::ColorConverted { rgb, hue, color } => {
                write!(f, "RGB = {rgb}; Hue = {hue:.1}; {color}")
            }
            Self::BrightnessScaled { requested, device } => {
                write!(f, "Scaled brightness {requested} to {device}")
            }
            Self::TemperatureScaled { kelvin, device } => {
                write!(f, "Scaled kelvins={kelvin} to a temperature value of {device}")
            }
            Self::ButtonReceived {
                message,
                recognised,
            } => {
                let verdict = if *recognised { "decoded" } else { "ignored" };
                write!(f, "Received {} ({verdict})", hex(message))
            }
        }
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
