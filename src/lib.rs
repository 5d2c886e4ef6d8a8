// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `limitless_rf` - drive LimitlessLED / `MiLight` bulbs by impersonating
//! their RF remotes.
//!
//! The library turns intents ("zone 2 on", "50% brightness", "this RGB
//! color") into the bit-exact messages the bulbs' remotes send, and decodes
//! messages received from real remotes. The radio itself is not part of the
//! library: messages are handed to a [`Transceiver`](transceiver::Transceiver)
//! implementation.
//!
//! # Supported Remotes
//!
//! - **rgbw**: RGB + white bulbs; direct brightness and color wheel
//! - **cct**: dual-white bulbs; stepped brightness and color temperature
//! - **`lyh_cct`**: dual-white bulbs whose message layout is unknown; received
//!   messages are passed through raw and nothing can be sent
//!
//! # Quick Start
//!
//! ```no_run
//! use limitless_rf::{ProtocolKind, Remote};
//!
//! # fn example(radio: impl limitless_rf::transceiver::Transceiver) -> limitless_rf::Result<()> {
//! let mut remote = Remote::builder(radio, ProtocolKind::Rgbw, 0x1234).build()?;
//!
//! remote.on(Some(1), false)?;
//!
//! // Check capabilities to tell "unsupported" apart from "sent"
//! if remote.capabilities().color {
//!     remote.set_color(0x00FF00, Some(1))?;
//! }
//! remote.set_brightness(128, Some(1))?;
//! remote.off(Some(1), true, false)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Encoding Without a Remote
//!
//! ```
//! use limitless_rf::ProtocolKind;
//! use limitless_rf::codec::{self, ButtonInfo};
//!
//! let info = ButtonInfo::new("on", 0x1234, 1);
//! let message = codec::encode(ProtocolKind::Cct, &info)?;
//! assert_eq!(message, [0x5A, 0x12, 0x34, 0x00, 0x05, 0x01, 0xAD]);
//! # Ok::<(), limitless_rf::error::CodecError>(())
//! ```

mod capabilities;
pub mod codec;
pub mod config;
pub mod convert;
pub mod error;
pub mod observer;
mod remote;
pub mod stepper;
pub mod transceiver;
pub mod types;
pub mod variant;

pub use capabilities::{Capabilities, Feature};
pub use codec::{ButtonInfo, Decoded};
pub use config::{RemoteConfig, TransmitSettings};
pub use error::{CodecError, ConfigError, Error, Result, TransceiverError, ValueError};
pub use remote::{ButtonIntent, Remote, RemoteBuilder, RemoteIdentity, SharedRemote};
pub use transceiver::{Receive, SubmitQueue, Transceiver};
pub use types::RgbColor;
pub use variant::{ProtocolKind, ProtocolVariant, SyncWord};
