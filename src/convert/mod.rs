// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Unit conversions between user-facing values and device values.
//!
//! - [`scale`] maps an integer between two closed ranges (brightness 0-255 to
//!   a bulb's 0-25 steps, kelvin to a bulb's temperature steps)
//! - [`DeviceColor`] maps an RGB value onto the remotes' 256-step color wheel

mod color;
mod scale;

pub use color::{DeviceColor, rgb_to_device_color};
pub use scale::scale;
