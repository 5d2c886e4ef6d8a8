// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for remote control.
//!
//! - [`RgbColor`] - 24-bit RGB color as accepted by [`Remote::set_color`](crate::Remote::set_color)

mod rgb_color;

pub use rgb_color::RgbColor;
