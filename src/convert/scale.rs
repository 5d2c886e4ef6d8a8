// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Linear integer range mapping.

/// Linearly maps `value` from `[src_low, src_high]` onto `[dst_low, dst_high]`.
///
/// The computation is done in floating point and the result is rounded
/// half-up by adding 0.5 and truncating toward zero. Either range may be
/// descending (e.g. 6500 K down to 3000 K). No clamping is performed, so a
/// value outside the source range maps outside the destination range.
///
/// Returns `None` when the source range is degenerate (`src_low == src_high`).
///
/// # Examples
///
/// ```
/// use limitless_rf::convert::scale;
///
/// // 0-255 brightness onto 26 steps
/// assert_eq!(scale(128, 1, 255, 0, 25), Some(13));
///
/// // kelvin onto a reversed 0-9 temperature scale
/// assert_eq!(scale(6500, 6500, 3000, 0, 9), Some(0));
/// assert_eq!(scale(3000, 6500, 3000, 0, 9), Some(9));
///
/// assert_eq!(scale(5, 1, 1, 0, 9), None);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn scale(value: i64, src_low: i64, src_high: i64, dst_low: i64, dst_high: i64) -> Option<i64> {
    let src_width = src_high - src_low;
    if src_width == 0 {
        return None;
    }
    let dst_width = dst_high - dst_low;

    let ratio = dst_width as f64 / src_width as f64;
    let output = (value - src_low) as f64 * ratio + dst_low as f64;

    Some((output + 0.5).trunc() as i64)
}
