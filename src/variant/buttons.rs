// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Button name/code tables.
//!
//! Zone-specific buttons are named `name:zone` (for example `zone_on:2`).
//! Encoding looks a name up in a hash map; decoding scans the table in
//! declaration order and takes the first entry with a matching code, so
//! duplicate codes always resolve to the same name.

use std::collections::HashMap;

/// Separator between a button name and its zone.
pub const ZONE_SEPARATOR: char = ':';

pub(super) const RGBW_BUTTONS: &[(&str, u8)] = &[
    ("slider", 0x00),
    ("on", 0x01),
    ("white", 0x11),
    ("off", 0x02),
    ("night", 0x12),
    ("zone_on:1", 0x03),
    ("zone_on:2", 0x05),
    ("zone_on:3", 0x07),
    ("zone_on:4", 0x09),
    ("zone_white:1", 0x13),
    ("zone_white:2", 0x15),
    ("zone_white:3", 0x17),
    ("zone_white:4", 0x19),
    ("zone_off:1", 0x04),
    ("zone_off:2", 0x06),
    ("zone_off:3", 0x08),
    ("zone_off:4", 0x0A),
    ("zone_night:1", 0x14),
    ("zone_night:2", 0x16),
    ("zone_night:3", 0x18),
    ("zone_night:4", 0x1A),
    ("speed_up", 0x0B),
    ("speed_down", 0x0C),
    ("change_color_mode", 0x0D),
    ("zone_set_brightness", 0x0E),
    ("zone_set_color", 0x0F),
];

/// Shared by the CCT and LYH CCT remotes.
pub(super) const CCT_BUTTONS: &[(&str, u8)] = &[
    ("on", 0x05),
    ("off", 0x09),
    ("max", 0x15),
    ("night", 0x19),
    ("zone_on:1", 0x08),
    ("zone_on:2", 0x0D),
    ("zone_on:3", 0x07),
    ("zone_on:4", 0x02),
    ("zone_max:1", 0x18),
    ("zone_max:2", 0x1D),
    ("zone_max:3", 0x17),
    ("zone_max:4", 0x12),
    ("zone_off:1", 0x0B),
    ("zone_off:2", 0x03),
    ("zone_off:3", 0x0A),
    ("zone_off:4", 0x06),
    ("zone_night:1", 0x1B),
    ("zone_night:2", 0x13),
    ("zone_night:3", 0x1A),
    ("zone_night:4", 0x16),
    ("brightness_up", 0x0C),
    ("brightness_down", 0x04),
    ("temperature_up", 0x0E),
    ("temperature_down", 0x0F),
];

/// A button name split from its zone suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedButton {
    /// Button name without the zone suffix, or `unknown=<code>`.
    pub button: String,
    /// Zone taken from the table entry, if it was zone-qualified.
    pub zone: Option<u8>,
}

/// Bidirectional button name/code table of one protocol variant.
///
/// # Examples
///
/// ```
/// use limitless_rf::ProtocolKind;
///
/// let buttons = ProtocolKind::Cct.variant().buttons();
/// assert_eq!(buttons.code("zone_on:2"), Some(0x0D));
///
/// let resolved = buttons.resolve(0x0D);
/// assert_eq!(resolved.button, "zone_on");
/// assert_eq!(resolved.zone, Some(2));
///
/// assert_eq!(buttons.resolve(0xEE).button, "unknown=238");
/// ```
#[derive(Debug, Clone)]
pub struct ButtonTable {
    by_name: HashMap<&'static str, u8>,
    by_code: Vec<(u8, &'static str)>,
}

impl ButtonTable {
    /// Builds a table from `(name, code)` entries in declaration order.
    ///
    /// If a name is declared twice, the first declaration wins.
    #[must_use]
    pub fn new(entries: &[(&'static str, u8)]) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        for &(name, code) in entries {
            by_name.entry(name).or_insert(code);
        }
        let by_code = entries.iter().map(|&(name, code)| (code, name)).collect();
        Self { by_name, by_code }
    }

    /// Looks up the code of a (possibly zone-qualified) button name.
    #[must_use]
    pub fn code(&self, name: &str) -> Option<u8> {
        self.by_name.get(name).copied()
    }

    /// Looks up the first name declared for a code.
    #[must_use]
    pub fn name(&self, code: u8) -> Option<&'static str> {
        self.by_code
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, name)| *name)
    }

    /// Resolves a received code into a button name and optional zone.
    ///
    /// Unknown codes resolve to `unknown=<code>` rather than failing.
    #[must_use]
    pub fn resolve(&self, code: u8) -> ResolvedButton {
        let Some(name) = self.name(code) else {
            return ResolvedButton {
                button: format!("unknown={code}"),
                zone: None,
            };
        };

        match name.split_once(ZONE_SEPARATOR) {
            Some((button, zone)) => match zone.parse() {
                Ok(zone) => ResolvedButton {
                    button: button.to_string(),
                    zone: Some(zone),
                },
                Err(_) => ResolvedButton {
                    button: name.to_string(),
                    zone: None,
                },
            },
            None => ResolvedButton {
                button: name.to_string(),
                zone: None,
            },
        }
    }

    /// Iterates over `(name, code)` entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u8)> + '_ {
        self.by_code.iter().map(|&(code, name)| (name, code))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

/// Qualifies a zone button name with its zone (`zone_on` + 2 = `zone_on:2`).
#[must_use]
pub fn zone_qualified(button: &str, zone: u8) -> String {
    format!("{button}{ZONE_SEPARATOR}{zone}")
}
