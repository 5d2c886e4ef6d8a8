// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Indirect value adjustment by repeated up/down presses.
//!
//! Remotes without a "set value" message can only nudge brightness or color
//! temperature one step at a time, and the bulb's current value is unknown.
//! A [`StepPlan`] first saturates the value at the nearer extreme of the
//! range (pressing as many times as the range has values, or once on a
//! "max" button where one exists) and then walks back to the target.

use std::fmt;
use std::iter;
use std::ops::RangeInclusive;

/// The value being stepped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Brightness (`brightness_up` / `brightness_down`).
    Brightness,
    /// Color temperature (`temperature_up` / `temperature_down`).
    Temperature,
}

impl Axis {
    /// Returns the button name prefix.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Brightness => "brightness",
            Self::Temperature => "temperature",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Step direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the range maximum.
    Up,
    /// Towards the range minimum.
    Down,
}

impl Direction {
    /// Returns the button name suffix.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// A single button press of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Press {
    /// One step in a direction, e.g. `brightness_down`.
    Step(Axis, Direction),
    /// The "max" shortcut button.
    Max,
}

impl Press {
    /// Returns the (zone-less) button name of this press.
    #[must_use]
    pub fn button(&self) -> String {
        match self {
            Self::Step(axis, direction) => format!("{axis}_{}", direction.as_str()),
            Self::Max => "max".to_string(),
        }
    }
}

/// Which phase of a plan a press belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Driving the value to an extreme.
    Initial,
    /// Walking from the extreme to the target.
    Final,
}

/// How the value is driven to the extreme before the final walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Saturation {
    /// A single press of the "max" button.
    MaxButton,
    /// `count` presses in `direction`.
    Steps {
        /// Direction of the saturating presses.
        direction: Direction,
        /// Number of saturating presses.
        count: u32,
    },
}

/// The press sequence that moves a value of unknown state to `target`.
///
/// # Examples
///
/// ```
/// use limitless_rf::stepper::{Axis, Direction, Saturation, StepPlan};
///
/// // Low target: ten presses down, then two up
/// let plan = StepPlan::new(Axis::Brightness, 2, 0..=9, false);
/// assert_eq!(plan.saturation, Saturation::Steps { direction: Direction::Down, count: 10 });
/// assert_eq!(plan.final_steps, 2);
///
/// // High target with a max button: one press, then one down
/// let plan = StepPlan::new(Axis::Brightness, 8, 0..=9, true);
/// assert_eq!(plan.saturation, Saturation::MaxButton);
/// assert_eq!(plan.presses().count(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepPlan {
    /// The value being stepped.
    pub axis: Axis,
    /// How the value is saturated.
    pub saturation: Saturation,
    /// Direction of the final walk.
    pub final_direction: Direction,
    /// Number of presses in the final walk.
    pub final_steps: u32,
}

impl StepPlan {
    /// Plans the presses that move a value in `range` to `target`.
    ///
    /// Targets below the midpoint saturate at the minimum, others at the
    /// maximum. `has_max_button` replaces the saturating run towards the
    /// maximum with a single "max" press. A target outside `range` is
    /// clamped into it.
    #[must_use]
    pub fn new(axis: Axis, target: u8, range: RangeInclusive<u8>, has_max_button: bool) -> Self {
        let (min, max) = (u32::from(*range.start()), u32::from(*range.end()));
        let target = u32::from(target).clamp(min, max);
        let width = max - min + 1;

        // target < min + width / 2, kept in integers
        let (saturation_direction, final_direction, extreme) = if 2 * (target - min) < width {
            (Direction::Down, Direction::Up, min)
        } else {
            (Direction::Up, Direction::Down, max)
        };

        let saturation = if extreme == max && has_max_button {
            Saturation::MaxButton
        } else {
            Saturation::Steps {
                direction: saturation_direction,
                count: width,
            }
        };

        Self {
            axis,
            saturation,
            final_direction,
            final_steps: extreme.abs_diff(target),
        }
    }

    /// Iterates over every press of the plan, in order.
    pub fn presses(&self) -> impl Iterator<Item = (Phase, Press)> + '_ {
        let initial: Box<dyn Iterator<Item = Press>> = match self.saturation {
            Saturation::MaxButton => Box::new(iter::once(Press::Max)),
            Saturation::Steps { direction, count } => Box::new(
                iter::repeat_n(Press::Step(self.axis, direction), count as usize),
            ),
        };
        let walk = iter::repeat_n(
            Press::Step(self.axis, self.final_direction),
            self.final_steps as usize,
        );

        initial
            .map(|press| (Phase::Initial, press))
            .chain(walk.map(|press| (Phase::Final, press)))
    }

    /// Total number of presses.
    #[must_use]
    pub fn len(&self) -> u32 {
        let initial = match self.saturation {
            Saturation::MaxButton => 1,
            Saturation::Steps { count, .. } => count,
        };
        initial + self.final_steps
    }

    /// Returns `true` if the plan has no presses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
