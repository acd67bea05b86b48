/*
 * @file hysteresis.rs
 * @brief Hysteresis watering decision engine
 * @author Kevin Thomas
 * @date 2025
 *
 * MIT License
 *
 * Copyright (c) 2025 Kevin Thomas
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Two-state hysteresis policy deciding when the pump may run.
//!
//! The plant is watered while the soil reads at or above the threshold.
//! Once a reading drops below it the pump is switched off and the engine
//! refuses to water again until the soil has dried past threshold plus
//! margin. The gap between the two switching points keeps sensor noise
//! near the threshold from chattering the pump.

use crate::moisture::MoistureReading;

/// Whether the plant was watered since the soil last dried out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WateringState {
    #[default]
    NotRecentlyWatered,
    RecentlyWatered,
}

/// Actuation requested from the pump driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PumpCommand {
    Enable,
    Disable,
}

/// Outcome of one evaluation of the policy.
///
/// # Fields
/// * `command` - Pump actuation to apply, `None` when the pump is left as is.
/// * `state` - Watering state to carry into the next cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Decision {
    pub command: Option<PumpCommand>,
    pub state: WateringState,
}

impl Decision {
    const fn new(command: Option<PumpCommand>, state: WateringState) -> Self {
        Self { command, state }
    }
}

/// Maps the latest reading and current state to a pump action and next state.
///
/// # Details
/// Both boundaries are closed on the dry side: a reading equal to the
/// threshold waters, a reading equal to threshold plus margin re-arms.
/// Re-arming never actuates in the same cycle; the next cycle decides
/// from `NotRecentlyWatered`.
///
/// # Parameters
/// * `reading` - Latest moisture sample.
/// * `state` - State produced by the previous cycle.
///
/// # Returns
/// The [`Decision`] for this cycle.
pub fn decide(reading: MoistureReading, state: WateringState) -> Decision {
    use PumpCommand::{Disable, Enable};
    use WateringState::{NotRecentlyWatered, RecentlyWatered};

    match state {
        NotRecentlyWatered if reading.is_wet() => Decision::new(Some(Disable), RecentlyWatered),
        NotRecentlyWatered => Decision::new(Some(Enable), NotRecentlyWatered),
        RecentlyWatered if reading.has_dried_out() => Decision::new(None, NotRecentlyWatered),
        RecentlyWatered => Decision::new(None, RecentlyWatered),
    }
}
