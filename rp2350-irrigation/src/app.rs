/*
 * @file app.rs
 * @brief Irrigation control loop and cycle reporting
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

//! Control loop entry and cycle reporting.

use crate::globals;
use crate::types::AppBoard;
use defmt::{debug, info, warn};
use soilguard::{Controller, Cycle, PumpCommand, WateringState};

/// Runs the irrigation controller forever.
///
/// # Parameters
/// * `board` - Fully initialized board.
///
/// # Returns
/// `!` because bare-metal firmware never exits.
pub fn run(board: AppBoard) -> ! {
    let mut controller = Controller::new(board);
    let mut reporter = Reporter::new();
    controller.run(|cycle| reporter.observe(cycle))
}

/// Turns cycle reports into log lines without repeating steady state.
struct Reporter {
    pump_on: bool,
    warned_unsampled: bool,
}

impl Reporter {
    fn new() -> Self {
        Self {
            pump_on: false,
            warned_unsampled: false,
        }
    }

    /// Logs one cycle.
    ///
    /// # Parameters
    /// * `cycle` - Report returned by the controller.
    fn observe(&mut self, cycle: &Cycle) {
        debug!(
            "moisture={} state={} heartbeat={}",
            cycle.reading.value(),
            cycle.decision.state,
            cycle.heartbeat
        );
        self.report_unsampled();
        self.report_pump(cycle.decision.command, cycle.reading.value());
        if cycle.state_changed() {
            report_transition(cycle.decision.state, cycle.reading.value());
        }
    }

    /// Warns once if the loop is still deciding on the boot default.
    fn report_unsampled(&mut self) {
        if !self.warned_unsampled && !globals::SAMPLES.is_primed() {
            warn!("no moisture sample yet, holding pump off");
            self.warned_unsampled = true;
        }
    }

    fn report_pump(&mut self, command: Option<PumpCommand>, moisture: u8) {
        match command {
            Some(PumpCommand::Enable) if !self.pump_on => {
                info!("pump on (moisture={})", moisture);
                self.pump_on = true;
            }
            Some(PumpCommand::Disable) if self.pump_on => {
                info!("pump off (moisture={})", moisture);
                self.pump_on = false;
            }
            _ => {}
        }
    }
}

fn report_transition(state: WateringState, moisture: u8) {
    match state {
        WateringState::RecentlyWatered => {
            info!("watered, holding until soil dries (moisture={})", moisture)
        }
        WateringState::NotRecentlyWatered => {
            info!("soil dried past margin, watering re-armed (moisture={})", moisture)
        }
    }
}
