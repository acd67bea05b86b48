/*
 * @file control.rs
 * @brief Control loop driver
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

//! Control loop driver.

use crate::hal::IrrigationHal;
use crate::hysteresis::{Decision, PumpCommand, WateringState, decide};
use crate::liveness::Supervisor;
use crate::moisture::MoistureReading;

/// Report of one completed control cycle.
///
/// # Fields
/// * `reading` - Sample the decision was based on.
/// * `previous` - Watering state going into the cycle.
/// * `decision` - Pump command and next state.
/// * `heartbeat` - Indicator state written this cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cycle {
    pub reading: MoistureReading,
    pub previous: WateringState,
    pub decision: Decision,
    pub heartbeat: bool,
}

impl Cycle {
    /// `true` when the cycle moved the watering state.
    pub fn state_changed(&self) -> bool {
        self.previous != self.decision.state
    }
}

/// Owns the board and the policy state and runs the loop.
///
/// # Fields
/// * `hal` - Board the loop drives.
/// * `supervisor` - Heartbeat and watchdog supervision.
/// * `state` - Watering state carried between cycles.
pub struct Controller<H> {
    hal: H,
    supervisor: Supervisor,
    state: WateringState,
}

impl<H: IrrigationHal> Controller<H> {
    /// Creates a controller in its power-on state.
    ///
    /// # Parameters
    /// * `hal` - Fully initialized board.
    pub fn new(hal: H) -> Self {
        Self {
            hal,
            supervisor: Supervisor::new(),
            state: WateringState::default(),
        }
    }

    /// Watering state the next cycle starts from.
    pub fn state(&self) -> WateringState {
        self.state
    }

    /// Borrows the board.
    pub fn hal(&self) -> &H {
        &self.hal
    }

    /// Mutably borrows the board.
    pub fn hal_mut(&mut self) -> &mut H {
        &mut self.hal
    }

    /// Runs one control cycle.
    ///
    /// # Details
    /// Feeds the watchdog and beats the heartbeat before anything else,
    /// then reads the latest sample, evaluates the policy, applies the
    /// pump command and keeps the new state.
    ///
    /// # Returns
    /// A [`Cycle`] describing what happened.
    pub fn step(&mut self) -> Cycle {
        let heartbeat = self.supervisor.tick(&mut self.hal);
        let reading = self.hal.read_latest_sample();
        let decision = decide(reading, self.state);
        match decision.command {
            Some(PumpCommand::Enable) => self.hal.enable_pump(),
            Some(PumpCommand::Disable) => self.hal.disable_pump(),
            None => {}
        }
        let previous = core::mem::replace(&mut self.state, decision.state);
        Cycle {
            reading,
            previous,
            decision,
            heartbeat,
        }
    }

    /// Runs the loop forever.
    ///
    /// # Parameters
    /// * `observe` - Called with every finished cycle; for reporting only.
    ///
    /// # Returns
    /// `!` because the controller never stops.
    pub fn run<F: FnMut(&Cycle)>(&mut self, mut observe: F) -> ! {
        loop {
            let cycle = self.step();
            observe(&cycle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HEARTBEAT_PERIOD_MS, WATCHDOG_TIMEOUT_MS};
    use crate::hal::Board;
    use crate::hal::tests::CountingWatchdog;
    use crate::pump::tests::FakePwm;
    use crate::sampler::SampleChannel;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Event {
        Feed,
        Delay(u32),
        Heartbeat(bool),
        Read,
        PumpOn,
        PumpOff,
    }

    /// Board that records every call and serves a scripted reading.
    #[derive(Default)]
    struct RecordingHal {
        reading: MoistureReading,
        pump_on: bool,
        events: core::cell::RefCell<Vec<Event>>,
    }

    impl RecordingHal {
        fn log(&self, event: Event) {
            self.events.borrow_mut().push(event);
        }

        fn take_events(&self) -> Vec<Event> {
            self.events.take()
        }
    }

    impl IrrigationHal for RecordingHal {
        fn enable_pump(&mut self) {
            self.pump_on = true;
            self.log(Event::PumpOn);
        }

        fn disable_pump(&mut self) {
            self.pump_on = false;
            self.log(Event::PumpOff);
        }

        fn read_latest_sample(&self) -> MoistureReading {
            self.log(Event::Read);
            self.reading
        }

        fn reset_watchdog(&mut self) {
            self.log(Event::Feed);
        }

        fn set_heartbeat(&mut self, on: bool) {
            self.log(Event::Heartbeat(on));
        }

        fn delay_ms(&mut self, ms: u32) {
            self.log(Event::Delay(ms));
        }
    }

    /// Board whose watchdog model restarts the "chip" when left unfed.
    struct SimulatedBoard {
        since_feed_ms: u32,
        tripped: bool,
        reading: MoistureReading,
    }

    impl SimulatedBoard {
        fn new(reading: u8) -> Self {
            Self {
                since_feed_ms: 0,
                tripped: false,
                reading: MoistureReading::new(reading),
            }
        }
    }

    impl IrrigationHal for SimulatedBoard {
        fn enable_pump(&mut self) {}

        fn disable_pump(&mut self) {}

        fn read_latest_sample(&self) -> MoistureReading {
            self.reading
        }

        fn reset_watchdog(&mut self) {
            self.since_feed_ms = 0;
        }

        fn set_heartbeat(&mut self, _on: bool) {}

        fn delay_ms(&mut self, ms: u32) {
            self.since_feed_ms += ms;
            if self.since_feed_ms > WATCHDOG_TIMEOUT_MS {
                self.tripped = true;
            }
        }
    }

    #[test]
    fn test_step_order() {
        let mut controller = Controller::new(RecordingHal {
            reading: MoistureReading::new(200),
            ..Default::default()
        });
        controller.step();
        assert_eq!(
            controller.hal().take_events(),
            [
                Event::Feed,
                Event::Delay(HEARTBEAT_PERIOD_MS),
                Event::Heartbeat(true),
                Event::Read,
                Event::PumpOn,
            ]
        );
    }

    #[test]
    fn test_hold_cycle_leaves_pump_alone() {
        let mut controller = Controller::new(RecordingHal {
            reading: MoistureReading::new(100),
            ..Default::default()
        });
        controller.step();
        controller.hal().take_events();
        controller.hal_mut().reading = MoistureReading::new(130);
        let cycle = controller.step();
        assert_eq!(cycle.decision.command, None);
        assert_eq!(
            controller.hal().take_events(),
            [
                Event::Feed,
                Event::Delay(HEARTBEAT_PERIOD_MS),
                Event::Heartbeat(false),
                Event::Read,
            ]
        );
    }

    #[test]
    fn test_boundary_scenario() {
        let mut controller = Controller::new(RecordingHal::default());
        let mut cycles = Vec::new();
        for raw in [130, 115, 125, 142] {
            controller.hal_mut().reading = MoistureReading::new(raw);
            cycles.push(controller.step());
        }

        assert_eq!(cycles[0].decision.command, Some(PumpCommand::Enable));
        assert!(!cycles[0].state_changed());
        assert_eq!(cycles[1].decision.command, Some(PumpCommand::Disable));
        assert_eq!(cycles[1].decision.state, WateringState::RecentlyWatered);
        assert_eq!(cycles[2].decision.command, None);
        assert!(!cycles[2].state_changed());
        assert_eq!(cycles[3].decision.command, None);
        assert_eq!(cycles[3].decision.state, WateringState::NotRecentlyWatered);
        assert_eq!(controller.state(), WateringState::NotRecentlyWatered);
        assert!(!controller.hal().pump_on);
    }

    #[test]
    fn test_heartbeat_alternates() {
        let mut controller = Controller::new(RecordingHal::default());
        let beats: Vec<bool> = (0..4).map(|_| controller.step().heartbeat).collect();
        assert_eq!(beats, [true, false, true, false]);
    }

    #[test]
    fn test_no_sample_yet_keeps_pump_off() {
        let samples = SampleChannel::new();
        let mut led = PinMock::new(&[Transaction::set(State::High)]);
        let mut controller = Controller::new(Board::new(
            FakePwm::default(),
            led.clone(),
            NoopDelay::new(),
            CountingWatchdog::default(),
            &samples,
        ));
        let cycle = controller.step();
        assert_eq!(cycle.reading, MoistureReading::UNSAMPLED);
        assert_eq!(cycle.decision.command, Some(PumpCommand::Disable));
        assert!(!controller.hal().pump().is_running());
        led.done();
    }

    #[test]
    fn test_interrupt_samples_drive_pump() {
        let samples = SampleChannel::new();
        let mut led = PinMock::new(&[
            Transaction::set(State::High),
            Transaction::set(State::Low),
        ]);
        let mut controller = Controller::new(Board::new(
            FakePwm::default(),
            led.clone(),
            NoopDelay::new(),
            CountingWatchdog::default(),
            &samples,
        ));
        samples.publish(MoistureReading::from_adc(0x900, 12));
        controller.step();
        assert!(controller.hal().pump().is_running());

        samples.publish(MoistureReading::new(60));
        controller.step();
        assert!(!controller.hal().pump().is_running());
        assert_eq!(controller.state(), WateringState::RecentlyWatered);
        assert_eq!(controller.hal().watchdog().feeds, 2);
        led.done();
    }

    #[test]
    fn test_running_loop_never_trips_watchdog() {
        let mut controller = Controller::new(SimulatedBoard::new(200));
        for _ in 0..50 {
            controller.step();
        }
        assert!(!controller.hal().tripped);
    }

    #[test]
    fn test_stalled_loop_restarts_with_defaults() {
        let mut controller = Controller::new(SimulatedBoard::new(100));
        controller.step();
        assert_eq!(controller.state(), WateringState::RecentlyWatered);

        // Loop wedged: time passes, nothing feeds the watchdog.
        let hal = controller.hal_mut();
        while !hal.tripped {
            hal.delay_ms(HEARTBEAT_PERIOD_MS);
        }
        assert!(hal.since_feed_ms > WATCHDOG_TIMEOUT_MS);

        let restarted = Controller::new(SimulatedBoard::new(100));
        assert_eq!(restarted.state(), WateringState::NotRecentlyWatered);
        assert!(!restarted.supervisor.is_lit());
    }
}
