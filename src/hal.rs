/*
 * @file hal.rs
 * @brief Hardware boundary traits and embedded-hal board
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

//! Hardware boundary of the controller.
//!
//! The control core never touches registers. Everything it needs from the
//! board goes through [`IrrigationHal`]; [`Board`] is the implementation
//! built from `embedded-hal` peripherals, and tests substitute their own.

use crate::moisture::MoistureReading;
use crate::pump::Pump;
use crate::sampler::SampleChannel;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal::pwm::SetDutyCycle;

/// Hardware watchdog that restarts the chip unless fed in time.
pub trait Watchdog {
    /// Restarts the countdown.
    fn feed(&mut self);
}

/// Operations the control loop performs on the board.
pub trait IrrigationHal {
    /// Starts driving the pump.
    fn enable_pump(&mut self);

    /// Stops driving the pump. Idempotent.
    fn disable_pump(&mut self);

    /// Returns the newest moisture sample without blocking.
    fn read_latest_sample(&self) -> MoistureReading;

    /// Feeds the hardware watchdog.
    fn reset_watchdog(&mut self);

    /// Drives the status indicator.
    fn set_heartbeat(&mut self, on: bool);

    /// Blocks for roughly `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// Board assembled from `embedded-hal` peripherals.
///
/// # Details
/// The sample channel is borrowed because the conversion-complete
/// interrupt writes to it independently; on target it is a `static`.
///
/// # Fields
/// * `pump` - PWM-driven pump.
/// * `led` - Heartbeat indicator pin.
/// * `delay` - Blocking delay source for the heartbeat cadence.
/// * `watchdog` - Running hardware watchdog.
/// * `samples` - Channel filled by the conversion-complete interrupt.
pub struct Board<'a, P, L, D, W> {
    pump: Pump<P>,
    led: L,
    delay: D,
    watchdog: W,
    samples: &'a SampleChannel,
}

impl<'a, P, L, D, W> Board<'a, P, L, D, W>
where
    P: SetDutyCycle,
    L: OutputPin,
    D: DelayNs,
    W: Watchdog,
{
    /// Wraps initialized peripherals. The pump is forced off.
    ///
    /// # Parameters
    /// * `pump` - PWM channel driving the pump.
    /// * `led` - Status indicator output.
    /// * `delay` - Delay provider.
    /// * `watchdog` - Already started watchdog.
    /// * `samples` - Shared sample channel.
    pub fn new(pump: P, led: L, delay: D, watchdog: W, samples: &'a SampleChannel) -> Self {
        Self {
            pump: Pump::new(pump),
            led,
            delay,
            watchdog,
            samples,
        }
    }

    /// Borrows the pump driver.
    pub fn pump(&self) -> &Pump<P> {
        &self.pump
    }

    /// Borrows the watchdog.
    pub fn watchdog(&self) -> &W {
        &self.watchdog
    }
}

impl<P, L, D, W> IrrigationHal for Board<'_, P, L, D, W>
where
    P: SetDutyCycle,
    L: OutputPin,
    D: DelayNs,
    W: Watchdog,
{
    fn enable_pump(&mut self) {
        self.pump.enable();
    }

    fn disable_pump(&mut self) {
        self.pump.disable();
    }

    fn read_latest_sample(&self) -> MoistureReading {
        self.samples.latest()
    }

    fn reset_watchdog(&mut self) {
        self.watchdog.feed();
    }

    fn set_heartbeat(&mut self, on: bool) {
        self.led.set_state(PinState::from(on)).ok();
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::pump::tests::FakePwm;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    /// Watchdog that counts feeds.
    #[derive(Default)]
    pub(crate) struct CountingWatchdog {
        pub feeds: usize,
    }

    impl Watchdog for CountingWatchdog {
        fn feed(&mut self) {
            self.feeds += 1;
        }
    }

    #[test]
    fn test_board_reads_shared_channel() {
        let samples = SampleChannel::new();
        let mut led = PinMock::new(&[]);
        let board = Board::new(
            FakePwm::default(),
            led.clone(),
            NoopDelay::new(),
            CountingWatchdog::default(),
            &samples,
        );
        assert_eq!(board.read_latest_sample(), MoistureReading::UNSAMPLED);
        samples.publish(MoistureReading::new(150));
        assert_eq!(board.read_latest_sample().value(), 150);
        led.done();
    }

    #[test]
    fn test_board_drives_heartbeat_pin() {
        let samples = SampleChannel::new();
        let expectations = [
            Transaction::set(State::High),
            Transaction::set(State::Low),
        ];
        let mut led = PinMock::new(&expectations);
        let mut board = Board::new(
            FakePwm::default(),
            led.clone(),
            NoopDelay::new(),
            CountingWatchdog::default(),
            &samples,
        );
        board.set_heartbeat(true);
        board.set_heartbeat(false);
        led.done();
    }

    #[test]
    fn test_board_pump_and_watchdog() {
        let samples = SampleChannel::new();
        let mut led = PinMock::new(&[]);
        let mut board = Board::new(
            FakePwm::default(),
            led.clone(),
            NoopDelay::new(),
            CountingWatchdog::default(),
            &samples,
        );
        assert!(!board.pump().is_running());
        board.enable_pump();
        assert!(board.pump().is_running());
        board.disable_pump();
        board.disable_pump();
        assert!(!board.pump().is_running());
        assert_eq!(board.pump().output().duty, 0);

        board.reset_watchdog();
        board.reset_watchdog();
        assert_eq!(board.watchdog().feeds, 2);
        led.done();
    }
}
