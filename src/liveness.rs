/*
 * @file liveness.rs
 * @brief Heartbeat and watchdog supervisor
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

//! Heartbeat and watchdog supervision.

use crate::config::HEARTBEAT_PERIOD_MS;
use crate::hal::IrrigationHal;

/// Proves forward progress once per control cycle.
///
/// # Details
/// Each tick feeds the watchdog first, then waits out the heartbeat
/// period and flips the status indicator. A loop that stops ticking
/// leaves the watchdog unfed and the chip restarts; the indicator
/// freezing is the only outward sign.
#[derive(Debug, Default)]
pub struct Supervisor {
    lit: bool,
}

impl Supervisor {
    /// Creates a supervisor with the indicator off.
    pub const fn new() -> Self {
        Self { lit: false }
    }

    /// Current heartbeat indicator state.
    pub fn is_lit(&self) -> bool {
        self.lit
    }

    /// Runs one supervision step.
    ///
    /// # Parameters
    /// * `hal` - Board providing watchdog, delay and indicator.
    ///
    /// # Returns
    /// The indicator state just written.
    pub fn tick<H: IrrigationHal>(&mut self, hal: &mut H) -> bool {
        hal.reset_watchdog();
        hal.delay_ms(HEARTBEAT_PERIOD_MS);
        self.lit = !self.lit;
        hal.set_heartbeat(self.lit);
        self.lit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::Board;
    use crate::hal::tests::CountingWatchdog;
    use crate::pump::tests::FakePwm;
    use crate::sampler::SampleChannel;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    #[test]
    fn test_starts_dark() {
        assert!(!Supervisor::new().is_lit());
    }

    #[test]
    fn test_tick_toggles_indicator_and_feeds_watchdog() {
        let samples = SampleChannel::new();
        let expectations = [
            Transaction::set(State::High),
            Transaction::set(State::Low),
            Transaction::set(State::High),
        ];
        let mut led = PinMock::new(&expectations);
        let mut board = Board::new(
            FakePwm::default(),
            led.clone(),
            NoopDelay::new(),
            CountingWatchdog::default(),
            &samples,
        );
        let mut supervisor = Supervisor::new();

        assert!(supervisor.tick(&mut board));
        assert!(!supervisor.tick(&mut board));
        assert!(supervisor.tick(&mut board));
        assert_eq!(board.watchdog().feeds, 3);
        led.done();
    }
}
