/*
 * @file pump.rs
 * @brief PWM pump driver
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

//! PWM-driven water pump.

use crate::config::PUMP_DUTY_PERCENT;
use crate::hysteresis::PumpCommand;
use embedded_hal::pwm::SetDutyCycle;

/// Water pump behind a PWM channel.
///
/// # Fields
/// * `output` - PWM channel wired to the pump driver stage.
/// * `running` - Whether the pump is currently driven.
pub struct Pump<P> {
    output: P,
    running: bool,
}

impl<P: SetDutyCycle> Pump<P> {
    /// Takes the PWM channel and forces the pump off.
    ///
    /// # Parameters
    /// * `output` - Configured PWM channel.
    pub fn new(output: P) -> Self {
        let mut pump = Self {
            output,
            running: false,
        };
        pump.disable();
        pump
    }

    /// Drives the pump at [`PUMP_DUTY_PERCENT`].
    pub fn enable(&mut self) {
        self.output.set_duty_cycle_percent(PUMP_DUTY_PERCENT).ok();
        self.running = true;
    }

    /// Cuts the drive signal. Safe to call any number of times.
    pub fn disable(&mut self) {
        self.output.set_duty_cycle_fully_off().ok();
        self.running = false;
    }

    /// Applies a decision engine command.
    ///
    /// # Parameters
    /// * `command` - Requested actuation.
    pub fn apply(&mut self, command: PumpCommand) {
        match command {
            PumpCommand::Enable => self.enable(),
            PumpCommand::Disable => self.disable(),
        }
    }

    /// Returns `true` while the pump is driven.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Borrows the underlying PWM channel.
    pub fn output(&self) -> &P {
        &self.output
    }
}
