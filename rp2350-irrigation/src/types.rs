/*
 * @file types.rs
 * @brief Concrete peripheral type aliases
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

//! Concrete peripheral types for the irrigation board.

use crate::hal;
use crate::hardware::HwWatchdog;
use hal::gpio::bank0::{Gpio25, Gpio26};
use hal::gpio::{FunctionSioInput, FunctionSioOutput, Pin, PullDown, PullNone};
use hal::pwm::{A, Channel, FreeRunning, Pwm0, Slice};
use soilguard::Board;

pub type PumpChannel = Channel<Slice<Pwm0, FreeRunning>, A>;
pub type LedPin = Pin<Gpio25, FunctionSioOutput, PullDown>;
pub type SensorPin = hal::adc::AdcPin<Pin<Gpio26, FunctionSioInput, PullNone>>;
pub type AppTimer = hal::Timer<hal::timer::CopyableTimer0>;
pub type AppBoard = Board<'static, PumpChannel, LedPin, AppTimer, HwWatchdog>;
