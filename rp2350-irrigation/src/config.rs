/*
 * @file config.rs
 * @brief Board constants for the RP2350 irrigation controller
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

//! Board constants for the RP2350 irrigation controller.

pub const XTAL_FREQ_HZ: u32 = 12_000_000;

/// ADC input wired to the moisture probe (GPIO26).
pub const SENSOR_ADC_CHANNEL: u8 = 0;
pub const ADC_RESOLUTION_BITS: u32 = 12;
/// Free-running sample period in 48 MHz ADC clocks, minus one (~1 kS/s).
pub const ADC_CLOCK_DIV: u16 = 47_999;

/// Pump PWM at 150 MHz / 150 / 1000 = 1 kHz.
pub const PUMP_PWM_DIV: u8 = 150;
pub const PUMP_PWM_TOP: u16 = 999;
