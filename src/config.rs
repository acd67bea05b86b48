/*
 * @file config.rs
 * @brief Irrigation policy and supervision constants
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

//! Compile-time constants for the irrigation policy and supervision cadence.

/// Readings below this value count as sufficiently watered.
pub const MOISTURE_THRESHOLD: u8 = 0x78;

/// How far past the threshold the soil must dry before rewatering.
pub const HYSTERESIS_MARGIN: u8 = 20;

/// Reading at which a recently watered plant may be watered again.
pub const REWATER_LEVEL: u8 = MOISTURE_THRESHOLD + HYSTERESIS_MARGIN;

/// Delay before each heartbeat toggle; sets the control loop period.
pub const HEARTBEAT_PERIOD_MS: u32 = 1_000;

/// Hardware watchdog timeout. Must exceed one full loop iteration.
pub const WATCHDOG_TIMEOUT_MS: u32 = 4_000;

/// PWM duty cycle applied to the pump while it is enabled.
pub const PUMP_DUTY_PERCENT: u8 = 100;

const _: () = assert!(HEARTBEAT_PERIOD_MS < WATCHDOG_TIMEOUT_MS);
const _: () = assert!(PUMP_DUTY_PERCENT <= 100);
