/*
 * @file globals.rs
 * @brief Moisture sample shared between the ADC IRQ and main loop
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

//! Moisture sample shared between the ADC interrupt and the control loop.

use soilguard::{MoistureReading, SampleChannel};

/// Latest moisture sample; written only by the ADC FIFO interrupt.
pub static SAMPLES: SampleChannel = SampleChannel::new();

/// Records a completed conversion.
///
/// # Details
/// Called from interrupt context. Only stores the value; all decisions
/// happen in the control loop.
///
/// # Parameters
/// * `reading` - Newly captured sample.
pub fn on_sample_ready(reading: MoistureReading) {
    SAMPLES.publish(reading);
}
