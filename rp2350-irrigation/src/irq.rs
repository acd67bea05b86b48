/*
 * @file irq.rs
 * @brief ADC conversion-complete interrupt handler and NVIC helpers
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

//! ADC conversion-complete interrupt and NVIC helpers.

use crate::config::ADC_RESOLUTION_BITS;
use crate::globals;
use crate::hal;
use crate::hal::pac::interrupt;
use crate::hardware::adc_regs;
use soilguard::MoistureReading;

/// ADC FIFO interrupt handler that publishes the newest conversion.
///
/// # Details
/// Fires whenever the free-running ADC leaves at least one result in the
/// FIFO. The FIFO is drained so the interrupt clears; only the last valid
/// result is kept.
#[interrupt]
fn ADC_IRQ_FIFO() {
    if let Some(reading) = drain_fifo(adc_regs()) {
        globals::on_sample_ready(reading);
    }
}

/// Unmasks the ADC FIFO interrupt in the NVIC.
///
/// # Details
/// Must run only after the sample channel and ADC are initialized.
pub fn enable_adc_irq() {
    unsafe {
        cortex_m::peripheral::NVIC::unmask(hal::pac::Interrupt::ADC_IRQ_FIFO);
    }
}

/// Empties the ADC FIFO.
///
/// # Parameters
/// * `adc` - ADC register block.
///
/// # Returns
/// The newest conversion without the error flag set, if any.
fn drain_fifo(adc: &hal::pac::adc::RegisterBlock) -> Option<MoistureReading> {
    let mut newest = None;
    while adc.fcs().read().level().bits() > 0 {
        let entry = adc.fifo().read();
        if entry.err().bit_is_clear() {
            newest = Some(MoistureReading::from_adc(
                entry.val().bits(),
                ADC_RESOLUTION_BITS,
            ));
        }
    }
    newest
}
