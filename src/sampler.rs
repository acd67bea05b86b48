/*
 * @file sampler.rs
 * @brief Latest moisture sample shared between ADC IRQ and main loop
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

//! Latest-value cell shared between the ADC interrupt and the main loop.

use crate::moisture::MoistureReading;
use core::cell::Cell;
use critical_section::Mutex;

/// Single-producer/single-consumer holder for the newest moisture sample.
///
/// # Details
/// The conversion-complete interrupt is the only writer and the control
/// loop the only reader. Both sides go through a critical section, so a
/// read never observes a half-written value on any target. There is no
/// queue: a newer sample simply replaces the older one.
pub struct SampleChannel {
    latest: Mutex<Cell<MoistureReading>>,
    primed: Mutex<Cell<bool>>,
}

impl SampleChannel {
    /// Creates an empty channel holding [`MoistureReading::UNSAMPLED`].
    pub const fn new() -> Self {
        Self {
            latest: Mutex::new(Cell::new(MoistureReading::UNSAMPLED)),
            primed: Mutex::new(Cell::new(false)),
        }
    }

    /// Stores a freshly converted sample, replacing the previous one.
    ///
    /// # Parameters
    /// * `reading` - The sample captured by the conversion-complete handler.
    pub fn publish(&self, reading: MoistureReading) {
        critical_section::with(|cs| {
            self.latest.borrow(cs).set(reading);
            self.primed.borrow(cs).set(true);
        });
    }

    /// Returns the most recent sample without waiting.
    ///
    /// # Returns
    /// The last published reading, or the boot default if none arrived yet.
    pub fn latest(&self) -> MoistureReading {
        critical_section::with(|cs| self.latest.borrow(cs).get())
    }

    /// Reports whether any sample has been published since boot.
    pub fn is_primed(&self) -> bool {
        critical_section::with(|cs| self.primed.borrow(cs).get())
    }
}

impl Default for SampleChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SHARED: SampleChannel = SampleChannel::new();

    #[test]
    fn test_new_channel_reports_default() {
        let channel = SampleChannel::new();
        assert_eq!(channel.latest(), MoistureReading::UNSAMPLED);
        assert!(!channel.is_primed());
    }

    #[test]
    fn test_last_writer_wins() {
        let channel = SampleChannel::new();
        channel.publish(MoistureReading::new(90));
        channel.publish(MoistureReading::new(200));
        channel.publish(MoistureReading::new(130));
        assert_eq!(channel.latest(), MoistureReading::new(130));
        assert!(channel.is_primed());
    }

    #[test]
    fn test_read_does_not_consume() {
        let channel = SampleChannel::new();
        channel.publish(MoistureReading::new(77));
        assert_eq!(channel.latest().value(), 77);
        assert_eq!(channel.latest().value(), 77);
    }

    #[test]
    fn test_static_channel_across_threads() {
        let writer = std::thread::spawn(|| {
            for value in 0..=u8::MAX {
                SHARED.publish(MoistureReading::new(value));
            }
        });
        writer.join().unwrap();
        assert_eq!(SHARED.latest().value(), u8::MAX);
    }
}
