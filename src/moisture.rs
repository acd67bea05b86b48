/*
 * @file moisture.rs
 * @brief Moisture reading value type
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

//! Moisture reading value type.

use crate::config::{MOISTURE_THRESHOLD, REWATER_LEVEL};

/// Eight-bit soil moisture sample; higher values mean drier soil.
///
/// # Details
/// Produced by the sampling channel from the top 8 bits of an ADC
/// conversion and consumed by the decision engine. Only the latest value
/// is ever kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MoistureReading(u8);

impl MoistureReading {
    /// Value reported before the first conversion completes.
    ///
    /// # Details
    /// Sits below [`MOISTURE_THRESHOLD`] so a controller with no data yet
    /// treats the soil as wet and keeps the pump off.
    pub const UNSAMPLED: Self = Self(0);

    /// Wraps a raw 8-bit reading.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the raw 8-bit value.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Reduces an ADC conversion to its top 8 bits.
    ///
    /// # Parameters
    /// * `raw` - Right-aligned conversion result.
    /// * `resolution_bits` - Converter resolution (10 for the legacy
    ///   sensor path, 12 on RP2350). Clamped to 8..=16.
    ///
    /// # Returns
    /// The reading, saturating at 255 if `raw` exceeds the stated resolution.
    pub const fn from_adc(raw: u16, resolution_bits: u32) -> Self {
        let shift = match resolution_bits {
            0..=8 => 0,
            9..=16 => resolution_bits - 8,
            _ => 8,
        };
        let scaled = raw >> shift;
        if scaled > u8::MAX as u16 {
            Self(u8::MAX)
        } else {
            Self(scaled as u8)
        }
    }

    /// `true` when the soil is already wet enough to stop watering.
    pub const fn is_wet(self) -> bool {
        self.0 < MOISTURE_THRESHOLD
    }

    /// `true` once the soil has dried past threshold plus margin.
    pub const fn has_dried_out(self) -> bool {
        self.0 >= REWATER_LEVEL
    }
}

impl From<u8> for MoistureReading {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsampled_is_wet() {
        assert!(MoistureReading::UNSAMPLED.is_wet());
        assert_eq!(MoistureReading::default(), MoistureReading::UNSAMPLED);
    }

    #[test]
    fn test_threshold_counts_as_dry() {
        assert!(MoistureReading::new(119).is_wet());
        assert!(!MoistureReading::new(120).is_wet());
    }

    #[test]
    fn test_rewater_level_counts_as_dried_out() {
        assert!(!MoistureReading::new(139).has_dried_out());
        assert!(MoistureReading::new(140).has_dried_out());
    }

    #[test]
    fn test_from_adc_ten_bit_keeps_top_bits() {
        assert_eq!(MoistureReading::from_adc(0x3FF, 10).value(), 0xFF);
        assert_eq!(MoistureReading::from_adc(0x1E3, 10).value(), 0x78);
        assert_eq!(MoistureReading::from_adc(0x003, 10).value(), 0);
    }

    #[test]
    fn test_from_adc_twelve_bit_keeps_top_bits() {
        assert_eq!(MoistureReading::from_adc(0xFFF, 12).value(), 0xFF);
        assert_eq!(MoistureReading::from_adc(0x8C0, 12).value(), 0x8C);
    }

    #[test]
    fn test_from_adc_saturates_out_of_range() {
        assert_eq!(MoistureReading::from_adc(0xFFFF, 10).value(), 0xFF);
        assert_eq!(MoistureReading::from_adc(300, 8).value(), 0xFF);
    }
}
