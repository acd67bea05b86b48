/*
 * @file lib.rs
 * @brief Soilguard irrigation control core library root
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

//! Soil-moisture irrigation control core.
//!
//! Decides when a single plant's water pump runs, using a two-threshold
//! hysteresis policy fed by an interrupt-updated moisture sample, and
//! proves its own liveness to a hardware watchdog once per cycle.
//!
//! The crate is `no_std` and touches hardware only through
//! [`hal::IrrigationHal`], so everything here runs under host tests.
//!
//! # Example
//! ```no_run
//! use soilguard::control::Controller;
//! use soilguard::hal::IrrigationHal;
//!
//! fn start<H: IrrigationHal>(board: H) -> ! {
//!     Controller::new(board).run(|_cycle| {})
//! }
//! ```

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod hal;
pub mod hysteresis;
pub mod liveness;
pub mod moisture;
pub mod pump;
pub mod sampler;

pub use control::{Controller, Cycle};
pub use hal::{Board, IrrigationHal, Watchdog};
pub use hysteresis::{Decision, PumpCommand, WateringState, decide};
pub use moisture::MoistureReading;
pub use sampler::SampleChannel;
