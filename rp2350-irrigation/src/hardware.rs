/*
 * @file hardware.rs
 * @brief Peripheral bring-up for the irrigation board
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

//! Peripheral bring-up for the irrigation board.

use crate::config;
use crate::globals;
use crate::hal::{self, Clock};
use crate::types::{AppBoard, PumpChannel, SensorPin};
use embedded_hal::digital::OutputPin;
use fugit::ExtU32;
use hal::gpio::bank0::Gpio16;
use hal::gpio::{FunctionNull, Pin, Pins, PullDown};
use soilguard::Board;
use soilguard::config::WATCHDOG_TIMEOUT_MS;

/// RP2350 watchdog adapted to the control core's [`soilguard::Watchdog`].
pub struct HwWatchdog(hal::Watchdog);

impl soilguard::Watchdog for HwWatchdog {
    fn feed(&mut self) {
        self.0.feed();
    }
}

/// Everything the firmware needs after bring-up.
///
/// # Fields
/// * `board` - Pump, LED, timer, watchdog and sample channel.
/// * `watchdog_restart` - The previous run ended in a watchdog reset.
/// * `_adc` / `_sensor` - Keep the ADC and its input pin claimed.
pub struct Runtime {
    pub board: AppBoard,
    pub watchdog_restart: bool,
    _adc: hal::Adc,
    _sensor: SensorPin,
}

/// Consumes the PAC and brings up every peripheral the controller uses.
///
/// # Details
/// Clocks, pump PWM (off), status LED (off), free-running ADC with its
/// FIFO interrupt armed at the peripheral, delay timer, and finally the
/// watchdog. The NVIC line stays masked; the caller unmasks it once the
/// runtime exists.
///
/// # Returns
/// A fully initialized [`Runtime`].
pub fn build_runtime() -> Runtime {
    let mut pac = take_peripherals();
    let watchdog_restart = reset_by_watchdog(&pac.WATCHDOG);
    let mut watchdog = hal::Watchdog::new(pac.WATCHDOG);
    let clocks = init_system_clocks(
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    );
    let pins = init_pins(pac.SIO, pac.IO_BANK0, pac.PADS_BANK0, &mut pac.RESETS);
    let pump = configure_pump(pac.PWM, &mut pac.RESETS, pins.gpio16);
    let mut led = pins.gpio25.into_push_pull_output();
    led.set_low().ok();
    let adc = hal::Adc::new(pac.ADC, &mut pac.RESETS);
    let sensor = hal::adc::AdcPin::new(pins.gpio26.into_floating_input()).unwrap();
    start_free_running_adc();
    let timer = hal::Timer::new_timer0(pac.TIMER0, &mut pac.RESETS, &clocks);
    start_watchdog(&mut watchdog);
    let board = Board::new(pump, led, timer, HwWatchdog(watchdog), &globals::SAMPLES);
    Runtime {
        board,
        watchdog_restart,
        _adc: adc,
        _sensor: sensor,
    }
}

/// Returns a shared reference to the ADC register block.
///
/// # Safety
/// Accessing peripheral registers is inherently unsafe; this helper confines the
/// raw-pointer dereference to a single location.
pub fn adc_regs() -> &'static hal::pac::adc::RegisterBlock {
    unsafe { &*hal::pac::ADC::ptr() }
}

/// Takes ownership of the RP235x PAC peripherals.
fn take_peripherals() -> hal::pac::Peripherals {
    hal::pac::Peripherals::take().unwrap()
}

/// Reports whether the last reset came from the watchdog timer.
///
/// # Parameters
/// * `watchdog` - WATCHDOG block, read before the HAL takes it over.
fn reset_by_watchdog(watchdog: &hal::pac::WATCHDOG) -> bool {
    watchdog.reason().read().timer().bit_is_set()
}

/// Sets up the system clocks using rp-hal helpers.
///
/// # Parameters
/// * `xosc` - Crystal oscillator peripheral.
/// * `clocks` - CLOCKS block handle.
/// * `pll_sys` - System PLL peripheral.
/// * `pll_usb` - USB PLL peripheral.
/// * `resets` - Reset controller used during bring-up.
/// * `watchdog` - Watchdog whose tick generator the clock init starts.
///
/// # Returns
/// A configured [`hal::clocks::ClocksManager`].
fn init_system_clocks(
    xosc: hal::pac::XOSC,
    clocks: hal::pac::CLOCKS,
    pll_sys: hal::pac::PLL_SYS,
    pll_usb: hal::pac::PLL_USB,
    resets: &mut hal::pac::RESETS,
    watchdog: &mut hal::Watchdog,
) -> hal::clocks::ClocksManager {
    let clocks = hal::clocks::init_clocks_and_plls(
        config::XTAL_FREQ_HZ,
        xosc,
        clocks,
        pll_sys,
        pll_usb,
        resets,
        watchdog,
    )
    .unwrap();
    defmt::debug!("system clock {} Hz", clocks.system_clock.freq().to_Hz());
    clocks
}

/// Configures the SIO block and splits the GPIO pins.
fn init_pins(
    sio_device: hal::pac::SIO,
    io: hal::pac::IO_BANK0,
    pads: hal::pac::PADS_BANK0,
    resets: &mut hal::pac::RESETS,
) -> Pins {
    let sio = hal::Sio::new(sio_device);
    Pins::new(io, pads, sio.gpio_bank0, resets)
}

/// Routes PWM slice 0 channel A to the pump driver on GPIO16.
///
/// # Parameters
/// * `pwm` - Raw PWM peripheral.
/// * `resets` - Reset controller for enabling the block.
/// * `pin` - GPIO16 in its reset state.
///
/// # Returns
/// The pump channel at zero duty.
fn configure_pump(
    pwm: hal::pac::PWM,
    resets: &mut hal::pac::RESETS,
    pin: Pin<Gpio16, FunctionNull, PullDown>,
) -> PumpChannel {
    let slices = hal::pwm::Slices::new(pwm, resets);
    let mut slice = slices.pwm0;
    slice.set_div_int(config::PUMP_PWM_DIV);
    slice.set_top(config::PUMP_PWM_TOP);
    slice.enable();
    let mut channel = slice.channel_a;
    channel.output_to(pin);
    channel
}

/// Puts the ADC into free-running mode on the sensor channel.
///
/// # Details
/// Results land in the FIFO with their error flag; the FIFO raises its
/// interrupt as soon as one entry is waiting. DMA stays off.
fn start_free_running_adc() {
    let adc = adc_regs();
    unsafe {
        adc.div().write(|w| w.int().bits(config::ADC_CLOCK_DIV));
        adc.fcs().write(|w| {
            w.en().set_bit();
            w.err().set_bit();
            w.dreq_en().clear_bit();
            w.thresh().bits(1)
        });
        adc.inte().write(|w| w.fifo().set_bit());
        adc.cs().modify(|_, w| {
            w.ainsel().bits(config::SENSOR_ADC_CHANNEL);
            w.start_many().set_bit()
        });
    }
}

/// Starts the watchdog with the controller's timeout.
///
/// # Details
/// Paused while a debugger holds the cores so single-stepping does not
/// reset the chip.
fn start_watchdog(watchdog: &mut hal::Watchdog) {
    watchdog.pause_on_debug(true);
    watchdog.start((WATCHDOG_TIMEOUT_MS * 1_000).micros());
}
