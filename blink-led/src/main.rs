#![no_std]
#![no_main]

mod port;

use blink_loop::config::{DELAY_MS, LED};
use blink_loop::Blinker;
use cortex_m_rt::entry;
use defmt_rtt as _;
use panic_halt as _;
use stm32f4xx_hal::{pac, prelude::*};

use crate::port::{Direction, Output};

#[entry]
fn main() -> ! {
    let dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    // GPIOA is driven through its raw registers, so its clock is enabled by
    // hand before the RCC is handed to the HAL.
    dp.RCC.ahb1enr().modify(|_, w| w.gpioaen().set_bit());

    // Default clock tree: 16 MHz HSI. SysTick spins for the delays.
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();
    let delay = cp.SYST.delay(&clocks);

    let gpioa = dp.GPIOA;
    let blinker = Blinker::new(Direction::new(&gpioa), Output::new(&gpioa), delay, LED);

    defmt::info!("PA{} low every {} ms", LED.bit(), 2 * DELAY_MS);

    blinker.run()
}
