//! Sample scope firmware.
//!
//! Loads a captured trace through the `SampleSource` seam, shows its
//! min/max and a four-row window of values on the OLED, and scrolls the
//! window with the rotary encoder.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_time::Timer;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use picodial::config;
use picodial::input::encoder::decode_steps;
use picodial::input::steps::{StepQueue, DEFAULT_QUEUE_SLOTS};
use picodial::ui::display;
use picodial::ui::view_logic::{sample_bounds, SampleSource, ScrollWindow, SliceSource};

static STEP_QUEUE: StaticCell<StepQueue<DEFAULT_QUEUE_SLOTS>> = StaticCell::new();

/// Rows of sample values visible below the min/max header.
const VISIBLE_ROWS: usize = 4;

/// Built-in 250 Hz capture excerpt.  Stands behind the same seam a file
/// or ADC reader would use.
static CAPTURE: [i32; 48] = [
    2521, 2534, 2560, 2601, 2655, 2718, 2787, 2855, 2917, 2965, 2995, 3004, 2989, 2952, 2896,
    2825, 2744, 2660, 2578, 2504, 2443, 2398, 2372, 2365, 2377, 2408, 2455, 2515, 2584, 2657,
    2729, 2795, 2851, 2892, 2915, 2919, 2903, 2868, 2817, 2753, 2681, 2605, 2531, 2463, 2406,
    2364, 2339, 2332,
];

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("scope starting");

    let pin_a = Input::new(p.PIN_10, Pull::Up);
    let pin_b = Input::new(p.PIN_11, Pull::Up);
    let (steps_tx, mut steps) = STEP_QUEUE.init(StepQueue::new()).split();
    spawner.spawn(decode_steps(pin_a, pin_b, steps_tx)).unwrap();

    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c::Config::default());
    let mut oled = display::init(i2c);

    let mut source = SliceSource::new(&CAPTURE);
    let mut samples: heapless::Vec<i32, 128> = heapless::Vec::new();
    while let Some(sample) = source.next_sample() {
        if samples.push(sample).is_err() {
            break;
        }
    }

    let bounds = sample_bounds(&samples).unwrap_or((0, 0));
    let mut window = ScrollWindow::new(VISIBLE_ROWS, samples.len());
    display::draw_samples(&mut oled, bounds, &samples[window.range()]);

    loop {
        while let Some(step) = steps.take_next() {
            if window.scroll(step.delta()) {
                display::draw_samples(&mut oled, bounds, &samples[window.range()]);
            }
        }

        Timer::after_millis(config::LOOP_PERIOD_MS).await;
    }
}
