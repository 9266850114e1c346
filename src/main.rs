//! LED menu firmware.
//!
//! A rotary encoder moves a cursor over three PWM-dimmable LEDs on an
//! SSD1306 menu; the push button toggles the selected LED.  One tight
//! poll loop drives everything: it polls the debounced button, drains
//! the encoder's step queue, and sleeps for the loop period.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::pwm::Pwm;
use embassy_time::Timer;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use picodial::config;
use picodial::input::button::button;
use picodial::input::debounce::FireMode;
use picodial::input::encoder::decode_steps;
use picodial::input::steps::{StepQueue, DEFAULT_QUEUE_SLOTS};
use picodial::output::led::{pwm_config, DigitalOutput, Led, LedChannel};
use picodial::output::switch::{PinMode, Switch};
use picodial::ui::display;
use picodial::ui::view_logic::{select_next, select_prev};

static STEP_QUEUE: StaticCell<StepQueue<DEFAULT_QUEUE_SLOTS>> = StaticCell::new();

const MENU_LABELS: [&str; 3] = ["LED1", "LED2", "LED3"];

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("picodial starting");

    // Encoder: A is the edge source, B the direction sense.
    let pin_a = Input::new(p.PIN_10, Pull::Up);
    let pin_b = Input::new(p.PIN_11, Pull::Up);
    let (steps_tx, mut steps) = STEP_QUEUE.init(StepQueue::new()).split();
    spawner.spawn(decode_steps(pin_a, pin_b, steps_tx)).unwrap();

    let mut button = button(Input::new(p.PIN_12, Pull::Up), FireMode::OncePerPress);

    // GP20/GP21 share PWM slice 2; GP22 sits on slice 3.
    let cfg = pwm_config();
    let (out1, out2) = Pwm::new_output_ab(p.PWM_SLICE2, p.PIN_20, p.PIN_21, cfg.clone()).split();
    let (out3, _) = Pwm::new_output_a(p.PWM_SLICE3, p.PIN_22, cfg).split();
    let mut leds: [Led; 3] = [
        Led::new(
            LedChannel::new(out1.unwrap()),
            PinMode::Output,
            config::INITIAL_BRIGHTNESS_PCT,
        )
        .unwrap(),
        Led::new(
            LedChannel::new(out2.unwrap()),
            PinMode::Output,
            config::INITIAL_BRIGHTNESS_PCT,
        )
        .unwrap(),
        Led::new(
            LedChannel::new(out3.unwrap()),
            PinMode::Output,
            config::INITIAL_BRIGHTNESS_PCT,
        )
        .unwrap(),
    ];

    // Onboard LED shares the same on/off contract as the dimmable outputs.
    let mut status = DigitalOutput::new(Output::new(p.PIN_25, Level::Low));
    status.on();

    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c::Config::default());
    let mut oled = display::init(i2c);

    let mut selection = 0;
    display::draw_menu(&mut oled, &MENU_LABELS, selection, leds[selection].value());

    loop {
        if button.poll() {
            leds[selection].toggle();
            info!(
                "{} -> {}",
                MENU_LABELS[selection],
                leds[selection].value()
            );
            display::draw_menu(&mut oled, &MENU_LABELS, selection, leds[selection].value());
        }

        while let Some(step) = steps.take_next() {
            selection = if step.delta() > 0 {
                select_next(selection, MENU_LABELS.len())
            } else {
                select_prev(selection, MENU_LABELS.len())
            };
            display::draw_menu(&mut oled, &MENU_LABELS, selection, leds[selection].value());
        }

        Timer::after_millis(config::LOOP_PERIOD_MS).await;
    }
}
