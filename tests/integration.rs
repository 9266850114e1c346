//! Integration tests for the picodial host-testable core.
//!
//! These exercise the components together the way the firmware loops do:
//! decoded steps flow through the bounded queue into selection changes,
//! and debounced presses toggle a dimmable output.

use std::cell::Cell;
use std::rc::Rc;

use picodial::config;
use picodial::input::debounce::{DebouncedInput, FireMode};
use picodial::input::steps::{Step, StepQueue, DEFAULT_QUEUE_SLOTS};
use picodial::input::{Clock, RawPin};
use picodial::output::duty::duty_for;
use picodial::output::switch::{DimmableOutput, DutyChannel, PinMode, Switch};
use picodial::ui::view_logic::{select_next, select_prev};

struct ScriptPin {
    low: Vec<bool>,
    pos: usize,
}

impl ScriptPin {
    fn new(low: &[bool]) -> Self {
        Self {
            low: low.to_vec(),
            pos: 0,
        }
    }
}

impl RawPin for ScriptPin {
    fn is_low(&mut self) -> bool {
        let level = self.low[self.pos.min(self.low.len() - 1)];
        self.pos += 1;
        level
    }
}

#[derive(Clone)]
struct FakeClock(Rc<Cell<u64>>);

impl Clock for FakeClock {
    fn now_ms(&self) -> u64 {
        self.0.get()
    }

    fn block_ms(&self, ms: u64) {
        self.0.set(self.0.get() + ms);
    }
}

#[derive(Clone)]
struct SharedDuty(Rc<Cell<u16>>);

impl DutyChannel for SharedDuty {
    fn set_duty(&mut self, duty: u16) {
        self.0.set(duty);
    }

    fn duty(&self) -> u16 {
        self.0.get()
    }
}

#[test]
fn overflowed_capacity_four_queue_keeps_oldest_four() {
    // capacity 4 → 5 storage slots
    let mut queue: StepQueue<5> = StepQueue::new();
    let (mut tx, mut rx) = queue.split();

    for &delta in &[1, 1, -1, 1, 1] {
        let step = if delta > 0 {
            Step::Clockwise
        } else {
            Step::CounterClockwise
        };
        tx.offer(step);
    }

    // drop-newest: the fifth step vanished, order of the rest is intact
    let drained: Vec<i32> = std::iter::from_fn(|| rx.take_next().map(Step::delta)).collect();
    assert_eq!(drained, vec![1, 1, -1, 1]);
    assert_eq!(tx.dropped(), 1);
}

#[test]
fn steps_drive_wrapping_menu_selection() {
    let mut queue: StepQueue<DEFAULT_QUEUE_SLOTS> = StepQueue::new();
    let (mut tx, mut rx) = queue.split();

    // two turns clockwise, three back
    for &b_high in &[false, false, true, true, true] {
        assert!(tx.offer(Step::from_b_level(b_high)));
    }

    let mut selection = 0usize;
    let mut seen = Vec::new();
    while let Some(step) = rx.take_next() {
        selection = if step.delta() > 0 {
            select_next(selection, 3)
        } else {
            select_prev(selection, 3)
        };
        seen.push(selection);
    }

    // 0 → 1 → 2 → 1 → 0 → wraps to 2
    assert_eq!(seen, vec![1, 2, 1, 0, 2]);
    assert!(!rx.has_pending());
}

#[test]
fn debounced_press_toggles_the_selected_output() {
    let clock = FakeClock(Rc::new(Cell::new(0)));
    let script = [false, true, true];
    let mut button = DebouncedInput::new(
        ScriptPin::new(&script),
        clock.clone(),
        config::DEBOUNCE_SETTLE_MS,
        config::DEBOUNCE_DWELL_MS,
        FireMode::OncePerPress,
    );

    let channel = SharedDuty(Rc::new(Cell::new(0)));
    let mut led = DimmableOutput::new(
        channel.clone(),
        PinMode::Output,
        config::INITIAL_BRIGHTNESS_PCT,
    )
    .unwrap();

    // transition poll, then dwell, then the qualifying poll
    assert!(!button.poll());
    clock.block_ms(config::DEBOUNCE_DWELL_MS + 5);
    assert!(button.poll());

    led.toggle();
    assert!(led.value());
    assert_eq!(channel.duty(), duty_for(config::INITIAL_BRIGHTNESS_PCT));

    // held button in once-per-press mode must not toggle it back
    assert!(!button.poll());
}

#[test]
fn sub_minimum_brightness_clamps_to_duty_328() {
    let channel = SharedDuty(Rc::new(Cell::new(0)));
    let mut led = DimmableOutput::new(channel.clone(), PinMode::Output, 1.0).unwrap();

    led.set_brightness(0.1);
    led.on();

    // 0.1 % clamps to 0.5 %, and round(65535 * 0.5 / 100) = 328
    assert_eq!(channel.duty(), 328);
}
