//! Quadrature step capture at the A-phase edge.
//!
//! Both encoder phases idle high behind pull-ups.  The task below parks
//! on A's rising edge; when the GPIO interrupt wakes it, it reads B once,
//! decodes the rotation sense and pushes the step into the bounded queue.
//! Nothing on that path blocks, allocates or can fail — a full queue
//! drops the step per the queue's documented policy.

use defmt::warn;
use embassy_rp::gpio::Input;

use crate::config;
use crate::input::steps::{Step, StepProducer, DEFAULT_QUEUE_SLOTS};

/// Producer half of the decoder.  Runs for the lifetime of the device.
#[embassy_executor::task]
pub async fn decode_steps(
    mut pin_a: Input<'static>,
    pin_b: Input<'static>,
    mut steps: StepProducer<'static, DEFAULT_QUEUE_SLOTS>,
) -> ! {
    loop {
        pin_a.wait_for_rising_edge().await;

        let mut step = Step::from_b_level(pin_b.is_high());
        if config::ENCODER_REVERSE_DIRECTION {
            step = step.invert();
        }

        if !steps.offer(step) {
            warn!("step queue full, step dropped ({} total)", steps.dropped());
        }
    }
}
