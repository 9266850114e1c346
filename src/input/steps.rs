//! Direction steps and the interrupt-to-main handoff queue.
//!
//! The decoder's producer half runs in interrupt-driven context and must
//! never block, allocate or corrupt shared state; the consumer half is
//! drained one step at a time from the polling loop.  `heapless::spsc`
//! provides the lock-free single-producer/single-consumer ring; the
//! wrappers here pin down the overflow policy.

use heapless::spsc::{Consumer, Producer, Queue};

use crate::config;

/// Storage slots for the default step queue.  One slot stays free so the
/// ring can tell full from empty, leaving [`config::ENCODER_QUEUE_DEPTH`]
/// usable entries.
pub const DEFAULT_QUEUE_SLOTS: usize = config::ENCODER_QUEUE_DEPTH + 1;

/// One detent of encoder rotation.
///
/// Decoded from the B-phase level at A's rising edge.  Which physical
/// rotation reads as clockwise is a wiring fact, not a software truth:
/// swap it per deployment with [`Step::invert`] (the firmware honours
/// [`config::ENCODER_REVERSE_DIRECTION`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    Clockwise,
    CounterClockwise,
}

impl Step {
    /// Decode from the B-phase level sampled at A's rising edge.
    pub fn from_b_level(b_high: bool) -> Self {
        if b_high {
            Step::CounterClockwise
        } else {
            Step::Clockwise
        }
    }

    /// The opposite rotation sense.
    pub fn invert(self) -> Self {
        match self {
            Step::Clockwise => Step::CounterClockwise,
            Step::CounterClockwise => Step::Clockwise,
        }
    }

    /// Signed selection/scroll delta: +1 clockwise, -1 counter-clockwise.
    pub fn delta(self) -> i32 {
        match self {
            Step::Clockwise => 1,
            Step::CounterClockwise => -1,
        }
    }
}

/// Bounded FIFO of direction steps between the edge interrupt and the
/// polling loop.
///
/// Overflow policy: **drop-newest**.  A full queue discards the incoming
/// step and the producer returns immediately; entries already queued are
/// never touched.
pub struct StepQueue<const N: usize> {
    inner: Queue<Step, N>,
}

impl<const N: usize> StepQueue<N> {
    pub const fn new() -> Self {
        Self {
            inner: Queue::new(),
        }
    }

    /// Usable capacity (one slot of the ring stays free).
    pub const fn capacity(&self) -> usize {
        N - 1
    }

    /// Split into the interrupt-side producer and the loop-side consumer.
    pub fn split(&mut self) -> (StepProducer<'_, N>, StepConsumer<'_, N>) {
        let (producer, consumer) = self.inner.split();
        (
            StepProducer {
                inner: producer,
                dropped: 0,
            },
            StepConsumer { inner: consumer },
        )
    }
}

impl<const N: usize> Default for StepQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Interrupt-side handle: push-only, never blocks.
pub struct StepProducer<'a, const N: usize> {
    inner: Producer<'a, Step, N>,
    dropped: u32,
}

impl<'a, const N: usize> StepProducer<'a, N> {
    /// Enqueue a step.  Returns `false` if the queue was full and the
    /// step was dropped (drop-newest policy).
    pub fn offer(&mut self, step: Step) -> bool {
        match self.inner.enqueue(step) {
            Ok(()) => true,
            Err(_) => {
                self.dropped = self.dropped.wrapping_add(1);
                false
            }
        }
    }

    /// Steps discarded by the overflow policy so far.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}

/// Loop-side handle: drains steps in the order they were produced.
pub struct StepConsumer<'a, const N: usize> {
    inner: Consumer<'a, Step, N>,
}

impl<'a, const N: usize> StepConsumer<'a, N> {
    /// Whether at least one step is waiting.
    pub fn has_pending(&self) -> bool {
        self.inner.ready()
    }

    /// Remove and return the oldest queued step.
    pub fn take_next(&mut self) -> Option<Step> {
        self.inner.dequeue()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_follows_b_level() {
        assert_eq!(Step::from_b_level(true), Step::CounterClockwise);
        assert_eq!(Step::from_b_level(false), Step::Clockwise);
    }

    #[test]
    fn invert_swaps_sense() {
        assert_eq!(Step::Clockwise.invert(), Step::CounterClockwise);
        assert_eq!(Step::CounterClockwise.invert().delta(), 1);
    }

    #[test]
    fn fifo_order_is_preserved() {
        let mut queue: StepQueue<5> = StepQueue::new();
        let (mut tx, mut rx) = queue.split();

        // B alternately high/low at each simulated edge
        for &b_high in &[true, false, false, true] {
            assert!(tx.offer(Step::from_b_level(b_high)));
        }

        assert_eq!(rx.take_next().map(Step::delta), Some(-1));
        assert_eq!(rx.take_next().map(Step::delta), Some(1));
        assert_eq!(rx.take_next().map(Step::delta), Some(1));
        assert_eq!(rx.take_next().map(Step::delta), Some(-1));
        assert_eq!(rx.take_next(), None);
    }

    #[test]
    fn empty_queue_reports_nothing_pending() {
        let mut queue: StepQueue<5> = StepQueue::new();
        let (_tx, mut rx) = queue.split();
        assert!(!rx.has_pending());
        assert_eq!(rx.take_next(), None);
    }

    #[test]
    fn overflow_drops_newest_and_keeps_queued_entries() {
        let mut queue: StepQueue<5> = StepQueue::new();
        assert_eq!(queue.capacity(), 4);
        let (mut tx, mut rx) = queue.split();

        let deltas = [1, 1, -1, 1, 1];
        let mut accepted = 0;
        for &d in &deltas {
            let step = if d > 0 {
                Step::Clockwise
            } else {
                Step::CounterClockwise
            };
            if tx.offer(step) {
                accepted += 1;
            }
        }

        // fifth step hit a full queue and was discarded
        assert_eq!(accepted, 4);
        assert_eq!(tx.dropped(), 1);

        let mut drained = Vec::new();
        while let Some(step) = rx.take_next() {
            drained.push(step.delta());
        }
        assert_eq!(drained, vec![1, 1, -1, 1]);
    }
}
