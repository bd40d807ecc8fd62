//! Scripted test doubles for the I2C bus, the delay source, and the event
//! sink.
//!
//! [`Bus`] owns all shared state behind interior mutability; [`MockI2c`] and
//! [`MockDelay`] borrow it, so a test can script read payloads up front and
//! afterwards assert on a single interleaved trace of writes, reads, and
//! delay requests.

use core::cell::{Cell, RefCell};

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::{self, ErrorKind, ErrorType, I2c, Operation};
use heapless::{Deque, Vec};

use crate::event::EventSink;
use crate::keymap::{Axis, Button};

/// One entry in the interleaved bus/delay trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEntry {
    /// Bytes sent by a single write operation.
    Write(Vec<u8, 8>),
    /// Bytes handed to a single read operation.
    Read(Vec<u8, 8>),
    /// A delay request, in nanoseconds.
    DelayNs(u32),
}

impl TraceEntry {
    pub fn write(bytes: &[u8]) -> Self {
        TraceEntry::Write(Vec::from_slice(bytes).unwrap())
    }

    pub fn read(bytes: &[u8]) -> Self {
        TraceEntry::Read(Vec::from_slice(bytes).unwrap())
    }
}

/// Error injected by a scripted bus failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockBusError;

impl i2c::Error for MockBusError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Shared state behind [`MockI2c`] and [`MockDelay`].
pub struct Bus {
    /// Interleaved log of every bus operation and delay request.
    pub trace: RefCell<Vec<TraceEntry, 64>>,
    /// 7-bit target address of each transaction, in order.
    pub addresses: RefCell<Vec<u8, 32>>,
    /// Payloads handed out to read operations, front first.
    pub responses: RefCell<Deque<Vec<u8, 8>, 16>>,
    /// Number of I2C operations executed so far; delays do not count.
    pub ops_seen: Cell<usize>,
    /// Absolute I2C operation index that fails with [`MockBusError`].
    pub fail_at: Cell<Option<usize>>,
}

impl Bus {
    pub fn new() -> Self {
        Bus {
            trace: RefCell::new(Vec::new()),
            addresses: RefCell::new(Vec::new()),
            responses: RefCell::new(Deque::new()),
            ops_seen: Cell::new(0),
            fail_at: Cell::new(None),
        }
    }

    /// Script the payload for the next unanswered read operation.
    pub fn queue_response(&self, bytes: &[u8]) {
        self.responses
            .borrow_mut()
            .push_back(Vec::from_slice(bytes).unwrap())
            .unwrap();
    }

    /// Make the next I2C operation fail.
    pub fn fail_next_op(&self) {
        self.fail_at.set(Some(self.ops_seen.get()));
    }

    /// Borrow the I2C and delay handles for this bus.
    pub fn handles(&self) -> (MockI2c<'_>, MockDelay<'_>) {
        (MockI2c { bus: self }, MockDelay { bus: self })
    }
}

/// Scripted `embedded-hal-async` I2C implementation.
pub struct MockI2c<'a> {
    bus: &'a Bus,
}

impl ErrorType for MockI2c<'_> {
    type Error = MockBusError;
}

impl I2c for MockI2c<'_> {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), MockBusError> {
        self.bus.addresses.borrow_mut().push(address).unwrap();

        for operation in operations.iter_mut() {
            let index = self.bus.ops_seen.get();
            self.bus.ops_seen.set(index + 1);
            if self.bus.fail_at.get() == Some(index) {
                return Err(MockBusError);
            }

            match operation {
                Operation::Write(bytes) => {
                    self.bus
                        .trace
                        .borrow_mut()
                        .push(TraceEntry::write(bytes))
                        .unwrap();
                }
                Operation::Read(buffer) => {
                    let payload = self
                        .bus
                        .responses
                        .borrow_mut()
                        .pop_front()
                        .expect("read with no scripted response");
                    assert_eq!(
                        buffer.len(),
                        payload.len(),
                        "read length does not match scripted response"
                    );
                    buffer.copy_from_slice(&payload);
                    self.bus
                        .trace
                        .borrow_mut()
                        .push(TraceEntry::Read(payload))
                        .unwrap();
                }
            }
        }

        Ok(())
    }
}

/// Delay source that records each request in the shared trace instead of
/// sleeping.
pub struct MockDelay<'a> {
    bus: &'a Bus,
}

impl DelayNs for MockDelay<'_> {
    async fn delay_ns(&mut self, ns: u32) {
        self.bus
            .trace
            .borrow_mut()
            .push(TraceEntry::DelayNs(ns))
            .unwrap();
    }
}

/// Everything a [`RecordingSink`] was asked to deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkEvent {
    Key(Button, bool),
    Abs(Axis, u16),
    Sync,
}

/// Rejection error produced by [`RecordingSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkRejected;

/// Event sink that records every delivery and can reject selected calls.
pub struct RecordingSink {
    pub events: Vec<SinkEvent, 16>,
    /// Call index (key, abs and sync all count) that returns `Err`.
    pub reject_at: Option<usize>,
    calls: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink {
            events: Vec::new(),
            reject_at: None,
            calls: 0,
        }
    }

    fn deliver(&mut self, event: SinkEvent) -> Result<(), SinkRejected> {
        let index = self.calls;
        self.calls += 1;
        if self.reject_at == Some(index) {
            return Err(SinkRejected);
        }
        self.events.push(event).unwrap();
        Ok(())
    }
}

impl EventSink for RecordingSink {
    type Error = SinkRejected;

    fn key(&mut self, button: Button, pressed: bool) -> Result<(), SinkRejected> {
        self.deliver(SinkEvent::Key(button, pressed))
    }

    fn abs(&mut self, axis: Axis, value: u16) -> Result<(), SinkRejected> {
        self.deliver(SinkEvent::Abs(axis, value))
    }

    fn sync(&mut self) -> Result<(), SinkRejected> {
        self.deliver(SinkEvent::Sync)
    }
}
