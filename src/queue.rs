use std::fmt;

use log::debug;

use crate::error::{RoundRobinError, RoundRobinResult};

/// Fixed-capacity FIFO queue over a ring of slots.
///
/// The backing store never grows. `head` points at the oldest live element
/// and `len` counts live elements, so `head == write cursor` is never
/// ambiguous: the queue is empty iff `len == 0` and full iff
/// `len == capacity`. Pushing into a full queue is rejected rather than
/// overwriting the oldest element.
#[derive(Debug)]
pub struct RingQueue<T> {
    buf: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> RingQueue<T> {
    /// Creates a queue with room for exactly `capacity` elements.
    ///
    /// A zero capacity is rejected: such a queue would be empty and full at
    /// the same time, which the ring model cannot represent.
    pub fn new(capacity: usize) -> RoundRobinResult<Self> {
        if capacity == 0 {
            return Err(RoundRobinError::ZeroCapacity);
        }
        let mut buf = Vec::with_capacity(capacity);
        buf.resize_with(capacity, || None);
        Ok(Self {
            buf,
            head: 0,
            len: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.buf.len()
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Index of the oldest live element. Meaningful only when non-empty,
    /// but always in `0..capacity`.
    pub fn start(&self) -> usize {
        self.head
    }

    /// Index one past the newest element, i.e. the slot the next push
    /// writes to (modulo capacity).
    pub fn end(&self) -> usize {
        (self.head + self.len) % self.buf.len()
    }

    /// Appends `elem` at the tail. Fails with `Overflow` on a full queue,
    /// leaving the queue untouched.
    pub fn push(&mut self, elem: T) -> RoundRobinResult<()> {
        if self.is_full() {
            debug!("push rejected: queue full at capacity {}", self.capacity());
            return Err(RoundRobinError::Overflow);
        }
        let tail = self.end();
        self.buf[tail] = Some(elem);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the oldest element. Fails with `Underflow` on an
    /// empty queue.
    pub fn pop(&mut self) -> RoundRobinResult<T> {
        if self.is_empty() {
            debug!("pop rejected: queue empty");
            return Err(RoundRobinError::Underflow);
        }
        let idx = self.head;
        // Live slots always hold Some; take() leaves None so the vacated
        // slot never leaks its old value.
        let elem = self.buf[idx].take().ok_or(RoundRobinError::Underflow)?;
        self.head = (self.head + 1) % self.buf.len();
        self.len -= 1;
        Ok(elem)
    }

    /// Borrows the oldest element without removing it. Fails with
    /// `Underflow` on an empty queue.
    pub fn peek(&self) -> RoundRobinResult<&T> {
        if self.is_empty() {
            return Err(RoundRobinError::Underflow);
        }
        self.buf[self.head].as_ref().ok_or(RoundRobinError::Underflow)
    }

    /// Iterates live elements oldest-first without mutating the queue.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let cap = self.buf.len();
        (0..self.len).filter_map(move |i| self.buf[(self.head + i) % cap].as_ref())
    }

    /// Raw slot view in storage order, including stale slots. Diagnostic
    /// only; stale slots are not part of the queue's logical contents.
    pub(crate) fn slots(&self) -> &[Option<T>] {
        &self.buf
    }
}

impl<T: fmt::Debug> fmt::Display for RingQueue<T> {
    /// Diagnostic snapshot of the full internal state, stale slots
    /// included (rendered as `_`). Deterministic for a given state, but the
    /// exact format is not a stable contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[RingQueue full:{} size:{} cap:{} start:{} end:{} data:[",
            self.is_full(),
            self.len,
            self.capacity(),
            self.start(),
            self.end(),
        )?;
        for (idx, slot) in self.buf.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            match slot {
                Some(elem) => write!(f, "{:?}", elem)?,
                None => write!(f, "_")?,
            }
        }
        write!(f, "]]")
    }
}
