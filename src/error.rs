use thiserror::Error;

pub type RoundRobinResult<T, E = RoundRobinError> = Result<T, E>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoundRobinError {
    #[error("queue capacity must be greater than 0")]
    ZeroCapacity,

    #[error("out of bounds push, queue is full")]
    Overflow,

    #[error("pop or peek on an empty queue")]
    Underflow,
}
