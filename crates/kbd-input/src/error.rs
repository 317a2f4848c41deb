use thiserror::Error;

use crate::queue::OverflowPolicy;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Queue capacity must be non-zero for {policy:?} overflow policy")]
    ZeroCapacity { policy: OverflowPolicy },
}
