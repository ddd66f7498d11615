// Mon Jan 26 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommError {
    #[error("Peer rank {0} disconnected")]
    Disconnected(usize),
    #[error("Run aborted by coordinator: {0}")]
    Aborted(String),
    #[error("Protocol violation: {0}")]
    Protocol(&'static str),
    #[error("Broadcast origin supplied no payload")]
    MissingPayload,
}
