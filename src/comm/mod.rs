// Mon Jan 26 2026 - Alex

pub mod error;
pub mod group;

pub use error::CommError;
pub use group::{CommGroup, Frame, GroupLink};
