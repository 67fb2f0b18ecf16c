//! State Management
//!
//! Session store and its persisted local-storage slot.

pub mod session;
pub mod storage;

pub use session::{provide_session, Session, SessionState};
