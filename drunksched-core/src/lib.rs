//! Core types for drunksched.
//!
//! - `event` and `attendance`: the event record and per-date marks
//! - `scoring`: weighted scores and the best-date set
//! - `categorize`: display buckets for event lists
//! - `store`: persistence behind the `EventStore` trait

pub mod attendance;
pub mod categorize;
pub mod config;
pub mod error;
pub mod event;
pub mod ics;
pub mod scoring;
pub mod store;

pub use attendance::{Attendance, Mark, Response};
pub use error::{SchedError, SchedResult};
pub use event::{ConfirmationStatus, Event};
