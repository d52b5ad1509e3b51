//! Core domain models for depsync
//!
//! This module contains the fundamental types used throughout the application:
//! - Version range loosening for derived requirements
//! - Type-declaration package name handling
//! - Change entries and the deduplicated change log
//! - Sync log events

mod change;
mod range;
mod sync_event;
mod types_pkg;

pub use change::{ChangeEntry, ChangeLog};
pub use range::loosen;
pub use sync_event::SyncEvent;
pub use types_pkg::parent_package;
