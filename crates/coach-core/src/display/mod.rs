//! Display formatting for plans, messages and operation feedback.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! producing markdown that the CLI renders through its terminal renderer.
//! Wrapper types cover contextual output:
//!
//! - [`Transcript`]: a whole chat thread
//! - [`NextAction`]: the best-next-action callout
//! - [`ImportedCount`]: the imported-assignments signal, including "unknown"
//! - [`OperationStatus`]: success/failure confirmations
//! - [`LocalDateTime`]: timestamps in the system time zone
//!
//! ```rust
//! use coach_core::{display::NextAction, stub};
//!
//! let plan = stub::generate_weekly_plan();
//! let output = format!("{plan}");
//! assert!(output.starts_with("# Week of "));
//!
//! let callout = format!("{}", NextAction(plan.first_todo()));
//! assert!(callout.contains("10-min starter"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;

pub use collections::{ImportedCount, NextAction, Transcript};
pub use datetime::LocalDateTime;
pub use status::OperationStatus;
