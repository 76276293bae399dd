//! # cronex
//!
//! `cronex` parses five-field cron expressions and computes the concrete
//! future instants at which they fire.
//!
//! Parse an expression (aliases and three-letter names are accepted):
//! ```rust
//! # use cronex::Schedule;
//! # fn main() -> cronex::Result<()> {
//! let schedule = Schedule::parse("*/15 9-17 * * mon-fri")?;
//! # Ok(())
//! # }
//! ```
//! Ask for the next run times after any instant:
//! ```rust
//! # use cronex::Schedule;
//! # use jiff::Zoned;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let schedule = Schedule::parse("*/15 9-17 * * mon-fri")?;
//! let start: Zoned = "2024-01-01T07:00:00[America/New_York]".parse()?;
//! for run in schedule.next_runs(&start, 4) {
//!     println!("{run}");
//! }
//! # Ok(())
//! # }
//! ```
//! Or render it as prose:
//! ```rust
//! # use cronex::{describe, Schedule};
//! # fn main() -> cronex::Result<()> {
//! let schedule = Schedule::parse("0 0 1 1 *")?;
//! assert_eq!(
//!     describe(&schedule),
//!     "At minute 0 past hour 0, on day 1, in January."
//! );
//! # Ok(())
//! # }
//! ```
//! Parsing is pure and synchronous: each call produces a fresh immutable
//! [`Schedule`], and the run search is bounded by a horizon so it always
//! terminates, even for expressions that can never fire.

#![warn(clippy::pedantic)]

mod describe;
mod error;
mod field;
mod normalize;
mod schedule;
mod upcoming;

pub use describe::describe;
pub use error::{Error, Result};
pub use field::{FieldName, FieldSpec};
pub use normalize::normalize;
pub use schedule::Schedule;
pub use upcoming::{Upcoming, DEFAULT_HORIZON};
