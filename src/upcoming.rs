//! Forward-minute search for the instants at which a schedule fires.

use crate::Schedule;
use jiff::{ToSpan as _, Zoned};

/// Default search horizon: roughly one year of candidate minutes.
pub const DEFAULT_HORIZON: u32 = 525_600;

/// Lazy iterator over the upcoming run instants of a schedule.
///
/// Walks forward one minute at a time from just after the start instant,
/// yielding each candidate the schedule matches.  At most `horizon` candidate
/// minutes are examined, so iteration always terminates; an unsatisfiable
/// schedule just runs dry.  The yielded sequence is strictly increasing.
#[derive(Debug)]
pub struct Upcoming<'a> {
	schedule: &'a Schedule,
	cursor: Option<Zoned>,
	remaining: u32,
}

impl<'a> Upcoming<'a> {
	pub(crate) fn new(schedule: &'a Schedule, start: &Zoned, horizon_minutes: u32) -> Self {
		// Truncate to the whole minute, then advance one: the start instant
		// itself is never a result.
		let cursor = start
			.with()
			.second(0)
			.subsec_nanosecond(0)
			.build()
			.ok()
			.and_then(|on_minute| on_minute.checked_add(1.minute()).ok());
		tracing::debug!(
			"searching for runs of \"{schedule}\" after {start}, horizon {horizon_minutes}m"
		);
		Self {
			schedule,
			cursor,
			remaining: horizon_minutes,
		}
	}
}

impl Iterator for Upcoming<'_> {
	type Item = Zoned;

	fn next(&mut self) -> Option<Zoned> {
		while self.remaining > 0 {
			let candidate = self.cursor.take()?;
			self.remaining -= 1;
			// jiff handles calendar rollover, leap days, and DST gaps here.
			self.cursor = candidate.checked_add(1.minute()).ok();
			if self.schedule.matches(&candidate) {
				return Some(candidate);
			}
		}
		None
	}
}
