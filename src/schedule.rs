//! A parsed schedule maps each of the five fields to its matched value set.

use crate::{
	error::{Error, Result},
	field::{FieldName, FieldSpec},
	normalize::normalize,
	upcoming::{Upcoming, DEFAULT_HORIZON},
};
use jiff::Zoned;
use std::{fmt, str::FromStr};

/// An immutable, fully validated schedule expression.
///
/// Built once per input by [`Schedule::parse`]; re-parsing a changed
/// expression produces a fresh value rather than mutating an old one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
	expression: String,
	minute: FieldSpec,
	hour: FieldSpec,
	day_of_month: FieldSpec,
	month: FieldSpec,
	day_of_week: FieldSpec,
}

impl Schedule {
	/// Parse an expression into a schedule.
	///
	/// The input is normalized first, so aliases (`@hourly`, ...) and
	/// three-letter month/day names are accepted.
	///
	/// ```rust
	/// # use cronex::Schedule;
	/// # fn main() -> cronex::Result<()> {
	/// let schedule = Schedule::parse("*/15 9-17 * * mon-fri")?;
	/// assert_eq!(schedule.minute().values(), &[0, 15, 30, 45]);
	/// # Ok(())
	/// # }
	/// ```
	///
	/// # Errors
	///
	/// Returns [`Error::FieldCount`] unless the normalized input has exactly
	/// five whitespace-separated fields, or any field parse error.
	pub fn parse(expression: &str) -> Result<Self> {
		let normalized = normalize(expression);
		let fields: Vec<&str> = normalized.split_whitespace().collect();
		if fields.len() != 5 {
			return Err(Error::FieldCount(fields.len()));
		}
		let schedule = Self {
			minute: FieldSpec::parse(fields[0], FieldName::Minute)?,
			hour: FieldSpec::parse(fields[1], FieldName::Hour)?,
			day_of_month: FieldSpec::parse(fields[2], FieldName::DayOfMonth)?,
			month: FieldSpec::parse(fields[3], FieldName::Month)?,
			day_of_week: FieldSpec::parse(fields[4], FieldName::DayOfWeek)?,
			expression: normalized,
		};
		tracing::debug!("parsed schedule \"{}\"", schedule.expression);
		Ok(schedule)
	}

	/// The normalized five-field expression this schedule was parsed from.
	#[must_use]
	pub fn expression(&self) -> &str {
		&self.expression
	}

	#[must_use]
	pub fn minute(&self) -> &FieldSpec {
		&self.minute
	}

	#[must_use]
	pub fn hour(&self) -> &FieldSpec {
		&self.hour
	}

	#[must_use]
	pub fn day_of_month(&self) -> &FieldSpec {
		&self.day_of_month
	}

	#[must_use]
	pub fn month(&self) -> &FieldSpec {
		&self.month
	}

	#[must_use]
	pub fn day_of_week(&self) -> &FieldSpec {
		&self.day_of_week
	}

	/// Look a field up by name.
	#[must_use]
	pub fn field(&self, name: FieldName) -> &FieldSpec {
		match name {
			FieldName::Minute => &self.minute,
			FieldName::Hour => &self.hour,
			FieldName::DayOfMonth => &self.day_of_month,
			FieldName::Month => &self.month,
			FieldName::DayOfWeek => &self.day_of_week,
		}
	}

	/// Whether this schedule fires at the given instant's minute.
	///
	/// Minute, hour, and month must all match.  The day condition follows
	/// cron convention: with both day fields restricted, the day qualifies
	/// when **either** matches; with one restricted, that one decides; with
	/// both wildcard, every day qualifies.
	#[must_use]
	pub fn matches(&self, instant: &Zoned) -> bool {
		if !self.minute.matches(instant.minute().unsigned_abs())
			|| !self.hour.matches(instant.hour().unsigned_abs())
			|| !self.month.matches(instant.month().unsigned_abs())
		{
			return false;
		}

		let day_of_month = self.day_of_month.matches(instant.day().unsigned_abs());
		let day_of_week = self
			.day_of_week
			.matches(instant.weekday().to_sunday_zero_offset().unsigned_abs());

		match (
			self.day_of_month.is_wildcard(),
			self.day_of_week.is_wildcard(),
		) {
			(true, true) => true,
			(false, true) => day_of_month,
			(true, false) => day_of_week,
			(false, false) => day_of_month || day_of_week,
		}
	}

	/// Iterate over the instants after `start` at which this schedule fires,
	/// examining at most [`DEFAULT_HORIZON`] candidate minutes.
	///
	/// The start instant itself is never yielded.
	#[must_use]
	pub fn upcoming(&self, start: &Zoned) -> Upcoming {
		self.upcoming_within(start, DEFAULT_HORIZON)
	}

	/// Like [`Schedule::upcoming`], with an explicit search horizon.
	#[must_use]
	pub fn upcoming_within(&self, start: &Zoned, horizon_minutes: u32) -> Upcoming {
		Upcoming::new(self, start, horizon_minutes)
	}

	/// Collect up to `count` upcoming run instants after `start`.
	///
	/// An unsatisfiable schedule simply returns fewer results, possibly
	/// none, once the horizon is exhausted; this never fails.
	#[must_use]
	pub fn next_runs(&self, start: &Zoned, count: usize) -> Vec<Zoned> {
		self.next_runs_within(start, count, DEFAULT_HORIZON)
	}

	/// Like [`Schedule::next_runs`], with an explicit search horizon.
	#[must_use]
	pub fn next_runs_within(&self, start: &Zoned, count: usize, horizon_minutes: u32) -> Vec<Zoned> {
		self.upcoming_within(start, horizon_minutes)
			.take(count)
			.collect()
	}
}

impl FromStr for Schedule {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		Self::parse(s)
	}
}

impl fmt::Display for Schedule {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.expression)
	}
}
