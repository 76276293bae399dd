//! Each of the five schedule fields parses into an explicit set of matching values.

use crate::error::{Error, Result};
use std::fmt;

/// One of the five positions in a schedule expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
	Minute,
	Hour,
	DayOfMonth,
	Month,
	DayOfWeek,
}

impl FieldName {
	/// All five fields, in expression order.
	pub const ALL: [FieldName; 5] = [
		FieldName::Minute,
		FieldName::Hour,
		FieldName::DayOfMonth,
		FieldName::Month,
		FieldName::DayOfWeek,
	];

	/// The inclusive legal bounds for values of this field.
	#[must_use]
	pub fn bounds(self) -> (u8, u8) {
		match self {
			FieldName::Minute => (0, 59),
			FieldName::Hour => (0, 23),
			FieldName::DayOfMonth => (1, 31),
			FieldName::Month => (1, 12),
			FieldName::DayOfWeek => (0, 6),
		}
	}

	/// Day-of-week accepts 7 for Sunday; it is always stored as 0.
	fn canonical(self, value: i64) -> i64 {
		if self == FieldName::DayOfWeek && value == 7 {
			0
		} else {
			value
		}
	}
}

impl fmt::Display for FieldName {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let name = match self {
			FieldName::Minute => "minute",
			FieldName::Hour => "hour",
			FieldName::DayOfMonth => "day-of-month",
			FieldName::Month => "month",
			FieldName::DayOfWeek => "day-of-week",
		};
		write!(f, "{name}")
	}
}

/// The validated value set for a single field.
///
/// Values are stored sorted ascending with duplicates removed.  `is_wildcard`
/// is true only when the raw field was a bare `*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
	name: FieldName,
	values: Vec<u8>,
	wildcard: bool,
}

impl FieldSpec {
	/// Parse one raw field string into its matching value set.
	///
	/// The grammar is a comma-separated list of terms, each of which is `*`,
	/// a single value, a range `a-b`, or a step `base/N` where `base` is `*`,
	/// a range, or a single value `a` (meaning `a` through the field maximum).
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidNumber`] or [`Error::InvalidStep`] for
	/// malformed terms, and [`Error::OutOfRange`] for a bare literal outside
	/// the field's legal bounds.
	pub fn parse(raw: &str, name: FieldName) -> Result<Self> {
		let (min, max) = name.bounds();
		let mut values = Vec::new();

		for term in raw.split(',') {
			if let Some((base, step)) = term.split_once('/') {
				let step = parse_step(step, name)?;
				let (start, end) = step_base(base, name)?;
				let mut value = start;
				while value <= end {
					keep(name, value, &mut values);
					value += step;
				}
			} else if term == "*" {
				// For day-of-week, 7 is never added here: 0 already covers Sunday.
				values.extend(min..=max);
			} else if let Some((a, b)) = term.split_once('-') {
				let a = parse_number(a, name)?;
				let b = parse_number(b, name)?;
				for value in a..=b.min(range_cap(name)) {
					keep(name, value, &mut values);
				}
			} else {
				let value = name.canonical(parse_number(term, name)?);
				if value < i64::from(min) || value > i64::from(max) {
					return Err(Error::OutOfRange {
						field: name,
						value,
						min,
						max,
					});
				}
				// Bounds were just checked.
				#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
				values.push(value as u8);
			}
		}

		values.sort_unstable();
		values.dedup();

		Ok(Self {
			name,
			values,
			wildcard: raw == "*",
		})
	}

	/// Which field this spec belongs to.
	#[must_use]
	pub fn name(&self) -> FieldName {
		self.name
	}

	/// The matched values, ascending and duplicate-free.
	#[must_use]
	pub fn values(&self) -> &[u8] {
		&self.values
	}

	/// Whether the raw field was a bare `*`.
	#[must_use]
	pub fn is_wildcard(&self) -> bool {
		self.wildcard
	}

	/// Membership test against the matched value set.
	#[must_use]
	pub fn matches(&self, value: u8) -> bool {
		self.values.binary_search(&value).is_ok()
	}
}

impl fmt::Display for FieldSpec {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}(", self.name)?;
		for (idx, value) in self.values.iter().enumerate() {
			if idx > 0 {
				write!(f, ",")?;
			}
			write!(f, "{value}")?;
		}
		write!(f, ")")
	}
}

/// Store an expanded value if it lands within the field's bounds.
///
/// Out-of-bounds values from range or step expansion are dropped, not errors.
fn keep(name: FieldName, value: i64, values: &mut Vec<u8>) {
	let (min, max) = name.bounds();
	let value = name.canonical(value);
	if value >= i64::from(min) && value <= i64::from(max) {
		// Bounds were just checked.
		#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
		values.push(value as u8);
	}
}

/// The largest expansion value worth visiting for a field.
fn range_cap(name: FieldName) -> i64 {
	// Day-of-week must still visit 7 so it can fold to 0.
	let (_, max) = name.bounds();
	if name == FieldName::DayOfWeek {
		7
	} else {
		i64::from(max)
	}
}

fn parse_number(token: &str, name: FieldName) -> Result<i64> {
	token.parse().map_err(|_| Error::InvalidNumber {
		field: name,
		token: token.to_string(),
	})
}

fn parse_step(token: &str, name: FieldName) -> Result<i64> {
	match token.parse::<i64>() {
		Ok(step) if step > 0 => Ok(step),
		_ => Err(Error::InvalidStep {
			field: name,
			token: token.to_string(),
		}),
	}
}

/// Resolve the base of a step term to an inclusive start/end pair.
fn step_base(base: &str, name: FieldName) -> Result<(i64, i64)> {
	let (min, max) = name.bounds();
	if base == "*" {
		Ok((i64::from(min), i64::from(max)))
	} else if let Some((a, b)) = base.split_once('-') {
		let a = parse_number(a, name)?;
		let b = parse_number(b, name)?;
		Ok((a, b.min(range_cap(name))))
	} else {
		Ok((parse_number(base, name)?, i64::from(max)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn wildcard_expands_to_full_range() -> Result<()> {
		let spec = FieldSpec::parse("*", FieldName::Minute)?;
		assert_eq!(spec.values(), (0..=59).collect::<Vec<u8>>());
		assert!(spec.is_wildcard());
		Ok(())
	}

	#[test]
	fn wildcard_day_of_week_never_includes_seven() -> Result<()> {
		let spec = FieldSpec::parse("*", FieldName::DayOfWeek)?;
		assert_eq!(spec.values(), &[0, 1, 2, 3, 4, 5, 6]);
		Ok(())
	}

	#[test]
	fn step_from_wildcard_base() -> Result<()> {
		let spec = FieldSpec::parse("*/15", FieldName::Minute)?;
		assert_eq!(spec.values(), &[0, 15, 30, 45]);
		// A stepped field is not a wildcard even though it starts from `*`.
		assert!(!spec.is_wildcard());
		Ok(())
	}

	#[test]
	fn plain_range() -> Result<()> {
		let spec = FieldSpec::parse("5-10", FieldName::Hour)?;
		assert_eq!(spec.values(), &[5, 6, 7, 8, 9, 10]);
		assert!(!spec.is_wildcard());
		Ok(())
	}

	#[test]
	fn range_with_step() -> Result<()> {
		let spec = FieldSpec::parse("5-10/2", FieldName::Hour)?;
		assert_eq!(spec.values(), &[5, 7, 9]);
		Ok(())
	}

	#[test]
	fn single_value_step_runs_to_field_max() -> Result<()> {
		let spec = FieldSpec::parse("50/4", FieldName::Minute)?;
		assert_eq!(spec.values(), &[50, 54, 58]);
		Ok(())
	}

	#[test]
	fn list_unions_and_dedupes() -> Result<()> {
		let spec = FieldSpec::parse("1,3,1-4,2", FieldName::Month)?;
		assert_eq!(spec.values(), &[1, 2, 3, 4]);
		Ok(())
	}

	#[test]
	fn day_of_week_seven_is_sunday() -> Result<()> {
		assert_eq!(FieldSpec::parse("7", FieldName::DayOfWeek)?.values(), &[0]);
		assert_eq!(FieldSpec::parse("0", FieldName::DayOfWeek)?.values(), &[0]);
		assert_eq!(
			FieldSpec::parse("0,7", FieldName::DayOfWeek)?.values(),
			&[0]
		);
		Ok(())
	}

	#[test]
	fn day_of_week_seven_folds_inside_ranges() -> Result<()> {
		let spec = FieldSpec::parse("5-7", FieldName::DayOfWeek)?;
		assert_eq!(spec.values(), &[0, 5, 6]);
		Ok(())
	}

	#[test]
	fn expansion_drops_out_of_bounds_values() -> Result<()> {
		let spec = FieldSpec::parse("28-31", FieldName::Month)?;
		assert_eq!(spec.values(), &[] as &[u8]);
		let spec = FieldSpec::parse("10-14", FieldName::Month)?;
		assert_eq!(spec.values(), &[10, 11, 12]);
		Ok(())
	}

	#[test]
	fn zero_step_is_a_format_error() {
		let err = FieldSpec::parse("*/0", FieldName::Minute).unwrap_err();
		assert!(err.is_format());
		assert_eq!(
			err.to_string(),
			"minute field: step `0` is not a positive integer"
		);
	}

	#[test]
	fn non_numeric_step_is_a_format_error() {
		let err = FieldSpec::parse("*/x", FieldName::Minute).unwrap_err();
		assert!(err.is_format());
	}

	#[test]
	fn out_of_range_literal_names_the_bounds() {
		let err = FieldSpec::parse("99", FieldName::Hour).unwrap_err();
		assert!(!err.is_format());
		assert_eq!(
			err.to_string(),
			"hour field: 99 is outside the legal range 0-23"
		);
	}

	#[test]
	fn non_numeric_range_bound_is_a_format_error() {
		let err = FieldSpec::parse("1-x", FieldName::Hour).unwrap_err();
		assert_eq!(err.to_string(), "hour field: `x` is not a number");
	}

	#[test]
	fn membership_test() -> Result<()> {
		let spec = FieldSpec::parse("*/15", FieldName::Minute)?;
		assert!(spec.matches(30));
		assert!(!spec.matches(31));
		Ok(())
	}
}
