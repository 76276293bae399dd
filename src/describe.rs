//! Renders a parsed schedule as a human-readable sentence.

use crate::{FieldSpec, Schedule};

const WEEKDAY_NAMES: [&str; 7] = [
	"Sunday",
	"Monday",
	"Tuesday",
	"Wednesday",
	"Thursday",
	"Friday",
	"Saturday",
];

const MONTH_NAMES: [&str; 12] = [
	"January",
	"February",
	"March",
	"April",
	"May",
	"June",
	"July",
	"August",
	"September",
	"October",
	"November",
	"December",
];

/// Describe a schedule as one deterministic English sentence.
///
/// ```rust
/// # use cronex::{describe, Schedule};
/// # fn main() -> cronex::Result<()> {
/// let schedule = Schedule::parse("0 9-17 * * mon-fri")?;
/// assert_eq!(
///     describe(&schedule),
///     "At minute 0 past hours 9 through 17, on Monday through Friday."
/// );
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn describe(schedule: &Schedule) -> String {
	let mut sentence = time_phrase(schedule);

	if let Some(day) = day_phrase(schedule) {
		sentence.push_str(", ");
		sentence.push_str(&day);
	}

	if !schedule.month().is_wildcard() {
		sentence.push_str(", in ");
		sentence.push_str(&name_list(schedule.month().values(), &MONTH_NAMES, 1));
	}

	capitalize(&sentence) + "."
}

/// Minute and hour timing, always present.
fn time_phrase(schedule: &Schedule) -> String {
	let minute = schedule.minute();
	let hour = schedule.hour();
	match (minute.is_wildcard(), hour.is_wildcard()) {
		(true, true) => "every minute".to_string(),
		(false, true) => format!("at {} past every hour", number_list(minute, "minute")),
		(true, false) => format!("every minute of {}", number_list(hour, "hour")),
		(false, false) => format!(
			"at {} past {}",
			number_list(minute, "minute"),
			number_list(hour, "hour")
		),
	}
}

/// Day restriction, if any.  With both day fields restricted the schedule
/// fires on either, so both are named.
fn day_phrase(schedule: &Schedule) -> Option<String> {
	let day_of_month = schedule.day_of_month();
	let day_of_week = schedule.day_of_week();
	match (day_of_month.is_wildcard(), day_of_week.is_wildcard()) {
		(true, true) => None,
		(false, true) => Some(format!("on {}", number_list(day_of_month, "day"))),
		(true, false) => Some(format!(
			"on {}",
			name_list(day_of_week.values(), &WEEKDAY_NAMES, 0)
		)),
		(false, false) => Some(format!(
			"on {} and on {}",
			number_list(day_of_month, "day"),
			name_list(day_of_week.values(), &WEEKDAY_NAMES, 0)
		)),
	}
}

/// Phrase a numeric value set with its noun, e.g. "minutes 0, 15, and 30".
fn number_list(spec: &FieldSpec, noun: &str) -> String {
	let values = spec.values();
	if values.len() == 1 {
		return format!("{noun} {}", values[0]);
	}
	if is_consecutive_run(values) {
		return format!("{noun}s {} through {}", values[0], values[values.len() - 1]);
	}
	let items: Vec<String> = values.iter().map(ToString::to_string).collect();
	format!("{noun}s {}", join_with_and(&items))
}

/// Phrase a value set by name, e.g. "January and July" or "Monday through Friday".
fn name_list(values: &[u8], names: &[&str], base: u8) -> String {
	let named: Vec<String> = values
		.iter()
		.map(|value| names[usize::from(value - base)].to_string())
		.collect();
	if named.len() == 1 {
		return named[0].clone();
	}
	if is_consecutive_run(values) {
		return format!("{} through {}", named[0], named[named.len() - 1]);
	}
	join_with_and(&named)
}

fn join_with_and(items: &[String]) -> String {
	match items {
		[] => String::new(),
		[only] => only.clone(),
		[first, second] => format!("{first} and {second}"),
		[head @ .., last] => format!("{}, and {last}", head.join(", ")),
	}
}

/// True only when the sorted list has at least two elements and every
/// adjacent pair differs by exactly one.
fn is_consecutive_run(values: &[u8]) -> bool {
	values.len() >= 2 && values.windows(2).all(|pair| pair[1] == pair[0] + 1)
}

fn capitalize(sentence: &str) -> String {
	let mut chars = sentence.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
		None => String::new(),
	}
}
