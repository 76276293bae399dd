//! Canonicalizes aliases and symbolic names into the five-field numeric form.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// The recognized whole-expression aliases and their expansions.
const ALIASES: [(&str, &str); 7] = [
	("@yearly", "0 0 1 1 *"),
	("@annually", "0 0 1 1 *"),
	("@monthly", "0 0 1 * *"),
	("@weekly", "0 0 * * 0"),
	("@daily", "0 0 * * *"),
	("@midnight", "0 0 * * *"),
	("@hourly", "0 * * * *"),
];

const MONTHS: [&str; 12] = [
	"jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

const DAYS: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

// Name substitution is word-bounded so e.g. `january` is left alone.
static MONTH_RE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\b").unwrap()
});
static DAY_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\b(sun|mon|tue|wed|thu|fri|sat)\b").unwrap());

/// Canonicalize a raw expression: trim, lowercase, expand a whole-input
/// alias, and substitute three-letter month and day names with their numeric
/// equivalents (months 1-based, days 0-based).
///
/// Field-count problems are left for the parser to report; this function
/// only rewrites text.  It is idempotent.
///
/// ```rust
/// # use cronex::normalize;
/// assert_eq!(normalize("@yearly"), "0 0 1 1 *");
/// assert_eq!(normalize("* * * JAN-mar Mon"), "* * * 1-3 1");
/// ```
#[must_use]
pub fn normalize(expression: &str) -> String {
	let trimmed = expression.trim().to_lowercase();
	for (alias, expansion) in ALIASES {
		if trimmed == alias {
			return expansion.to_string();
		}
	}

	let fields: Vec<&str> = trimmed.split_whitespace().collect();
	if fields.len() != 5 {
		return fields.join(" ");
	}

	// Names are only meaningful in the month and day-of-week fields.
	let month = MONTH_RE.replace_all(fields[3], |caps: &Captures| substitute(&caps[1], &MONTHS, 1));
	let day = DAY_RE.replace_all(fields[4], |caps: &Captures| substitute(&caps[1], &DAYS, 0));

	format!(
		"{} {} {} {} {}",
		fields[0], fields[1], fields[2], month, day
	)
}

fn substitute(name: &str, table: &[&str], base: usize) -> String {
	// The regex alternation only matches names present in the table.
	let index = table.iter().position(|entry| *entry == name).unwrap_or(0);
	(index + base).to_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn aliases_expand_case_insensitively() {
		assert_eq!(normalize("@yearly"), "0 0 1 1 *");
		assert_eq!(normalize("  @YEARLY "), "0 0 1 1 *");
		assert_eq!(normalize("@annually"), "0 0 1 1 *");
		assert_eq!(normalize("@monthly"), "0 0 1 * *");
		assert_eq!(normalize("@weekly"), "0 0 * * 0");
		assert_eq!(normalize("@daily"), "0 0 * * *");
		assert_eq!(normalize("@midnight"), "0 0 * * *");
		assert_eq!(normalize("@hourly"), "0 * * * *");
	}

	#[test]
	fn month_and_day_names_become_numbers() {
		assert_eq!(normalize("0 0 * jan sun"), "0 0 * 1 0");
		assert_eq!(normalize("0 0 * DEC SAT"), "0 0 * 12 6");
		assert_eq!(normalize("* * * jan-mar mon-fri"), "* * * 1-3 1-5");
		assert_eq!(normalize("0 0 * jan,jul sun,wed"), "0 0 * 1,7 0,3");
	}

	#[test]
	fn substitution_is_word_bounded() {
		// `january` is not the three-letter token `jan`.
		assert_eq!(normalize("0 0 * january *"), "0 0 * january *");
	}

	#[test]
	fn whitespace_collapses() {
		assert_eq!(normalize("  0   0  *  *  * "), "0 0 * * *");
	}

	#[test]
	fn wrong_field_count_passes_through() {
		assert_eq!(normalize("* * *"), "* * *");
	}

	#[test]
	fn normalizing_is_idempotent() {
		for raw in [
			"@weekly",
			"*/5 9-17 * jan-mar mon,wed,fri",
			"0 0 1 1 *",
			"not an expression at all",
		] {
			let once = normalize(raw);
			assert_eq!(normalize(&once), once);
		}
	}
}
