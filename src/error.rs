//! This module defines the error type and Result alias.

use crate::field::FieldName;
use thiserror::Error;

/// Everything that can go wrong while parsing a schedule expression.
///
/// Parse errors come in two classes: format errors (structural problems) and
/// range errors (a legal-looking literal outside its field's bounds).  Any
/// error invalidates the whole expression; no partial schedule is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	#[error("expected 5 fields, got {0}")]
	FieldCount(usize),
	#[error("{field} field: `{token}` is not a number")]
	InvalidNumber { field: FieldName, token: String },
	#[error("{field} field: step `{token}` is not a positive integer")]
	InvalidStep { field: FieldName, token: String },
	#[error("{field} field: {value} is outside the legal range {min}-{max}")]
	OutOfRange {
		field: FieldName,
		value: i64,
		min: u8,
		max: u8,
	},
}

impl Error {
	/// True for structural problems, false for a bounds violation.
	#[must_use]
	pub fn is_format(&self) -> bool {
		!matches!(self, Error::OutOfRange { .. })
	}

	/// The field the error occurred in, if it names one.
	#[must_use]
	pub fn field(&self) -> Option<FieldName> {
		match self {
			Error::FieldCount(_) => None,
			Error::InvalidNumber { field, .. }
			| Error::InvalidStep { field, .. }
			| Error::OutOfRange { field, .. } => Some(*field),
		}
	}
}

pub type Result<T> = std::result::Result<T, Error>;
