use std::fmt;

/// The two lookup routes offered by the seating service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
	/// Look up every exam seat assigned to a roll number.
	Student,
	/// Look up the rooms allocated to a course.
	Faculty,
}

impl QueryKind {
	/// Path segment of the route serving this kind of query.
	#[must_use]
	pub fn route(self) -> &'static str {
		match self {
			QueryKind::Student => "student",
			QueryKind::Faculty => "faculty",
		}
	}

	/// Human readable name of the key this route is queried by.
	#[must_use]
	pub fn key_label(self) -> &'static str {
		match self {
			QueryKind::Student => "roll number",
			QueryKind::Faculty => "course code",
		}
	}
}

impl fmt::Display for QueryKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.route())
	}
}

/// Normalize free-text user input into a lookup key.
///
/// Keys are trimmed and uppercased. Blank input yields `None`, which callers
/// treat as "do nothing".
#[must_use]
pub fn normalize_key(input: &str) -> Option<String> {
	let trimmed = input.trim();
	if trimmed.is_empty() {
		return None;
	}
	Some(trimmed.to_uppercase())
}
