use thiserror::Error;

/// Message used when the service fails without a usable `detail` field.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Failure of a single lookup. Every variant is terminal for its request.
#[derive(Debug, Error)]
pub enum LookupError {
	/// The service answered with a non-success status.
	#[error("{detail}")]
	Api { status: u16, detail: String },
	/// The request never produced a response.
	#[error("failed to reach seating service: {0}")]
	Transport(#[source] reqwest::Error),
	/// A success response carried a body of the wrong shape.
	#[error("malformed response: {0}")]
	Decode(#[from] serde_json::Error),
	#[error("invalid base URL `{0}`")]
	InvalidBaseUrl(String),
	#[error("failed to build HTTP client: {0}")]
	ClientBuild(#[source] reqwest::Error),
	/// The lookup broke off without an answer, e.g. the client panicked.
	#[error("lookup aborted: {0}")]
	Aborted(String),
}

impl LookupError {
	/// Build an [`LookupError::Api`] from a raw error body, extracting the
	/// `detail` string when the body is a JSON object carrying one.
	#[must_use]
	pub fn from_error_body(status: u16, body: &[u8]) -> Self {
		let detail = serde_json::from_slice::<serde_json::Value>(body)
			.ok()
			.and_then(|value| {
				value
					.get("detail")
					.and_then(serde_json::Value::as_str)
					.filter(|detail| !detail.is_empty())
					.map(str::to_owned)
			})
			.unwrap_or_else(|| UNKNOWN_ERROR.to_owned());
		LookupError::Api { status, detail }
	}

	/// HTTP status of the failure, when the service answered at all.
	#[must_use]
	pub fn status(&self) -> Option<u16> {
		match self {
			LookupError::Api { status, .. } => Some(*status),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn detail_is_extracted_from_error_body() {
		let err = LookupError::from_error_body(404, br#"{"detail":"Student not found"}"#);
		assert_eq!(err.to_string(), "Student not found");
		assert_eq!(err.status(), Some(404));
	}

	#[test]
	fn missing_detail_falls_back_to_generic_message() {
		let err = LookupError::from_error_body(500, br#"{"message":"boom"}"#);
		assert_eq!(err.to_string(), UNKNOWN_ERROR);
	}

	#[test]
	fn unparseable_body_falls_back_to_generic_message() {
		let err = LookupError::from_error_body(502, b"<html>Bad Gateway</html>");
		assert_eq!(err.to_string(), UNKNOWN_ERROR);
		assert_eq!(err.status(), Some(502));
	}

	#[test]
	fn aborted_lookup_has_no_status() {
		let err = LookupError::Aborted("client panicked".into());
		assert_eq!(err.to_string(), "lookup aborted: client panicked");
		assert_eq!(err.status(), None);
	}

	#[test]
	fn non_string_detail_is_ignored() {
		let err = LookupError::from_error_body(422, br#"{"detail":[{"loc":["path"]}]}"#);
		assert_eq!(err.to_string(), UNKNOWN_ERROR);
	}
}
