use std::time::Duration;

use log::debug;
use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

use crate::error::LookupError;
use crate::query::QueryKind;
use crate::types::{FacultyEntry, SeatingAssignment, SeatingRecord, StudentEntry};

const USER_AGENT: &str = concat!("seatview/", env!("CARGO_PKG_VERSION"));

/// Read-only access to the seating service.
///
/// Implementations are called from a background worker thread and must
/// therefore be shareable across threads.
pub trait SeatingApi: Send + Sync {
	/// Fetch every seat scheduled for a normalized roll number.
	fn student(&self, roll_no: &str) -> Result<Vec<SeatingRecord>, LookupError>;

	/// Fetch the room allocation for a normalized course code, one row per room.
	fn faculty(&self, course_code: &str) -> Result<Vec<SeatingAssignment>, LookupError>;
}

/// Connection settings for [`HttpSeatingClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
	pub base_url: String,
	/// Overall request timeout. `None` keeps the transport default.
	pub timeout: Option<Duration>,
}

impl ClientConfig {
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
			timeout: None,
		}
	}

	#[must_use]
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}
}

/// [`SeatingApi`] backed by blocking reqwest calls.
#[derive(Debug, Clone)]
pub struct HttpSeatingClient {
	http: Client,
	base_url: Url,
}

impl HttpSeatingClient {
	pub fn new(config: ClientConfig) -> Result<Self, LookupError> {
		let base_url = Url::parse(config.base_url.trim())
			.map_err(|_| LookupError::InvalidBaseUrl(config.base_url.clone()))?;
		if base_url.cannot_be_a_base() {
			return Err(LookupError::InvalidBaseUrl(config.base_url));
		}

		let mut builder = Client::builder().user_agent(USER_AGENT);
		if let Some(timeout) = config.timeout {
			builder = builder.timeout(timeout);
		}
		let http = builder.build().map_err(LookupError::ClientBuild)?;

		Ok(Self { http, base_url })
	}

	#[must_use]
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Build the URL for a lookup, percent-encoding the key as a single path
	/// segment appended to any prefix carried by the base URL.
	pub fn endpoint(&self, kind: QueryKind, key: &str) -> Result<Url, LookupError> {
		let mut url = self.base_url.clone();
		{
			let mut segments = url
				.path_segments_mut()
				.map_err(|()| LookupError::InvalidBaseUrl(self.base_url.to_string()))?;
			segments.pop_if_empty().push(kind.route()).push(key);
		}
		Ok(url)
	}

	fn fetch(&self, kind: QueryKind, key: &str) -> Result<(u16, Vec<u8>), LookupError> {
		let url = self.endpoint(kind, key)?;
		debug!("GET {url}");
		let response = self
			.http
			.get(url)
			.header(ACCEPT, "application/json")
			.send()
			.map_err(LookupError::Transport)?;
		let status = response.status().as_u16();
		let body = response.bytes().map_err(LookupError::Transport)?;
		debug!("{kind} lookup for {key} answered {status} ({} bytes)", body.len());
		Ok((status, body.to_vec()))
	}
}

impl SeatingApi for HttpSeatingClient {
	fn student(&self, roll_no: &str) -> Result<Vec<SeatingRecord>, LookupError> {
		let (status, body) = self.fetch(QueryKind::Student, roll_no)?;
		decode_student(status, &body)
	}

	fn faculty(&self, course_code: &str) -> Result<Vec<SeatingAssignment>, LookupError> {
		let (status, body) = self.fetch(QueryKind::Faculty, course_code)?;
		decode_faculty(status, &body)
	}
}

fn is_success(status: u16) -> bool {
	(200..300).contains(&status)
}

/// Decode a `/student/{roll}` response into seating records.
pub fn decode_student(status: u16, body: &[u8]) -> Result<Vec<SeatingRecord>, LookupError> {
	if !is_success(status) {
		return Err(LookupError::from_error_body(status, body));
	}
	let entries: Vec<StudentEntry> = serde_json::from_slice(body)?;
	Ok(entries.into_iter().map(SeatingRecord::from).collect())
}

/// Decode a `/faculty/{course}` response into one assignment per room.
pub fn decode_faculty(status: u16, body: &[u8]) -> Result<Vec<SeatingAssignment>, LookupError> {
	if !is_success(status) {
		return Err(LookupError::from_error_body(status, body));
	}
	let entry: FacultyEntry = serde_json::from_slice(body)?;
	Ok(entry.fan_out())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::MISSING_FIELD;

	fn client(base: &str) -> HttpSeatingClient {
		HttpSeatingClient::new(ClientConfig::new(base)).unwrap()
	}

	#[test]
	fn endpoint_appends_route_and_key() {
		let url = client("http://127.0.0.1:8000")
			.endpoint(QueryKind::Faculty, "CS101")
			.unwrap();
		assert_eq!(url.as_str(), "http://127.0.0.1:8000/faculty/CS101");
	}

	#[test]
	fn endpoint_keeps_base_path_prefix() {
		let url = client("http://exams.local/seating/")
			.endpoint(QueryKind::Student, "2302MC05")
			.unwrap();
		assert_eq!(url.as_str(), "http://exams.local/seating/student/2302MC05");
	}

	#[test]
	fn endpoint_encodes_key_as_single_segment() {
		let url = client("http://exams.local")
			.endpoint(QueryKind::Student, "A/B C")
			.unwrap();
		assert_eq!(url.as_str(), "http://exams.local/student/A%2FB%20C");
	}

	#[test]
	fn invalid_base_urls_are_rejected() {
		for base in ["not a url", "mailto:exams@example.com"] {
			let err = HttpSeatingClient::new(ClientConfig::new(base)).unwrap_err();
			assert!(matches!(err, LookupError::InvalidBaseUrl(_)), "{base}: {err}");
		}
	}

	#[test]
	fn student_success_preserves_order() {
		let body = br#"[
			{"rollno":"R1","day":"Mon","coursecode":"C2","date":"2024-01-02","shift":"M","roomno":"101","coursename":"Two"},
			{"rollno":"R1","day":"Tue","coursecode":"C1","date":"2024-01-03","shift":"E","roomno":"102"}
		]"#;
		let records = decode_student(200, body).unwrap();
		assert_eq!(records.len(), 2);
		assert_eq!(records[0].course_code, "C2");
		assert_eq!(records[1].course_code, "C1");
		assert_eq!(records[1].course_name, MISSING_FIELD);
	}

	#[test]
	fn student_error_uses_detail() {
		let err = decode_student(404, br#"{"detail":"Student not found"}"#).unwrap_err();
		assert_eq!(err.to_string(), "Student not found");
	}

	#[test]
	fn malformed_success_body_is_a_decode_error() {
		let err = decode_student(200, b"{\"rollno\":").unwrap_err();
		assert!(matches!(err, LookupError::Decode(_)));
	}

	#[test]
	fn faculty_success_fans_out() {
		let body = br#"{"coursecode":"CS101","day":"Mon","shift":"M","date":"2024-01-01","roomno":["A1","A2"]}"#;
		let rows = decode_faculty(200, body).unwrap();
		assert_eq!(rows.len(), 2);
		assert_eq!(rows[1].room_no, "A2");
	}

	#[test]
	fn faculty_error_without_detail_is_generic() {
		let err = decode_faculty(500, b"Internal Server Error").unwrap_err();
		assert_eq!(err.to_string(), crate::error::UNKNOWN_ERROR);
	}
}
