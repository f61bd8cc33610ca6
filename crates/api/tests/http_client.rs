use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use seatview_api::{ClientConfig, HttpSeatingClient, LookupError, SeatingApi};

/// Serve exactly one canned HTTP response and report the request line.
fn serve_once(status: &str, body: &'static str) -> (String, mpsc::Receiver<String>) {
	let listener = TcpListener::bind("127.0.0.1:0").unwrap();
	let addr = listener.local_addr().unwrap();
	let (tx, rx) = mpsc::channel();
	let status = status.to_owned();

	thread::spawn(move || {
		let (stream, _) = listener.accept().unwrap();
		let mut reader = BufReader::new(stream.try_clone().unwrap());
		let mut request_line = String::new();
		reader.read_line(&mut request_line).unwrap();
		loop {
			let mut header = String::new();
			if reader.read_line(&mut header).unwrap() == 0 || header == "\r\n" {
				break;
			}
		}
		tx.send(request_line.trim_end().to_owned()).unwrap();

		let mut stream = stream;
		write!(
			stream,
			"HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
			body.len()
		)
		.unwrap();
		stream.flush().unwrap();
	});

	(format!("http://{addr}"), rx)
}

fn client(base_url: String) -> HttpSeatingClient {
	HttpSeatingClient::new(ClientConfig::new(base_url).with_timeout(Duration::from_secs(5))).unwrap()
}

#[test]
fn faculty_lookup_hits_course_route() {
	let (base, requests) = serve_once(
		"200 OK",
		r#"{"coursecode":"CS101","day":"Mon","shift":"M","date":"2024-01-01","roomno":["A1","A2"]}"#,
	);

	let rows = client(base).faculty("CS101").unwrap();

	assert_eq!(requests.recv().unwrap(), "GET /faculty/CS101 HTTP/1.1");
	assert_eq!(rows.len(), 2);
	assert_eq!(rows[0].room_no, "A1");
	assert_eq!(rows[1].room_no, "A2");
	assert!(rows.iter().all(|row| row.course_name == "-"));
}

#[test]
fn student_lookup_decodes_records() {
	let (base, requests) = serve_once(
		"200 OK",
		r#"[{"rollno":"2302MC05","day":"Thursday","coursecode":"MA2204","date":"2025-02-27","shift":"Evening","roomno":"408","coursename":"Engineering Mechanics"}]"#,
	);

	let records = client(base).student("2302MC05").unwrap();

	assert_eq!(requests.recv().unwrap(), "GET /student/2302MC05 HTTP/1.1");
	assert_eq!(records.len(), 1);
	assert_eq!(records[0].course_name, "Engineering Mechanics");
}

#[test]
fn not_found_surfaces_detail() {
	let (base, _requests) = serve_once("404 Not Found", r#"{"detail":"Student not found"}"#);

	let err = client(base).student("NOBODY").unwrap_err();

	assert!(matches!(err, LookupError::Api { status: 404, .. }));
	assert_eq!(err.to_string(), "Student not found");
}

#[test]
fn unreachable_service_is_a_transport_error() {
	let listener = TcpListener::bind("127.0.0.1:0").unwrap();
	let addr = listener.local_addr().unwrap();
	drop(listener);

	let err = client(format!("http://{addr}")).faculty("CS101").unwrap_err();

	assert!(matches!(err, LookupError::Transport(_)), "{err}");
}
