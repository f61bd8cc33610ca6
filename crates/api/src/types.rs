use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder rendered for fields the service left blank.
pub const MISSING_FIELD: &str = "-";

/// One element of the `/student/{roll}` response array.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentEntry {
	#[serde(deserialize_with = "text")]
	pub rollno: String,
	#[serde(deserialize_with = "text")]
	pub day: String,
	#[serde(deserialize_with = "text")]
	pub coursecode: String,
	#[serde(deserialize_with = "text")]
	pub date: String,
	#[serde(deserialize_with = "text")]
	pub shift: String,
	#[serde(deserialize_with = "text")]
	pub roomno: String,
	#[serde(default, deserialize_with = "optional_text")]
	pub coursename: Option<String>,
}

/// Body of the `/faculty/{course}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct FacultyEntry {
	#[serde(deserialize_with = "text")]
	pub coursecode: String,
	#[serde(deserialize_with = "text")]
	pub day: String,
	#[serde(deserialize_with = "text")]
	pub shift: String,
	#[serde(deserialize_with = "text")]
	pub date: String,
	#[serde(deserialize_with = "text_list")]
	pub roomno: Vec<String>,
	#[serde(default, deserialize_with = "optional_text")]
	pub coursename: Option<String>,
}

/// A single scheduled exam seat for a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatingRecord {
	pub roll_no: String,
	pub exam_day: String,
	pub course_code: String,
	pub date: String,
	pub shift: String,
	pub room_no: String,
	pub course_name: String,
}

/// One room allocated to a course sitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatingAssignment {
	pub course_code: String,
	pub day: String,
	pub shift: String,
	pub date: String,
	pub room_no: String,
	pub course_name: String,
}

impl From<StudentEntry> for SeatingRecord {
	fn from(entry: StudentEntry) -> Self {
		Self {
			roll_no: entry.rollno,
			exam_day: entry.day,
			course_code: entry.coursecode,
			date: entry.date,
			shift: entry.shift,
			room_no: entry.roomno,
			course_name: course_name_or_placeholder(entry.coursename),
		}
	}
}

impl FacultyEntry {
	/// Expand the shared course fields into one assignment per room, keeping
	/// the order in which the service listed the rooms.
	#[must_use]
	pub fn fan_out(self) -> Vec<SeatingAssignment> {
		let course_name = course_name_or_placeholder(self.coursename);
		self.roomno
			.into_iter()
			.map(|room_no| SeatingAssignment {
				course_code: self.coursecode.clone(),
				day: self.day.clone(),
				shift: self.shift.clone(),
				date: self.date.clone(),
				room_no,
				course_name: course_name.clone(),
			})
			.collect()
	}
}

fn course_name_or_placeholder(name: Option<String>) -> String {
	name.unwrap_or_else(|| MISSING_FIELD.to_owned())
}

fn value_to_text<E: de::Error>(value: Value) -> Result<String, E> {
	match value {
		Value::String(text) => Ok(text),
		Value::Number(number) => Ok(number.to_string()),
		Value::Bool(flag) => Ok(flag.to_string()),
		other => Err(E::custom(format!("expected text, found {other}"))),
	}
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	value_to_text(Value::deserialize(deserializer)?)
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	match Value::deserialize(deserializer)? {
		Value::Null => Ok(None),
		value => {
			let text = value_to_text::<D::Error>(value)?;
			Ok(if text.trim().is_empty() { None } else { Some(text) })
		}
	}
}

fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Vec::<Value>::deserialize(deserializer)?
		.into_iter()
		.map(value_to_text::<D::Error>)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn student_entry_maps_to_record() {
		let entry: StudentEntry = serde_json::from_str(
			r#"{"rollno":"2302MC05","day":"Thursday","coursecode":"MA2204","date":"2025-02-27","shift":"Evening","roomno":"408","coursename":"Engineering Mechanics"}"#,
		)
		.unwrap();
		let record = SeatingRecord::from(entry);
		assert_eq!(record.roll_no, "2302MC05");
		assert_eq!(record.exam_day, "Thursday");
		assert_eq!(record.room_no, "408");
		assert_eq!(record.course_name, "Engineering Mechanics");
	}

	#[test]
	fn missing_null_or_blank_course_name_becomes_placeholder() {
		for body in [
			r#"{"rollno":"R1","day":"Mon","coursecode":"C1","date":"d","shift":"M","roomno":"1"}"#,
			r#"{"rollno":"R1","day":"Mon","coursecode":"C1","date":"d","shift":"M","roomno":"1","coursename":null}"#,
			r#"{"rollno":"R1","day":"Mon","coursecode":"C1","date":"d","shift":"M","roomno":"1","coursename":""}"#,
		] {
			let entry: StudentEntry = serde_json::from_str(body).unwrap();
			assert_eq!(SeatingRecord::from(entry).course_name, MISSING_FIELD);
		}
	}

	#[test]
	fn numeric_fields_are_rendered_as_text() {
		let entry: StudentEntry = serde_json::from_str(
			r#"{"rollno":2302,"day":"Mon","coursecode":"C1","date":"d","shift":"M","roomno":408}"#,
		)
		.unwrap();
		assert_eq!(entry.rollno, "2302");
		assert_eq!(entry.roomno, "408");
	}

	#[test]
	fn faculty_entry_fans_out_per_room() {
		let entry: FacultyEntry = serde_json::from_str(
			r#"{"coursecode":"CS101","day":"Mon","shift":"M","date":"2024-01-01","roomno":["A1","A2"]}"#,
		)
		.unwrap();
		let rows = entry.fan_out();
		assert_eq!(rows.len(), 2);
		assert_eq!(rows[0].room_no, "A1");
		assert_eq!(rows[1].room_no, "A2");
		for row in &rows {
			assert_eq!(row.course_code, "CS101");
			assert_eq!(row.day, "Mon");
			assert_eq!(row.shift, "M");
			assert_eq!(row.date, "2024-01-01");
			assert_eq!(row.course_name, MISSING_FIELD);
		}
	}

	#[test]
	fn empty_room_list_fans_out_to_nothing() {
		let entry: FacultyEntry = serde_json::from_str(
			r#"{"coursecode":"CS101","day":"Mon","shift":"M","date":"2024-01-01","roomno":[],"coursename":"Intro"}"#,
		)
		.unwrap();
		assert!(entry.fan_out().is_empty());
	}

	#[test]
	fn structured_values_are_rejected() {
		let result = serde_json::from_str::<FacultyEntry>(
			r#"{"coursecode":{"a":1},"day":"Mon","shift":"M","date":"d","roomno":["A1"]}"#,
		);
		assert!(result.is_err());
	}
}
