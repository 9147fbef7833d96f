use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use crate::student::StudentId;

/// A persisted student entry.
///
/// Field order and names match the stored JSON shape, including the
/// historical `disibility` key. Reading is lenient about the shapes older
/// data was written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: StudentId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Age::is_missing")]
    pub age: Age,
    pub standard: Standard,
    #[serde(rename = "disibility", default, deserialize_with = "truthy")]
    pub disability: bool,
    #[serde(default)]
    pub gender: Gender,
}

/// Field values of a record that has not been assigned an id yet.
///
/// `age` is unchecked here; the record store validates it before any
/// mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentDraft {
    pub name: String,
    pub age: i64,
    pub standard: Standard,
    pub disability: bool,
    pub gender: Gender,
}

impl StudentDraft {
    pub fn into_record(self, id: StudentId, age: Age) -> StudentRecord {
        StudentRecord {
            id,
            name: self.name,
            age,
            standard: self.standard,
            disability: self.disability,
            gender: self.gender,
        }
    }
}

impl From<&StudentRecord> for StudentDraft {
    fn from(record: &StudentRecord) -> Self {
        Self {
            name: record.name.clone(),
            // No whole age on record: the draft fails validation until edited.
            age: record.age.years().map_or(0, i64::from),
            standard: record.standard,
            disability: record.disability,
            gender: record.gender,
        }
    }
}

/// Stored age.
///
/// Whole years are read from a JSON number or a numeric string and written
/// back as a number. Anything else found in storage (fractions, free text,
/// `null`) is kept as read so it survives the next write; a missing key
/// stays missing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Age {
    Years(u32),
    Other(Value),
    #[default]
    Missing,
}

impl Age {
    pub fn new(years: u32) -> Self {
        Self::Years(years)
    }

    /// Whole years, when the stored value is one.
    pub fn years(&self) -> Option<u32> {
        match self {
            Self::Years(years) => Some(*years),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    fn from_stored(value: Value) -> Self {
        let years = match &value {
            Value::Number(number) => number.as_u64().or_else(|| {
                number
                    .as_f64()
                    .filter(|years| *years >= 0.0 && years.fract() == 0.0)
                    .map(|years| years as u64)
            }),
            Value::String(text) => text.trim().parse::<u64>().ok(),
            _ => None,
        };
        match years.and_then(|years| u32::try_from(years).ok()) {
            Some(years) => Self::Years(years),
            None => Self::Other(value),
        }
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Years(years) => write!(f, "{years}"),
            Self::Other(Value::String(text)) => f.write_str(text),
            Self::Other(Value::Null) | Self::Missing => Ok(()),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

impl Serialize for Age {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Years(years) => serializer.serialize_u32(*years),
            Self::Other(value) => value.serialize(serializer),
            Self::Missing => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Age {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_stored)
    }
}

/// Reads the disability flag the way the stored data was produced: any
/// JSON value, judged by truthiness (`"false"` is a non-empty string).
fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(flag) => flag,
        Value::Null => false,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// School standard (grade), stored as its number 1 through 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawStandard", into = "u8")]
pub enum Standard {
    #[default]
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
}

impl Standard {
    pub const ALL: [Standard; 6] = [
        Self::First,
        Self::Second,
        Self::Third,
        Self::Fourth,
        Self::Fifth,
        Self::Sixth,
    ];

    pub fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Fifth => 5,
            Self::Sixth => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::First => "First",
            Self::Second => "Second",
            Self::Third => "Third",
            Self::Fourth => "Fourth",
            Self::Fifth => "Fifth",
            Self::Sixth => "Sixth",
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[usize::from(self.number()) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let index = usize::from(self.number()) - 1;
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl From<Standard> for u8 {
    fn from(standard: Standard) -> Self {
        standard.number()
    }
}

/// Stored standard: a number, or the numeric text a select input produced.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawStandard {
    Number(u8),
    Text(String),
}

impl TryFrom<RawStandard> for Standard {
    type Error = String;

    fn try_from(raw: RawStandard) -> Result<Self, Self::Error> {
        match raw {
            RawStandard::Number(value) => Self::try_from(value),
            RawStandard::Text(text) => text
                .trim()
                .parse::<u8>()
                .map_err(|_| format!("standard {text:?} is not a number"))
                .and_then(Self::try_from),
        }
    }
}

impl TryFrom<u8> for Standard {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=6 => Ok(Self::ALL[usize::from(value) - 1]),
            other => Err(format!("standard must be between 1 and 6, got {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Female,
    Male,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Self::Female, Self::Male, Self::Other];

    /// Stored spelling, also shown in the results table.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
            Self::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
            Self::Other => "Other",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Female => 0,
            Self::Male => 1,
            Self::Other => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bob() -> StudentRecord {
        StudentRecord {
            id: StudentId::new("x1"),
            name: "Bob".to_string(),
            age: Age::new(12),
            standard: Standard::First,
            disability: true,
            gender: Gender::Male,
        }
    }

    #[test]
    fn serializes_with_stored_field_names() {
        let value = serde_json::to_value(bob()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "x1",
                "name": "Bob",
                "age": 12,
                "standard": 1,
                "disibility": true,
                "gender": "male"
            })
        );
    }

    #[test]
    fn serialized_keys_keep_field_order() {
        let text = serde_json::to_string(&bob()).unwrap();
        assert_eq!(
            text,
            r#"{"id":"x1","name":"Bob","age":12,"standard":1,"disibility":true,"gender":"male"}"#
        );
    }

    #[test]
    fn age_reads_numeric_strings() {
        let record: StudentRecord = serde_json::from_value(json!({
            "id": "a",
            "name": "Ann",
            "age": "14",
            "standard": 3,
            "disibility": false,
            "gender": "other"
        }))
        .unwrap();
        assert_eq!(record.age, Age::new(14));
        assert_eq!(record.standard, Standard::Third);
        assert_eq!(record.gender, Gender::Other);
    }

    #[test]
    fn age_keeps_values_that_are_not_whole_years() {
        assert_eq!(
            serde_json::from_value::<Age>(json!("10.5")).unwrap(),
            Age::Other(json!("10.5"))
        );
        assert_eq!(
            serde_json::from_value::<Age>(json!(10.5)).unwrap(),
            Age::Other(json!(10.5))
        );
        assert_eq!(
            serde_json::from_value::<Age>(json!(-3)).unwrap(),
            Age::Other(json!(-3))
        );
        assert_eq!(serde_json::from_value::<Age>(json!(10.0)).unwrap(), Age::new(10));
        assert_eq!(serde_json::to_value(Age::Other(json!("ten"))).unwrap(), json!("ten"));
        assert_eq!(Age::Other(json!("10.5")).to_string(), "10.5");
        assert_eq!(Age::Missing.to_string(), "");
    }

    #[test]
    fn missing_age_stays_missing_on_write() {
        let record: StudentRecord = serde_json::from_value(json!({
            "id": "a",
            "name": "Ann",
            "standard": 2,
            "disibility": false,
            "gender": "female"
        }))
        .unwrap();
        assert!(record.age.is_missing());
        assert_eq!(StudentDraft::from(&record).age, 0);
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("age").is_none());
    }

    #[test]
    fn disability_reads_by_truthiness() {
        let read = |flag: serde_json::Value| -> bool {
            let record: StudentRecord = serde_json::from_value(json!({
                "id": "a",
                "name": "Ann",
                "age": 9,
                "standard": 2,
                "disibility": flag
            }))
            .unwrap();
            record.disability
        };
        assert!(read(json!("false")));
        assert!(read(json!("on")));
        assert!(!read(json!("")));
        assert!(!read(json!(null)));
        assert!(!read(json!(0)));
        assert!(read(json!(true)));
    }

    #[test]
    fn missing_flags_fall_back_to_defaults() {
        let record: StudentRecord = serde_json::from_value(json!({
            "id": "a",
            "name": "Ann",
            "age": 9,
            "standard": 2
        }))
        .unwrap();
        assert!(!record.disability);
        assert_eq!(record.gender, Gender::Female);
    }

    #[test]
    fn standard_outside_range_is_rejected() {
        assert!(serde_json::from_value::<Standard>(json!(0)).is_err());
        assert!(serde_json::from_value::<Standard>(json!(7)).is_err());
        assert!(serde_json::from_value::<Standard>(json!("seven")).is_err());
        assert_eq!(
            serde_json::from_value::<Standard>(json!("2")).unwrap(),
            Standard::Second
        );
        assert_eq!(
            serde_json::from_value::<Standard>(json!(6)).unwrap(),
            Standard::Sixth
        );
    }

    #[test]
    fn standard_cycles_through_all_grades() {
        assert_eq!(Standard::First.next(), Standard::Second);
        assert_eq!(Standard::Sixth.next(), Standard::First);
        assert_eq!(Standard::First.prev(), Standard::Sixth);
        assert_eq!(Standard::Fourth.label(), "Fourth");
    }

    #[test]
    fn gender_cycles() {
        assert_eq!(Gender::Female.next(), Gender::Male);
        assert_eq!(Gender::Other.next(), Gender::Female);
        assert_eq!(Gender::Female.prev(), Gender::Other);
    }

    #[test]
    fn draft_round_trips_through_record() {
        let record = bob();
        let draft = StudentDraft::from(&record);
        assert_eq!(draft.age, 12);
        let rebuilt = draft.into_record(record.id.clone(), record.age.clone());
        assert_eq!(rebuilt, record);
    }
}
