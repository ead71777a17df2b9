use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use ordered_float::NotNan;
use serde::{Deserialize, Serialize};

use crate::compiler::TypeError;
use crate::metadata::DataType;
use crate::parser::ast::Literal;
use crate::resolver::ResolvedColumn;

/// A literal coerced to the type of the column it is compared against.
/// NOW has already been pinned to a concrete timestamp at this point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CompiledValue {
    Text(String),
    Integer(i64),
    Numeric(NotNan<f64>),
    Bool(bool),
    Timestamp(DateTime<Utc>),
    Json(String),
}

impl CompiledValue {
    /// Coerce `literal` to the type of `column`. NULL never reaches here;
    /// the predicate compiler turns it into an absence test first.
    pub fn coerce(column: &ResolvedColumn, literal: &Literal) -> Result<Self, TypeError> {
        let value = match (column.data_type, literal) {
            (DataType::Text, Literal::String(s)) => Some(CompiledValue::Text(s.clone())),

            (DataType::Integer, Literal::Integer(i)) => Some(CompiledValue::Integer(*i)),
            (DataType::Integer, Literal::Numeric(n)) if n.into_inner().fract() == 0.0 => {
                Some(CompiledValue::Integer(n.into_inner() as i64))
            }

            (DataType::Boolean, Literal::Bool(b)) => Some(CompiledValue::Bool(*b)),

            (DataType::DateTime, Literal::String(s)) => {
                Self::parse_timestamp(s).map(CompiledValue::Timestamp)
            }
            (DataType::DateTime, Literal::Now) => Some(CompiledValue::Timestamp(Utc::now())),

            (DataType::Json, Literal::String(s)) => {
                serde_json::from_str::<serde_json::Value>(s)
                    .ok()
                    .map(|_| CompiledValue::Json(s.clone()))
            }

            _ => None,
        };

        value.ok_or_else(|| TypeError::IncompatibleLiteral {
            column: column.logical_name.clone(),
            data_type: column.data_type,
            literal: literal.to_string(),
        })
    }

    /// Accepted timestamp spellings, in order: RFC 3339, then a space
    /// separated date-time, then a bare date taken as midnight UTC.
    fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
            return Some(parsed.with_timezone(&Utc));
        }
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
            return Some(parsed.and_utc());
        }
        if let Ok(parsed) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return Some(parsed.and_time(NaiveTime::MIN).and_utc());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};
    use ordered_float::NotNan;

    use crate::compiler::CompiledValue;
    use crate::metadata::DataType;
    use crate::parser::ast::Literal;
    use crate::resolver::ResolvedColumn;

    fn column(data_type: DataType) -> ResolvedColumn {
        ResolvedColumn {
            logical_name: "col".into(),
            persistent_name: "col".into(),
            data_type,
            entity: None,
        }
    }

    #[test]
    pub fn test_coerce_text() {
        let result = CompiledValue::coerce(&column(DataType::Text), &Literal::String("US".into()));
        assert_eq!(result, Ok(CompiledValue::Text("US".into())));

        assert!(CompiledValue::coerce(&column(DataType::Text), &Literal::Integer(1)).is_err());
    }

    #[test]
    pub fn test_coerce_integer_accepts_integral_numeric() {
        let integral = Literal::Numeric(NotNan::new(5.0).unwrap());
        let result = CompiledValue::coerce(&column(DataType::Integer), &integral);
        assert_eq!(result, Ok(CompiledValue::Integer(5)));

        let fractional = Literal::Numeric(NotNan::new(5.5).unwrap());
        assert!(CompiledValue::coerce(&column(DataType::Integer), &fractional).is_err());
    }

    #[test]
    pub fn test_coerce_boolean_strict() {
        let result = CompiledValue::coerce(&column(DataType::Boolean), &Literal::Bool(true));
        assert_eq!(result, Ok(CompiledValue::Bool(true)));

        assert!(CompiledValue::coerce(&column(DataType::Boolean), &Literal::Integer(1)).is_err());
        assert!(CompiledValue::coerce(&column(DataType::Boolean), &Literal::String("true".into())).is_err());
    }

    #[test]
    pub fn test_coerce_timestamp_formats() {
        for text in ["2024-03-01T10:30:00Z", "2024-03-01 10:30:00"] {
            match CompiledValue::coerce(&column(DataType::DateTime), &Literal::String(text.into())) {
                Ok(CompiledValue::Timestamp(ts)) => {
                    assert_eq!(ts.year(), 2024);
                    assert_eq!(ts.hour(), 10);
                }
                other => panic!("unexpected: {:?}", other),
            }
        }

        match CompiledValue::coerce(&column(DataType::DateTime), &Literal::String("2024-03-01".into())) {
            Ok(CompiledValue::Timestamp(ts)) => {
                assert_eq!(ts.day(), 1);
                assert_eq!(ts.hour(), 0);
            }
            other => panic!("unexpected: {:?}", other),
        }

        assert!(CompiledValue::coerce(
            &column(DataType::DateTime),
            &Literal::String("March 1st".into())
        )
        .is_err());
    }

    #[test]
    pub fn test_coerce_now_pins_timestamp() {
        let before = chrono::Utc::now();
        match CompiledValue::coerce(&column(DataType::DateTime), &Literal::Now) {
            Ok(CompiledValue::Timestamp(ts)) => assert!(ts >= before),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    pub fn test_coerce_json_validates() {
        let valid = Literal::String(r#"{"featured": true}"#.into());
        let result = CompiledValue::coerce(&column(DataType::Json), &valid);
        assert_eq!(result, Ok(CompiledValue::Json(r#"{"featured": true}"#.into())));

        let invalid = Literal::String("{not json".into());
        assert!(CompiledValue::coerce(&column(DataType::Json), &invalid).is_err());
    }
}
