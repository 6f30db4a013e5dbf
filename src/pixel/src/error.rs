use std::result;

use serde_json::error::Category;
use thiserror::Error;

pub type Result<T> = result::Result<T, DecodeError>;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("syntax at line {line} column {column}: {reason}")]
    Syntax {
        line: usize,
        column: usize,
        reason: String,
    },
    #[error("field {path}: {reason}")]
    Field { path: String, reason: String },
    #[error("unknown event {0:?}")]
    UnknownEvent(String),
}

impl DecodeError {
    /// Path of the offending field, `.` for the payload root.
    pub fn path(&self) -> Option<&str> {
        match self {
            DecodeError::Field { path, .. } => Some(path.as_str()),
            _ => None,
        }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for DecodeError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        let inner = err.into_inner();
        match inner.classify() {
            Category::Data => DecodeError::Field {
                path,
                reason: inner.to_string(),
            },
            Category::Syntax | Category::Eof | Category::Io => DecodeError::Syntax {
                line: inner.line(),
                column: inner.column(),
                reason: inner.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => DecodeError::Field {
                path: ".".to_string(),
                reason: err.to_string(),
            },
            Category::Syntax | Category::Eof | Category::Io => DecodeError::Syntax {
                line: err.line(),
                column: err.column(),
                reason: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::DecodeError;

    #[derive(Debug, Deserialize)]
    struct Outer {
        #[allow(dead_code)]
        inner: Inner,
    }

    #[derive(Debug, Deserialize)]
    struct Inner {
        #[allow(dead_code)]
        values: Vec<i64>,
    }

    fn decode(data: &str) -> DecodeError {
        let de = &mut serde_json::Deserializer::from_str(data);
        serde_path_to_error::deserialize::<_, Outer>(de)
            .unwrap_err()
            .into()
    }

    #[test]
    fn test_field_path() {
        let err = decode(r#"{"inner":{"values":[1,"two"]}}"#);
        assert_eq!(err.path(), Some("inner.values[1]"));
        assert!(matches!(err, DecodeError::Field { .. }));
    }

    #[test]
    fn test_syntax() {
        let err = decode(r#"{"inner":{"values":[1,"#);
        assert_eq!(err.path(), None);
        assert!(matches!(err, DecodeError::Syntax { .. }));

        let err = decode("{\n\"inner\" 1}");
        match err {
            DecodeError::Syntax { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected {other:?}"),
        }
    }
}
