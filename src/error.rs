use std::fmt::{self, Display};
use std::io;

#[derive(Debug)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        io_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        parse_error(err)
    }
}

impl Error {
    pub fn is_internal(&self) -> bool {
        matches!(self.code, 1..=99)
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: 101,
        message: "invalid input".into(),
    }
}

pub fn invalid_config_error(key: &str, value: &str) -> Error {
    Error {
        code: 102,
        message: format!("invalid value {:?} for {}", value, key),
    }
}

pub fn parse_error(err: serde_json::Error) -> Error {
    Error {
        code: 103,
        message: format!("route data parse error: {}", err),
    }
}

pub fn io_error(err: io::Error) -> Error {
    Error {
        code: 2,
        message: format!("io error: {}", err),
    }
}

pub fn reqwest_error(err: reqwest::Error) -> Error {
    Error {
        code: 3,
        message: format!("reqwest error: {}", err),
    }
}

pub fn upstream_error(status: u16) -> Error {
    Error {
        code: 4,
        message: format!("upstream error: status {}", status),
    }
}

#[test]
fn error_codes_split_internal_and_input() {
    let err: Error = io::Error::new(io::ErrorKind::NotFound, "gone").into();
    assert_eq!(err.code, 2);
    assert!(err.is_internal());

    let err = invalid_config_error("VINEWALK_MAPS", "maybe");
    assert_eq!(err.code, 102);
    assert!(!err.is_internal());
    assert!(err.to_string().contains("VINEWALK_MAPS"));
}

#[test]
fn json_errors_are_input_errors() {
    let err: Error = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
    assert_eq!(err.code, 103);
    assert!(!err.is_internal());
}
