//! Request body parsing and the endpoint error body

use crate::core::{Constraint, LetterState, MAX_CONSTRAINTS, Pattern, Word};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Largest accepted request body
pub const MAX_REQUEST_BODY_BYTES: usize = 8 * 1024;

/// Request-level failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    PayloadTooLarge,
    InvalidJson,
}

impl RequestError {
    /// Machine-readable error code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::PayloadTooLarge => "payload_too_large",
            Self::InvalidJson => "invalid_json",
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PayloadTooLarge => "Request body is too large.",
            Self::InvalidJson => "Invalid JSON request body.",
        }
    }

    /// HTTP status a transport should answer with
    #[must_use]
    pub const fn status(self) -> u16 {
        match self {
            Self::PayloadTooLarge => 413,
            Self::InvalidJson => 400,
        }
    }

    /// The `{error: {code, message}}` body
    #[must_use]
    pub fn to_json(self) -> Value {
        #[derive(Serialize)]
        struct Detail {
            code: &'static str,
            message: &'static str,
        }
        #[derive(Serialize)]
        struct Body {
            error: Detail,
        }

        serde_json::to_value(Body {
            error: Detail {
                code: self.code(),
                message: self.message(),
            },
        })
        .unwrap_or(Value::Null)
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl std::error::Error for RequestError {}

/// Parse a raw body into validated constraints
///
/// # Errors
///
/// Fails on oversized bodies and on anything that is not JSON. A JSON value
/// without a `constraints` array yields no constraints.
pub fn parse_request(body: &[u8]) -> Result<Vec<Constraint>, RequestError> {
    if body.len() > MAX_REQUEST_BODY_BYTES {
        return Err(RequestError::PayloadTooLarge);
    }

    let value: Value = serde_json::from_slice(body).map_err(|_| RequestError::InvalidJson)?;
    Ok(value
        .get("constraints")
        .map(parse_constraints)
        .unwrap_or_default())
}

/// Keep the rows that are valid, up to six
#[must_use]
pub fn parse_constraints(rows: &Value) -> Vec<Constraint> {
    let Some(rows) = rows.as_array() else {
        return Vec::new();
    };

    rows.iter()
        .filter_map(parse_row)
        .take(MAX_CONSTRAINTS)
        .collect()
}

fn parse_row(row: &Value) -> Option<Constraint> {
    let guess = row.get("guess")?.as_str()?.to_lowercase();
    if guess.len() != 5 || !guess.bytes().all(|b| b.is_ascii_lowercase()) {
        return None;
    }
    let guess = Word::new(&guess).ok()?;

    let digits = row.get("pattern")?.as_array()?;
    if digits.len() != 5 {
        return None;
    }

    let mut pattern = Pattern::default();
    for (position, digit) in digits.iter().enumerate() {
        // Integers only; 1.0 and "1" are rejected
        let state = digit
            .as_u64()
            .and_then(|d| u8::try_from(d).ok())
            .and_then(LetterState::from_digit)?;
        pattern.set(position, state);
    }

    Some(Constraint::new(guess, pattern))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Vec<Constraint> {
        parse_request(body.as_bytes()).unwrap()
    }

    #[test]
    fn parses_valid_rows() {
        let rows = parse(r#"{"constraints":[{"guess":"crane","pattern":[0,1,2,0,0]}]}"#);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].to_string(), "crane:01200");
    }

    #[test]
    fn guess_is_lowercased() {
        let rows = parse(r#"{"constraints":[{"guess":"CrAnE","pattern":[2,2,2,2,2]}]}"#);
        assert_eq!(rows[0].guess.text(), "crane");
    }

    #[test]
    fn invalid_rows_are_skipped() {
        let body = r#"{"constraints":[
            {"guess":"cran","pattern":[0,0,0,0,0]},
            {"guess":"cr4ne","pattern":[0,0,0,0,0]},
            {"guess":"crane","pattern":[0,0,0,0]},
            {"guess":"crane","pattern":[0,0,3,0,0]},
            {"guess":"crane","pattern":[0,0,1.0,0,0]},
            {"guess":"crane","pattern":["0",0,0,0,0]},
            {"guess":5,"pattern":[0,0,0,0,0]},
            {"pattern":[0,0,0,0,0]},
            "crane",
            {"guess":"slate","pattern":[0,0,0,0,1]}
        ]}"#;
        let rows = parse(body);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].guess.text(), "slate");
    }

    #[test]
    fn non_ascii_guess_is_skipped() {
        let rows = parse(r#"{"constraints":[{"guess":"crâne","pattern":[0,0,0,0,0]}]}"#);
        assert!(rows.is_empty());
    }

    #[test]
    fn caps_at_six_constraints() {
        let row = r#"{"guess":"crane","pattern":[0,0,0,0,0]}"#;
        let body = format!(r#"{{"constraints":[{}]}}"#, vec![row; 9].join(","));
        assert_eq!(parse(&body).len(), MAX_CONSTRAINTS);
    }

    #[test]
    fn missing_or_mistyped_constraints_mean_none() {
        assert!(parse("{}").is_empty());
        assert!(parse("null").is_empty());
        assert!(parse("[1, 2]").is_empty());
        assert!(parse(r#"{"constraints":"crane"}"#).is_empty());
    }

    #[test]
    fn body_limit_is_inclusive() {
        let mut body = br#"{"constraints":[]}"#.to_vec();
        body.resize(MAX_REQUEST_BODY_BYTES, b' ');
        assert!(parse_request(&body).is_ok());

        body.push(b' ');
        assert_eq!(parse_request(&body), Err(RequestError::PayloadTooLarge));
    }

    #[test]
    fn error_body_shape() {
        let json = RequestError::InvalidJson.to_json();
        assert_eq!(json["error"]["code"], "invalid_json");
        assert_eq!(json["error"]["message"], "Invalid JSON request body.");
        assert_eq!(RequestError::PayloadTooLarge.status(), 413);
        assert_eq!(RequestError::InvalidJson.status(), 400);
    }
}
