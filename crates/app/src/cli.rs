//! `rowboard toolkit <op> <args...>`: call one toolkit function from the
//! command line.
//!
//! Each argument is parsed as JSON so numbers, arrays and `null` arrive
//! with their JSON types; anything that is not valid JSON is passed as a
//! plain string.

use rowboard_toolkit::{self as toolkit, Person, ToolkitError};
use serde_json::{json, Value};

pub const OPERATIONS: &[&str] = &[
    "add",
    "subtract",
    "multiply",
    "divide",
    "find-max",
    "find-min",
    "average",
    "capitalize",
    "palindrome",
    "person",
    "fetch-user",
];

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Toolkit(#[from] ToolkitError),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("`{op}` takes {expected} argument(s), got {got}")]
    Arity {
        op: String,
        expected: usize,
        got: usize,
    },
}

/// Interpret a raw command-line argument as a JSON value.
pub fn parse_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn expect_args<const N: usize>(op: &str, args: Vec<Value>) -> Result<[Value; N], CliError> {
    let got = args.len();
    args.try_into().map_err(|_| CliError::Arity {
        op: op.to_string(),
        expected: N,
        got,
    })
}

/// Run toolkit operation `op` and return its result as JSON.
pub async fn invoke(op: &str, args: Vec<Value>) -> Result<Value, CliError> {
    tracing::debug!(op, args = args.len(), "Invoking toolkit operation");

    let result = match op {
        "add" | "subtract" | "multiply" | "divide" => {
            let [a, b] = expect_args(op, args)?;
            let value = match op {
                "add" => toolkit::add(a, b)?,
                "subtract" => toolkit::subtract(a, b)?,
                "multiply" => toolkit::multiply(a, b)?,
                _ => toolkit::divide(a, b)?,
            };
            json!(value)
        }
        "find-max" | "find-min" | "average" => {
            let [numbers] = expect_args(op, args)?;
            let value = match op {
                "find-max" => toolkit::find_max(numbers)?,
                "find-min" => toolkit::find_min(numbers)?,
                _ => toolkit::calculate_average(numbers)?,
            };
            json!(value)
        }
        "capitalize" => {
            let [text] = expect_args(op, args)?;
            json!(toolkit::capitalize_words(text)?)
        }
        "palindrome" => {
            let [text] = expect_args(op, args)?;
            json!(toolkit::is_palindrome(text)?)
        }
        "person" => {
            let [name, email, age] = expect_args(op, args)?;
            let person = Person::new(name, email, age)?;
            json!({
                "info": person.full_info(),
                "is_adult": person.is_adult(),
                "is_active": person.is_active(),
            })
        }
        "fetch-user" => {
            let [id] = expect_args(op, args)?;
            json!(toolkit::fetch_user_data(id).await?)
        }
        other => return Err(CliError::UnknownOperation(other.to_string())),
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parse_arg_keeps_json_types() {
        assert_eq!(parse_arg("5"), json!(5));
        assert_eq!(parse_arg("[1, 2]"), json!([1, 2]));
        assert_eq!(parse_arg("null"), Value::Null);
        assert_eq!(parse_arg("\"5\""), json!("5"));
        assert_eq!(parse_arg("hello world"), json!("hello world"));
    }

    #[tokio::test]
    async fn arithmetic_from_raw_args() {
        let args = vec![parse_arg("10"), parse_arg("4")];
        assert_eq!(invoke("subtract", args).await.unwrap(), json!(6.0));
    }

    #[tokio::test]
    async fn string_argument_to_arithmetic_is_toolkit_error() {
        let args = vec![parse_arg("ten"), parse_arg("4")];
        let err = invoke("add", args).await.unwrap_err();
        assert_matches!(err, CliError::Toolkit(ToolkitError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "Both arguments must be numbers");
    }

    #[tokio::test]
    async fn wrong_argument_count() {
        let err = invoke("divide", vec![json!(1)]).await.unwrap_err();
        assert_matches!(err, CliError::Arity { expected: 2, got: 1, .. });
    }

    #[tokio::test]
    async fn unknown_operation() {
        let err = invoke("sqrt", vec![json!(4)]).await.unwrap_err();
        assert_matches!(err, CliError::UnknownOperation(ref op) if op == "sqrt");
    }

    #[tokio::test]
    async fn array_and_string_operations() {
        assert_eq!(
            invoke("find-max", vec![parse_arg("[1,5,3,9,2]")]).await.unwrap(),
            json!(9.0)
        );
        assert_eq!(
            invoke("capitalize", vec![parse_arg("hello world")]).await.unwrap(),
            json!("Hello World")
        );
        assert_eq!(
            invoke("palindrome", vec![parse_arg("race a car")]).await.unwrap(),
            json!(false)
        );
    }

    #[tokio::test]
    async fn person_summary() {
        let args = vec![parse_arg("Jane"), parse_arg("jane@example.com"), parse_arg("17")];
        let out = invoke("person", args).await.unwrap();
        assert_eq!(out["info"], "Jane (jane@example.com) - Age: 17");
        assert_eq!(out["is_adult"], false);
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_user_round_trips_through_json() {
        let out = invoke("fetch-user", vec![parse_arg("7")]).await.unwrap();
        assert_eq!(out["name"], "User 7");
        assert_eq!(out["id"], json!(7));
        assert!(out.to_string().contains(r#""id":7,"#));

        let err = invoke("fetch-user", vec![json!(999)]).await.unwrap_err();
        assert_eq!(err.to_string(), "User not found");
    }
}
