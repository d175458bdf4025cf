//! Request decoding
//!
//! The whole input stream is one JSON object. Three top-level fields are
//! shared by every operation and lifted out; everything else stays in
//! [`Request::arguments`] for the operation to interpret.

use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// A decoded request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Operation name
    #[serde(rename = "cmd")]
    pub operation: String,

    /// File the source came from; an empty string means none
    #[serde(
        rename = "filePath",
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub file_path: Option<PathBuf>,

    /// Only run a formatter when project configuration for it exists
    #[serde(
        rename = "onlyWhenAProjectConfigIsFound",
        default,
        deserialize_with = "null_as_false"
    )]
    pub require_present_config: bool,

    /// Operation-specific fields
    #[serde(flatten)]
    pub arguments: Map<String, Value>,
}

impl Request {
    /// A request for `operation` with no other fields.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            file_path: None,
            require_present_config: false,
            arguments: Map::new(),
        }
    }

    /// Set the source file; an empty path means none, as on the wire.
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.file_path = Some(path).filter(|p| !p.as_os_str().is_empty());
        self
    }

    pub fn with_require_present_config(mut self, require: bool) -> Self {
        self.require_present_config = require;
        self
    }

    pub fn with_argument(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Decode the raw input stream.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRequest`] when the input is not exactly one JSON
    /// object or lacks `cmd`.
    pub fn decode(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw).map_err(Error::invalid_request)?;
        if !value.is_object() {
            return Err(Error::invalid_request("request must be a JSON object"));
        }
        let request: Self = serde_json::from_value(value).map_err(Error::invalid_request)?;
        tracing::debug!(
            operation = %request.operation,
            file_path = ?request.file_path,
            require_present_config = request.require_present_config,
            arguments = request.arguments.len(),
            "Decoded request"
        );
        Ok(request)
    }

    /// Serialize back to the wire shape [`Request::decode`] accepts.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Interpret the arguments as those of `fix`.
    pub fn fix_arguments(&self) -> Result<FixArguments> {
        serde_json::from_value(Value::Object(self.arguments.clone())).map_err(Error::invalid_request)
    }
}

/// Arguments of the `fix` operation.
///
/// Fields the operation does not know are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FixArguments {
    /// Text to format
    pub source: String,

    /// Run black before isort instead of after
    #[serde(default, deserialize_with = "null_as_false")]
    pub black_then_isort: bool,

    /// Directory standing in for the process working directory
    #[serde(default, deserialize_with = "empty_as_none")]
    pub cwd: Option<PathBuf>,
}

fn null_as_false<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    let path = Option::<String>::deserialize(deserializer)?;
    Ok(path.filter(|p| !p.is_empty()).map(PathBuf::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn shared_fields_are_lifted_out() {
        let request = Request::decode(
            r#"{"cmd":"fix","filePath":"/p/a.py","onlyWhenAProjectConfigIsFound":true,"source":"x\n","black_then_isort":true}"#,
        )
        .unwrap();

        assert_eq!(request.operation, "fix");
        assert_eq!(request.file_path, Some(PathBuf::from("/p/a.py")));
        assert!(request.require_present_config);
        assert_eq!(request.arguments.len(), 2);
        assert!(!request.arguments.contains_key("cmd"));
        assert!(!request.arguments.contains_key("filePath"));
    }

    #[rstest]
    #[case::omitted(r#"{"cmd":"fix"}"#)]
    #[case::null(r#"{"cmd":"fix","filePath":null,"onlyWhenAProjectConfigIsFound":null}"#)]
    #[case::empty(r#"{"cmd":"fix","filePath":"","onlyWhenAProjectConfigIsFound":false}"#)]
    fn missing_shared_fields_take_defaults(#[case] raw: &str) {
        let request = Request::decode(raw).unwrap();
        assert_eq!(request.file_path, None);
        assert!(!request.require_present_config);
    }

    #[rstest]
    #[case::not_json("fix")]
    #[case::array(r#"["fix"]"#)]
    #[case::no_cmd(r#"{"source":"x"}"#)]
    #[case::two_objects(r#"{"cmd":"fix"} {"cmd":"fix"}"#)]
    #[case::empty("")]
    fn malformed_input_is_invalid(#[case] raw: &str) {
        let err = Request::decode(raw).unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)), "{raw}: {err:?}");
    }

    #[test]
    fn fix_arguments_defaults() {
        let request = Request::decode(r#"{"cmd":"fix","source":"x\n","extra":1}"#).unwrap();
        let args = request.fix_arguments().unwrap();
        assert_eq!(
            args,
            FixArguments {
                source: "x\n".to_string(),
                black_then_isort: false,
                cwd: None,
            }
        );
    }

    #[test]
    fn fix_requires_source() {
        let request = Request::decode(r#"{"cmd":"fix"}"#).unwrap();
        let err = request.fix_arguments().unwrap_err();
        assert!(err.to_string().contains("source"), "{err}");
    }

    #[test]
    fn serialized_request_decodes_to_itself() {
        let request = Request::new("fix")
            .with_file_path("/p/pkg/mod.py")
            .with_require_present_config(true)
            .with_argument("source", "import b\n")
            .with_argument("black_then_isort", true);

        let decoded = Request::decode(&request.to_json().unwrap()).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn empty_file_path_builds_the_same_request_as_none() {
        let request = Request::new("fix").with_file_path("");
        assert_eq!(request.file_path, None);

        let decoded = Request::decode(&request.to_json().unwrap()).unwrap();
        assert_eq!(decoded, request);
    }
}
