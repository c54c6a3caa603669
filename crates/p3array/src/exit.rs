use std::fmt;
use std::io;

use p3array_codegen::CodegenError;

// Exit code constants; nonstandard values loosely follow BSD sysexits.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
#[allow(dead_code)]
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::NotFound => FAILURE,
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn codegen_error(context: &str, err: CodegenError) -> CliError {
    match err {
        CodegenError::InputNotFound { .. } => CliError::new(FAILURE, format!("{context}: {err}")),
        CodegenError::EmptyInput { .. } => CliError::new(DATA_INVALID, format!("{context}: {err}")),
        CodegenError::Io(source) => io_error(context, source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_input_maps_to_failure() {
        let err = codegen_error(
            "convert failed",
            CodegenError::InputNotFound {
                path: PathBuf::from("boot.p3"),
            },
        );
        assert_eq!(err.code, FAILURE);
        assert!(err.message.contains("boot.p3"));
    }

    #[test]
    fn empty_input_maps_to_data_invalid() {
        let err = codegen_error(
            "convert failed",
            CodegenError::EmptyInput {
                path: PathBuf::from("boot.p3"),
            },
        );
        assert_eq!(err.code, DATA_INVALID);
    }

    #[test]
    fn permission_denied_maps_to_dedicated_code() {
        let err = codegen_error(
            "convert failed",
            CodegenError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
        );
        assert_eq!(err.code, PERMISSION_DENIED);
    }
}
