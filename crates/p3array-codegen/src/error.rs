use std::path::PathBuf;

/// Errors that can occur while generating a C array from a P3 file.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    /// The input path does not exist.
    #[error("input file '{}' does not exist", .path.display())]
    InputNotFound { path: PathBuf },

    /// The input file exists but contains no bytes.
    #[error("input file '{}' is empty", .path.display())]
    EmptyInput { path: PathBuf },

    /// An I/O error occurred while reading the input or writing the output.
    #[error("codegen I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CodegenError>;
