use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::carray::render;
use crate::error::{CodegenError, Result};

/// Conversion parameters.
///
/// The defaults mirror the tool's historical fallback invocation and are
/// applied by the CLI before validation, never inside [`convert`] itself.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Path of the P3 file to embed.
    pub input: PathBuf,
    /// Path of the generated header; overwritten unconditionally.
    pub output: PathBuf,
    /// Identifier for the array and the `<name>_len` constant, used verbatim.
    pub array_name: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("test2.p3"),
            output: PathBuf::from("test2.h"),
            array_name: "test2_data".to_string(),
        }
    }
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone)]
pub struct ConvertReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub array_name: String,
    /// Exact byte count of the input, as emitted in the length constant.
    pub byte_count: usize,
    /// Number of frame comments in the generated document.
    pub frame_count: usize,
}

/// Convert a P3 file into a C byte-array header.
///
/// Reads the whole input into memory, renders the annotated array literal,
/// and writes the document in a single call. Nothing is written on any
/// failure path, so a failed conversion never leaves a partial output file.
pub fn convert(config: &ConvertConfig) -> Result<ConvertReport> {
    if !config.input.exists() {
        return Err(CodegenError::InputNotFound {
            path: config.input.clone(),
        });
    }

    let data = fs::read(&config.input)?;
    if data.is_empty() {
        return Err(CodegenError::EmptyInput {
            path: config.input.clone(),
        });
    }
    debug!(bytes = data.len(), input = %config.input.display(), "read input file");

    let rendered = render(&data, &config.array_name);
    fs::write(&config.output, &rendered.text)?;

    info!(
        frames = rendered.frame_count,
        bytes = data.len(),
        output = %config.output.display(),
        "wrote C array header"
    );

    Ok(ConvertReport {
        input: config.input.clone(),
        output: config.output.clone(),
        array_name: config.array_name.clone(),
        byte_count: data.len(),
        frame_count: rendered.frame_count,
    })
}
