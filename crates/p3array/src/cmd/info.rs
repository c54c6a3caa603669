use std::fs;

use p3array_codegen::{annotate, CodegenError};

use crate::cmd::InfoArgs;
use crate::exit::{codegen_error, CliResult, SUCCESS};
use crate::output::{print_frame_listing, FrameListing, FrameRow, OutputFormat};

pub fn run(args: InfoArgs, format: OutputFormat) -> CliResult<i32> {
    if !args.input.exists() {
        return Err(codegen_error(
            "inspect failed",
            CodegenError::InputNotFound {
                path: args.input.clone(),
            },
        ));
    }

    let data = fs::read(&args.input)
        .map_err(|err| codegen_error("inspect failed", CodegenError::Io(err)))?;

    // An empty or undersized file simply has no inferable frames.
    let frames = annotate(&data)
        .map(|annotation| FrameRow {
            index: annotation.index,
            offset: annotation.offset,
            frame_type: annotation.header.frame_type,
            reserved: annotation.header.reserved,
            payload_len: annotation.header.payload_len,
        })
        .collect();

    let listing = FrameListing {
        input: args.input.display().to_string(),
        bytes: data.len(),
        frames,
    };
    print_frame_listing(&listing, format);

    Ok(SUCCESS)
}
