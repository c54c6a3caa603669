use p3array_codegen::{convert, ConvertConfig};
use tracing::warn;

use crate::cmd::ConvertArgs;
use crate::exit::{codegen_error, CliResult, SUCCESS};
use crate::output::{print_report, OutputFormat};

pub fn run(args: ConvertArgs, format: OutputFormat) -> CliResult<i32> {
    let config = resolve_config(args);

    let report = convert(&config).map_err(|err| codegen_error("convert failed", err))?;
    print_report(&report, format);

    Ok(SUCCESS)
}

// Partial invocations fall back to the full default set rather than mixing
// supplied arguments with defaults; a two-argument invocation has no
// unambiguous reading.
fn resolve_config(args: ConvertArgs) -> ConvertConfig {
    match (args.input, args.output, args.array_name) {
        (Some(input), Some(output), Some(array_name)) => ConvertConfig {
            input,
            output,
            array_name,
        },
        _ => {
            let config = ConvertConfig::default();
            warn!(
                input = %config.input.display(),
                output = %config.output.display(),
                array_name = %config.array_name,
                "arguments omitted, using defaults"
            );
            warn!("usage: p3array convert <input.p3> <output.h> <array_name>");
            config
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn full_argument_set_is_used_verbatim() {
        let config = resolve_config(ConvertArgs {
            input: Some(PathBuf::from("boot.p3")),
            output: Some(PathBuf::from("boot.h")),
            array_name: Some("boot_data".to_string()),
        });

        assert_eq!(config.input, PathBuf::from("boot.p3"));
        assert_eq!(config.output, PathBuf::from("boot.h"));
        assert_eq!(config.array_name, "boot_data");
    }

    #[test]
    fn partial_argument_set_falls_back_to_defaults() {
        let config = resolve_config(ConvertArgs {
            input: Some(PathBuf::from("boot.p3")),
            output: None,
            array_name: None,
        });

        assert_eq!(config.input, PathBuf::from("test2.p3"));
        assert_eq!(config.output, PathBuf::from("test2.h"));
        assert_eq!(config.array_name, "test2_data");
    }
}
