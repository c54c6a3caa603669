mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "p3array",
    version,
    about = "Embed P3 frame streams into firmware as C byte arrays"
)]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "info",
        env = "P3ARRAY_LOG_LEVEL",
        global = true
    )]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_convert_subcommand() {
        let cli = Cli::try_parse_from(["p3array", "convert", "boot.p3", "boot.h", "boot_data"])
            .expect("convert args should parse");

        assert!(matches!(cli.command, Command::Convert(_)));
    }

    #[test]
    fn parses_convert_without_positionals() {
        let cli = Cli::try_parse_from(["p3array", "convert"]).expect("bare convert should parse");

        match cli.command {
            Command::Convert(args) => {
                assert!(args.input.is_none());
                assert!(args.output.is_none());
                assert!(args.array_name.is_none());
            }
            other => panic!("expected convert, got {other:?}"),
        }
    }

    #[test]
    fn parses_info_subcommand() {
        let cli = Cli::try_parse_from(["p3array", "--format", "json", "info", "boot.p3"])
            .expect("info args should parse");
        assert!(matches!(cli.command, Command::Info(_)));
    }

    #[test]
    fn rejects_info_without_input() {
        let err = Cli::try_parse_from(["p3array", "info"]).expect_err("info needs an input path");
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }
}
