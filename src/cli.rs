// Command line interface parsing
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use clap::{
    crate_description,
    crate_name,
    crate_version,
    Arg,
    ArgMatches,
    Command,
};
use clap::builder::NonEmptyStringValueParser;
use crate::common::{
    ReportConfig,
    DEFAULT_FILENAME,
};
use tracing::debug;

// Create clap app
fn create_app() -> Command {
    debug!("Creating CLI app");

    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::new("FILENAME")
                .env("S3REPORT_FILENAME")
                .hide_env_values(true)
                .long("filename")
                .short('f')
                .value_name("FILENAME")
                .help("Name of the CSV report, '.csv' is appended")
                .default_value(DEFAULT_FILENAME)
                .value_parser(NonEmptyStringValueParser::new())
        )
}

/// Parse the command line arguments.
pub fn parse_args() -> ArgMatches {
    debug!("Parsing command line arguments");

    create_app().get_matches()
}

/// Build the `ReportConfig` from parsed command line arguments.
pub fn report_config(matches: &ArgMatches) -> ReportConfig {
    let filename = matches.get_one::<String>("FILENAME")
        .map_or(DEFAULT_FILENAME, String::as_str);

    debug!("Report filename: {}", filename);

    ReportConfig::with_filename(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn test_cli_is_valid() {
        create_app().debug_assert();
    }

    #[test]
    fn test_report_config() {
        let tests = vec![
            (vec!["s3report"],                     "bucket-data.csv"),
            (vec!["s3report", "-f", "audit"],      "audit.csv"),
            (vec!["s3report", "--filename", "x"],  "x.csv"),
            (vec!["s3report", "--filename=a/b"],   "a/b.csv"),
        ];

        for test in tests {
            let args     = test.0;
            let expected = PathBuf::from(test.1);

            let matches = create_app().try_get_matches_from(args).unwrap();
            let config  = report_config(&matches);

            assert_eq!(config.output, expected);
        }
    }

    #[test]
    fn test_invalid_args() {
        let tests = vec![
            vec!["s3report", "-f", ""],
            vec!["s3report", "--region", "eu-west-1"],
            vec!["s3report", "positional"],
        ];

        for args in tests {
            let ret = create_app().try_get_matches_from(args);

            assert!(ret.is_err());
        }
    }
}
