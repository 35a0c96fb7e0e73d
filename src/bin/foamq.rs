//! Command-line interface for foamdict
//! Queries OpenFOAM dictionary files from the shell.
//!
//! Usage:
//!   foamq value `<path>` `<file>`                     - Print the value of a scoped entry
//!   foamq keywords `<path>` `<file>`                  - List the keywords of a sub-dictionary
//!   foamq all-keywords `<file>` [--scope `<path>`]    - List every keyword path with its line
//!   foamq line `<path>` `<file>`                      - Print the line a scoped entry starts on
//!
//! Global options: `--format simple|json|yaml`, `--config <toml>`.

use clap::{Arg, ArgMatches, Command};
use foamdict::foam::config::{FoamqConfig, Loader};
use foamdict::foam::processor::{
    format_output, read_source, OutputFormat, ProcessingError, QueryOutput,
};
use foamdict::{
    get_all_keywords, get_entry_keywords, get_entry_value, get_keyword_line_number,
    get_scope_keywords, QueryError,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Processing(#[from] ProcessingError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("missing argument <{0}>")]
    MissingArgument(&'static str),
}

fn cli() -> Command {
    let path_arg = || {
        Arg::new("path")
            .help("Scoped entry name, e.g. boundaryField:inlet:type")
            .required(true)
            .index(1)
    };
    let file_arg = |index: usize| {
        Arg::new("file")
            .help("Dictionary file to read")
            .required(true)
            .index(index)
    };

    Command::new("foamq")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Query entries of OpenFOAM dictionary files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .global(true)
                .help("Output format")
                .value_parser(OutputFormat::available().to_vec()),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML file layered over the built-in defaults"),
        )
        .subcommand(
            Command::new("value")
                .about("Print the value of a scoped entry")
                .arg(path_arg())
                .arg(file_arg(2)),
        )
        .subcommand(
            Command::new("keywords")
                .about("List the keywords of a scoped sub-dictionary")
                .arg(path_arg())
                .arg(file_arg(2)),
        )
        .subcommand(
            Command::new("all-keywords")
                .about("List every keyword path with the line it is defined on")
                .arg(file_arg(1))
                .arg(
                    Arg::new("scope")
                        .long("scope")
                        .short('s')
                        .help("Only list keywords below this sub-dictionary"),
                ),
        )
        .subcommand(
            Command::new("line")
                .about("Print the line a scoped entry starts on (-1 if absent)")
                .arg(path_arg())
                .arg(file_arg(2)),
        )
}

fn main() {
    let matches = cli().get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    init_tracing(&config);

    match run(&matches, &config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn load_config(matches: &ArgMatches) -> Result<FoamqConfig, CliError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = global_format(matches) {
        loader = loader.set_override("output.format", format)?;
    }
    Ok(loader.build()?)
}

/// `--format` may be given before or after the subcommand
fn global_format(matches: &ArgMatches) -> Option<String> {
    matches
        .subcommand()
        .and_then(|(_, sub)| sub.get_one::<String>("format"))
        .or_else(|| matches.get_one::<String>("format"))
        .cloned()
}

fn init_tracing(config: &FoamqConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(matches: &ArgMatches, config: &FoamqConfig) -> Result<String, CliError> {
    let (name, sub) = matches
        .subcommand()
        .ok_or(CliError::MissingArgument("command"))?;
    let text = read_source(required(sub, "file")?)?;
    debug!(command = name, "running query");

    let output = match name {
        "value" => QueryOutput::Value(get_entry_value(required(sub, "path")?, &text)?),
        "keywords" => QueryOutput::Keywords(get_entry_keywords(required(sub, "path")?, &text)?),
        "all-keywords" => match sub.get_one::<String>("scope") {
            Some(scope) => QueryOutput::Records(get_scope_keywords(scope, &text)?),
            None => QueryOutput::Records(get_all_keywords(&text)?),
        },
        "line" => QueryOutput::Line(get_keyword_line_number(required(sub, "path")?, &text)?),
        _ => return Err(CliError::MissingArgument("command")),
    };

    Ok(format_output(
        output,
        config.output.format,
        config.output.line_base,
    )?)
}

fn required<'a>(matches: &'a ArgMatches, name: &'static str) -> Result<&'a str, CliError> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or(CliError::MissingArgument(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn test_format_after_subcommand() {
        let matches = cli()
            .try_get_matches_from(["foamq", "line", "a.b", "file", "--format", "json"])
            .unwrap();
        assert_eq!(global_format(&matches).as_deref(), Some("json"));
    }

    #[test]
    fn test_scope_option() {
        let matches = cli()
            .try_get_matches_from(["foamq", "all-keywords", "file", "--scope", "a:b"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "all-keywords");
        assert_eq!(sub.get_one::<String>("scope").map(String::as_str), Some("a:b"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(cli()
            .try_get_matches_from(["foamq", "--format", "xml", "value", "a", "file"])
            .is_err());
    }
}
