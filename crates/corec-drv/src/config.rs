//! Command-line configuration: hand-rolled, order-independent flag
//! parsing. A single positional source file plus a handful of boolean
//! switches does not earn a parser dependency.

use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub source_file: Option<PathBuf>,
    pub dump_tokens: bool,
    pub dump_ast: bool,
    pub dump_sym_table: bool,
    pub show_timing: bool,
    pub run_self_test: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageError(pub String);

impl std::fmt::Display for UsageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for UsageError {}

impl Config {
    /// Parses `args` (excluding argv[0]). Flags may appear in any order;
    /// at most one non-flag argument is accepted as the source file, and
    /// it is required unless `--test` is given.
    pub fn parse(args: &[String]) -> Result<Config, UsageError> {
        let mut config = Config::default();
        for arg in args {
            match arg.as_str() {
                "--tokens" => config.dump_tokens = true,
                "--ast" => config.dump_ast = true,
                "--sym-table" => config.dump_sym_table = true,
                "--time" => config.show_timing = true,
                "--test" => config.run_self_test = true,
                flag if flag.starts_with("--") => {
                    return Err(UsageError(format!("unknown flag '{flag}'")));
                }
                path if config.source_file.is_none() => {
                    config.source_file = Some(PathBuf::from(path));
                }
                extra => {
                    return Err(UsageError(format!("unexpected extra argument '{extra}'")));
                }
            }
        }

        if config.source_file.is_none() && !config.run_self_test {
            return Err(UsageError("missing <source-file>".to_owned()));
        }
        Ok(config)
    }
}

pub const USAGE: &str =
    "usage: corec [--tokens] [--ast] [--time] [--sym-table] [--test] <source-file>";
