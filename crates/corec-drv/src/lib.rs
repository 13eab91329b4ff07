//! Compiler driver: command-line entry point for the front end in
//! `corec-lex`/`corec-par`/`corec-sem`. Orchestrates the three stages,
//! renders the single first diagnostic on failure, and hosts the
//! peripheral concerns outside the core pipeline: flag parsing, phase
//! timing, pretty-printers, and the embedded self-test harness.

mod config;
mod dump;
mod pipeline;
mod selftest;

pub use config::{Config, UsageError, USAGE};
pub use pipeline::{run_pipeline, PipelineOutput, Timings};

use corec_util::SourceFile;

/// Process exit codes: 0 success, 1 pipeline failure, 2 CLI usage error.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

/// Runs the driver for one invocation and returns the process exit code.
/// `args` excludes argv[0].
pub fn run(args: &[String]) -> i32 {
    let config = match Config::parse(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            return EXIT_USAGE;
        }
    };

    if config.run_self_test {
        let _span = tracing::info_span!("self_test").entered();
        return if selftest::run_self_test() { EXIT_SUCCESS } else { EXIT_FAILURE };
    }

    let path = config.source_file.as_ref().expect("checked by Config::parse");
    let source = match SourceFile::load(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {e}");
            return EXIT_FAILURE;
        }
    };
    let filename = path.display().to_string();

    match run_pipeline(source.contents(), &filename) {
        Ok(out) => {
            if config.dump_tokens {
                dump::dump_tokens(&out.tokens);
            }
            if config.dump_ast {
                dump::dump_ast(&out.program);
            }
            if config.dump_sym_table {
                dump::dump_sym_table(&out.scope_tree);
            }
            if config.show_timing {
                pipeline::print_timings(&out.timings);
            }
            EXIT_SUCCESS
        }
        Err(diagnostic) => {
            tracing::error!(code = diagnostic.code.as_str(), "compilation failed");
            eprint!("{}", diagnostic.render(&filename, &source));
            EXIT_FAILURE
        }
    }
}

/// Initializes the `tracing` subscriber from `CX_LOG` (or `info` if
/// unset).
pub fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("CX_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry().with(filter).with(fmt::layer().with_target(false)).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn usage_error_exits_with_code_two() {
        assert_eq!(run(&args(&["--bogus"])), EXIT_USAGE);
    }

    #[test]
    fn missing_file_is_a_pipeline_failure() {
        assert_eq!(run(&args(&["/nonexistent/path/does/not/exist.cx"])), EXIT_FAILURE);
    }

    #[test]
    fn self_test_flag_runs_the_embedded_harness() {
        assert_eq!(run(&args(&["--test"])), EXIT_SUCCESS);
    }
}
