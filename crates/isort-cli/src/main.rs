//! Command-line interface for isort.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use isort_core::config::{defaults, env_vars};
use isort_core::loader::module_file_name;
use isort_core::{
    AlgorithmRegistry, BuiltinModuleLoader, LoaderKind, NativeModuleLoader, Sorter, SorterConfig,
};

/// Generate and sort an array of unsigned 64-bit integer values.
#[derive(Parser, Debug)]
#[command(name = "isort")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The sort algorithm name. Native modules are loaded from
    /// lib<algorithm>.so (lib<algorithm>.dylib, <algorithm>.dll).
    #[arg(short, long, default_value = defaults::ALGORITHM)]
    algorithm: String,

    /// File that contains the unsorted data. Overwritten when --create is given.
    #[arg(short, long, default_value = defaults::FILE_NAME)]
    file: PathBuf,

    /// Write the sorted data to this file instead of the console.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Create a new unsorted dataset before sorting.
    #[arg(short, long)]
    create: bool,

    /// Exclusive upper bound of generated values; must be above 0 with --create.
    #[arg(short = 's', long = "max", default_value_t = defaults::DATA_MAX)]
    max: u64,

    /// Number of values to generate.
    #[arg(short = 'n', long = "count", default_value_t = defaults::NUM_VALUES)]
    count: usize,

    /// Seed for a reproducible dataset.
    #[arg(long)]
    seed: Option<u64>,

    /// How algorithm modules are loaded.
    #[arg(long, default_value_t = LoaderKind::Native)]
    loader: LoaderKind,

    /// Extra directory searched for algorithm modules (repeatable).
    #[arg(long = "plugin-dir", value_name = "DIR")]
    plugin_dirs: Vec<PathBuf>,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn sorter_config(&self) -> SorterConfig {
        let mut config = SorterConfig::new()
            .with_algorithm(&self.algorithm)
            .with_data_file(&self.file);

        if let Some(output) = &self.output {
            config = config.with_output_file(output);
        }
        if self.create {
            config = config.with_generated_data(self.count, self.max);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }

    /// Native loader searching `--plugin-dir` entries, then `ISORT_PLUGIN_PATH`.
    fn native_loader(&self) -> NativeModuleLoader {
        NativeModuleLoader::new()
            .with_search_dirs(&self.plugin_dirs)
            .with_search_dirs(env_vars::plugin_path())
    }

    /// Where an algorithm that could not be resolved was looked for.
    fn unresolved_hint(&self) -> String {
        match self.loader {
            LoaderKind::Native => {
                let loader = self.native_loader();
                let file_name = module_file_name(&self.algorithm);
                let file_name = file_name.to_string_lossy();

                if loader.search_dirs().is_empty() {
                    format!(
                        "{} was looked up on the system library path only; \
                         add its directory with --plugin-dir or {}",
                        file_name,
                        env_vars::PLUGIN_PATH
                    )
                } else {
                    let dirs: Vec<String> = loader
                        .search_dirs()
                        .iter()
                        .map(|dir| dir.display().to_string())
                        .collect();
                    format!(
                        "{} was looked up in {} and on the system library path",
                        file_name,
                        dirs.join(", ")
                    )
                }
            }
            LoaderKind::Builtin => format!(
                "builtin algorithms are {}",
                BuiltinModuleLoader::new().names().join(", ")
            ),
        }
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help exits non-zero like any bad flag
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Sort failed");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let log_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.as_str()));

    // stdout carries the sort output only
    if env_vars::log_json() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .compact()
            .with_writer(std::io::stderr)
            .init();
    }
}

fn run(args: &Args) -> Result<()> {
    let local;
    let registry = match args.loader {
        LoaderKind::Native if args.plugin_dirs.is_empty() => AlgorithmRegistry::global(),
        LoaderKind::Native => {
            local = AlgorithmRegistry::new(args.native_loader());
            &local
        }
        LoaderKind::Builtin => {
            local = AlgorithmRegistry::builtin();
            &local
        }
    };

    let sorter = Sorter::new(args.sorter_config());
    let algorithm = sorter.config().algorithm.as_str();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let start = Instant::now();
    if let Err(e) = sorter.run(registry, &mut out) {
        let context = if e.is_unresolved() {
            format!(
                "Algorithm '{}' is not available: {}",
                algorithm,
                args.unresolved_hint()
            )
        } else {
            format!("Sort using '{}' failed", algorithm)
        };
        return Err(anyhow::Error::new(e).context(context));
    }
    let elapsed = start.elapsed();

    tracing::info!(algorithm, elapsed_us = elapsed.as_micros() as u64, "Sort complete");
    writeln!(
        out,
        "Sorted using '{}' algorithm in {:.6} seconds",
        algorithm,
        elapsed.as_secs_f64()
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["isort"]).unwrap();
        assert_eq!(args.algorithm, "radix");
        assert_eq!(args.file, PathBuf::from("isort.dat"));
        assert_eq!(args.max, 1000);
        assert_eq!(args.count, 1000);
        assert_eq!(args.loader, LoaderKind::Native);
        assert!(!args.create);

        assert_eq!(args.sorter_config(), SorterConfig::default());
    }

    #[test]
    fn test_args_to_config() {
        let args = Args::try_parse_from([
            "isort", "-a", "bubble", "-f", "in.dat", "-o", "out.dat", "-c", "-s", "50", "-n",
            "20", "--seed", "4",
        ])
        .unwrap();

        let config = args.sorter_config();
        assert_eq!(config.algorithm, "bubble");
        assert_eq!(config.data_file, PathBuf::from("in.dat"));
        assert_eq!(config.output_file, Some(PathBuf::from("out.dat")));
        assert!(config.create_data);
        assert_eq!(config.data_max, 50);
        assert_eq!(config.num_values, 20);
        assert_eq!(config.seed, Some(4));
    }

    #[test]
    fn test_zero_max_only_rejected_when_generating() {
        let args = Args::try_parse_from(["isort", "-s", "0"]).unwrap();
        assert_eq!(args.max, 0);
        assert!(args.sorter_config().validate().is_ok());

        let args = Args::try_parse_from(["isort", "-c", "-s", "0"]).unwrap();
        assert!(args.sorter_config().validate().is_err());
    }

    #[test]
    fn test_unresolved_hint() {
        let args = Args::try_parse_from(["isort", "--loader", "builtin", "-a", "quick"]).unwrap();
        assert_eq!(args.unresolved_hint(), "builtin algorithms are bubble, radix");

        let args =
            Args::try_parse_from(["isort", "-a", "quick", "--plugin-dir", "modules"]).unwrap();
        let hint = args.unresolved_hint();
        assert!(hint.contains(&*module_file_name("quick").to_string_lossy()));
        assert!(hint.contains("modules"));
    }

    #[test]
    fn test_loader_and_plugin_dirs() {
        let args = Args::try_parse_from([
            "isort",
            "--loader",
            "builtin",
            "--plugin-dir",
            "a",
            "--plugin-dir",
            "b",
        ])
        .unwrap();
        assert_eq!(args.loader, LoaderKind::Builtin);
        assert_eq!(args.plugin_dirs, vec![PathBuf::from("a"), PathBuf::from("b")]);
    }
}
