use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

use crate::generator::{generate_project, load_manifest, GenerateOptions};
use crate::logging::LogFormat;
use crate::path::{Chunk, Dialect, PathSegments};
use crate::platform::PlatformConfig;

/// Command-line interface for pathgen
#[derive(Parser)]
#[command(name = "pathgen")]
#[command(about = "Compile controller route paths into router glue and OpenAPI docs", long_about = None)]
pub struct Cli {
    /// Log format for diagnostics written to stderr
    #[arg(long, global = true, value_enum, ignore_case = true, env = "PATHGEN_LOG_FORMAT")]
    pub log_format: Option<LogFormatArg>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Log format accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Json,
    Pretty,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Json => LogFormat::Json,
            LogFormatArg::Pretty => LogFormat::Pretty,
        }
    }
}

/// Dialect accepted by `inspect`
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DialectArg {
    Curly,
    Colon,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Curly => Dialect::CURLY,
            DialectArg::Colon => Dialect::COLON,
        }
    }
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate routes.rs and openapi.json from a routes manifest
    Generate {
        /// Routes manifest (YAML or JSON)
        #[arg(short, long)]
        routes: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "generated")]
        output: PathBuf,

        /// Platform preset (`colon`, `curly`) or path to a platform config file
        #[arg(short, long, env = "PATHGEN_PLATFORM", default_value = "colon")]
        platform: String,

        /// Overwrite existing files
        #[arg(short, long, default_value_t = false)]
        force: bool,

        /// OpenAPI info.title
        #[arg(long, default_value = "")]
        title: String,

        /// OpenAPI info.version
        #[arg(long = "api-version", default_value = "0.1.0")]
        api_version: String,
    },
    /// Show how a path template is compiled
    Inspect {
        /// Path template, e.g. `/withMatrix/:year;author;country/:other`
        template: String,

        /// Print only the path rendered in this dialect
        #[arg(short, long, value_enum)]
        dialect: Option<DialectArg>,
    },
}

/// Run a parsed command line
///
/// # Errors
///
/// Returns an error if the command fails
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            routes,
            output,
            platform,
            force,
            title,
            api_version,
        } => {
            let manifest = load_manifest(&routes)?;
            let platform = PlatformConfig::resolve(&platform)
                .with_context(|| format!("unknown platform '{platform}'"))?;
            let options = GenerateOptions {
                output_dir: output,
                force,
                title,
                version: api_version,
            };
            let report = generate_project(&manifest, &platform, &options)?;
            for path in &report.written {
                println!("✅ Generated {}", path.display());
            }
            for path in &report.skipped {
                println!("⚠️  Skipped existing {} (use --force)", path.display());
            }
            Ok(())
        }
        Commands::Inspect { template, dialect } => {
            let path = PathSegments::parse(&template);
            match dialect {
                Some(dialect) => println!("{}", path.full_path(dialect.into())),
                None => print!("{}", describe(&path)),
            }
            Ok(())
        }
    }
}

/// Human readable breakdown of a compiled template
#[must_use]
pub fn describe(path: &PathSegments) -> String {
    Description(path).to_string()
}

struct Description<'a>(&'a PathSegments);

impl fmt::Display for Description<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.0;
        writeln!(f, "curly: {}", path.full_path_curly())?;
        writeln!(f, "colon: {}", path.full_path_colon())?;
        writeln!(f, "chunks:")?;
        for chunk in path.chunks() {
            match chunk {
                Chunk::Literal(text) => writeln!(f, "  literal {text:?}")?,
                Chunk::Named(key) => writeln!(f, "  named   {key:?}")?,
            }
        }
        writeln!(f, "segments:")?;
        for segment in path.segments() {
            if segment.has_matrix_params() {
                let vars: Vec<&str> = segment
                    .matrix_var_names()
                    .iter()
                    .map(String::as_str)
                    .collect();
                writeln!(f, "  {} (matrix: {})", segment.name(), vars.join(", "))?;
            } else {
                writeln!(f, "  {}", segment.name())?;
            }
        }
        Ok(())
    }
}
