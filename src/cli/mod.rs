//! # CLI Module
//!
//! Command-line interface for the `pathgen` binary.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Compile every route in a routes manifest and write `routes.rs` and
//! `openapi.json`:
//!
//! ```bash
//! pathgen generate --routes routes.yaml --output generated --platform colon
//! ```
//!
//! Options:
//! - `--routes <FILE>` - Routes manifest, YAML or JSON (required)
//! - `--output <DIR>` - Output directory (default: `generated`)
//! - `--platform <NAME|FILE>` - `colon`, `curly` or a platform config file
//!   (env: `PATHGEN_PLATFORM`)
//! - `--force` - Overwrite existing files
//! - `--title`, `--api-version` - OpenAPI `info` fields
//!
//! ### `inspect`
//!
//! Show the chunks, segments and both renderings of one template:
//!
//! ```bash
//! pathgen inspect '/withMatrix/:year;author;country/:other'
//! pathgen inspect '/hello/{id}' --dialect colon
//! ```

mod commands;


pub use commands::{describe, run_cli, Cli, Commands, DialectArg, LogFormatArg};
