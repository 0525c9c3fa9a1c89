//! # CLI Module
//!
//! Command-line access to route files: list a table, try a request against it, build
//! a link, or validate the file before deploying it.
//!
//! ## Commands
//!
//! Every command takes `--file <FILE>`; when omitted it falls back to the
//! `SWITCHYARD_ROUTES` environment variable.
//!
//! ### `routes`
//!
//! Print the table in match order, one declaration per line:
//!
//! ```bash
//! switchyard routes --file routes.yaml
//! ```
//!
//! ### `match`
//!
//! Show which declaration a request hits and the bindings it captures. Exits with
//! status 1 when no declaration matches:
//!
//! ```bash
//! switchyard match --file routes.yaml --method PUT --path /users/42
//! ```
//!
//! ### `link`
//!
//! Build the path reaching a controller action:
//!
//! ```bash
//! switchyard link --file routes.yaml --to App.Users#show --bind id=42
//! ```
//!
//! ### `check`
//!
//! Load the file and report the declaration count. Any invalid entry fails the command.
//!
//! ### `watch`
//!
//! Print the table and reprint it whenever the file changes on disk.
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use switchyard::cli::{execute, Cli};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["switchyard", "check", "--file", "routes.yaml"]);
//! let status = execute(&cli, &mut std::io::stdout())?;
//! ```

mod commands;


pub use commands::{execute, run_cli, Cli, Commands, EXIT_NO_MATCH};
