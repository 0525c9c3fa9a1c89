use crate::config::{load_routes, ROUTES_ENV};
use crate::hot_reload::watch_routes;
use crate::router::{RouteTable, Target};
use anyhow::Context;
use arc_swap::ArcSwap;
use clap::{Parser, Subcommand};
use http::Method;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// Command-line interface for switchyard route files
#[derive(Parser)]
#[command(name = "switchyard")]
#[command(about = "Inspect, match and link against a declarative route table", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print every declaration in match order
    Routes {
        /// Route file (YAML, TOML or JSON)
        #[arg(short, long, env = ROUTES_ENV)]
        file: PathBuf,
    },
    /// Find the declaration a request would hit
    ///
    /// Exits with status 1 when nothing matches.
    Match {
        /// Route file (YAML, TOML or JSON)
        #[arg(short, long, env = ROUTES_ENV)]
        file: PathBuf,

        /// Request method, e.g. GET
        #[arg(short, long, default_value = "GET")]
        method: String,

        /// Request path, e.g. /users/42
        #[arg(short, long)]
        path: String,
    },
    /// Build the path that reaches Controller#action
    Link {
        /// Route file (YAML, TOML or JSON)
        #[arg(short, long, env = ROUTES_ENV)]
        file: PathBuf,

        /// Link target as Controller#action
        #[arg(short, long)]
        to: String,

        /// Binding value as name=value (repeatable)
        #[arg(short, long = "bind", value_parser = parse_binding)]
        bind: Vec<(String, String)>,
    },
    /// Load a route file and report how many declarations it produces
    Check {
        /// Route file (YAML, TOML or JSON)
        #[arg(short, long, env = ROUTES_ENV)]
        file: PathBuf,
    },
    /// Print the table, then reprint it every time the file is reloaded
    Watch {
        /// Route file (YAML, TOML or JSON)
        #[arg(short, long, env = ROUTES_ENV)]
        file: PathBuf,
    },
}

/// Parse a `name=value` binding argument.
fn parse_binding(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("invalid binding '{}': expected name=value", s)),
    }
}

/// Exit status for a request that matched nothing.
pub const EXIT_NO_MATCH: u8 = 1;

/// Execute a parsed command, writing results to `out`.
///
/// Returns the process exit status. `watch` does not return while the watcher runs.
///
/// # Errors
///
/// Returns an error if:
/// - The route file cannot be read or contains an invalid entry
/// - The method or link target arguments are malformed
/// - A link cannot be built (unknown target, missing binding, regex pattern)
pub fn execute(cli: &Cli, out: &mut impl Write) -> anyhow::Result<u8> {
    match &cli.command {
        Commands::Routes { file } => {
            let table = load_routes(file)?;
            write!(out, "{}", table)?;
            Ok(0)
        }
        Commands::Match { file, method, path } => {
            let table = load_routes(file)?;
            let method = Method::from_bytes(method.as_bytes())
                .with_context(|| format!("invalid request method '{}'", method))?;
            match_request(&table, &method, path, out)
        }
        Commands::Link { file, to, bind } => {
            let table = load_routes(file)?;
            let target: Target = to.parse()?;
            let href = table.link(&target.controller, &target.action, bind.as_slice())?;
            writeln!(out, "{}", href)?;
            Ok(0)
        }
        Commands::Check { file } => {
            let table = load_routes(file)?;
            writeln!(out, "{}: {} routes", file.display(), table.len())?;
            Ok(0)
        }
        Commands::Watch { file } => {
            let table = load_routes(file)?;
            write!(out, "{}", table)?;
            out.flush()?;

            let shared = Arc::new(ArcSwap::from_pointee(table));
            let _watcher = watch_routes(file, Arc::clone(&shared), |table| {
                println!("--- reloaded ({} routes)", table.len());
                table.dump_routes();
            })
            .with_context(|| format!("failed to watch {}", file.display()))?;

            loop {
                std::thread::park();
            }
        }
    }
}

fn match_request(
    table: &RouteTable,
    method: &Method,
    path: &str,
    out: &mut impl Write,
) -> anyhow::Result<u8> {
    let Some(matched) = table.route(method, path) else {
        writeln!(out, "no route for {} {}", method, path)?;
        return Ok(EXIT_NO_MATCH);
    };

    writeln!(out, "#{} {}", matched.index, matched.declaration)?;
    for (name, value) in &matched.path_params {
        writeln!(out, "  {} = {}", name, value)?;
    }
    Ok(0)
}

/// Parse arguments from the environment and run the command against stdout.
pub fn run_cli() -> anyhow::Result<u8> {
    let cli = Cli::parse();
    // Unlocked handle: `watch` prints from the watcher thread while this one parks.
    let mut out = std::io::stdout();
    execute(&cli, &mut out)
}
