//! Rewrite `key = value` settings of a simulation config file in place
//!
//! Replacement pairs come from the command line as `key=val`. Lines with a
//! single `=` are rewritten as `key = value`; every other line is copied
//! unchanged.

pub mod args;
pub mod config;
pub mod error;
pub mod line;
pub mod rewrite;

use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use args::ReplacementTable;
pub use config::Settings;
pub use error::{ArgsError, Result, SetParamError};
pub use line::ConfigLine;
pub use rewrite::{rewrite, RewriteReport};

/// The configuration file rewritten by the binary, relative to the working
/// directory.
pub const TARGET: &str = "prifi_simul.toml";

/// Initialize tracing/logging with the given filter level
pub fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Build the table from `args` and rewrite `target` with it.
///
/// Argument errors are returned before the target is opened.
pub fn run<I, S>(target: &Path, args: I) -> Result<RewriteReport>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let table = ReplacementTable::from_args(args)?;
    tracing::debug!("Replacing {} key(s) in {}", table.len(), target.display());
    rewrite(target, &table)
}
