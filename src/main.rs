use std::io::{self, IsTerminal};
use std::panic;
use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use flowise_key::prompt::default_source;
use flowise_key::{config, configure, report, term};

fn run() -> anyhow::Result<ExitCode> {
    let settings = config::load();
    term::set_color(term::should_color(settings.color_enabled(), io::stdout().is_terminal()));

    let target = config::resolve_target().context("cannot locate the .env file")?;
    tracing::debug!(target = %target.display(), "resolved target");

    let mut input = default_source();
    let status = configure(&target, input.as_mut());
    Ok(ExitCode::from(status.exit_code()))
}

fn main() -> ExitCode {
    // Diagnostics only; operator output goes to stdout. Raise with `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    report::install_panic_hook();

    match panic::catch_unwind(run) {
        Ok(Ok(code)) => code,
        Ok(Err(e)) => {
            eprintln!("{}", report::unexpected(&e));
            ExitCode::FAILURE
        }
        // the hook already printed the message and trace
        Err(_) => ExitCode::FAILURE,
    }
}
