use anyhow::Context;
use gate_cli::{messages, Repl};
use gate_store::Config;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load config")?;

    // Logs go to stderr; stdout belongs to the gate shell.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting boarding gate shell");

    let mut repl = Repl::new(io::stdout().lock()).with_prompt(config.shell.prompt.clone());
    if config.shell.show_intro {
        repl = repl.with_intro(messages::INTRO);
    }
    if let Some(path) = &config.session.preload {
        repl = repl.with_startup(format!("load {}", path.display()));
    }
    if let Some(flight) = &config.session.flight {
        repl = repl.with_startup(format!("flight {}", flight));
    }

    repl.run(io::stdin().lock())
        .context("Gate shell terminated on an I/O error")?;
    Ok(())
}
