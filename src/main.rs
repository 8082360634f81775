use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fractal_palette::config::{Config, OutputFormat};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the palette
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fractal_palette=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env()?;
    tracing::info!(kind = %config.kind, size = config.size, "Generating palette");

    let palette = config.kind.generate(config.size);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.format {
        OutputFormat::Lines => {
            for entry in palette.entries() {
                writeln!(out, "{}", entry)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut out, &palette)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    tracing::info!("Wrote {} entries", palette.len());
    Ok(())
}
