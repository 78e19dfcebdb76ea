use clap::ValueEnum;
use tracing_subscriber::{prelude::*, EnvFilter, Registry};

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Initialize tracing, writing to stderr so stdout only carries the manifest
pub fn init(format: LogFormat) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    match format {
        LogFormat::Compact => {
            let logger = tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr);
            let collector = Registry::default().with(logger).with(env_filter);
            tracing::subscriber::set_global_default(collector)?;
        }
        LogFormat::Json => {
            let logger = tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr);
            let collector = Registry::default().with(logger).with(env_filter);
            tracing::subscriber::set_global_default(collector)?;
        }
    }

    Ok(())
}
