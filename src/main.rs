//! outfitcast - what to wear for the weather outside
//!
//! Fetches current conditions from Open-Meteo, falls back to the last cached
//! reading when offline, and prints an outfit recommendation.

use std::error::Error;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use outfitcast::cache::{FileStorage, MemoryStorage, Storage, WeatherCache};
use outfitcast::cli::{AppConfig, Cli};
use outfitcast::data::{WeatherClient, WeatherError};
use outfitcast::outfit::compose;
use outfitcast::refresh::refresh;
use outfitcast::report::render;

/// Upper bound on a single forecast request
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Logs go to stderr so they never mix with the report on stdout
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Runs one refresh cycle and prints the result
async fn show<S: Storage>(
    client: &WeatherClient,
    cache: &mut WeatherCache<S>,
    config: &AppConfig,
) -> Result<(), WeatherError> {
    let outcome = refresh(
        client,
        cache,
        config.latitude,
        config.longitude,
        &config.refresh,
    )
    .await?;
    let outfit = compose(&outcome.reading);
    println!("{}", render(&outcome, &outfit, config.temperature_unit));
    Ok(())
}

async fn run<S: Storage>(
    config: AppConfig,
    mut cache: WeatherCache<S>,
) -> Result<(), Box<dyn Error>> {
    let http = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
    let client = WeatherClient::with_client(http).with_wind_unit(config.wind_unit);

    let Some(every) = config.watch else {
        show(&client, &mut cache, &config).await?;
        return Ok(());
    };

    let mut interval = tokio::time::interval(every);
    loop {
        tokio::select! {
            _ = interval.tick() => {
                // Keep watching through failures; the next tick may succeed
                if let Err(e) = show(&client, &mut cache, &config).await {
                    eprintln!("Error: {}", e);
                }
                println!();
            }
            _ = tokio::signal::ctrl_c() => {
                break;
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing();

    let config = match AppConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => Cli::command().error(ErrorKind::ValueValidation, e).exit(),
    };

    let storage = match &config.cache_dir {
        Some(dir) => Some(FileStorage::with_dir(dir.clone())),
        None => FileStorage::new(),
    };

    match storage {
        Some(storage) => run(config, WeatherCache::load(storage)).await,
        None => {
            tracing::warn!(
                "no cache directory available, offline fallback limited to this session"
            );
            run(config, WeatherCache::load(MemoryStorage::new())).await
        }
    }
}
