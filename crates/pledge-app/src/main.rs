//! `pledge`: resuelve el tier de aporte de un álbum desde la terminal.
//!
//! Cablea los adapters (álbumes en JSON, checkout por stdout) en el
//! servicio del núcleo, como lo haría la página que muestra el álbum.

mod config;
mod infrastructure;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pledge_core::domain::{AlbumId, ContributionState, PlaqueImages};
use pledge_core::services::ContributionService;
use pledge_config::{PledgePaths, TomlConfigBackend};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LibraryConfig, load_plaques};
use infrastructure::checkout::StdoutCheckout;
use infrastructure::json_source::JsonAlbumSource;

type ConcreteContributionService = ContributionService<JsonAlbumSource, StdoutCheckout>;

#[derive(Parser, Debug)]
#[command(name = "pledge")]
#[command(about = "Resolve the reward plaque for an album contribution")]
#[command(version)]
struct Args {
  /// JSON album library (overrides `[library].path`)
  #[arg(long, global = true, env = "PLEDGE_LIBRARY")]
  library: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List the album's tiers, their parsed ranges and the global bounds
  Catalog {
    #[arg(long)]
    album: AlbumId,
  },
  /// Select an amount and show the tier it resolves to
  Resolve {
    #[arg(long)]
    album: AlbumId,
    /// Typed amount; values below 1 are rejected, not clamped
    #[arg(long, allow_negative_numbers = true)]
    amount: f64,
  },
  /// Like `resolve`, then hand the request to the payment collaborator
  Checkout {
    #[arg(long)]
    album: AlbumId,
    /// Typed amount; values below 1 are rejected, not clamped
    #[arg(long, allow_negative_numbers = true)]
    amount: f64,
  },
}

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "pledge=info,pledge_core=info".into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();

  let args = Args::parse();

  let (library, plaques) = settings(args.library)?;

  info!("album library: {}", library.display());

  let mut service: ConcreteContributionService =
    ContributionService::new(JsonAlbumSource::new(library), StdoutCheckout);

  match args.command {
    Command::Catalog { album } => {
      load(&mut service, &album).await?;
      print_catalog(&service);
    }
    Command::Resolve { album, amount } => {
      load(&mut service, &album).await?;
      select(&mut service, amount)?;
      print_resolution(&service, &plaques);
    }
    Command::Checkout { album, amount } => {
      load(&mut service, &album).await?;
      select(&mut service, amount)?;
      print_resolution(&service, &plaques);
      service.checkout(&plaques).await.context("checkout failed")?;
    }
  }

  Ok(())
}

/// Ruta de la biblioteca y registro de placas.
///
/// Con `--library` la app funciona aunque no haya directorios de config:
/// las placas quedan en sus valores por defecto.
fn settings(library_override: Option<PathBuf>) -> Result<(PathBuf, PlaqueImages)> {
  let paths = match PledgePaths::detect() {
    Ok(paths) => paths,
    Err(e) => match library_override {
      Some(library) => {
        warn!("config unavailable ({e}), using built-in plaque images");
        return Ok((library, PlaqueImages::default()));
      }
      None => return Err(e).context("failed to resolve config directories"),
    },
  };
  let backend = TomlConfigBackend::new(paths.clone());

  let library = match library_override {
    Some(path) => path,
    None => LibraryConfig::load(&backend).context("failed to load [library] config")?.library_path(&paths),
  };
  let plaques = load_plaques(&backend).context("failed to load [plaques] config")?;

  Ok((library, plaques))
}

async fn load(service: &mut ConcreteContributionService, album: &AlbumId) -> Result<()> {
  service.load_album(album).await.with_context(|| format!("failed to load album {album}"))
}

fn select(service: &mut ConcreteContributionService, amount: f64) -> Result<()> {
  service.select_amount(amount).with_context(|| format!("amount {amount} rejected"))?;
  Ok(())
}

fn print_catalog(service: &ConcreteContributionService) {
  let catalog = service.catalog();
  let (min, max) = catalog.bounds();
  let (slider_min, slider_max) = service.slider_bounds();

  if let Some(album) = service.album() {
    println!("{} by {}", album.title, album.artist_name);
  }
  for entry in catalog.entries() {
    let range = match entry.range {
      Some(range) => range.to_string(),
      None => format!("unparseable ({:?})", entry.definition.range_text),
    };
    println!("  {:<16} {:<24} {}", entry.definition.kind, range, entry.definition.image_ref);
  }
  println!("bounds: [{min}, {max}]  slider: [{slider_min}, {slider_max}]");
}

fn print_resolution(service: &ConcreteContributionService, plaques: &PlaqueImages) {
  let tier = service.resolved_tier();
  let cover = service.album().map(|a| a.cover_ref.as_str()).unwrap_or_default();
  let mode = match service.state() {
    ContributionState::Slider { .. } => "slider",
    ContributionState::Custom { .. } => "custom",
  };

  println!("amount: {} ({mode})", service.amount());
  println!("tier:   {}", tier.kind);
  println!("image:  {}", tier.image_ref(plaques, cover));
}
