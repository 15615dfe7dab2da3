//! ADS admin panel client
//!
//! Main application entry point

use std::path::{Path, PathBuf};
use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::info;

use ads_admin::{
    config::Settings,
    services::ServiceFactory,
    state::{AdminPage, CreateEventForm, ImageFile, UploadTarget},
    utils::logging,
};

#[derive(Parser)]
#[command(name = "ads-admin", version, about = "ADS event management admin panel")]
struct Cli {
    /// Configuration file (extension optional)
    #[arg(short, long, default_value = "config")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render an event's detail panel and user panels
    Details {
        event_id: String,
    },
    /// Upload images and publish an event described by a TOML form
    Publish {
        form: PathBuf,
        /// Event thumbnail image
        #[arg(long)]
        thumbnail: Option<PathBuf>,
        /// Presenter logo image
        #[arg(long)]
        logo: Option<PathBuf>,
    },
    /// Revoke a published event
    Revoke {
        event_id: String,
    },
    /// Print the admin detail URL of an event
    Open {
        event_id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::from_file(&cli.config).context("failed to load configuration")?;
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", ads_admin::info());

    let services = ServiceFactory::new(settings)?;
    let mut page = AdminPage::new();

    let outcome = run(cli.command, &services, &mut page).await;

    for alert in page.take_alerts() {
        eprintln!("ALERT: {}", alert);
    }

    outcome
}

async fn run(command: Command, services: &ServiceFactory, page: &mut AdminPage) -> anyhow::Result<()> {
    match command {
        Command::Details { event_id } => {
            let report = services.details.load_event_details(page, &event_id).await?;
            if let Some(main) = &page.main {
                println!("{}", main);
            }
            for panel in &page.aside {
                println!("{}", panel);
            }
            info!(
                event_id = %report.event.id,
                panels = report.panels.iter().filter(|p| p.rendered()).count(),
                "Event details rendered"
            );
        }
        Command::Publish { form, thumbnail, logo } => {
            let mut state = CreateEventForm::default();
            services.publisher.open_create_dialog(page, &mut state);

            let text = tokio::fs::read_to_string(&form)
                .await
                .with_context(|| format!("failed to read form {}", form.display()))?;
            state = toml::from_str(&text).context("invalid event form")?;

            for (target, path) in [
                (UploadTarget::Thumbnail, thumbnail),
                (UploadTarget::PresenterLogo, logo),
            ] {
                let Some(path) = path else { continue };
                state.slot_mut(target).select(load_image(&path).await?);
                if services.publisher.upload_image(page, &mut state, target).await.is_none() {
                    bail!("{} upload failed", target.name());
                }
            }

            match services.publisher.publish_event(page, &state).await {
                Some(event) => {
                    for row in &page.events_table {
                        println!("{}", row.html);
                    }
                    info!(event_id = %event.id, "Event published");
                }
                None => bail!("publishing failed"),
            }
        }
        Command::Revoke { event_id } => {
            if !services.publisher.revoke_event(page, &event_id).await {
                bail!("revoking event {} failed", event_id);
            }
        }
        Command::Open { event_id } => {
            services.publisher.show_details(page, &event_id)?;
            for url in &page.opened_windows {
                println!("{}", url);
            }
        }
    }

    Ok(())
}

/// Read an image from disk for upload
async fn load_image(path: &Path) -> anyhow::Result<ImageFile> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read image {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    let mime = match path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase).as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    };

    Ok(ImageFile {
        file_name,
        mime: mime.to_string(),
        bytes,
    })
}
