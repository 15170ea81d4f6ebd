//! Rise - terminal entry point.

use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rise_player::{console, infrastructure::settings::Settings, App};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Logs go to stderr so they never interleave with the transcript on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rise_player=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Rise");

    let settings = Settings::from_env()?;
    let app = App::in_memory(&settings)?;

    console::run(
        app.session.clone(),
        BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
    )
    .await?;

    tracing::info!("Goodbye");
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }

    // Then whatever sits next to the working directory.
    let _ = dotenvy::dotenv();
}
