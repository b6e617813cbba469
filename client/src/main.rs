//! Inventory client - terminal front end
//!
//! Reads commands line by line from stdin and renders the active screen
//! after each one.

use inventory_client::commands::{self, Command};
use inventory_client::{Config, HttpInventoryApi, Shell};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    // Initialize tracing; stdout belongs to the screens, logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting inventory client");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Inventory API: {}", config.api.base_url);

    let api = HttpInventoryApi::new(&config.api.base_url)?;
    let mut shell = Shell::start(api).await;

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print(&mut stdout, &commands::render_active(&shell)).await?;
    print(&mut stdout, "Escriba 'ayuda' para ver los comandos.").await?;

    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                print(&mut stdout, &message).await?;
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        let output = commands::execute(&mut shell, command).await;
        print(&mut stdout, &output).await?;
    }

    tracing::info!("Inventory client stopped");
    Ok(())
}

async fn print(stdout: &mut tokio::io::Stdout, text: &str) -> std::io::Result<()> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.write_all(b"\n\n").await?;
    stdout.flush().await
}
