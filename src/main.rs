use clap::Parser;
use ingredient_graph::{
    api::{handlers::AppState, routes},
    cli::{commands, Cli, Commands},
    config::Settings,
    dataset,
    graph::{IngredientNetwork, SharedNetwork},
    Error, Result,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Logs go to stderr so query output on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ingredient_graph=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration, CLI flags take precedence over the environment
    let mut settings = Settings::from_env()?;
    if let Some(dataset) = cli.dataset {
        settings.dataset.path = dataset;
    }
    if let Some(min) = cli.min_cooccurrence {
        settings.graph.min_cooccurrence = min;
    }
    if let Some(stopwords) = cli.stopwords {
        settings.dataset.stopwords_path = Some(stopwords);
    }
    settings.validate()?;

    let network = load_network(&settings)?;

    match cli.command {
        Commands::Related { ingredient, limit } => {
            commands::related(&network, &ingredient, limit.unwrap_or(settings.graph.top_n));
        }
        Commands::Path { from, to } => {
            commands::path(&network, &from, &to);
        }
        Commands::MostConnected => {
            commands::most_connected(&network);
        }
        Commands::Stats { ingredient } => {
            commands::stats(&network, &ingredient);
        }
        Commands::Summary => {
            commands::summary(&network);
        }
        Commands::Explore => {
            let stdin = std::io::stdin();
            commands::explore(
                &network,
                settings.graph.top_n,
                stdin.lock(),
                std::io::stdout(),
            )?;
        }
        Commands::Serve { port, host } => {
            serve(settings, network, port, host).await?;
        }
    }

    Ok(())
}

fn load_network(settings: &Settings) -> Result<IngredientNetwork> {
    let normalizer = settings.normalizer()?;
    info!(
        "Building graph from {} ({} stopwords)",
        settings.dataset.path.display(),
        normalizer.stopword_count()
    );

    dataset::build_network(
        &settings.dataset.path,
        normalizer,
        settings.graph.min_cooccurrence,
    )
}

async fn serve(
    mut settings: Settings,
    network: IngredientNetwork,
    port: Option<u16>,
    host: Option<String>,
) -> Result<()> {
    // Override settings with CLI arguments
    if let Some(port) = port {
        settings.server.port = port;
    }
    if let Some(host) = host {
        settings.server.host = host;
    }
    settings.validate()?;

    let state = AppState {
        network: SharedNetwork::new(network),
        settings: settings.clone(),
    };
    let app = routes::create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on {}", addr);
    info!("  GET  /api/summary");
    info!("  GET  /api/ingredients/:name/related");
    info!("  GET  /api/ingredients/:name/stats");
    info!("  GET  /api/path?from=&to=");
    info!("  GET  /api/most-connected");
    info!("  POST /api/rebuild");

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Internal(format!("Server error: {e}")))?;

    info!("Shutting down...");
    Ok(())
}
