//! Concept search gRPC server binary.

use std::sync::Arc;

use concept_search_service::proto::concept_search_server::ConceptSearchServer;
use concept_search_service::{SearchServer, ServerConfig};
use concept_search_store::{load_directory, TerminologyStore};
use tonic::transport::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let paging = config.paging();

    tracing::info!("Loading terminologies from: {}", config.data_path.display());

    let store = TerminologyStore::new();
    let stats = load_directory(&store, &config.data_path)?;

    tracing::info!(
        "Loaded {} concepts in {} versions of {} systems ({} ms)",
        stats.concepts,
        stats.versions,
        stats.systems,
        stats.load_time_ms
    );
    let searchable = store.current_concept_count()?;
    tracing::info!("Current versions hold {} searchable concepts", searchable);

    let server = SearchServer::new(Arc::new(store), paging);

    let addr = config.socket_addr()?;
    tracing::info!("Starting concept search gRPC server on {}", addr);
    tracing::info!(
        "Page size {} by default, {} at most",
        paging.default_page_size,
        paging.max_page_size
    );

    Server::builder()
        .add_service(ConceptSearchServer::new(server))
        .serve(addr)
        .await?;

    Ok(())
}
