//! Mesh agent binary.
//!
//! Startup order: logging → config → self-registration (fatal on failure)
//! → liveness endpoint → metrics exporter → one-shot resolve demonstration
//! → health monitor loop → signal-driven graceful shutdown.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use mesh_agent::config::{load_config, AgentConfig};
use mesh_agent::health::{HealthMonitor, LogObserver, Prober};
use mesh_agent::http::LivenessServer;
use mesh_agent::lifecycle::{signals, Shutdown};
use mesh_agent::observability;
use mesh_agent::registry::{RegistrationSpec, RegistryClient};
use mesh_agent::selector::{Random, Selector};

#[derive(Parser)]
#[command(name = "mesh-agent")]
#[command(about = "Service-mesh client: registration, discovery, health monitoring", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "mesh-agent.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::logging::init();

    tracing::info!("mesh-agent v0.1.0 starting");

    let cli = Cli::parse();
    let config = if cli.config.exists() {
        load_config(&cli.config)?
    } else {
        tracing::warn!(
            path = %cli.config.display(),
            "Config file not found, running on defaults"
        );
        AgentConfig::default()
    };

    tracing::info!(
        service_id = %config.service.id,
        service_name = %config.service.name,
        registry = %config.registry.address,
        watched_service = %config.monitor.watched_service,
        "Configuration loaded"
    );

    // Self-registration. Without it the process is not part of the mesh,
    // so failure here is fatal.
    let registry = RegistryClient::new(&config.registry.address);
    registry
        .register(&RegistrationSpec {
            service_id: config.service.id.clone(),
            service_name: config.service.name.clone(),
            address: config.service.bind_address.clone(),
            port: config.service.bind_port,
            check_path: config.monitor.probe_path.clone(),
            check_interval: config.registry.register_interval.clone(),
            check_timeout: config.registry.register_timeout.clone(),
        })
        .await?;

    let shutdown = Shutdown::new();

    // Liveness endpoint for the registry's own checker.
    let liveness =
        LivenessServer::bind(&config.service.bind_address, config.service.bind_port).await?;
    let liveness_rx = shutdown.subscribe();
    let liveness_task = tokio::spawn(async move {
        if let Err(e) = liveness.run(liveness_rx).await {
            tracing::error!(error = %e, "Liveness endpoint terminated");
        }
    });

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => observability::metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    // One-shot discovery-and-select demonstration of the request path.
    resolve_once(&registry, &config.monitor.watched_service, &Random::new()).await;

    // The health monitor owns the per-node state map for its lifetime.
    let prober = Prober::new(&config.monitor.probe_path, config.monitor.probe_timeout());
    let monitor = HealthMonitor::new(
        registry,
        prober,
        config.monitor.clone(),
        Arc::new(LogObserver),
    );
    let monitor_task = tokio::spawn(monitor.run(shutdown.subscribe()));

    signals::shutdown_requested().await;
    shutdown.trigger();

    let _ = monitor_task.await;
    let _ = liveness_task.await;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Discover a service, pick one node, and log the URL a request would
/// target. Failures here are recoverable and only logged.
async fn resolve_once(registry: &RegistryClient, service_name: &str, selector: &dyn Selector) {
    let view = match registry.discover(service_name).await {
        Ok(view) => view,
        Err(e) => {
            tracing::warn!(service = %service_name, error = %e, "Resolve failed");
            return;
        }
    };

    match selector.select(&view.nodes) {
        Ok(node) => {
            tracing::info!(
                service = %service_name,
                node_id = %node.id,
                url = %format!("http://{}:{}/", node.address, node.port),
                "Resolved service to node"
            );
        }
        Err(e) => {
            tracing::warn!(service = %service_name, error = %e, "Selection failed");
        }
    }
}
