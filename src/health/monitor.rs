//! Health monitor — the periodic polling loop.
//!
//! # Responsibilities
//! - Re-discover the watched service's node set every tick
//! - Probe every node and feed outcomes into the per-node state machine
//! - Emit one health event per node per cycle
//! - Evict state for nodes no longer in the discovery view
//!
//! # Design Decisions
//! - The state map is owned by the loop alone; no other task reads or
//!   writes it, so updates need no locking
//! - Probes within a cycle run concurrently, each bounded by its own
//!   timeout, so one slow node cannot starve its siblings
//! - Every steady-state failure (discovery error, probe failure, empty
//!   view) is absorbed into per-cycle logging; only shutdown stops the loop

use std::collections::HashMap;
use std::time::Instant;

use futures_util::future::join_all;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::time::{self, MissedTickBehavior};

use crate::config::MonitorConfig;
use crate::health::events::{HealthEvent, HealthObserver};
use crate::health::prober::Prober;
use crate::health::state::NodeHealthState;
use crate::observability::metrics;
use crate::registry::{DiscoveryError, Node, RegistryClient};

/// Watches one service and classifies the health of its instances.
pub struct HealthMonitor {
    registry: RegistryClient,
    prober: Prober,
    config: MonitorConfig,
    observer: Arc<dyn HealthObserver>,
    /// Per-node failure state, keyed by node id. Exclusively owned here.
    states: HashMap<String, NodeHealthState>,
}

impl HealthMonitor {
    pub fn new(
        registry: RegistryClient,
        prober: Prober,
        config: MonitorConfig,
        observer: Arc<dyn HealthObserver>,
    ) -> Self {
        Self {
            registry,
            prober,
            config,
            observer,
            states: HashMap::new(),
        }
    }

    /// Run the poll loop until the shutdown signal fires.
    ///
    /// An in-flight cycle always finishes before the loop exits.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            service = %self.config.watched_service,
            poll_interval_secs = self.config.poll_interval_secs,
            failure_threshold = self.config.failure_threshold,
            jitter_window_secs = self.config.jitter_window_secs,
            "Health monitor starting"
        );

        let mut ticker = time::interval(self.config.poll_interval());
        // Slow cycles must not cause tick bursts afterwards.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // Consume the immediate first tick so the first cycle runs one
        // interval after startup.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.run_cycle().await;
                }
                _ = shutdown.recv() => {
                    tracing::info!("Health monitor received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }

    /// Execute one poll cycle: discover, probe, classify, evict.
    pub async fn run_cycle(&mut self) {
        let nodes = match self.registry.discover(&self.config.watched_service).await {
            Ok(view) => view.nodes,
            Err(DiscoveryError::NotFound(service)) => {
                tracing::warn!(
                    service = %service,
                    "No instances registered, nothing to probe this cycle"
                );
                Vec::new()
            }
            Err(e @ DiscoveryError::Unavailable(_)) => {
                tracing::warn!(error = %e, "Discovery failed, retrying next cycle");
                return;
            }
        };

        let prober = &self.prober;
        let outcomes = join_all(
            nodes
                .iter()
                .map(|node| async move { (node, prober.probe(node).await) }),
        )
        .await;

        // State updates are strictly serial; per-node results are
        // independent of iteration order because state is keyed by node id.
        let now = Instant::now();
        for (node, outcome) in outcomes {
            let state = self
                .states
                .entry(node.id.clone())
                .or_insert_with(|| NodeHealthState::new(now));

            let status = state.observe(
                outcome.is_failure(),
                now,
                self.config.failure_threshold,
                self.config.jitter_window(),
            );

            self.observer.on_event(&HealthEvent {
                node: node.clone(),
                status,
                consecutive_failures: state.consecutive_failures,
            });
            metrics::record_node_health(&node.id, status);
        }

        self.evict_departed(&nodes);
    }

    /// Drop state entries for node ids absent from the latest view, so the
    /// map cannot grow without bound as nodes churn.
    fn evict_departed(&mut self, nodes: &[Node]) {
        self.states
            .retain(|id, _| nodes.iter().any(|node| &node.id == id));
    }

    /// Number of node ids currently tracked.
    pub fn tracked_nodes(&self) -> usize {
        self.states.len()
    }
}
