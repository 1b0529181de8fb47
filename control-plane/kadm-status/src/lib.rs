pub mod classifier;
pub mod config;
pub mod connection;
pub mod health;
pub mod quorum;

pub use classifier::{Partition, partition};
pub use connection::resolve_connection;
pub use health::{
    ClusterStatus, NodeSetStatus, resolve_cluster, resolve_health,
};
pub use quorum::NodeSetCounts;

// Unit tests for the combination table live in a sibling module file
#[cfg(test)]
mod health_tests;

use tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

pub fn init_tracing(default_env: &str) {
    let filter = EnvFilter::builder()
        .with_env_var("RUST_LOG")
        .from_env_lossy()
        .add_directive(
            default_env
                .parse()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        );

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .try_init();
}
