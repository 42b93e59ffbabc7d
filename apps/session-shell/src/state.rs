//! Shell state - the store and facade wired to a gateway.

use std::sync::Arc;

use skillmap_core::ports::AuthGateway;
use skillmap_infra::{SimulatedAuthGateway, SimulatedGatewayConfig};
use skillmap_session::{SessionFacade, SessionStore};

use crate::config::AppConfig;

/// Shared shell state.
#[derive(Clone)]
pub struct AppState {
    pub store: SessionStore,
    pub facade: SessionFacade,
}

impl AppState {
    /// Build the state with the appropriate gateway implementation.
    pub fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "http")]
        let gateway: Arc<dyn AuthGateway> = {
            if let Some(api_url) = &config.api_url {
                tracing::info!(url = %api_url, "Using HTTP auth gateway");
                Arc::new(skillmap_infra::HttpAuthGateway::new(
                    skillmap_infra::HttpGatewayConfig {
                        base_url: api_url.clone(),
                        ..Default::default()
                    },
                ))
            } else {
                tracing::info!("SKILLMAP_API_URL not set. Using the simulated auth gateway.");
                Arc::new(simulated_gateway(config))
            }
        };

        #[cfg(not(feature = "http"))]
        let gateway: Arc<dyn AuthGateway> = {
            tracing::info!("Built without the http feature - using the simulated auth gateway");
            Arc::new(simulated_gateway(config))
        };

        let store = SessionStore::new();
        let facade = SessionFacade::new(store.clone(), gateway);

        tracing::info!("Shell state initialized");

        Self { store, facade }
    }
}

fn simulated_gateway(config: &AppConfig) -> SimulatedAuthGateway {
    SimulatedAuthGateway::new(SimulatedGatewayConfig {
        latency: config.simulated_latency,
        ..SimulatedGatewayConfig::default()
    })
}
