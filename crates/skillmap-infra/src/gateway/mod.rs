//! Auth gateway implementations.

mod simulated;

pub use simulated::{SimulatedAuthGateway, SimulatedGatewayConfig};

#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use self::http::{HttpAuthGateway, HttpGatewayConfig};
