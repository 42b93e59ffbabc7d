//! # SkillMap Infra
//!
//! Concrete implementations of the ports defined in `skillmap-core`.
//!
//! ## Feature Flags
//!
//! - `http` (default) - reqwest-backed gateway for a real auth backend
//!
//! The simulated gateway is always available; it stands in for the backend
//! until one exists and gives tests deterministic behavior.

pub mod gateway;

pub use gateway::{SimulatedAuthGateway, SimulatedGatewayConfig};

#[cfg(feature = "http")]
pub use gateway::{HttpAuthGateway, HttpGatewayConfig};
