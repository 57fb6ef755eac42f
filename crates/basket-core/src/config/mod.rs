//! Configuration system for basket.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod basket_config;
pub mod filter_config;
pub mod mining_config;
pub mod rule_config;

pub use basket_config::BasketConfig;
pub use filter_config::FilterConfig;
pub use mining_config::MiningConfig;
pub use rule_config::RuleConfig;
