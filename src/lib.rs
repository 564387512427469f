pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use frameworks::config::{Settings, http_port};
pub use frameworks::server::{build_state, run, run_with_config};
