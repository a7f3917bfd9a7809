pub mod config;
pub mod error;
pub mod logging;
pub mod provider;
pub mod stub;

pub use bigdecimal::BigDecimal;
pub use config::ProviderConfig;
pub use error::{RandomError, Result};
pub use provider::{global, RandomValueProvider};
pub use stub::{ResultHandle, StubbedFuture};
