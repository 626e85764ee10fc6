pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::ReqwestSource;
pub use app::console::{Command, Console};
pub use config::ConsoleSettings;
pub use crate::core::catalog::{CategoryListing, PetCatalog};
pub use domain::model::{Category, Pet, Tag};
pub use utils::error::{PetStoreError, Result};
