pub mod catalog;
pub mod decoder;
pub mod fetcher;
pub mod reporter;
pub mod sorter;

pub use crate::domain::model::{Category, Pet, Tag};
pub use crate::domain::ports::{CatalogSettings, HttpResponse, HttpSource};
pub use crate::utils::error::Result;
