pub mod divisions;
pub mod settings;

pub use divisions::{get_division_sources, DivisionSource};
pub use settings::{AppConfig, ScraperSettings, StorageSettings};
