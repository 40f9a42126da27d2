pub mod app_config;
pub mod categories;
pub mod config;
pub mod error;
pub mod inventory;
pub mod store;

pub use app_config::AppConfig;
pub use categories::{load_categories, CategoriesFile};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, StoreError};
pub use inventory::{diff_inventory, Changes, Direction, Inventory, StockChange};
pub use store::{PriorState, SnapshotStore};
