mod loader;
mod model;

pub use loader::{CONFIG_FILE_NAME, IGNORE_FILE_NAME, discover_upward, load_config_file};
pub use model::{BannedPhrases, ConfigFile, LineLengthConfig, RuleConfiguration};
