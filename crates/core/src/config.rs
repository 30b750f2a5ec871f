use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:9999/graphql";
pub const ENV_PREFIX: &str = "PERFORMER_IMPORT";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub performers: PerformersConfig,
    pub stash: StashConfig,
    pub import: ImportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformersConfig {
    /// Directory whose immediate children are performer folders.
    pub root: String,
    #[serde(default)]
    pub blacklist: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StashConfig {
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    #[serde(default)]
    pub skip_confirmation: bool,
    #[serde(default)]
    pub autotag: bool,
    #[serde(default)]
    pub clear_screen: bool,
}

/// Values applied on top of file and environment sources, typically from the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub root: Option<String>,
    pub endpoint: Option<String>,
    pub blacklist: Option<Vec<String>>,
    pub skip_confirmation: Option<bool>,
    pub autotag: Option<bool>,
    pub clear_screen: Option<bool>,
}

pub fn load(path: Option<&str>) -> anyhow::Result<AppConfig> {
    load_with(path, &Overrides::default())
}

pub fn load_with(path: Option<&str>, overrides: &Overrides) -> anyhow::Result<AppConfig> {
    let mut settings = config::Config::builder()
        .set_default("stash.endpoint", DEFAULT_ENDPOINT)?
        .set_default("performers.blacklist", vec!["misc", "studios"])?
        .set_default("import.skip_confirmation", false)?
        .set_default("import.autotag", true)?
        .set_default("import.clear_screen", true)?;
    if let Some(p) = path {
        settings = settings.add_source(config::File::with_name(p));
    } else {
        settings = settings.add_source(config::File::with_name("config/default").required(false));
    }
    settings = settings.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("performers.blacklist"),
    );
    settings = settings
        .set_override_option("performers.root", overrides.root.clone())?
        .set_override_option("stash.endpoint", overrides.endpoint.clone())?
        .set_override_option("performers.blacklist", overrides.blacklist.clone())?
        .set_override_option("import.skip_confirmation", overrides.skip_confirmation)?
        .set_override_option("import.autotag", overrides.autotag)?
        .set_override_option("import.clear_screen", overrides.clear_screen)?;
    let cfg = settings.build()?;
    Ok(cfg.try_deserialize()?)
}
