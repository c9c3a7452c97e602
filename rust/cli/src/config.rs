use serde::{Deserialize, Serialize};
use std::fs;
use tilemerge_engine::game::AfterTerminal;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub after_terminal: AfterTerminal,
    pub max_moves: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub after_terminal: ValueSource,
    pub max_moves: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            after_terminal: ValueSource::Default,
            max_moves: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

/// Upper bound on directional inputs per simulated game.
pub const DEFAULT_MAX_MOVES: u32 = 10_000;

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            after_terminal: AfterTerminal::Continue,
            max_moves: DEFAULT_MAX_MOVES,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("TILEMERGE_CONFIG")
        && !path.is_empty()
    {
        debug!(%path, "loading config file");
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.after_terminal {
            cfg.after_terminal = parse_policy(&v)?;
            sources.after_terminal = ValueSource::File;
        }
        if let Some(v) = f.max_moves {
            cfg.max_moves = v;
            sources.max_moves = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("TILEMERGE_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(policy) = std::env::var("TILEMERGE_AFTER_TERMINAL")
        && !policy.is_empty()
    {
        cfg.after_terminal = parse_policy(&policy)?;
        sources.after_terminal = ValueSource::Env;
    }
    if let Ok(moves) = std::env::var("TILEMERGE_MAX_MOVES")
        && !moves.is_empty()
    {
        cfg.max_moves = moves
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid max_moves".into()))?;
        sources.max_moves = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    after_terminal: Option<String>,
    #[serde(default)]
    max_moves: Option<u32>,
}

fn parse_policy(s: &str) -> Result<AfterTerminal, ConfigError> {
    s.parse()
        .map_err(|e| ConfigError::Invalid(format!("Invalid after_terminal: {}", e)))
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.max_moves == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: max_moves must be >0".into(),
        ));
    }
    Ok(())
}
