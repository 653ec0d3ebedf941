use std::path::PathBuf;

use config::File;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::Error;

/// Loads a config from an optional `NAME.{toml,json,yaml}` file in `dir`,
/// overridden by `ENV_PREFIX_*` environment variables.
pub trait NewForConfig
where
    Self: Sized + DeserializeOwned + Validate, {
    const NAME: &'static str;
    const ENV_PREFIX: &'static str;

    fn new<S: AsRef<str>>(dir: Option<S>) -> crate::Result<Self> {
        let file_name = format!(
            "{}",
            PathBuf::from(
                dir.map(|s| String::from(s.as_ref()))
                    .unwrap_or("./".into())
            )
            .join(Self::NAME)
            .display()
        );

        tracing::debug!(file_name, prefix = Self::ENV_PREFIX, "loading config");

        let this: Self = config::ConfigBuilder::<config::builder::DefaultState>::default()
            .add_source(File::with_name(&file_name).required(false))
            .add_source(
                config::Environment::with_prefix(Self::ENV_PREFIX)
                    .try_parsing(true),
            )
            .build()
            .map_err(Error::from_with_source_init(file_name.clone()))?
            .try_deserialize()
            .map_err(Error::from_with_source_init(file_name.clone()))?;

        this.validate()
            .map_err(Error::from_with_source_init(file_name.clone()))?;

        Ok(this)
    }
}

fn default_max_depth() -> usize {
    ParseConfig::DEFAULT_MAX_DEPTH
}

/// Tunables for a single parse.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq, Validate)]
pub struct ParseConfig {
    /// Deepest container nesting accepted before the parse is rejected.
    #[serde(default = "default_max_depth")]
    #[validate(range(min = 1, max = 4096))]
    pub max_depth: usize,
}

impl ParseConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 64;
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

impl NewForConfig for ParseConfig {
    const NAME: &'static str = "vartype";
    const ENV_PREFIX: &'static str = "VARTYPE";
}
