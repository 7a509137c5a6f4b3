//! # Client configuration: `ledger.toml`
//!
//! Where the REST backend lives and how the signed-in session is persisted.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_uri = "http://localhost:3000"   # json-server style backend
//!
//! [session]
//! storage_key = "userInfo"             # localStorage key for the current user
//! token_secret = "ledger-test-secret"  # HS256 secret for the test JWT
//! token_ttl_secs = 3600
//!
//! [profile]
//! default_image = "src/img/profile/pretty_cabbage.jpg"
//! ```
//!
//! All sections derive `Default`, so a missing or empty file is equivalent to the
//! default configuration. On native targets [`ClientConfig::load`] layers the
//! defaults, an optional `ledger.toml` and `LEDGER_<SECTION>__<KEY>` environment
//! variables (e.g. `LEDGER_API__BASE_URI`).

use serde::{Deserialize, Serialize};

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

/// REST backend settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URI of the backend, without a trailing slash.
    #[serde(default = "default_base_uri")]
    pub base_uri: String,
}

/// Session persistence settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_token_secret")]
    pub token_secret: String,
    /// Lifetime of an issued token. 0 issues tokens that are already expired.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,
}

/// Profile defaults applied when a user has no image of their own.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_profile_image")]
    pub default_image: String,
}

fn default_base_uri() -> String {
    "http://localhost:3000".to_string()
}

fn default_storage_key() -> String {
    "userInfo".to_string()
}

fn default_token_secret() -> String {
    "ledger-test-secret".to_string()
}

fn default_token_ttl() -> u64 {
    60 * 60
}

fn default_profile_image() -> String {
    "src/img/profile/pretty_cabbage.jpg".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_uri: default_base_uri(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            token_secret: default_token_secret(),
            token_ttl_secs: default_token_ttl(),
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            default_image: default_profile_image(),
        }
    }
}

impl ClientConfig {
    /// Builder method to point the client at another backend.
    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.api.base_uri = base_uri.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder method to set the token lifetime.
    pub fn with_token_ttl(mut self, secs: u64) -> Self {
        self.session.token_ttl_secs = secs;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "ledger.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load defaults, then `ledger.toml` (if present), then `LEDGER_*` env vars.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Self::filename())
    }

    /// Like [`ClientConfig::load`] with an explicit config file path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        use config::{Config, Environment, File, FileFormat};

        let config = Config::builder()
            .set_default("api.base_uri", default_base_uri())?
            .set_default("session.storage_key", default_storage_key())?
            .set_default("session.token_secret", default_token_secret())?
            .set_default("session.token_ttl_secs", default_token_ttl())?
            .set_default("profile.default_image", default_profile_image())?
            .add_source(File::with_name(path).format(FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix("LEDGER")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        let base_uri = loaded.api.base_uri.clone();
        Ok(loaded.with_base_uri(base_uri))
    }
}
