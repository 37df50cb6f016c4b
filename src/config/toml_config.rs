use crate::core::command::RankingStrategy;
use crate::core::session::SessionSettings;
use crate::domain::ports::{ConflictScope, RegistrySettings};
use crate::utils::error::{BookingError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound for `registry.first_booking_id`, far enough below `u64::MAX`
/// that the id counter cannot run out in practice.
pub const MAX_FIRST_BOOKING_ID: u64 = 1_000_000_000_000_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    pub registry: RegistryConfig,
    pub slots: SlotConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub default_rating: u32,
    pub first_booking_id: u64,
    pub reject_duplicate_names: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_rating: 4,
            first_booking_id: 1001,
            reject_duplicate_names: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotConfig {
    pub require_one_hour: bool,
    pub conflict_scope: ConflictScope,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub default_strategy: String,
    pub banner: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_strategy: "start_time".to_string(),
            banner: true,
        }
    }
}

impl BookingConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BookingError::ConfigParse {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CLINIC_FIRST_BOOKING_ID})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BookingError::ConfigParse {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            default_strategy: RankingStrategy::from(self.session.default_strategy.as_str()),
            banner: self.session.banner,
        }
    }
}

impl RegistrySettings for BookingConfig {
    fn default_rating(&self) -> u32 {
        self.registry.default_rating
    }

    fn first_booking_id(&self) -> u64 {
        self.registry.first_booking_id
    }

    fn reject_duplicate_names(&self) -> bool {
        self.registry.reject_duplicate_names
    }

    fn require_one_hour(&self) -> bool {
        self.slots.require_one_hour
    }

    fn conflict_scope(&self) -> ConflictScope {
        self.slots.conflict_scope
    }
}

impl Validate for BookingConfig {
    fn validate(&self) -> Result<()> {
        validate_range("registry.default_rating", self.registry.default_rating, 1, 5)?;
        validate_range(
            "registry.first_booking_id",
            self.registry.first_booking_id,
            1,
            MAX_FIRST_BOOKING_ID,
        )?;
        validate_non_empty_string("session.default_strategy", &self.session.default_strategy)?;
        Ok(())
    }
}
