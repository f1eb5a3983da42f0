#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![deny(unsafe_code, unused_mut, unused_imports, unused_attributes)]

//! Загрузка конфигурации приложения из TOML-файлов.
//!
//! Функциональность этого модуля активируется фичей `app_config_serde`.

#[cfg(feature = "app_config_serde")]
use serde::Deserialize;
#[cfg(feature = "app_config_serde")]
use std::path::Path;
#[cfg(feature = "app_config_serde")]
use crate::error::UtilsError;
#[cfg(feature = "app_config_serde")]
use tracing::warn;

/// Глобальная конфигурация приложения.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "app_config_serde", derive(Deserialize))]
pub struct AppConfig {
    /// Конфигурация, связанная с моделью.
    #[cfg_attr(feature = "app_config_serde", serde(default))]
    pub model_config: ModelConfigSub,

    /// Конфигурация логирования.
    #[cfg_attr(feature = "app_config_serde", serde(default))]
    pub logging_config: LoggingConfigSub,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_config: ModelConfigSub::default(),
            logging_config: LoggingConfigSub::default(),
        }
    }
}

/// Конфигурация, связанная с моделью (под-конфигурация для `AppConfig`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "app_config_serde", derive(Deserialize))]
pub struct ModelConfigSub {
    /// Имя варианта модели (например, "vit-base-16").
    #[cfg_attr(feature = "app_config_serde", serde(default = "default_model_preset_app"))]
    pub preset: String,
    /// Количество классов классификатора; `None` означает значение пресета.
    #[cfg_attr(feature = "app_config_serde", serde(default))]
    pub num_classes: Option<usize>,
    /// Опциональный путь к JSON-файлу с метаданными модели (config.json).
    #[cfg_attr(feature = "app_config_serde", serde(default))]
    pub model_info_path: Option<String>,
}

fn default_model_preset_app() -> String {
    "vit-base-16".to_string()
}

impl Default for ModelConfigSub {
    fn default() -> Self {
        Self {
            preset: default_model_preset_app(),
            num_classes: None,
            model_info_path: None,
        }
    }
}

/// Специфичная конфигурация логирования (под-конфигурация для `AppConfig`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "app_config_serde", derive(Deserialize))]
pub struct LoggingConfigSub {
    /// Уровень логирования.
    #[cfg_attr(feature = "app_config_serde", serde(default = "default_log_level_app"))]
    pub level: String,
    /// Директория для файлов логов (опционально).
    #[cfg_attr(feature = "app_config_serde", serde(default))]
    pub log_dir: Option<String>,
}

fn default_log_level_app() -> String {
    "info".to_string()
}

impl Default for LoggingConfigSub {
    fn default() -> Self {
        Self {
            level: default_log_level_app(),
            log_dir: None,
        }
    }
}

#[cfg(feature = "app_config_serde")]
impl AppConfig {
    /// Загружает конфигурацию приложения из TOML файла.
    /// Если файл не найден, возвращается конфигурация по умолчанию.
    ///
    /// # Arguments
    /// * `file_path` - Путь к TOML файлу конфигурации.
    ///
    /// # Errors
    /// Возвращает `UtilsError::Io` при ошибках чтения файла или `UtilsError::Config`
    /// при ошибках парсинга TOML.
    pub fn load_from_toml(file_path: &Path) -> Result<Self, UtilsError> {
        if !file_path.exists() {
            warn!(
                "AppConfig file not found at {:?}, using default configuration.",
                file_path
            );
            return Ok(Self::default());
        }
        let config_str = std::fs::read_to_string(file_path)?;
        toml::from_str(&config_str).map_err(|e| {
            UtilsError::Config(format!(
                "Failed to parse AppConfig from TOML at {:?}: {}",
                file_path, e
            ))
        })
    }
}
