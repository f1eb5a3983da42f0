#![warn(
    missing_docs, // Предупреждать, если публичные элементы не документированы.
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used, // Предупреждать об использовании .unwrap()
    clippy::expect_used  // Предупреждать об использовании .expect()
)]
#![deny(
    unsafe_code,        // Запретить использование unsafe блоков.
    unused_mut,         // Запретить неиспользуемые изменяемые переменные.
    unused_imports,     // Запретить неиспользуемые импорты.
    unused_attributes   // Запретить неиспользуемые атрибуты.
)]

//! `utils_crate` предоставляет обработку ошибок, инициализацию логирования
//! и загрузку конфигурации для проекта ViT-классификатора изображений.
//!
//! Этот крейт спроектирован так, чтобы быть модульным, позволяя другим частям
//! проекта выборочно включать необходимую функциональность через систему фич (features).
//!
//! # Основные модули:
//!
//! - [`error`]: Определяет общий тип ошибки `UtilsError` для всего крейта.
//! - [`logger`]: Утилиты для инициализации системы логирования на базе `tracing`;
//!   файловый слой активируется фичей `logger_utils_feature`.
//! - [`config`]: (активируется фичей `app_config_serde`) Предоставляет `AppConfig` для
//!   загрузки и управления конфигурацией приложения из TOML-файлов.
//!
//! # Использование фич (Features)
//!
//! Например, чтобы использовать загрузку конфигурации, необходимо включить
//! фичу `app_config_serde` в `Cargo.toml` вашего проекта:
//!
//! ```toml
//! # В Cargo.toml вашего проекта
//! # utils_crate = { path = "path/to/utils_crate", features = ["app_config_serde"] }
//! ```
//!
//! Фича `default` включает логирование в файл и конфигурацию TOML.

// --- Модуль для общих ошибок ---
pub mod error;
pub use error::UtilsError; // Реэкспорт для удобства использования.

// --- Модуль с утилитами для инициализации логирования ---
pub mod logger;
pub use logger::init_tracing_logger; // Реэкспорт.

/// Модуль для загрузки и управления конфигурацией приложения.
///
/// Активируется фичей `app_config_serde`.
#[cfg(feature = "app_config_serde")]
pub mod config;
#[cfg(feature = "app_config_serde")]
pub use config::AppConfig; // Реэкспорт.
