#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![deny(unsafe_code, unused_mut, unused_imports, unused_attributes)]

//! Общий тип ошибки для утилит `utils_crate`.

use thiserror::Error;

/// Общий тип ошибки для утилит `utils_crate` и потенциально для всего воркспейса.
///
/// Этот enum агрегирует различные типы ошибок, которые могут возникнуть
/// в утилитарных функциях, предоставляя стандартизированный способ их обработки.
#[derive(Error, Debug)]
pub enum UtilsError {
    /// Ошибка ввода-вывода (I/O).
    ///
    /// Содержит исходную ошибку `std::io::Error`.
    #[error("Ошибка ввода-вывода: {source}")]
    Io {
        /// Исходная ошибка I/O.
        #[from] // Позволяет автоматически конвертировать std::io::Error в UtilsError::Io
        source: std::io::Error,
    },

    /// Ошибка сериализации (например, в TOML).
    ///
    /// Активируется фичей `serde`.
    #[cfg(feature = "serde")]
    #[error("Ошибка сериализации: {0}")]
    Serialization(String),

    /// Ошибка десериализации (например, из TOML).
    ///
    /// Возникает, когда не удается преобразовать содержимое файла конфигурации
    /// в структуру данных. Активируется фичей `serde`.
    #[cfg(feature = "serde")]
    #[error("Ошибка десериализации: {0}")]
    Deserialization(String),

    /// Ошибка, связанная с конфигурацией приложения.
    ///
    /// Например, неверный формат файла конфигурации или недопустимое значение поля.
    #[error("Ошибка конфигурации: {0}")]
    Config(String),

    /// Ошибка, указывающая на то, что в утилитарную функцию был передан неверный параметр.
    #[error("Неверный параметр: {0}")]
    InvalidParameter(String),

    /// Общая или неуточненная ошибка.
    /// Следует использовать с осторожностью, предпочитая более специфичные варианты.
    #[error("Общая ошибка: {0}")]
    Generic(String),
}
