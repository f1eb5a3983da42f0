// vit_burn/src/error.rs

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![deny(unsafe_code, clippy::unwrap_used, clippy::expect_used)]

//! Кастомные типы ошибок крейта `vit_burn`.

// Условная компиляция: если активирована фича `with_utils_crate`,
// тогда импортируем и используем ошибку из `utils_crate`.
#[cfg(feature = "with_utils_crate")]
use utils_crate::error::UtilsError;

/// Перечисление всех возможных ошибок, которые могут возникнуть в крейте `vit_burn`.
///
/// Модель выполняет ровно две доменные проверки: кратность размера изображения
/// размеру патча при конструировании и кратность пространственных размерностей
/// входа размеру патча при прямом проходе. Все остальные несоответствия форм
/// тензоров поднимаются самим Burn и здесь не дублируются.
#[derive(thiserror::Error, Debug)] // Используем `thiserror` для автоматической генерации трейтов Error и Display.
pub enum VitCoreError {
    /// Ошибка конфигурации модели: размер изображения не кратен размеру патча.
    /// Возникает при конструировании, до выделения каких-либо параметров.
    #[error(
        "Размер изображения ({img_size}) должен быть кратен размеру патча ({patch_size})."
    )]
    ConfigurationError {
        /// Сторона входного изображения, заданная конфигурацией.
        img_size: usize,
        /// Размер патча, заданный конфигурацией.
        patch_size: usize,
    },

    /// Ошибка формы входа: пространственная размерность изображения не кратна
    /// размеру патча. Возникает при прямом проходе, до применения свертки.
    #[error(
        "Пространственная размерность входа ({dim}) не кратна размеру патча ({patch_size})."
    )]
    ShapeError {
        /// Нарушившая проверку размерность входа (высота или ширина).
        dim: usize,
        /// Размер патча, на который она должна делиться.
        patch_size: usize,
    },

    /// Ошибка, связанная с некорректной конфигурацией модели или ее компонентов.
    /// Например, размерность эмбеддинга не кратна числу голов внимания.
    #[error("Некорректная конфигурация: {0}")]
    InvalidConfig(String),

    /// Ошибка, указывающая на несовместимые размеры тензоров при операциях.
    #[error("Несовместимые размеры или форма тензора: {0}")]
    IncompatibleShape(String),

    /// Ошибка, возникшая во вспомогательном крейте `utils_crate`.
    /// Этот вариант доступен только если активирована фича `with_utils_crate`.
    #[cfg(feature = "with_utils_crate")]
    #[error("Ошибка из utils_crate: {0}")]
    Utils(#[from] UtilsError),

    /// Общая или неуточненная ошибка.
    /// Следует использовать с осторожностью, предпочитая более специфичные варианты ошибок.
    #[error("Общая ошибка ядра ViT: {0}")]
    Generic(String),
}
