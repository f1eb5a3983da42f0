// vit_burn/src/architectures/vit/mod.rs

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![deny(unsafe_code, clippy::unwrap_used, clippy::expect_used)]

//! Модуль, инкапсулирующий полную реализацию архитектуры Vision Transformer (ViT).
//!
//! Он объединяет все компоненты модели: патч-эмбеддинг (`patch_embedding`),
//! блок self-attention (`attention`), MLP-блок (`mlp`), энкодерный блок
//! (`encoder`) и основную структуру модели (`model`).
//! Этот модуль также реэкспортирует ключевые типы для удобства использования.

// Подключаем подмодули, содержащие реализацию отдельных компонентов ViT.
pub mod attention;       // Блок многоголового self-attention (pre-norm)
pub mod encoder;         // Энкодерный блок с остаточными связями
pub mod mlp;             // Позиционно-независимый MLP-блок (pre-norm)
pub mod model;           // Основная модель: оркестрация и классификационная голова
pub mod patch_embedding; // Разбиение изображения на патчи и их линейная проекция

// Реэкспортируем публичные структуры и конфигурации из подмодулей,
// чтобы они были легко доступны через `vit_burn::architectures::vit::*`.

// Патч-эмбеддинг
pub use patch_embedding::{PatchEmbedding, PatchEmbeddingConfig};

// Блок внимания
pub use attention::{MultiheadSelfAttentionBlock, MultiheadSelfAttentionBlockConfig};

// MLP-блок
pub use mlp::{MlpBlock, MlpBlockConfig};

// Энкодерный блок
pub use encoder::{TransformerEncoderBlock, TransformerEncoderBlockConfig};

// Основная модель
pub use model::{VitModel, VitModelConfig};
