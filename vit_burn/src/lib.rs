// vit_burn/src/lib.rs

// Включаем строгие правила линтинга для всего крейта.
#![warn(
    missing_docs, // Предупреждать об отсутствующей документации для публичных элементов.
    clippy::all, // Все стандартные проверки Clippy.
    clippy::pedantic, // Более строгие ("педантичные") проверки Clippy.
    clippy::nursery // Экспериментальные проверки Clippy (могут быть нестабильны).
)]
// Запрещаем использование небезопасных конструкций и потенциально проблемных методов.
#![deny(
    unsafe_code, // Запрет `unsafe` блоков без явного `allow`.
    clippy::unwrap_used, // Запрет использования `.unwrap()`.
    clippy::expect_used // Запрет использования `.expect()`.
)]

//! # `vit_burn`
//!
//! Этот крейт (`vit_burn`) реализует архитектуру Vision Transformer (ViT)
//! для классификации изображений с использованием фреймворка [Burn](https://burn.dev/).
//! Он предоставляет декларативную композицию модели: разбиение изображения на патчи,
//! обучаемый классификационный токен, обучаемые позиционные эмбеддинги, стек
//! энкодерных блоков (pre-norm self-attention + MLP с остаточными связями)
//! и классификационную голову.
//!
//! ## Назначение
//!
//! Крейт определяет только прямой проход (forward pass) модели. Все численные
//! примитивы (свертка, нормализация, multi-head attention, линейные проекции,
//! дропаут, автоматическое дифференцирование) делегируются Burn. Цикл обучения,
//! загрузка данных и сервинг находятся вне области ответственности крейта.
//!
//! ## Структура
//!
//! Крейт организован следующим образом:
//! - `architectures`: Определения архитектур моделей (сейчас только `vit`)
//!   и общие метаданные моделей (`ModelType`, `ModelInfo`).
//! - `error`: Кастомные типы ошибок для этого крейта.

// Объявляем публичные модули, входящие в состав крейта.
pub mod architectures;
pub mod error;

// Реэкспортируем наиболее важные и часто используемые элементы из модулей
// для удобства их использования потребителями этого крейта.

// Ошибки
pub use error::VitCoreError;

// Архитектура ViT и ее компоненты
pub use architectures::vit::{
    // Основная модель и ее компоненты
    VitModel,
    TransformerEncoderBlock,
    MultiheadSelfAttentionBlock,
    MlpBlock,
    PatchEmbedding,
    // Конфигурации для модели и ее компонентов
    VitModelConfig,
    TransformerEncoderBlockConfig,
    MultiheadSelfAttentionBlockConfig,
    MlpBlockConfig,
    PatchEmbeddingConfig,
};
pub use architectures::{ModelInfo, ModelType}; // Общая информация о модели (тип, размеры и т.д.)
