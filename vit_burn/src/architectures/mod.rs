// vit_burn/src/architectures/mod.rs

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![deny(unsafe_code, clippy::unwrap_used, clippy::expect_used)]

//! Корневой модуль для определения архитектур моделей машинного обучения.
//!
//! Каждая поддерживаемая архитектура представлена в своем подмодуле внутри
//! этого модуля. Также здесь определяются общие типы, используемые для
//! идентификации моделей и их стандартных вариантов (пресетов).

// Подключаем подмодуль для архитектуры Vision Transformer.
pub mod vit;

// В будущем здесь могут быть добавлены другие архитектуры:
// pub mod deit;
// pub mod swin;

use serde::{Deserialize, Serialize};

use crate::architectures::vit::VitModelConfig;
use crate::VitCoreError;

/// Перечисление, представляющее стандартный вариант архитектуры ViT.
///
/// Используется для идентификации модели при загрузке конфигурации
/// (например, из `config.json` или из пресета в TOML-конфигурации приложения).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ModelType {
    /// ViT-Base с патчем 16x16 (12 слоев, скрытая размерность 768).
    #[serde(rename = "vit-base-16")]
    VitBase16,
    /// ViT-Large с патчем 16x16 (24 слоя, скрытая размерность 1024).
    #[serde(rename = "vit-large-16")]
    VitLarge16,
    /// ViT-Huge с патчем 14x14 (32 слоя, скрытая размерность 1280).
    #[serde(rename = "vit-huge-14")]
    VitHuge14,
}

impl ModelType {
    /// Разбирает имя пресета (например, из конфигурации приложения).
    ///
    /// # Errors
    /// Возвращает `VitCoreError::InvalidConfig` для неизвестного имени пресета.
    pub fn from_preset_name(name: &str) -> Result<Self, VitCoreError> {
        match name {
            "vit-base-16" => Ok(Self::VitBase16),
            "vit-large-16" => Ok(Self::VitLarge16),
            "vit-huge-14" => Ok(Self::VitHuge14),
            other => Err(VitCoreError::InvalidConfig(format!(
                "Неизвестный пресет модели: '{other}'."
            ))),
        }
    }

    /// Возвращает мета-информацию стандартного варианта модели.
    #[must_use]
    pub const fn info(self) -> ModelInfo {
        match self {
            Self::VitBase16 => ModelInfo {
                model_type: self,
                image_size: 224,
                patch_size: 16,
                hidden_size: 768,
                num_hidden_layers: 12,
                num_attention_heads: 12,
                intermediate_size: 3072,
                num_classes: 1000,
            },
            Self::VitLarge16 => ModelInfo {
                model_type: self,
                image_size: 224,
                patch_size: 16,
                hidden_size: 1024,
                num_hidden_layers: 24,
                num_attention_heads: 16,
                intermediate_size: 4096,
                num_classes: 1000,
            },
            Self::VitHuge14 => ModelInfo {
                model_type: self,
                image_size: 224,
                patch_size: 14,
                hidden_size: 1280,
                num_hidden_layers: 32,
                num_attention_heads: 16,
                intermediate_size: 5120,
                num_classes: 1000,
            },
        }
    }

    /// Возвращает конфигурацию модели для стандартного варианта.
    #[must_use]
    pub fn config(self) -> VitModelConfig {
        self.info().into()
    }
}

/// Структура, содержащая общую мета-информацию о модели.
///
/// Эта информация обычно извлекается из файла конфигурации модели (например, `config.json`)
/// и может быть использована для высокоуровневой логики, такой как подготовка
/// пайплайна предобработки изображений или настройка классификатора.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelInfo {
    /// Вариант архитектуры модели.
    #[serde(rename = "model_type")] // Указывает, что в JSON это поле называется "model_type".
    pub model_type: ModelType,

    /// Сторона квадратного входного изображения в пикселях.
    pub image_size: usize,

    /// Сторона квадратного патча в пикселях.
    pub patch_size: usize,

    /// Размерность скрытого слоя модели (embedding dimension).
    pub hidden_size: usize,

    /// Общее количество энкодерных блоков в модели.
    pub num_hidden_layers: usize,

    /// Количество голов внимания в механизме multi-head attention.
    pub num_attention_heads: usize,

    /// Размерность промежуточного слоя MLP-блока.
    pub intermediate_size: usize,

    /// Количество классов классификационной головы.
    pub num_classes: usize,
}

impl ModelInfo {
    /// Разбирает мета-информацию модели из JSON-документа (вида `config.json`).
    ///
    /// # Errors
    /// Возвращает `VitCoreError::InvalidConfig` при ошибке парсинга.
    pub fn from_json_str(raw: &str) -> Result<Self, VitCoreError> {
        serde_json::from_str(raw).map_err(|e| {
            VitCoreError::InvalidConfig(format!(
                "Не удалось разобрать мета-информацию модели из JSON: {e}"
            ))
        })
    }
}

impl From<ModelInfo> for VitModelConfig {
    /// Переносит геометрию модели из мета-информации в конфигурацию.
    /// Вероятности дропаута не являются частью мета-информации и остаются
    /// значениями по умолчанию.
    fn from(info: ModelInfo) -> Self {
        Self {
            img_size: info.image_size,
            patch_size: info.patch_size,
            embedding_dim: info.hidden_size,
            num_transformer_layers: info.num_hidden_layers,
            num_heads: info.num_attention_heads,
            mlp_size: info.intermediate_size,
            num_classes: info.num_classes,
            ..Self::default()
        }
    }
}
