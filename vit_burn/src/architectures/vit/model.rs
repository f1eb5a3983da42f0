// vit_burn/src/architectures/vit/model.rs

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![deny(unsafe_code, clippy::unwrap_used, clippy::expect_used)]

//! Основная модель Vision Transformer: оркестрация компонентов и
//! классификационная голова.
//!
//! Прямой проход фиксирован: патч-эмбеддинг -> класс-токен -> позиционные
//! эмбеддинги -> дропаут -> стек энкодерных блоков -> нормализация и линейная
//! проекция представления класс-токена в логиты классов.

use burn::{
    module::{Module, Param}, // Param для обучаемых параметров, Module для определения модулей.
    nn::{
        Dropout, DropoutConfig, Initializer, LayerNorm, LayerNormConfig, Linear, LinearConfig,
    },
    tensor::{backend::Backend, Tensor}, // Основные типы тензоров.
};
use tracing::debug;

use super::{
    encoder::{TransformerEncoderBlock, TransformerEncoderBlockConfig},
    patch_embedding::{PatchEmbedding, PatchEmbeddingConfig},
};
use crate::VitCoreError;

/// Конфигурация для модели `VitModel`.
///
/// Значения по умолчанию соответствуют варианту ViT-Base/16 с классификатором
/// на 1000 классов.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct VitModelConfig {
    /// Сторона квадратного входного изображения в пикселях.
    #[serde(default = "default_img_size")]
    pub img_size: usize,
    /// Количество каналов входного изображения.
    #[serde(default = "default_in_channels")]
    pub in_channels: usize,
    /// Сторона квадратного патча в пикселях.
    #[serde(default = "default_patch_size")]
    pub patch_size: usize,
    /// Количество энкодерных блоков в стеке.
    #[serde(default = "default_num_transformer_layers")]
    pub num_transformer_layers: usize,
    /// Размерность эмбеддинга патчей и токенов.
    #[serde(default = "default_embedding_dim")]
    pub embedding_dim: usize,
    /// Размерность скрытого слоя MLP-блоков.
    #[serde(default = "default_mlp_size")]
    pub mlp_size: usize,
    /// Количество голов внимания.
    #[serde(default = "default_num_heads")]
    pub num_heads: usize,
    /// Вероятность дропаута на весах внимания.
    #[serde(default)]
    pub attn_dropout: f64,
    /// Вероятность дропаута в MLP-блоках.
    #[serde(default = "default_mlp_dropout")]
    pub mlp_dropout: f64,
    /// Вероятность дропаута на объединенных эмбеддингах перед стеком энкодеров.
    #[serde(default = "default_embedding_dropout")]
    pub embedding_dropout: f64,
    /// Количество классов классификационной головы.
    #[serde(default = "default_num_classes")]
    pub num_classes: usize,
}

fn default_img_size() -> usize {
    224
}
fn default_in_channels() -> usize {
    3
}
fn default_patch_size() -> usize {
    16
}
fn default_num_transformer_layers() -> usize {
    12
}
fn default_embedding_dim() -> usize {
    768
}
fn default_mlp_size() -> usize {
    3072
}
fn default_num_heads() -> usize {
    12
}
fn default_mlp_dropout() -> f64 {
    0.1
}
fn default_embedding_dropout() -> f64 {
    0.1
}
fn default_num_classes() -> usize {
    1000
}

impl Default for VitModelConfig {
    fn default() -> Self {
        Self {
            img_size: default_img_size(),
            in_channels: default_in_channels(),
            patch_size: default_patch_size(),
            num_transformer_layers: default_num_transformer_layers(),
            embedding_dim: default_embedding_dim(),
            mlp_size: default_mlp_size(),
            num_heads: default_num_heads(),
            attn_dropout: 0.0,
            mlp_dropout: default_mlp_dropout(),
            embedding_dropout: default_embedding_dropout(),
            num_classes: default_num_classes(),
        }
    }
}

impl VitModelConfig {
    /// Создает новый экземпляр `VitModel`.
    ///
    /// Валидация конфигурации выполняется до выделения каких-либо параметров.
    ///
    /// # Аргументы
    /// * `device`: Устройство Burn, на котором будут инициализированы веса.
    ///
    /// # Errors
    /// Возвращает `VitCoreError::ConfigurationError`, если размер изображения
    /// не кратен размеру патча, и `VitCoreError::InvalidConfig` при невалидной
    /// конфигурации блока внимания.
    pub fn init<B: Backend>(&self, device: &B::Device) -> Result<VitModel<B>, VitCoreError> {
        if self.img_size % self.patch_size != 0 {
            return Err(VitCoreError::ConfigurationError {
                img_size: self.img_size,
                patch_size: self.patch_size,
            });
        }

        // Количество патчей фиксируется на этапе конструирования.
        let num_patches = (self.img_size * self.img_size) / (self.patch_size * self.patch_size);

        // Обучаемые эмбеддинги: класс-токен и таблица позиционных эмбеддингов.
        // Длина таблицы равна длине последовательности с класс-токеном.
        let initializer = Initializer::Normal {
            mean: 0.0,
            std: 1.0,
        };
        let class_token: Param<Tensor<B, 3>> =
            initializer.init([1, 1, self.embedding_dim], device);
        let position_embedding: Param<Tensor<B, 3>> =
            initializer.init([1, num_patches + 1, self.embedding_dim], device);

        let patch_embedding = PatchEmbeddingConfig {
            in_channels: self.in_channels,
            patch_size: self.patch_size,
            embedding_dim: self.embedding_dim,
        }
        .init(device);

        let mut encoder_blocks = Vec::with_capacity(self.num_transformer_layers);
        for _ in 0..self.num_transformer_layers {
            let block = TransformerEncoderBlockConfig {
                embedding_dim: self.embedding_dim,
                num_heads: self.num_heads,
                mlp_size: self.mlp_size,
                mlp_dropout: self.mlp_dropout,
                attn_dropout: self.attn_dropout,
            }
            .init(device)?;
            encoder_blocks.push(block);
        }

        let model = VitModel {
            patch_embedding,
            class_token,
            position_embedding,
            embedding_dropout: DropoutConfig::new(self.embedding_dropout).init(),
            encoder_blocks,
            norm: LayerNormConfig::new(self.embedding_dim).init(device),
            head: LinearConfig::new(self.embedding_dim, self.num_classes).init(device),
            embedding_dim: self.embedding_dim,
            num_patches,
        };

        debug!(
            img_size = self.img_size,
            patch_size = self.patch_size,
            num_patches,
            num_layers = self.num_transformer_layers,
            embedding_dim = self.embedding_dim,
            num_classes = self.num_classes,
            num_params = model.num_params(),
            "Модель ViT инициализирована"
        );

        Ok(model)
    }
}

/// Модель Vision Transformer: отображает батч изображений в логиты классов.
#[derive(Debug, Module)]
pub struct VitModel<B: Backend> {
    /// Слой патч-эмбеддинга.
    patch_embedding: PatchEmbedding<B>,
    /// Обучаемый класс-токен, форма `[1, 1, embedding_dim]`.
    class_token: Param<Tensor<B, 3>>,
    /// Обучаемая таблица позиционных эмбеддингов, форма `[1, num_patches + 1, embedding_dim]`.
    position_embedding: Param<Tensor<B, 3>>,
    /// Дропаут на объединенных эмбеддингах перед стеком энкодеров.
    embedding_dropout: Dropout,
    /// Стек энкодерных блоков, применяемых строго по порядку.
    encoder_blocks: Vec<TransformerEncoderBlock<B>>,
    /// Финальная нормализация представления класс-токена.
    norm: LayerNorm<B>,
    /// Линейная проекция в логиты классов.
    head: Linear<B>,
    /// Размерность эмбеддинга.
    embedding_dim: usize,
    /// Количество патчей, вычисленное при конструировании.
    num_patches: usize,
}

impl<B: Backend> VitModel<B> {
    /// Выполняет прямой проход: батч изображений -> логиты классов.
    ///
    /// Softmax не применяется: выход — сырые, ненормированные логиты.
    ///
    /// # Аргументы
    /// * `images`: Батч изображений, форма `[batch_size, in_channels, img_size, img_size]`.
    ///
    /// # Возвращает
    /// Тензор логитов, форма `[batch_size, num_classes]`.
    ///
    /// # Errors
    /// Возвращает `VitCoreError::ShapeError`, если пространственные размерности
    /// входа не кратны размеру патча. Прочие несоответствия форм (например,
    /// неверное число каналов или длина последовательности, не совпадающая с
    /// таблицей позиционных эмбеддингов) поднимаются самим Burn.
    pub fn forward(&self, images: Tensor<B, 4>) -> Result<Tensor<B, 2>, VitCoreError> {
        let [batch_size, _, _, _] = images.dims();

        // 1. Расширяем класс-токен вдоль оси батча (broadcast, без копирования значений).
        let class_tokens = self
            .class_token
            .val()
            .expand([batch_size, 1, self.embedding_dim]);

        // 2. Патч-эмбеддинги: [batch_size, num_patches, embedding_dim].
        let patches = self.patch_embedding.forward(images)?;

        // 3. Класс-токен становится позицией 0 последовательности.
        let tokens = Tensor::cat(vec![class_tokens, patches], 1);

        // 4. Прибавляем таблицу позиционных эмбеддингов (broadcast по оси батча).
        let tokens = tokens + self.position_embedding.val();

        // 5. Дропаут на объединенных эмбеддингах (только во время обучения).
        let mut hidden_states = self.embedding_dropout.forward(tokens);

        // 6. Стек энкодерных блоков, каждый потребляет выход предыдущего.
        for block in &self.encoder_blocks {
            hidden_states = block.forward(hidden_states);
        }

        // 7. Представление класс-токена из выхода последнего блока.
        let class_repr = hidden_states.slice([0..batch_size, 0..1]).squeeze::<2>(1);

        // 8. Финальная нормализация и проекция в логиты классов.
        Ok(self.head.forward(self.norm.forward(class_repr)))
    }

    /// Количество патчей, на которые разбивается изображение.
    #[must_use]
    pub const fn num_patches(&self) -> usize {
        self.num_patches
    }

    /// Длина последовательности токенов (патчи плюс класс-токен).
    #[must_use]
    pub const fn sequence_length(&self) -> usize {
        self.num_patches + 1
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use approx::assert_relative_eq;
    use burn::module::{ModuleMapper, ParamId};
    use burn_ndarray::{NdArray, NdArrayDevice};

    use super::*;

    type TestBackend = NdArray<f32>;

    struct ZeroParams;

    impl<B: Backend> ModuleMapper<B> for ZeroParams {
        fn map_float<const D: usize>(&mut self, _id: ParamId, tensor: Tensor<B, D>) -> Tensor<B, D> {
            tensor.zeros_like()
        }
    }

    // Классификатор обязан читать ровно позицию 0 (класс-токен) выхода
    // последнего блока. Конструкция: все параметры занулены, кроме таблицы
    // позиционных эмбеддингов (позиция 0 отличается знаком от остальных),
    // единичной гаммы финальной нормализации и веса головы, выбирающего
    // первую компоненту. Тогда логит равен +1 для позиции 0 и -1 для любой
    // другой позиции.
    #[test]
    fn test_classifier_reads_class_token_position() {
        let device = NdArrayDevice::Cpu;
        let config = VitModelConfig {
            img_size: 32,
            patch_size: 16,
            in_channels: 3,
            num_transformer_layers: 0,
            embedding_dim: 4,
            mlp_size: 8,
            num_heads: 2,
            attn_dropout: 0.0,
            mlp_dropout: 0.0,
            embedding_dropout: 0.0,
            num_classes: 1,
        };
        let model = config.init::<TestBackend>(&device).unwrap();
        let mut model = model.map(&mut ZeroParams);

        let position_rows = [[
            [2.0, -2.0, 2.0, -2.0],
            [-2.0, 2.0, -2.0, 2.0],
            [-2.0, 2.0, -2.0, 2.0],
            [-2.0, 2.0, -2.0, 2.0],
            [-2.0, 2.0, -2.0, 2.0],
        ]];
        model.position_embedding =
            Param::from_tensor(Tensor::<TestBackend, 3>::from_floats(position_rows, &device));
        model.norm.gamma = Param::from_tensor(Tensor::ones([4], &device));
        model.head.weight = Param::from_tensor(Tensor::<TestBackend, 2>::from_floats(
            [[1.0], [0.0], [0.0], [0.0]],
            &device,
        ));

        let images = Tensor::<TestBackend, 4>::zeros([1, 3, 32, 32], &device);
        let logits = model.forward(images).unwrap();
        assert_eq!(logits.dims(), [1, 1]);

        let logit: f32 = logits.into_scalar();
        assert_relative_eq!(logit, 1.0, max_relative = 1e-3);
    }

    #[test]
    fn test_num_patches_formula() {
        let device = NdArrayDevice::Cpu;
        let config = VitModelConfig {
            num_transformer_layers: 1,
            embedding_dim: 8,
            mlp_size: 16,
            num_heads: 2,
            num_classes: 10,
            ..VitModelConfig::default()
        };
        let model = config.init::<TestBackend>(&device).unwrap();

        assert_eq!(model.num_patches(), 196);
        assert_eq!(model.sequence_length(), 197);
        assert_eq!(model.position_embedding.val().dims(), [1, 197, 8]);
        assert_eq!(model.class_token.val().dims(), [1, 1, 8]);
    }
}
