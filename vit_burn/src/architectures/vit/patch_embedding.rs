// vit_burn/src/architectures/vit/patch_embedding.rs

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![deny(unsafe_code, clippy::unwrap_used, clippy::expect_used)]

//! Патч-эмбеддинг: разбиение изображения на непересекающиеся патчи
//! и линейная проекция каждого патча в вектор эмбеддинга.
//!
//! Математически это flatten-then-project каждого патча; реализовано как
//! свертка с ядром и шагом, равными размеру патча, без паддинга.

use burn::{
    module::Module, // Module для определения модулей.
    nn::{
        conv::{Conv2d, Conv2dConfig}, // Свертка, выполняющая проекцию патчей.
        PaddingConfig2d,
    },
    tensor::{backend::Backend, Tensor}, // Основные типы тензоров.
};

use crate::VitCoreError;

/// Конфигурация для слоя `PatchEmbedding`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PatchEmbeddingConfig {
    /// Количество каналов входного изображения.
    #[serde(default = "default_in_channels")]
    pub in_channels: usize,
    /// Сторона квадратного патча в пикселях.
    #[serde(default = "default_patch_size")]
    pub patch_size: usize,
    /// Размерность вектора эмбеддинга одного патча.
    #[serde(default = "default_embedding_dim")]
    pub embedding_dim: usize,
}

fn default_in_channels() -> usize {
    3
}
fn default_patch_size() -> usize {
    16
}
fn default_embedding_dim() -> usize {
    768
}

impl Default for PatchEmbeddingConfig {
    fn default() -> Self {
        Self {
            in_channels: default_in_channels(),
            patch_size: default_patch_size(),
            embedding_dim: default_embedding_dim(),
        }
    }
}

impl PatchEmbeddingConfig {
    /// Создает новый экземпляр `PatchEmbedding`.
    ///
    /// # Аргументы
    /// * `device`: Устройство Burn, на котором будут инициализированы веса.
    pub fn init<B: Backend>(&self, device: &B::Device) -> PatchEmbedding<B> {
        // Ядро и шаг свертки равны размеру патча: каждый выходной пиксель
        // соответствует ровно одному непересекающемуся патчу.
        let patcher = Conv2dConfig::new(
            [self.in_channels, self.embedding_dim],
            [self.patch_size, self.patch_size],
        )
        .with_stride([self.patch_size, self.patch_size])
        .with_padding(PaddingConfig2d::Valid)
        .init(device);

        PatchEmbedding {
            patcher,
            patch_size: self.patch_size,
        }
    }
}

/// Слой патч-эмбеддинга: `[batch, channels, height, width]` -> `[batch, num_patches, embedding_dim]`.
#[derive(Debug, Module)]
pub struct PatchEmbedding<B: Backend> {
    /// Свертка, проецирующая каждый патч в вектор эмбеддинга.
    patcher: Conv2d<B>,
    /// Сторона квадратного патча.
    patch_size: usize,
}

impl<B: Backend> PatchEmbedding<B> {
    /// Выполняет прямой проход через слой патч-эмбеддинга.
    ///
    /// Патчи следуют в порядке построчного (raster) обхода пространственной
    /// сетки исходного изображения; ось эмбеддинга — последняя.
    ///
    /// # Аргументы
    /// * `images`: Входной батч изображений, форма `[batch_size, in_channels, height, width]`.
    ///
    /// # Возвращает
    /// Тензор последовательности патч-эмбеддингов, форма `[batch_size, num_patches, embedding_dim]`.
    ///
    /// # Errors
    /// Возвращает `VitCoreError::ShapeError`, если высота или ширина входа
    /// не кратна размеру патча. Проверка выполняется до применения свертки.
    pub fn forward(&self, images: Tensor<B, 4>) -> Result<Tensor<B, 3>, VitCoreError> {
        let [_, _, height, width] = images.dims();
        for dim in [height, width] {
            if dim % self.patch_size != 0 {
                return Err(VitCoreError::ShapeError {
                    dim,
                    patch_size: self.patch_size,
                });
            }
        }

        // 1. Проекция патчей: [batch, embedding_dim, height / patch, width / patch].
        let projected = self.patcher.forward(images);

        // 2. Схлопываем пространственную сетку в одну ось последовательности
        //    (построчный порядок обхода) и переносим ось эмбеддинга в конец.
        Ok(projected.flatten::<3>(2, 3).swap_dims(1, 2))
    }
}
