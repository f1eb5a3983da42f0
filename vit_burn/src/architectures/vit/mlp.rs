// vit_burn/src/architectures/vit/mlp.rs

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![deny(unsafe_code, clippy::unwrap_used, clippy::expect_used)]

//! Позиционно-независимый MLP-блок (MLP block) в pre-norm стиле.
//!
//! Преобразование применяется к каждой позиции последовательности независимо;
//! смешивание информации между позициями — задача блока внимания.

use burn::{
    module::Module, // Module для определения модулей.
    nn::{Dropout, DropoutConfig, Gelu, LayerNorm, LayerNormConfig, Linear, LinearConfig},
    tensor::{backend::Backend, Tensor}, // Основной тип тензора.
};

/// Конфигурация для блока `MlpBlock`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MlpBlockConfig {
    /// Размерность эмбеддинга (входная и выходная размерность блока).
    #[serde(default = "default_embedding_dim")]
    pub embedding_dim: usize,
    /// Размерность скрытого слоя MLP (обычно в 4 раза больше `embedding_dim`).
    #[serde(default = "default_mlp_size")]
    pub mlp_size: usize,
    /// Вероятность дропаута на скрытом и выходном путях MLP.
    /// Используется во время обучения. Для инференса обычно 0.0.
    #[serde(default = "default_mlp_dropout")]
    pub dropout: f64,
}

fn default_embedding_dim() -> usize {
    768
}
fn default_mlp_size() -> usize {
    3072
}
fn default_mlp_dropout() -> f64 {
    0.1
}

impl Default for MlpBlockConfig {
    fn default() -> Self {
        Self {
            embedding_dim: default_embedding_dim(),
            mlp_size: default_mlp_size(),
            dropout: default_mlp_dropout(),
        }
    }
}

impl MlpBlockConfig {
    /// Создает новый экземпляр `MlpBlock`.
    ///
    /// # Аргументы
    /// * `device`: Устройство Burn, на котором будут инициализированы веса.
    pub fn init<B: Backend>(&self, device: &B::Device) -> MlpBlock<B> {
        MlpBlock {
            layer_norm: LayerNormConfig::new(self.embedding_dim).init(device),
            expand: LinearConfig::new(self.embedding_dim, self.mlp_size).init(device),
            activation: Gelu::new(),
            hidden_dropout: DropoutConfig::new(self.dropout).init(),
            contract: LinearConfig::new(self.mlp_size, self.embedding_dim).init(device),
            output_dropout: DropoutConfig::new(self.dropout).init(),
        }
    }
}

/// MLP-блок: pre-norm, расширение размерности, GELU, дропаут, сжатие, дропаут.
///
/// Остаточную связь блок не добавляет; это обязанность вызывающего
/// энкодерного блока.
#[derive(Debug, Module)]
pub struct MlpBlock<B: Backend> {
    /// Нормализация перед MLP (по оси эмбеддинга).
    layer_norm: LayerNorm<B>,
    /// Линейная проекция `embedding_dim -> mlp_size`.
    expand: Linear<B>,
    /// Гладкая нелинейность GELU.
    activation: Gelu,
    /// Дропаут на скрытом пути (после активации).
    hidden_dropout: Dropout,
    /// Линейная проекция `mlp_size -> embedding_dim`.
    contract: Linear<B>,
    /// Дропаут на выходном пути.
    output_dropout: Dropout,
}

impl<B: Backend> MlpBlock<B> {
    /// Выполняет прямой проход через MLP-блок.
    ///
    /// # Аргументы
    /// * `hidden_states`: Входной тензор, форма `[batch_size, seq_len, embedding_dim]`.
    ///
    /// # Возвращает
    /// Выходной тензор той же формы, что и входной.
    pub fn forward(&self, hidden_states: Tensor<B, 3>) -> Tensor<B, 3> {
        let normalized = self.layer_norm.forward(hidden_states);
        let hidden = self.activation.forward(self.expand.forward(normalized));
        let hidden = self.hidden_dropout.forward(hidden);
        let output = self.contract.forward(hidden);
        self.output_dropout.forward(output)
    }
}
