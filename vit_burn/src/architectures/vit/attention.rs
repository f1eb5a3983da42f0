// vit_burn/src/architectures/vit/attention.rs

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![deny(unsafe_code, clippy::unwrap_used, clippy::expect_used)]

//! Блок многоголового self-attention (MSA block) в pre-norm стиле.
//!
//! Нормализация применяется до внимания, а не после. Маскирование отсутствует:
//! каждая позиция последовательности видит все позиции (двунаправленное
//! внимание, уместное для классификации изображений).

use burn::{
    module::Module, // Module для определения модулей.
    nn::{
        attention::{MhaInput, MultiHeadAttention, MultiHeadAttentionConfig}, // Готовый MHA из Burn.
        LayerNorm, LayerNormConfig, // Нормализация по оси эмбеддинга.
    },
    tensor::{backend::Backend, Tensor}, // Основные типы тензоров.
};

use crate::VitCoreError;

/// Конфигурация для блока `MultiheadSelfAttentionBlock`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MultiheadSelfAttentionBlockConfig {
    /// Размерность эмбеддинга (делится между головами внимания).
    #[serde(default = "default_embedding_dim")]
    pub embedding_dim: usize,
    /// Количество голов внимания.
    #[serde(default = "default_num_heads")]
    pub num_heads: usize,
    /// Вероятность применения дропаута к весам внимания (после Softmax).
    /// Используется во время обучения. Для инференса обычно 0.0.
    #[serde(default)]
    pub attn_dropout: f64,
}

fn default_embedding_dim() -> usize {
    768
}
fn default_num_heads() -> usize {
    12
}

impl Default for MultiheadSelfAttentionBlockConfig {
    fn default() -> Self {
        Self {
            embedding_dim: default_embedding_dim(),
            num_heads: default_num_heads(),
            attn_dropout: 0.0,
        }
    }
}

impl MultiheadSelfAttentionBlockConfig {
    /// Создает новый экземпляр `MultiheadSelfAttentionBlock`.
    ///
    /// # Аргументы
    /// * `device`: Устройство Burn, на котором будут инициализированы веса.
    ///
    /// # Errors
    /// Возвращает `VitCoreError::InvalidConfig`, если размерность эмбеддинга
    /// не кратна количеству голов внимания.
    pub fn init<B: Backend>(
        &self,
        device: &B::Device,
    ) -> Result<MultiheadSelfAttentionBlock<B>, VitCoreError> {
        if self.embedding_dim % self.num_heads != 0 {
            return Err(VitCoreError::InvalidConfig(format!(
                "embedding_dim ({}) должно быть кратно num_heads ({}).",
                self.embedding_dim, self.num_heads
            )));
        }

        let layer_norm = LayerNormConfig::new(self.embedding_dim).init(device);
        let multihead_attn = MultiHeadAttentionConfig::new(self.embedding_dim, self.num_heads)
            .with_dropout(self.attn_dropout)
            .init(device);

        Ok(MultiheadSelfAttentionBlock {
            layer_norm,
            multihead_attn,
        })
    }
}

/// Блок многоголового self-attention: pre-norm, затем внимание.
///
/// Остаточную связь блок не добавляет; это обязанность вызывающего
/// энкодерного блока.
#[derive(Debug, Module)]
pub struct MultiheadSelfAttentionBlock<B: Backend> {
    /// Нормализация перед вниманием (по оси эмбеддинга).
    layer_norm: LayerNorm<B>,
    /// Слой многоголового внимания Burn.
    multihead_attn: MultiHeadAttention<B>,
}

impl<B: Backend> MultiheadSelfAttentionBlock<B> {
    /// Выполняет прямой проход через блок внимания.
    ///
    /// Query, Key и Value — один и тот же нормализованный вход (self-attention).
    ///
    /// # Аргументы
    /// * `hidden_states`: Входной тензор, форма `[batch_size, seq_len, embedding_dim]`.
    ///
    /// # Возвращает
    /// Выходной тензор внимания той же формы, без добавленной остаточной связи.
    pub fn forward(&self, hidden_states: Tensor<B, 3>) -> Tensor<B, 3> {
        let normalized = self.layer_norm.forward(hidden_states);
        self.multihead_attn
            .forward(MhaInput::self_attn(normalized))
            .context
    }
}
