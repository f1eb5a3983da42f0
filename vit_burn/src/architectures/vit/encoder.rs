// vit_burn/src/architectures/vit/encoder.rs

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![deny(unsafe_code, clippy::unwrap_used, clippy::expect_used)]

//! Энкодерный блок трансформера: композиция блока внимания и MLP-блока
//! с остаточными (skip) связями вокруг каждого из них.
//!
//! Вход и выход блока имеют одинаковую форму; именно этот инвариант делает
//! стекирование произвольного числа блоков корректным.

use burn::{
    module::Module, // Module для определения модулей.
    tensor::{backend::Backend, Tensor}, // Основной тип тензора.
};

use super::{
    attention::{MultiheadSelfAttentionBlock, MultiheadSelfAttentionBlockConfig},
    mlp::{MlpBlock, MlpBlockConfig},
};
use crate::VitCoreError;

/// Конфигурация для блока `TransformerEncoderBlock`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TransformerEncoderBlockConfig {
    /// Размерность эмбеддинга.
    #[serde(default = "default_embedding_dim")]
    pub embedding_dim: usize,
    /// Количество голов внимания.
    #[serde(default = "default_num_heads")]
    pub num_heads: usize,
    /// Размерность скрытого слоя MLP.
    #[serde(default = "default_mlp_size")]
    pub mlp_size: usize,
    /// Вероятность дропаута в MLP-блоке.
    #[serde(default = "default_mlp_dropout")]
    pub mlp_dropout: f64,
    /// Вероятность дропаута на весах внимания.
    #[serde(default)]
    pub attn_dropout: f64,
}

fn default_embedding_dim() -> usize {
    768
}
fn default_num_heads() -> usize {
    12
}
fn default_mlp_size() -> usize {
    3072
}
fn default_mlp_dropout() -> f64 {
    0.1
}

impl Default for TransformerEncoderBlockConfig {
    fn default() -> Self {
        Self {
            embedding_dim: default_embedding_dim(),
            num_heads: default_num_heads(),
            mlp_size: default_mlp_size(),
            mlp_dropout: default_mlp_dropout(),
            attn_dropout: 0.0,
        }
    }
}

impl TransformerEncoderBlockConfig {
    /// Создает новый экземпляр `TransformerEncoderBlock`.
    ///
    /// # Аргументы
    /// * `device`: Устройство Burn, на котором будут инициализированы веса.
    ///
    /// # Errors
    /// Возвращает `VitCoreError::InvalidConfig`, если конфигурация блока
    /// внимания невалидна.
    pub fn init<B: Backend>(
        &self,
        device: &B::Device,
    ) -> Result<TransformerEncoderBlock<B>, VitCoreError> {
        let msa_block = MultiheadSelfAttentionBlockConfig {
            embedding_dim: self.embedding_dim,
            num_heads: self.num_heads,
            attn_dropout: self.attn_dropout,
        }
        .init(device)?;

        let mlp_block = MlpBlockConfig {
            embedding_dim: self.embedding_dim,
            mlp_size: self.mlp_size,
            dropout: self.mlp_dropout,
        }
        .init(device);

        Ok(TransformerEncoderBlock {
            msa_block,
            mlp_block,
        })
    }
}

/// Один полный остаточный слой трансформера.
#[derive(Debug, Module)]
pub struct TransformerEncoderBlock<B: Backend> {
    /// Блок многоголового self-attention (pre-norm).
    msa_block: MultiheadSelfAttentionBlock<B>,
    /// MLP-блок (pre-norm).
    mlp_block: MlpBlock<B>,
}

impl<B: Backend> TransformerEncoderBlock<B> {
    /// Выполняет прямой проход через энкодерный блок.
    ///
    /// `output = MLP(MSA(x) + x) + (MSA(x) + x)`: выход внимания складывается
    /// со своим входом (первая остаточная связь), затем MLP применяется к этой
    /// сумме и складывается с ней же (вторая остаточная связь). Остаточный
    /// путь не проходит ни через один слой дропаута.
    ///
    /// # Аргументы
    /// * `hidden_states`: Входной тензор, форма `[batch_size, seq_len, embedding_dim]`.
    ///
    /// # Возвращает
    /// Выходной тензор той же формы, что и входной.
    pub fn forward(&self, hidden_states: Tensor<B, 3>) -> Tensor<B, 3> {
        let attended = self.msa_block.forward(hidden_states.clone()) + hidden_states;
        self.mlp_block.forward(attended.clone()) + attended
    }
}
