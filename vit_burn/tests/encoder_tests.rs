use burn::tensor::{Distribution, Tensor};
use burn_ndarray::{NdArray, NdArrayDevice};
use vit_burn::TransformerEncoderBlockConfig;

type TestBackend = NdArray<f32>;

fn block_config() -> TransformerEncoderBlockConfig {
    TransformerEncoderBlockConfig {
        embedding_dim: 32,
        num_heads: 4,
        mlp_size: 64,
        mlp_dropout: 0.0,
        attn_dropout: 0.0,
    }
}

#[test]
fn test_block_output_shape_equals_input_shape() {
    let device = NdArrayDevice::Cpu;
    let block = block_config().init::<TestBackend>(&device).unwrap();

    let input =
        Tensor::<TestBackend, 3>::random([2, 17, 32], Distribution::Default, &device);
    let output = block.forward(input);

    assert_eq!(output.dims(), [2, 17, 32]);
}

#[test]
fn test_stacking_blocks_preserves_shape() {
    let device = NdArrayDevice::Cpu;
    let blocks: Vec<_> = (0..4)
        .map(|_| block_config().init::<TestBackend>(&device).unwrap())
        .collect();

    let mut hidden =
        Tensor::<TestBackend, 3>::random([3, 17, 32], Distribution::Default, &device);
    for block in &blocks {
        hidden = block.forward(hidden);
        assert_eq!(hidden.dims(), [3, 17, 32]);
    }
}
