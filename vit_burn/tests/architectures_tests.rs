use vit_burn::{ModelInfo, ModelType, VitCoreError, VitModelConfig};

#[test]
fn test_preset_name_resolution() {
    assert_eq!(
        ModelType::from_preset_name("vit-base-16").unwrap(),
        ModelType::VitBase16
    );
    assert_eq!(
        ModelType::from_preset_name("vit-large-16").unwrap(),
        ModelType::VitLarge16
    );
    assert_eq!(
        ModelType::from_preset_name("vit-huge-14").unwrap(),
        ModelType::VitHuge14
    );
}

#[test]
fn test_unknown_preset_name_is_invalid_config() {
    let result = ModelType::from_preset_name("vit-giant-7");
    match result {
        Err(VitCoreError::InvalidConfig(msg)) => {
            assert!(msg.contains("vit-giant-7"));
        }
        other => panic!("Ожидалась InvalidConfig, получено {other:?}"),
    }
}

#[test]
fn test_vit_base_preset_geometry() {
    let info = ModelType::VitBase16.info();
    assert_eq!(info.image_size, 224);
    assert_eq!(info.patch_size, 16);
    assert_eq!(info.hidden_size, 768);
    assert_eq!(info.num_hidden_layers, 12);
    assert_eq!(info.num_attention_heads, 12);
    assert_eq!(info.intermediate_size, 3072);
    assert_eq!(info.num_classes, 1000);
}

#[test]
fn test_preset_config_keeps_default_dropouts() {
    let config = ModelType::VitLarge16.config();
    assert_eq!(config.embedding_dim, 1024);
    assert_eq!(config.num_transformer_layers, 24);
    assert_eq!(config.num_heads, 16);
    assert_eq!(config.mlp_size, 4096);
    // Вероятности дропаута не входят в мета-информацию и остаются дефолтными.
    assert!((config.mlp_dropout - 0.1).abs() < f64::EPSILON);
    assert!(config.attn_dropout.abs() < f64::EPSILON);
    assert!((config.embedding_dropout - 0.1).abs() < f64::EPSILON);
}

#[test]
fn test_model_info_from_json() {
    let raw = r#"{
        "model_type": "vit-huge-14",
        "image_size": 224,
        "patch_size": 14,
        "hidden_size": 1280,
        "num_hidden_layers": 32,
        "num_attention_heads": 16,
        "intermediate_size": 5120,
        "num_classes": 1000
    }"#;
    let info = ModelInfo::from_json_str(raw).unwrap();
    assert_eq!(info, ModelType::VitHuge14.info());

    let config: VitModelConfig = info.into();
    assert_eq!(config.img_size, 224);
    assert_eq!(config.patch_size, 14);
    assert_eq!(config.embedding_dim, 1280);
}

#[test]
fn test_model_info_invalid_json_is_invalid_config() {
    let result = ModelInfo::from_json_str("{ not json }");
    assert!(matches!(result, Err(VitCoreError::InvalidConfig(_))));
}

#[test]
fn test_model_type_serde_round_trip() {
    let serialized = serde_json::to_string(&ModelType::VitBase16).unwrap();
    assert_eq!(serialized, "\"vit-base-16\"");
    let deserialized: ModelType = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, ModelType::VitBase16);
}
