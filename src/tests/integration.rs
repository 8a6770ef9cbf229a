//! Integration tests over the built-in catalog
//!
//! These tests run the whole flow a search would: enumerate the built-in
//! kinds, assemble the search space, pick values, and initialize instances
//! with their share of the assignment.

use std::collections::HashMap;

use crate::core::block::Block;
use crate::core::block_type::FLATTEN_TYPES;
use crate::core::hparams::{scoped_values, Hyperparameters, ParameterValue};
use crate::runtime::search_space::namespace_prefix;
use crate::runtime::{BlockSelection, Blocks, SearchSpaceConfig};

#[test]
fn test_builtin_enumeration() {
    let blocks = Blocks::new().unwrap();
    let types = blocks.types();

    assert_eq!(types.len(), 15);
    assert_eq!(types.by_name("FIXED_CHANNEL_CONVOLUTION_16").unwrap().value(), 1);
    assert_eq!(types.iter().last().unwrap(), types.empty());

    let flatten: Vec<_> = types.flatten_types().into_iter().map(|t| t.name()).collect();
    assert_eq!(flatten, FLATTEN_TYPES.to_vec());
}

#[test]
fn test_builtin_search_space() {
    let blocks = Blocks::new().unwrap();
    let space = blocks.search_space(&BlockSelection::All).unwrap();

    let keys: Vec<_> = space.keys().collect();
    assert_eq!(
        keys,
        vec![
            "TUNABLE_CONVOLUTION_kernel_size",
            "TUNABLE_CONVOLUTION_output_channels",
            "TUNABLE_CONVOLUTION_activation",
            "TUNABLE_FULLY_CONNECTED_output_size",
            "TUNABLE_FULLY_CONNECTED_dropout_rate",
            "TUNABLE_SVDF_rank",
            "TUNABLE_SVDF_memory_size",
            "TUNABLE_SVDF_units",
            "DOWNSAMPLE_FLATTEN_pool_size",
        ]
    );

    let flatten_only = blocks
        .search_space(&BlockSelection::only(FLATTEN_TYPES))
        .unwrap();
    assert_eq!(flatten_only.keys().collect::<Vec<_>>(), vec!["DOWNSAMPLE_FLATTEN_pool_size"]);
}

#[test]
fn test_assignment_flows_back_into_instances() {
    let blocks = Blocks::new().unwrap();
    let config = SearchSpaceConfig::from_json_str(
        r#"{"blocks_to_use": ["TUNABLE_CONVOLUTION", "DOWNSAMPLE_FLATTEN"], "strict": true}"#,
    )
    .unwrap();
    let space = blocks.search_space_with_config(&config).unwrap();

    // a "trial": every key at its default, kernel size overridden
    let mut assignment = space.fill_defaults(&HashMap::new());
    assignment.insert(
        "TUNABLE_CONVOLUTION_kernel_size".to_string(),
        ParameterValue::Integer(7),
    );
    assert!(space.validate(&assignment).valid);

    let conv_type = blocks.types().by_name("TUNABLE_CONVOLUTION").unwrap();
    let mut conv = blocks.get_new(conv_type, Some("conv_0")).unwrap();
    conv.initialize(&scoped_values(&assignment, &namespace_prefix(conv_type)))
        .unwrap();
    assert_eq!(conv.parameters()["kernel_size"], ParameterValue::Integer(7));
    assert_eq!(conv.parameters()["output_channels"], ParameterValue::Integer(16));

    let flatten_type = blocks.types().by_name("DOWNSAMPLE_FLATTEN").unwrap();
    let mut flatten = blocks.get_new(flatten_type, None).unwrap();
    flatten
        .initialize(&scoped_values(&assignment, &namespace_prefix(flatten_type)))
        .unwrap();
    assert!(flatten_type.is_flatten());
    assert_eq!(flatten.name(), "DOWNSAMPLE_FLATTEN");
}

#[test]
fn test_same_kind_used_twice() {
    let blocks = Blocks::new().unwrap();
    let lstm = blocks.types().by_name("LSTM_128").unwrap();

    let encoder = blocks.get_new(lstm, Some("encoder")).unwrap();
    let decoder = blocks.get_new(lstm, Some("decoder")).unwrap();

    assert_eq!(encoder.metadata(), decoder.metadata());
    assert_ne!(encoder.name(), decoder.name());
    assert_ne!(encoder.id(), decoder.id());
}

#[test]
fn test_search_space_json_round_trip() {
    let blocks = Blocks::new().unwrap();
    let space = blocks.search_space(&BlockSelection::All).unwrap();

    let json = space.to_json().unwrap();
    let back: Hyperparameters = serde_json::from_str(&json).unwrap();
    assert_eq!(back, space);
}
