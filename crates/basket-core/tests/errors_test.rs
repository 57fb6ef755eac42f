//! Tests for the basket error handling system.

use basket_core::errors::error_code::{self, BasketErrorCode};
use basket_core::errors::*;

/// Every error enum has a BasketErrorCode implementation.
#[test]
fn test_all_errors_have_error_code() {
    let load = LoadError::EmptyTransactionId { record: 3 };
    assert!(!load.error_code().is_empty());

    let filter = FilterError::EmptyRuleSet;
    assert!(!filter.error_code().is_empty());

    let config = ConfigError::FileNotFound {
        path: "/tmp".into(),
    };
    assert!(!config.error_code().is_empty());

    let pipeline = PipelineError::Filter(FilterError::EmptyRuleSet);
    assert!(!pipeline.error_code().is_empty());
}

/// From conversions between sub-errors and the pipeline error.
#[test]
fn test_from_conversions() {
    let load = LoadError::EmptyItemLabel {
        record: 0,
        transaction_id: "t1".into(),
    };
    let pipeline: PipelineError = load.into();
    assert!(matches!(pipeline, PipelineError::Load(_)));

    let filter = FilterError::EmptyRuleSet;
    let pipeline: PipelineError = filter.into();
    assert!(matches!(
        pipeline,
        PipelineError::Filter(FilterError::EmptyRuleSet)
    ));

    let config = ConfigError::ValidationFailed {
        field: "filters.alpha".into(),
        message: "too high".into(),
    };
    let pipeline: PipelineError = config.into();
    assert!(matches!(pipeline, PipelineError::Config(_)));
}

/// The pipeline error reports the code of the wrapped subsystem error.
#[test]
fn test_pipeline_error_code_passthrough() {
    let pipeline: PipelineError = FilterError::EmptyRuleSet.into();
    assert_eq!(pipeline.error_code(), error_code::EMPTY_RULE_SET);

    let pipeline: PipelineError = LoadError::EmptyTransactionId { record: 0 }.into();
    assert_eq!(pipeline.error_code(), error_code::INVALID_INPUT);
}

/// Code string format: `[ERROR_CODE] message`.
#[test]
fn test_code_string_format() {
    let filter = FilterError::EmptyRuleSet;
    assert_eq!(
        filter.code_string(),
        "[EMPTY_RULE_SET] Cannot filter an empty rule set"
    );

    let load = LoadError::EmptyTransactionId { record: 7 };
    let code_str = load.code_string();
    assert!(code_str.starts_with("[INVALID_INPUT]"));
    assert!(code_str.contains("Record 7"));
}

/// Every error variant's Display impl produces a human-readable message.
#[test]
fn test_display_human_readable() {
    let errors: Vec<Box<dyn std::fmt::Display>> = vec![
        Box::new(LoadError::EmptyItemLabel {
            record: 12,
            transaction_id: "t9".into(),
        }),
        Box::new(LoadError::EmptyTransactionId { record: 0 }),
        Box::new(FilterError::EmptyRuleSet),
        Box::new(ConfigError::FileNotFound {
            path: "/nowhere/basket.toml".into(),
        }),
        Box::new(ConfigError::ParseError {
            path: "basket.toml".into(),
            message: "expected a table".into(),
        }),
        Box::new(ConfigError::ValidationFailed {
            field: "filters.alpha".into(),
            message: "must be in (0.0, 1.0]".into(),
        }),
    ];

    for error in &errors {
        let msg = error.to_string();
        // Should not contain Debug formatting artifacts
        assert!(!msg.contains("{ "), "Debug leak in: {}", msg);
        assert!(!msg.is_empty());
    }
}

/// Error codes are distinct across subsystems.
#[test]
fn test_error_codes_unique() {
    use std::collections::HashSet;

    let codes = [
        error_code::INVALID_INPUT,
        error_code::EMPTY_RULE_SET,
        error_code::CONFIG_ERROR,
    ];
    let unique: HashSet<&str> = codes.iter().copied().collect();
    assert_eq!(codes.len(), unique.len(), "Duplicate error codes found");
}
