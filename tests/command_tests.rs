use gas_metrics_report::commands::{
    execute_report, validate_config, validate_metrics_file, ReportConfig, ReportKind,
};
use gas_metrics_report::utils::LoadError;
use std::fs;
use std::process::Command;

#[test]
fn test_missing_input_fails_before_output_dir() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output_dir = temp_dir.path().join("charts");
    let config = ReportConfig {
        output_dir: output_dir.clone(),
        ..ReportConfig::new(ReportKind::Reentrancy, temp_dir.path().join("nope.json"))
    };

    let err = execute_report(config).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<LoadError>(),
        Some(LoadError::NotFound(_))
    ));
    assert!(!output_dir.exists());
}

#[test]
fn test_binary_exits_one_on_missing_input() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output_dir = temp_dir.path().join("out");

    let status = Command::new(env!("CARGO_BIN_EXE_gas-report"))
        .arg("report")
        .arg("--kind")
        .arg("oracle")
        .arg("--metrics")
        .arg(temp_dir.path().join("missing.json"))
        .arg("--output-dir")
        .arg(&output_dir)
        .env_remove("METRICS_JSON")
        .env_remove("OUTPUT_DIR")
        .env_remove("PRICE_USD")
        .env_remove("MAX_CALLS")
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(1));
    assert!(!output_dir.exists());
}

#[test]
fn test_validate_metrics_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("metrics_output.json");
    fs::write(
        &path,
        r#"[{"contract": "A", "action": "deploy", "gasUsed": 1000, "feeWei": 0, "bytecodeSizeBytes": 10}]"#,
    )
    .unwrap();

    assert!(validate_metrics_file(&path).is_ok());
}

#[test]
fn test_validate_metrics_file_missing_field() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("metrics_output.json");
    fs::write(&path, r#"[{"contract": "A", "action": "deploy", "feeWei": 0}]"#).unwrap();

    let err = validate_metrics_file(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("gasUsed"));
}

#[test]
fn test_validate_config_defaults_per_kind() {
    for kind in [ReportKind::Oracle, ReportKind::Reentrancy] {
        let config = ReportConfig::new(kind, "metrics_output.json");
        assert!(validate_config(&config).is_ok());
    }
}

#[test]
fn test_validate_metrics_file_non_integer_names_field() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("metrics_output.json");
    fs::write(
        &path,
        r#"[{"contract": "A", "action": "deploy", "gasUsed": 12.5, "feeWei": 0}]"#,
    )
    .unwrap();

    let err = validate_metrics_file(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("gasUsed"));
}
