use shellkit::{quote, run, Error};

#[test]
fn quoted_token_survives_shell_word_splitting() {
    let tokens = vec!["printf".to_string(), "%s".to_string(), quote("a b")];
    let result = run(&tokens).unwrap();

    assert!(result.success);
    assert_eq!(result.stdout, "a b");
}

#[test]
fn failed_run_reports_original_command_line() {
    let err = run(&["ls", "/nonexistent_path_xyz"]).unwrap_err();

    assert_eq!(err.code(), "COMMAND_FAILED");
    let message = err.to_string();
    assert!(message.starts_with("Failed call:"));
    assert!(message.contains("ls /nonexistent_path_xyz"));
}

#[test]
fn command_failed_exposes_exit_code() {
    let err = run(&["false"]).unwrap_err();

    match err {
        Error::CommandFailed { exit_code, .. } => assert_eq!(exit_code, 1),
        other => panic!("expected CommandFailed, got {:?}", other),
    }
}

#[test]
fn execution_result_omits_empty_output_fields() {
    let result = run(&["true"]).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert!(json.get("stdout").is_none());
    assert!(json.get("stderr").is_none());
    assert_eq!(json["success"], true);
    assert_eq!(json["exit_code"], 0);
}
