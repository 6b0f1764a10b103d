use crate::cli_context::{CliContext, CliContextBuilder};
use crate::error::AdminError;

#[test]
fn test_cli_context_new() {
    let context = CliContext::new();
    let _ = context;
}

#[test]
fn test_builder_uses_explicit_database_credentials() {
    let mut context = CliContextBuilder::new()
        .with_database("https://db.example.com", "anon-key")
        .with_sheet_url("https://sheetdb.io/api/v1/abc")
        .build();

    assert!(context.has_database_credentials());
    assert!(context.has_sheet_url());

    let credentials = context.database_credentials().unwrap();
    assert_eq!(credentials.url, "https://db.example.com");
    assert_eq!(credentials.key, "anon-key");
    assert_eq!(context.sheet_url().unwrap(), "https://sheetdb.io/api/v1/abc");
}

#[test]
fn test_clients_are_created_once_and_shared() {
    let mut context = CliContextBuilder::new()
        .with_database("https://db.example.com", "anon-key")
        .with_sheet_url("https://sheetdb.io/api/v1/abc")
        .build();

    let first = context.database_client().unwrap();
    let second = context.database_client().unwrap();
    assert!(std::sync::Arc::ptr_eq(&first, &second));

    assert!(context.sheet_client().is_ok());
}

#[test]
fn test_invalid_sheet_url_is_rejected() {
    let mut context = CliContextBuilder::new()
        .with_database("https://db.example.com", "anon-key")
        .with_sheet_url("not a url")
        .build();

    match context.sheet_client() {
        Err(AdminError::ConfigError(msg)) => assert!(msg.contains("Invalid sheet URL")),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("expected an invalid URL error"),
    }
}
