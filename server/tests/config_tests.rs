// tests/config_tests.rs
mod common;
use common::*;

use serial_test::serial;
use shopsmart_server::{AppConfig, AppError, LogFormat, StorageBackend};
use std::collections::HashMap;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
  let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
  move |key: &str| map.get(key).cloned()
}

#[test]
fn test_defaults_with_database_url() {
  setup_tracing();
  let cfg = AppConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/shopsmart")])).unwrap();

  assert_eq!(cfg.server_host, "127.0.0.1");
  assert_eq!(cfg.server_port, 8080);
  assert_eq!(cfg.storage_backend, StorageBackend::Postgres);
  assert_eq!(cfg.database_url.as_deref(), Some("postgres://localhost/shopsmart"));
  assert_eq!(cfg.database_max_connections, 5);
  assert!(!cfg.seed_db);
  assert_eq!(cfg.log_format, LogFormat::Text);
  assert_eq!(cfg.bind_address(), "127.0.0.1:8080");
}

#[test]
fn test_postgres_backend_requires_database_url() {
  setup_tracing();
  match AppConfig::from_lookup(lookup(&[])) {
    Err(AppError::Config(msg)) => assert!(msg.contains("DATABASE_URL")),
    other => panic!("Expected Config error, got {:?}", other),
  }
}

#[test]
fn test_memory_backend_needs_no_database() {
  setup_tracing();
  let cfg = AppConfig::from_lookup(lookup(&[
    ("STORAGE_BACKEND", "memory"),
    ("SERVER_PORT", "3001"),
    ("SEED_DB", "true"),
    ("LOG_FORMAT", "json"),
  ]))
  .unwrap();

  assert_eq!(cfg.storage_backend, StorageBackend::Memory);
  assert_eq!(cfg.database_url, None);
  assert_eq!(cfg.server_port, 3001);
  assert!(cfg.seed_db);
  assert_eq!(cfg.log_format, LogFormat::Json);
}

#[test]
fn test_invalid_values_are_config_errors() {
  setup_tracing();
  let bad_inputs: Vec<Vec<(&str, &str)>> = vec![
    vec![("STORAGE_BACKEND", "memory"), ("SERVER_PORT", "eighty")],
    vec![("STORAGE_BACKEND", "mongo")],
    vec![("STORAGE_BACKEND", "memory"), ("SEED_DB", "yes please")],
    vec![("STORAGE_BACKEND", "memory"), ("LOG_FORMAT", "xml")],
    vec![("DATABASE_URL", "postgres://x"), ("DATABASE_MAX_CONNECTIONS", "0")],
  ];
  for vars in bad_inputs {
    let result = AppConfig::from_lookup(lookup(&vars));
    assert!(matches!(result, Err(AppError::Config(_))), "vars {:?} gave {:?}", vars, result);
  }
}

#[test]
#[serial]
fn test_from_env_reads_process_environment() {
  setup_tracing();
  std::env::set_var("STORAGE_BACKEND", "memory");
  std::env::set_var("SERVER_HOST", "0.0.0.0");
  std::env::set_var("SERVER_PORT", "9090");

  let cfg = AppConfig::from_env().unwrap();

  std::env::remove_var("STORAGE_BACKEND");
  std::env::remove_var("SERVER_HOST");
  std::env::remove_var("SERVER_PORT");

  assert_eq!(cfg.storage_backend, StorageBackend::Memory);
  assert_eq!(cfg.bind_address(), "0.0.0.0:9090");
}
