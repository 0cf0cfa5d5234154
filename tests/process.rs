//! API server process lifecycle: spawn, readiness wait, startup failure.

use std::time::{Duration, Instant};

use serverless_proxy::backend::ApiProcess;
use serverless_proxy::config::BackendConfig;
use serverless_proxy::error::ProxyError;

mod common;

fn backend_config(command: String, port: u16, startup_timeout_secs: u64) -> BackendConfig {
    BackendConfig {
        command,
        host: "127.0.0.1".to_string(),
        port,
        startup_timeout_secs,
        ..BackendConfig::default()
    }
}

#[tokio::test]
async fn test_start_succeeds_once_port_is_open() {
    // A listener standing in for the spawned command's server socket.
    let backend = common::start_scripted_backend("HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n").await;
    let config = backend_config("sleep 30".to_string(), backend.port(), 5);

    let process = ApiProcess::start(&config).await.expect("startup should succeed");
    let pid = process.id().expect("process should be running");
    assert!(common::process_exists(pid));

    process.shutdown().await;
    assert!(!common::process_exists(pid));
}

#[tokio::test]
async fn test_startup_timeout_kills_process() {
    let dir = tempfile::tempdir().unwrap();
    let pidfile = dir.path().join("pid");
    // The command records its own pid so the test can check it was killed.
    let command = format!("echo $$ > {}; exec sleep 30", pidfile.display());

    let closed = common::closed_port().await;
    let config = backend_config(command, closed.port(), 1);

    let started = Instant::now();
    let err = ApiProcess::start(&config).await.unwrap_err();
    assert!(matches!(err, ProxyError::Startup(_)));
    assert!(started.elapsed() >= Duration::from_secs(1));

    let pid: u32 = std::fs::read_to_string(&pidfile)
        .expect("command should have run")
        .trim()
        .parse()
        .unwrap();
    assert!(
        !common::process_exists(pid),
        "spawned process {pid} should be gone after startup failure"
    );
}

#[tokio::test]
async fn test_spawn_failure_is_startup_error() {
    let closed = common::closed_port().await;
    let mut config = backend_config("sleep 30".to_string(), closed.port(), 1);
    // An empty PATH means `sh` cannot be found at all.
    config.path_env = String::new();

    // `sh` resolution happens at spawn; with no PATH the spawn itself
    // cannot fail on all platforms, so accept either Startup shape.
    let err = ApiProcess::start(&config).await.unwrap_err();
    assert!(matches!(err, ProxyError::Startup(_)));
}

#[tokio::test]
async fn test_backend_receives_port_env() {
    let dir = tempfile::tempdir().unwrap();
    let envfile = dir.path().join("env");
    let backend = common::start_scripted_backend("HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n").await;
    let command = format!("echo \"$PORT\" > {}; exec sleep 30", envfile.display());
    let config = backend_config(command, backend.port(), 5);

    let process = ApiProcess::start(&config).await.unwrap();
    // The probe can pass before the shell has written the file.
    tokio::time::sleep(Duration::from_millis(200)).await;
    let recorded = std::fs::read_to_string(&envfile).unwrap();
    assert_eq!(recorded.trim(), backend.port().to_string());

    process.shutdown().await;
}
