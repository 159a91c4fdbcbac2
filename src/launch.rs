//! Hands project links and the contact address to the desktop.

use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("refusing to open {0}: only http, https and mailto links are supported")]
    UnsupportedScheme(String),
    #[error("failed to start {opener}: {source}")]
    Spawn {
        opener: &'static str,
        #[source]
        source: std::io::Error,
    },
}

pub fn mailto(address: &str) -> String {
    format!("mailto:{}", address)
}

pub fn check_target(target: &str) -> Result<(), LaunchError> {
    let lower = target.to_ascii_lowercase();
    let supported = ["http://", "https://", "mailto:"]
        .iter()
        .any(|scheme| lower.starts_with(scheme) && lower.len() > scheme.len());
    if supported {
        Ok(())
    } else {
        Err(LaunchError::UnsupportedScheme(target.to_string()))
    }
}

/// Platform opener and its arguments for `target`.
fn opener(target: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open", vec![target.to_string()])
    } else if cfg!(windows) {
        (
            "cmd",
            vec!["/C".into(), "start".into(), String::new(), target.to_string()],
        )
    } else {
        ("xdg-open", vec![target.to_string()])
    }
}

/// Start the opener in the background. The child is reaped on its own task
/// and a non-zero exit is only logged.
pub fn open(target: &str) -> Result<(), LaunchError> {
    check_target(target)?;
    let (program, args) = opener(target);
    let mut child = Command::new(program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| LaunchError::Spawn {
            opener: program,
            source,
        })?;

    let target = target.to_string();
    tokio::spawn(async move {
        match child.wait().await {
            Ok(status) if status.success() => tracing::debug!(%target, "opened"),
            Ok(status) => tracing::warn!(%target, %status, "opener exited with failure"),
            Err(e) => tracing::warn!(%target, error = %e, "failed to wait for opener"),
        }
    });
    Ok(())
}
