//! Reachability probe for portfolio images.
//!
//! A terminal cannot show the picture, but it can tell whether the image
//! host answers. Each probe runs on its own task and reports back through
//! the app event channel, like any other background source.

use crate::app::event::{AppEvent, ProjectId};
use std::time::Duration;
use thiserror::Error;
use tokio::net::TcpStream;
use tokio::sync::mpsc;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("unsupported image url: {0}")]
    InvalidUrl(String),
    #[error("could not reach {host}:{port}: {source}")]
    Connect {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },
    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

/// Host and port an image URL points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    pub fn from_url(url: &str) -> Result<Self, ProbeError> {
        let invalid = || ProbeError::InvalidUrl(url.to_string());

        let (rest, default_port) = if let Some(rest) = strip_scheme(url, "https://") {
            (rest, 443)
        } else if let Some(rest) = strip_scheme(url, "http://") {
            (rest, 80)
        } else {
            return Err(invalid());
        };

        let authority = rest.split(&['/', '?', '#'][..]).next().unwrap_or_default();
        // Drop any userinfo
        let authority = authority.rsplit('@').next().unwrap_or_default();

        let (host, port) = if let Some(bracketed) = authority.strip_prefix('[') {
            let (host, after) = bracketed.split_once(']').ok_or_else(invalid)?;
            let port = match after.strip_prefix(':') {
                Some("") => default_port,
                Some(p) => p.parse().map_err(|_| invalid())?,
                None if after.is_empty() => default_port,
                None => return Err(invalid()),
            };
            (host, port)
        } else {
            match authority.rsplit_once(':') {
                Some((host, "")) => (host, default_port),
                Some((host, p)) => (host, p.parse().map_err(|_| invalid())?),
                None => (authority, default_port),
            }
        };

        if host.is_empty() {
            return Err(invalid());
        }
        Ok(Self {
            host: host.to_string(),
            port,
        })
    }
}

/// Scheme names are case-insensitive.
fn strip_scheme<'a>(url: &'a str, scheme: &str) -> Option<&'a str> {
    let head = url.get(..scheme.len())?;
    if head.eq_ignore_ascii_case(scheme) {
        url.get(scheme.len()..)
    } else {
        None
    }
}

/// Try to open a TCP connection to the image host within `timeout`.
pub async fn probe(url: &str, timeout: Duration) -> Result<(), ProbeError> {
    let endpoint = Endpoint::from_url(url)?;
    let connect = TcpStream::connect((endpoint.host.as_str(), endpoint.port));
    match tokio::time::timeout(timeout, connect).await {
        Ok(Ok(_stream)) => Ok(()),
        Ok(Err(source)) => Err(ProbeError::Connect {
            host: endpoint.host,
            port: endpoint.port,
            source,
        }),
        Err(_) => Err(ProbeError::Timeout(timeout)),
    }
}

/// Spawns probes and turns their outcome into `ImageLoaded` / `ImageFailed`.
pub struct ImageProber {
    event_tx: mpsc::UnboundedSender<AppEvent>,
    timeout: Duration,
}

impl ImageProber {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>, timeout: Duration) -> Self {
        Self { event_tx, timeout }
    }

    pub fn spawn(&self, project: ProjectId, url: String) {
        let tx = self.event_tx.clone();
        let timeout = self.timeout;
        tokio::spawn(async move {
            let event = match probe(&url, timeout).await {
                Ok(()) => AppEvent::ImageLoaded { project },
                Err(e) => AppEvent::ImageFailed {
                    project,
                    error: e.to_string(),
                },
            };
            let _ = tx.send(event);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[test]
    fn test_endpoint_from_url() {
        assert_eq!(
            Endpoint::from_url("https://placehold.co/600x400/1a202c/FFFFFF?text=Vision+AI").unwrap(),
            Endpoint {
                host: "placehold.co".into(),
                port: 443
            }
        );
        assert_eq!(
            Endpoint::from_url("http://vision.onuryaman.info").unwrap(),
            Endpoint {
                host: "vision.onuryaman.info".into(),
                port: 80
            }
        );
        assert_eq!(
            Endpoint::from_url("http://user:pw@localhost:8080/a.png").unwrap(),
            Endpoint {
                host: "localhost".into(),
                port: 8080
            }
        );
        assert_eq!(
            Endpoint::from_url("http://[::1]:9000/x").unwrap(),
            Endpoint {
                host: "::1".into(),
                port: 9000
            }
        );
        assert_eq!(Endpoint::from_url("https://[::1]/x").unwrap().port, 443);
    }

    #[test]
    fn test_endpoint_scheme_case_and_empty_port() {
        assert_eq!(
            Endpoint::from_url("HTTPS://Example.com/x").unwrap(),
            Endpoint {
                host: "Example.com".into(),
                port: 443
            }
        );
        assert_eq!(Endpoint::from_url("Http://vision.onuryaman.info").unwrap().port, 80);
        assert_eq!(
            Endpoint::from_url("http://host:/x").unwrap(),
            Endpoint {
                host: "host".into(),
                port: 80
            }
        );
        assert_eq!(Endpoint::from_url("https://[::1]:/x").unwrap().port, 443);
        assert!(matches!(Endpoint::from_url("HTTP:/x"), Err(ProbeError::InvalidUrl(_))));
    }

    #[test]
    fn test_endpoint_rejects_bad_urls() {
        assert!(matches!(Endpoint::from_url("ftp://host/x"), Err(ProbeError::InvalidUrl(_))));
        assert!(matches!(Endpoint::from_url("logo.png"), Err(ProbeError::InvalidUrl(_))));
        assert!(matches!(Endpoint::from_url("http:///x"), Err(ProbeError::InvalidUrl(_))));
        assert!(matches!(Endpoint::from_url("http://host:http/x"), Err(ProbeError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_probe_reachable_host() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let url = format!("http://127.0.0.1:{}/img.png", port);
        assert!(probe(&url, Duration::from_secs(2)).await.is_ok());
    }

    #[tokio::test]
    async fn test_probe_closed_port_fails() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        let url = format!("http://127.0.0.1:{}/img.png", port);
        assert!(probe(&url, Duration::from_secs(2)).await.is_err());
    }

    #[tokio::test]
    async fn test_prober_reports_events() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let prober = ImageProber::new(tx, Duration::from_secs(2));

        prober.spawn(3, format!("http://127.0.0.1:{}/ok.png", port));
        assert!(matches!(rx.recv().await, Some(AppEvent::ImageLoaded { project: 3 })));

        prober.spawn(4, "gopher://nowhere".to_string());
        match rx.recv().await {
            Some(AppEvent::ImageFailed { project, error }) => {
                assert_eq!(project, 4);
                assert!(error.contains("unsupported image url"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
