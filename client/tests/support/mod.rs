//! Test support: a single-connection HTTP stub and config/store helpers

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use tokio::sync::watch;

use inventory_console_client::api::ApiClient;
use inventory_console_client::config::{ApiConfig, Config, PollingConfig, SessionConfig};
use inventory_console_client::session::{CredentialStore, SessionEvent};

/// Serve the given (status, body) responses in order, one connection each,
/// then stop. Returns the base URL to point the client at.
pub fn serve(responses: Vec<(u16, &'static str)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
    let addr = listener.local_addr().expect("stub addr");

    thread::spawn(move || {
        for (status, body) in responses {
            let Ok((mut stream, _)) = listener.accept() else {
                break;
            };
            read_request(&mut stream);

            let reason = match status {
                200 => "OK",
                201 => "Created",
                400 => "Bad Request",
                401 => "Unauthorized",
                500 => "Internal Server Error",
                _ => "OK",
            };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{}", addr)
}

fn read_request(stream: &mut std::net::TcpStream) {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];

    let header_end = loop {
        match stream.read(&mut buf) {
            Ok(0) => return,
            Ok(n) => {
                data.extend_from_slice(&buf[..n]);
                if let Some(pos) = find_header_end(&data) {
                    break pos;
                }
            }
            Err(_) => return,
        }
    };

    let content_length = parse_content_length(&data[..header_end]);
    while data.len() < header_end + 4 + content_length {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => data.extend_from_slice(&buf[..n]),
        }
    }
}

fn find_header_end(data: &[u8]) -> Option<usize> {
    data.windows(4).position(|window| window == b"\r\n\r\n")
}

fn parse_content_length(headers: &[u8]) -> usize {
    let text = String::from_utf8_lossy(headers);
    text.lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse().ok()
            } else {
                None
            }
        })
        .unwrap_or(0)
}

/// Config pointing at a stub server, with an isolated credential directory
pub fn test_config(base_url: &str, tag: &str) -> Config {
    Config {
        environment: "test".to_string(),
        api: ApiConfig {
            base_url: base_url.to_string(),
        },
        session: SessionConfig {
            storage_dir: temp_dir(tag),
            idle_timeout_secs: 300,
        },
        polling: PollingConfig { interval_secs: 5 },
    }
}

pub fn temp_dir(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("invcon-test-{}-{}", tag, std::process::id()))
}

/// A credential store over a freshly wiped directory
pub fn fresh_store(tag: &str) -> CredentialStore {
    let dir = temp_dir(tag);
    let _ = std::fs::remove_dir_all(&dir);
    CredentialStore::new(dir)
}

/// An API client wired to a stub server, with its own empty credential store
pub fn test_api(base_url: &str, tag: &str) -> Arc<ApiClient> {
    let config = test_config(base_url, tag);
    let credentials = Arc::new(fresh_store(tag));
    let (events, _) = watch::channel(SessionEvent::Initial);
    Arc::new(ApiClient::new(&config, credentials, Arc::new(events)))
}
