//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves canned bodies by path and records every request (method, target,
//! content type, body) so tests can assert on what was sent.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl CannedResponse {
    pub fn xml(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "application/xml",
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Request target as sent, including the query string.
    pub target: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

pub struct CaptureServer {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl CaptureServer {
    /// URL for `path` on this server (path must start with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. `routes` maps request paths
/// (query string excluded) to responses; unknown paths get 404. The server
/// runs until the process exits.
///
/// Bodies may contain the `{base}` token, replaced at serve time with the
/// server's own base URL (no trailing slash) so canned documents can
/// reference the server before its port is known.
pub fn start(routes: HashMap<&'static str, CannedResponse>) -> CaptureServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let base_url = format!("http://127.0.0.1:{}/", port);
    let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::new(Mutex::new(Vec::new()));
    let routes = Arc::new(routes);

    let thread_requests = Arc::clone(&requests);
    let thread_base = base_url.clone();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let requests = Arc::clone(&thread_requests);
            let routes = Arc::clone(&routes);
            let base = thread_base.clone();
            thread::spawn(move || handle(stream, &base, &routes, &requests));
        }
    });

    CaptureServer { base_url, requests }
}

fn handle(
    mut stream: std::net::TcpStream,
    base_url: &str,
    routes: &HashMap<&'static str, CannedResponse>,
    requests: &Mutex<Vec<RecordedRequest>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));

    let Some(request) = read_request(&mut stream) else {
        return;
    };

    let path = request
        .target
        .split('?')
        .next()
        .unwrap_or("")
        .to_string();
    requests.lock().unwrap().push(request);

    let mut response = match routes.get(path.as_str()) {
        Some(r) => r.clone(),
        None => CannedResponse::status(404),
    };
    if let Ok(text) = std::str::from_utf8(&response.body) {
        if text.contains("{base}") {
            response.body = text
                .replace("{base}", base_url.trim_end_matches('/'))
                .into_bytes();
        }
    }
    let reason = match response.status {
        200 => "OK",
        202 => "Accepted",
        404 => "Not Found",
        _ => "Status",
    };
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        reason,
        response.content_type,
        response.body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&response.body);
}

fn read_request(stream: &mut std::net::TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_header_end(&buf) {
            break pos;
        }
        if buf.len() > 64 * 1024 {
            return None;
        }
    };

    let head = std::str::from_utf8(&buf[..header_end]).ok()?;
    let mut lines = head.split("\r\n");
    let request_line = lines.next()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let target = parts.next()?.to_string();

    let mut content_length = 0usize;
    let mut content_type = None;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.parse().unwrap_or(0);
            }
            if name.eq_ignore_ascii_case("content-type") {
                content_type = Some(value.to_string());
            }
        }
    }

    let mut body = buf[header_end + 4..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }
    body.truncate(content_length);

    Some(RecordedRequest {
        method,
        target,
        content_type,
        body,
    })
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
