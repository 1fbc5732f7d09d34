#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

pub struct FeedServer {
    pub base_url: String,
    requests: Receiver<String>,
}

impl FeedServer {
    /// Serves a single response with the given status and body, then exits.
    pub fn respond_once(status: &str, body: &[u8]) -> Self {
        Self::respond_after(Duration::ZERO, status, body)
    }

    /// Like `respond_once`, but holds the response back for `delay`.
    pub fn respond_after(delay: Duration, status: &str, body: &[u8]) -> Self {
        let mut response = head(status, body.len()).into_bytes();
        response.extend_from_slice(body);
        Self::serve(delay, response)
    }

    /// Announces `declared_len` bytes, sends `body`, and closes the connection.
    pub fn respond_short(declared_len: usize, body: &[u8]) -> Self {
        let mut response = head("200 OK", declared_len).into_bytes();
        response.extend_from_slice(body);
        Self::serve(Duration::ZERO, response)
    }

    fn serve(delay: Duration, response: Vec<u8>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
        let addr = listener.local_addr().expect("listener address");
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept connection");

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).expect("read request");
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let request_line = String::from_utf8_lossy(&request)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string();
            let _ = tx.send(request_line);

            thread::sleep(delay);
            stream.write_all(&response).expect("write response");
            stream.flush().expect("flush response");
        });

        Self {
            base_url: format!("http://{}", addr),
            requests: rx,
        }
    }

    pub fn request_line(&self) -> String {
        self.requests.recv().expect("server saw a request")
    }
}

fn head(status: &str, content_length: usize) -> String {
    format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status, content_length
    )
}

/// A base URL nothing is listening on.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);
    format!("http://{}", addr)
}
