#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::Mutex;
use std::thread::JoinHandle;

use safescan_core::client::Classifier;
use safescan_core::error::{Result, ScanError};
use safescan_core::media::{PickedFile, SelectedImage};
use safescan_core::response::AnalysisResult;

/// Body the service returns for a confidently safe image.
pub const SAFE_BODY: &str = r#"{
    "predicted_class": "Safe",
    "confidence": 0.97,
    "all_scores": {"Safe": 0.97, "NSFW Mild": 0.02, "NSFW Explicit": 0.01}
}"#;

pub fn png_file(name: &str) -> PickedFile {
    PickedFile::new(name, "image/png", vec![0x89, b'P', b'N', b'G'])
}

pub fn text_file(name: &str) -> PickedFile {
    PickedFile::new(name, "text/plain", b"hello".to_vec())
}

pub fn safe_result() -> AnalysisResult {
    AnalysisResult::from_json(SAFE_BODY.as_bytes()).expect("valid body")
}

/// Outcome a [`ScriptedClassifier`] returns for one call.
pub enum Scripted {
    Body(&'static str),
    Status(u16),
    Offline,
}

/// Classifier double that replays scripted outcomes and records the names of
/// the images it was asked about.
pub struct ScriptedClassifier {
    script: Mutex<Vec<Scripted>>,
    pub calls: Mutex<Vec<String>>,
}

impl ScriptedClassifier {
    pub fn new(mut script: Vec<Scripted>) -> Self {
        script.reverse();
        Self {
            script: Mutex::new(script),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Classifier for ScriptedClassifier {
    fn classify(&self, image: &SelectedImage) -> Result<AnalysisResult> {
        self.calls.lock().unwrap().push(image.name().to_string());
        match self.script.lock().unwrap().pop() {
            Some(Scripted::Body(body)) => AnalysisResult::from_json(body.as_bytes()),
            Some(Scripted::Status(status)) => Err(ScanError::ServiceError {
                status,
                body: String::new(),
            }),
            Some(Scripted::Offline) | None => {
                Err(ScanError::NetworkFailure("connection refused".into()))
            }
        }
    }
}

/// Serve exactly one HTTP response on a local port.
///
/// Returns the URL to POST to and a handle yielding the raw request bytes.
pub fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local port");
    let url = format!("http://{}/predict", listener.local_addr().unwrap());

    let handle = std::thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept connection");
        let mut reader = BufReader::new(stream);
        let mut request = Vec::new();
        let mut content_length = 0usize;
        let mut chunked = false;

        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).expect("read header") == 0 {
                break;
            }
            request.extend_from_slice(line.as_bytes());
            let lower = line.to_ascii_lowercase();
            if let Some(value) = lower.strip_prefix("content-length:") {
                content_length = value.trim().parse().unwrap_or(0);
            }
            if lower.starts_with("transfer-encoding:") && lower.contains("chunked") {
                chunked = true;
            }
            if line == "\r\n" {
                break;
            }
        }

        if chunked {
            while !request.ends_with(b"\r\n0\r\n\r\n") {
                let mut byte = [0u8; 1];
                if reader.read(&mut byte).expect("read body") == 0 {
                    break;
                }
                request.push(byte[0]);
            }
        } else {
            let mut body_bytes = vec![0u8; content_length];
            reader.read_exact(&mut body_bytes).expect("read body");
            request.extend_from_slice(&body_bytes);
        }

        let mut stream = reader.into_inner();
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).expect("write response");
        stream.flush().expect("flush");
        request
    });

    (url, handle)
}
