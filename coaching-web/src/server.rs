//! Static file server for the coaching page
//!
//! Serves the Trunk build from `dist/`. Unknown paths fall back to
//! `index.html` so `/?session=<id>` links and client-side routes resolve.
//! The bind address comes from `COACHING_SERVER_ADDR` (default
//! `127.0.0.1:8080`).

use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};

use lib_utils::envs::get_env_or;

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const DIST_DIR: &str = "dist";
const NOT_FOUND_PAGE: &[u8] =
    b"<!DOCTYPE html><html><body><h1>Error: Index not found</h1></body></html>";

fn main() -> io::Result<()> {
    let addr = get_env_or("COACHING_SERVER_ADDR", DEFAULT_ADDR);
    let listener = TcpListener::bind(&addr)?;

    println!("Coaching Flow server running at http://{}", addr);
    println!("Serving from {}/ directory", DIST_DIR);
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
    Ok(())
}

fn handle_client(mut stream: TcpStream) {
    let request_line = match BufReader::new(&mut stream).lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let target = request_line.split_whitespace().nth(1).unwrap_or("/");
    let file_path = resolve_path(Path::new(DIST_DIR), target);

    let response = match fs::read(&file_path) {
        Ok(contents) => Response::ok(content_type(&file_path), contents),
        Err(e) => {
            eprintln!("Failed to read {}: {}", file_path.display(), e);
            Response::not_found()
        }
    };

    if let Err(e) = response.write_to(&mut stream) {
        eprintln!("Failed to write response: {}", e);
    }
}

/// Map a request target to a file under `root`, ignoring the query string.
///
/// Directories, missing files and anything escaping `root` resolve to
/// `index.html`.
fn resolve_path(root: &Path, target: &str) -> PathBuf {
    let index = root.join("index.html");
    let path = target.split_once('?').map_or(target, |(path, _)| path);
    let relative = path.trim_start_matches('/');

    if relative.is_empty() || relative.split('/').any(|part| part == "..") {
        return index;
    }

    let candidate = root.join(relative);
    if candidate.is_file() {
        candidate
    } else {
        index
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}

struct Response {
    status: &'static str,
    content_type: &'static str,
    body: Vec<u8>,
}

impl Response {
    fn ok(content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            status: "200 OK",
            content_type,
            body,
        }
    }

    fn not_found() -> Self {
        Self {
            status: "404 NOT FOUND",
            content_type: "text/html",
            body: NOT_FOUND_PAGE.to_vec(),
        }
    }

    fn write_to(&self, stream: &mut impl Write) -> io::Result<()> {
        write!(
            stream,
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nAccess-Control-Allow-Origin: *\r\nContent-Length: {}\r\n\r\n",
            self.status,
            self.content_type,
            self.body.len()
        )?;
        stream.write_all(&self.body)?;
        stream.flush()
    }
}
