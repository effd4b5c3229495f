use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::io;

use super::load_corpus;

/// Builds once and serves the result over a minimal single-request
/// HTTP/1.0 responder, for local preview.
pub fn run(file: &Path, port: u16) -> anyhow::Result<()> {
    let corpus = load_corpus(file)?;
    let body = io::css::emit(&corpus, false);

    let listener = TcpListener::bind(("127.0.0.1", port))?;
    println!("serving last build of {} on http://127.0.0.1:{port}", file.display());

    for stream in listener.incoming() {
        let mut stream = stream?;
        let mut buf = [0u8; 1024];
        let _ = stream.read(&mut buf);

        let response = format!(
            "HTTP/1.0 200 OK\r\nContent-Type: text/css\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        );
        stream.write_all(response.as_bytes())?;
    }

    Ok(())
}
