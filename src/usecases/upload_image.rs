//! Use case for turning an image file into an inline data reference.
//!
//! Reading and encoding runs on a worker thread so large files never stall
//! the event loop. Completions are delivered over a channel and applied to
//! whatever state exists at that point — by target lookup, last-write-wins —
//! rather than against the state snapshot that started the decode.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::mpsc::{channel, Receiver, Sender},
    thread,
};

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Where a finished decode lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageTarget {
    /// Append a new image message.
    Message,
    /// Set the avatar of the participant at this index.
    Avatar(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub target: ImageTarget,
    pub data_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeFailure {
    pub path: PathBuf,
    pub reason: String,
}

pub type DecodeResult = Result<DecodedImage, DecodeFailure>;

/// Channel endpoints connecting decode workers to the event loop.
pub struct DecodeQueue {
    tx: Sender<DecodeResult>,
    rx: Receiver<DecodeResult>,
}

impl DecodeQueue {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self { tx, rx }
    }

    /// Reads and encodes `path` off-thread. The completion shows up in
    /// `drain` once the worker finishes.
    pub fn spawn_decode(&self, path: PathBuf, target: ImageTarget) {
        let tx = self.tx.clone();
        thread::spawn(move || {
            // A closed receiver means the shell already shut down.
            let _ = tx.send(decode_image_file(&path, target));
        });
    }

    /// Drains finished decodes without blocking.
    pub fn drain(&self) -> Vec<DecodeResult> {
        self.rx.try_iter().collect()
    }

    #[cfg(test)]
    pub fn push_for_test(&self, result: DecodeResult) {
        self.tx.send(result).expect("queue receiver must be alive");
    }
}

impl Default for DecodeQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Synchronous body of the decode worker.
pub fn decode_image_file(path: &Path, target: ImageTarget) -> DecodeResult {
    let bytes = fs::read(path).map_err(|error| DecodeFailure {
        path: path.to_path_buf(),
        reason: error.to_string(),
    })?;

    Ok(DecodedImage {
        target,
        data_uri: to_data_uri(path, &bytes),
    })
}

/// Builds a `data:` URI for the file contents, sniffing the mime type from
/// magic bytes with an extension fallback.
pub fn to_data_uri(path: &Path, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        sniff_mime(path, bytes),
        STANDARD.encode(bytes)
    )
}

fn sniff_mime(path: &Path, bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        return "image/png";
    }
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return "image/jpeg";
    }
    if bytes.starts_with(b"GIF8") {
        return "image/gif";
    }
    if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return "image/webp";
    }

    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.to_ascii_lowercase());
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}
