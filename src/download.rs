use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::error::FetchError;

/// GETs `url` and returns the whole body. The status code is logged but not
/// checked, so an error page is returned like any other body.
///
/// `None` disables the timeout entirely; the blocking client would otherwise
/// apply its own 30 second default.
pub fn fetch_bytes(url: &str, timeout: Option<Duration>) -> Result<Vec<u8>, FetchError> {
    log::info!("GET {} (timeout: {:?})", url, timeout);

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(FetchError::Client)?;

    let response = client.get(url).send().map_err(|source| FetchError::Request {
        url: url.to_string(),
        source,
    })?;

    if !response.status().is_success() {
        log::warn!("{} answered with status {}, saving body anyway", url, response.status());
    }

    let bytes = response.bytes().map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })?;

    log::info!("Received {} bytes from {}", bytes.len(), url);
    Ok(bytes.to_vec())
}

/// Creates or truncates `output_path` and writes `bytes` to it. The parent
/// directory must already exist.
pub fn write_bytes(output_path: &Path, bytes: &[u8]) -> Result<(), FetchError> {
    let mut file = fs::File::create(output_path).map_err(|source| FetchError::Create {
        path: output_path.to_path_buf(),
        source,
    })?;

    file.write_all(bytes).map_err(|source| FetchError::Write {
        path: output_path.to_path_buf(),
        source,
    })?;

    log::info!("Wrote {} bytes to {:?}", bytes.len(), output_path);
    Ok(())
}

pub fn file_size(path: &Path) -> Result<u64, FetchError> {
    fs::metadata(path)
        .map(|meta| meta.len())
        .map_err(|source| FetchError::Metadata {
            path: path.to_path_buf(),
            source,
        })
}

/// Fetches `url` into `output_path` and returns the number of bytes saved.
pub fn download_file(
    url: &str,
    output_path: &Path,
    timeout: Option<Duration>,
) -> Result<usize, FetchError> {
    log::info!("Downloading from {} to {:?}", url, output_path);

    let bytes = fetch_bytes(url, timeout)?;
    write_bytes(output_path, &bytes)?;

    log::info!("Download completed: {} bytes", bytes.len());
    Ok(bytes.len())
}
