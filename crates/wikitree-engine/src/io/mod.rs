use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use reqwest::StatusCode;
use reqwest::blocking::Client;

const USER_AGENT: &str = concat!("wikitree/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Failed to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Fetching {url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },
}

/// A document as a sequence of lines, newline terminators stripped.
pub type LineSource = Box<dyn Iterator<Item = Result<String, IoError>>>;

/// Build the HTTP client used for every fetch in a run.
pub fn http_client() -> Result<Client, IoError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(IoError::Client)
}

/// Split any buffered reader into lines.
///
/// Both `\n` and `\r\n` terminators are removed.
pub fn lines_from_reader<R>(reader: R) -> impl Iterator<Item = Result<String, IoError>>
where
    R: BufRead,
{
    reader.lines().map(|line| line.map_err(IoError::Io))
}

/// Open a local file as a line source
pub fn read_lines(path: &Path) -> Result<LineSource, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    Ok(Box::new(lines_from_reader(BufReader::new(file))))
}

/// Fetch a URL and expose the response body as a line source.
///
/// Non-success status codes are errors. The body is streamed, so a transport
/// failure part way through surfaces as an error from the iterator.
pub fn fetch_lines(client: &Client, url: &str) -> Result<LineSource, IoError> {
    log::info!("Fetching {url}");
    let response = client.get(url).send().map_err(|source| IoError::Http {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(IoError::Status {
            url: url.to_string(),
            status,
        });
    }

    Ok(Box::new(lines_from_reader(BufReader::new(response))))
}

/// Open a source by identifier: `http(s)://` URLs are fetched, anything else
/// (optionally prefixed with `file://`) is read from disk.
pub fn open_source(client: &Client, source: &str) -> Result<LineSource, IoError> {
    if is_remote(source) {
        return fetch_lines(client, source);
    }
    let path = source.strip_prefix("file://").unwrap_or(source);
    log::info!("Reading {path}");
    read_lines(Path::new(path))
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}
