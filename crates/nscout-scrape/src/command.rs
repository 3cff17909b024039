//! yt-dlp command builder and runner.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::{ScrapeError, ScrapeResult};

/// The scraper binary name. Build-time constant; no credentials are passed.
pub const YTDLP_BIN: &str = "yt-dlp";

/// What a search should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    All,
    Video,
    Channel,
}

impl SearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::All => "all",
            SearchKind::Video => "video",
            SearchKind::Channel => "channel",
        }
    }
}

/// A single scraper invocation, one variant per operation type.
///
/// Every variant emits JSON metadata without downloading; the flags differ
/// only in playlist handling and the target expression.
#[derive(Debug, Clone)]
pub enum YtdlpRequest {
    /// Flat search returning up to `max_results` items.
    Search {
        query: String,
        max_results: usize,
        kind: SearchKind,
    },
    /// Shallow channel fetch: metadata of the first five uploads.
    Channel { url: String },
    /// Full metadata for a single video URL.
    Video { url: String },
}

impl YtdlpRequest {
    /// Build the argument vector for this request.
    pub fn build_args(&self) -> Vec<String> {
        let mut args = vec!["--dump-json".to_string(), "--no-download".to_string()];

        match self {
            YtdlpRequest::Search {
                query,
                max_results,
                kind,
            } => {
                args.push("--flat-playlist".to_string());
                let query = match kind {
                    // Bias the search expression toward channel results.
                    SearchKind::Channel => format!("{} channel", query),
                    _ => query.clone(),
                };
                args.push(format!("ytsearch{}:{}", max_results, query));
            }
            YtdlpRequest::Channel { url } => {
                args.push("--playlist-items".to_string());
                args.push("1:5".to_string());
                args.push(url.clone());
            }
            YtdlpRequest::Video { url } => {
                args.push("--no-playlist".to_string());
                args.push(url.clone());
            }
        }

        args
    }
}

/// Captured output of a finished scraper run.
#[derive(Debug)]
pub struct YtdlpOutput {
    /// One JSON document per line.
    pub stdout: String,
}

impl YtdlpOutput {
    /// Parse stdout lines as JSON, dropping lines that do not parse.
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect()
    }
}

/// Runner enforcing a hard wall-clock timeout on the subprocess.
#[derive(Debug, Clone)]
pub struct YtdlpRunner {
    timeout: Duration,
}

impl YtdlpRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Run a request to completion.
    ///
    /// The subprocess is killed when the timeout expires. A nonzero exit
    /// fails with a short stderr excerpt.
    pub async fn run(&self, request: &YtdlpRequest) -> ScrapeResult<YtdlpOutput> {
        which::which(YTDLP_BIN).map_err(|_| ScrapeError::ToolNotFound)?;

        let args = request.build_args();
        debug!("Running scraper: {} {}", YTDLP_BIN, args.join(" "));

        let mut child = Command::new(YTDLP_BIN)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let mut stdout_pipe = child.stdout.take().expect("stdout not captured");
        let mut stderr_pipe = child.stderr.take().expect("stderr not captured");

        // Drain both pipes while waiting so the child cannot block on a
        // full pipe buffer.
        let stdout_task = tokio::spawn(async move {
            let mut buf = String::new();
            let _ = stdout_pipe.read_to_string(&mut buf).await;
            buf
        });
        let stderr_task = tokio::spawn(async move {
            let mut buf = String::new();
            let _ = stderr_pipe.read_to_string(&mut buf).await;
            buf
        });

        let status = match tokio::time::timeout(self.timeout, child.wait()).await {
            Ok(result) => result?,
            Err(_) => {
                warn!(
                    "Scraper timed out after {} seconds, killing process",
                    self.timeout.as_secs()
                );
                let _ = child.kill().await;
                return Err(ScrapeError::Timeout(self.timeout.as_secs()));
            }
        };

        let stdout = stdout_task.await.unwrap_or_default();
        let stderr = stderr_task.await.unwrap_or_default();

        if !status.success() {
            return Err(ScrapeError::failed(
                "scraper exited with non-zero status",
                Some(stderr_excerpt(&stderr)),
            ));
        }

        Ok(YtdlpOutput { stdout })
    }
}

/// Last non-empty stderr line, bounded to 200 characters.
fn stderr_excerpt(stderr: &str) -> String {
    stderr
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("no stderr output")
        .chars()
        .take(200)
        .collect()
}

/// Check the scraper binary is available.
pub fn check_ytdlp() -> ScrapeResult<PathBuf> {
    which::which(YTDLP_BIN).map_err(|_| ScrapeError::ToolNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_args() {
        let req = YtdlpRequest::Search {
            query: "ai tutorials".into(),
            max_results: 30,
            kind: SearchKind::Video,
        };
        let args = req.build_args();
        assert!(args.contains(&"--dump-json".to_string()));
        assert!(args.contains(&"--no-download".to_string()));
        assert!(args.contains(&"--flat-playlist".to_string()));
        assert!(args.contains(&"ytsearch30:ai tutorials".to_string()));
    }

    #[test]
    fn test_channel_search_biases_query() {
        let req = YtdlpRequest::Search {
            query: "cooking".into(),
            max_results: 10,
            kind: SearchKind::Channel,
        };
        assert!(req
            .build_args()
            .contains(&"ytsearch10:cooking channel".to_string()));
    }

    #[test]
    fn test_channel_args() {
        let req = YtdlpRequest::Channel {
            url: "https://www.youtube.com/@somebody".into(),
        };
        let args = req.build_args();
        assert_eq!(
            args,
            vec![
                "--dump-json",
                "--no-download",
                "--playlist-items",
                "1:5",
                "https://www.youtube.com/@somebody"
            ]
        );
    }

    #[test]
    fn test_video_args() {
        let req = YtdlpRequest::Video {
            url: "https://www.youtube.com/watch?v=abc123def45".into(),
        };
        let args = req.build_args();
        assert!(args.contains(&"--no-playlist".to_string()));
        assert!(args.last().unwrap().contains("watch?v=abc123def45"));
    }

    #[test]
    fn test_json_lines_drops_garbage() {
        let output = YtdlpOutput {
            stdout: "{\"id\": \"a\"}\nnot json\n\n{\"id\": \"b\"}\n".into(),
        };
        let lines = output.json_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["id"], "a");
        assert_eq!(lines[1]["id"], "b");
    }

    #[test]
    fn test_stderr_excerpt_takes_last_line() {
        let excerpt = stderr_excerpt("WARNING: noise\nERROR: video unavailable\n");
        assert_eq!(excerpt, "ERROR: video unavailable");
        assert_eq!(stderr_excerpt(""), "no stderr output");
    }
}
