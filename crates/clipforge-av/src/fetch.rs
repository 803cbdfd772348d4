//! Archive fetching over HTTP(S) with byte progress.

use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Stream a remote file to disk.
///
/// Progress is reported against the declared `Content-Length`; when the
/// server omits it the bar degrades to a spinner counting bytes. A
/// non-success status aborts with [`Error::Transfer`]; there are no
/// retries.
pub fn fetch(url: &str, dest: &Path) -> Result<()> {
    tracing::info!("Fetching {url}");

    // The default client times the whole request out after 30s, which
    // would kill any real archive download. Downloads block until the
    // server closes the stream.
    let client = reqwest::blocking::Client::builder()
        .timeout(None)
        .build()
        .map_err(|e| Error::transfer(url, e.to_string()))?;

    let mut response = client
        .get(url)
        .send()
        .map_err(|e| Error::transfer(url, e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::transfer(url, format!("HTTP {status}")));
    }

    let bar = progress_bar(response.content_length());

    let mut file = File::create(dest)?;
    let mut buf = [0u8; 8192];
    loop {
        let n = response
            .read(&mut buf)
            .map_err(|e| Error::transfer(url, e.to_string()))?;
        if n == 0 {
            break;
        }
        file.write_all(&buf[..n])?;
        bar.inc(n as u64);
    }
    bar.finish_and_clear();

    tracing::info!("Download complete: {}", dest.display());
    Ok(())
}

fn progress_bar(total: Option<u64>) -> ProgressBar {
    match total {
        Some(len) => {
            let bar = ProgressBar::new(len);
            bar.set_style(
                ProgressStyle::with_template(
                    "[{elapsed_precise}] {wide_bar} {bytes}/{total_bytes} ({bytes_per_sec})",
                )
                .unwrap(),
            );
            bar
        }
        None => {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::with_template("{spinner} {bytes} ({bytes_per_sec})").unwrap(),
            );
            bar
        }
    }
}
