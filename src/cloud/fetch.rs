// SPDX-License-Identifier: MPL-2.0
//! Fetching delivered (possibly transformed) images.

use super::client::{error_message, CloudClient};
use crate::error::{Error, Result};
use futures_util::{Stream, StreamExt};

/// Header the delivery service uses to explain a failed transformation.
const ERROR_HEADER: &str = "x-cld-error";

impl CloudClient {
    /// Downloads the bytes at `url`, refusing payloads over the size limit.
    ///
    /// The body is streamed so an oversized response is abandoned as soon as
    /// the limit is crossed, even without a `Content-Length`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] on transport failures, [`Error::Status`] on
    /// non-success responses and [`Error::PayloadTooLarge`] over the limit.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!(%url, "fetching image");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let header = response
                .headers()
                .get(ERROR_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);
            let body = match header {
                Some(message) => message,
                None => error_message(&response.text().await.unwrap_or_default()),
            };
            tracing::warn!(status = status.as_u16(), %body, %url, "fetch failed");
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        let declared = response.content_length().unwrap_or(0);
        check_declared_length(declared, self.max_bytes)?;

        let bytes = collect_limited(response.bytes_stream(), declared, self.max_bytes).await?;

        tracing::debug!(%url, size = bytes.len(), "fetch complete");
        Ok(bytes)
    }
}

/// Rejects a response whose `Content-Length` is already over `limit`.
fn check_declared_length(declared: u64, limit: u64) -> Result<()> {
    if declared > limit {
        return Err(Error::PayloadTooLarge {
            size: declared,
            limit,
        });
    }
    Ok(())
}

/// Collects a body stream, abandoning it as soon as `limit` is crossed.
///
/// `declared` is only a capacity hint; it is capped so a lying header cannot
/// over-allocate.
async fn collect_limited<S, B, E>(stream: S, declared: u64, limit: u64) -> Result<Vec<u8>>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    Error: From<E>,
{
    let capacity = usize::try_from(declared.min(limit)).unwrap_or_default();
    let mut bytes = Vec::with_capacity(capacity);
    let mut stream = std::pin::pin!(stream);

    while let Some(chunk) = stream.next().await {
        bytes.extend_from_slice(chunk?.as_ref());

        let size = bytes.len() as u64;
        if size > limit {
            return Err(Error::PayloadTooLarge { size, limit });
        }
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;

    fn chunks(sizes: &[usize]) -> impl Stream<Item = Result<Vec<u8>>> {
        stream::iter(sizes.iter().map(|&n| Ok(vec![7u8; n])).collect::<Vec<_>>())
    }

    #[test]
    fn declared_length_over_limit_is_rejected() {
        assert_eq!(
            check_declared_length(2048, 1024),
            Err(Error::PayloadTooLarge {
                size: 2048,
                limit: 1024
            })
        );
        assert!(check_declared_length(1024, 1024).is_ok());
        assert!(check_declared_length(0, 1024).is_ok());
    }

    #[tokio::test]
    async fn body_within_limit_is_collected() {
        let bytes = collect_limited(chunks(&[3, 4, 3]), 10, 10)
            .await
            .expect("within limit");
        assert_eq!(bytes.len(), 10);
    }

    #[tokio::test]
    async fn stream_is_cut_off_once_limit_is_crossed() {
        // No declared length: the cap is enforced chunk by chunk.
        let err = collect_limited(chunks(&[6, 6, 6]), 0, 10)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            Error::PayloadTooLarge {
                size: 12,
                limit: 10
            }
        );
    }

    #[tokio::test]
    async fn lying_declared_length_does_not_bypass_the_cap() {
        let err = collect_limited(chunks(&[8, 8]), 4, 10).await.unwrap_err();
        assert!(matches!(err, Error::PayloadTooLarge { .. }));
    }

    #[tokio::test]
    async fn transport_errors_are_propagated() {
        let failing = stream::iter(vec![
            Ok(vec![1u8; 2]),
            Err(Error::Network("connection reset".to_string())),
        ]);
        let err = collect_limited(failing, 0, 10).await.unwrap_err();
        assert_eq!(err, Error::Network("connection reset".to_string()));
    }
}
