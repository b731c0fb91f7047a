use std::io::{Cursor, Result as IOResult};
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::io::{AsyncRead, AsyncReadExt, ReadBuf};


/// An async byte reader backing a deferred content source.
pub enum ByteStream {
    Memory(Cursor<Vec<u8>>),
    File(tokio::fs::File),
}

impl From<Vec<u8>> for ByteStream {
    fn from(v: Vec<u8>) -> Self {
        Self::Memory(Cursor::new(v))
    }
}

impl From<std::fs::File> for ByteStream {
    fn from(f: std::fs::File) -> Self {
        Self::File(f.into())
    }
}

impl From<tokio::fs::File> for ByteStream {
    fn from(f: tokio::fs::File) -> Self {
        Self::File(f)
    }
}

impl AsyncRead for ByteStream {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<IOResult<()>> {
        match self.get_mut() {
            ByteStream::Memory(v) => Pin::new(v).poll_read(cx, buf),
            ByteStream::File(f) => Pin::new(f).poll_read(cx, buf),
        }
    }
}

/// Content of a file entry.
///
/// Registration never blocks, so content may arrive as bytes already in
/// memory, as an async reader drained at build time, or as a future that
/// yields bytes. All variants are resolved only when the archive is built.
pub enum ContentSource {
    Bytes(Bytes),
    Stream(ByteStream),
    Pending(BoxFuture<'static, IOResult<Bytes>>),
}

impl ContentSource {
    /// Wrap a future of bytes whose resolution is deferred to build time.
    pub fn pending<F>(fut: F) -> Self
    where
        F: std::future::Future<Output = IOResult<Bytes>> + Send + 'static,
    {
        Self::Pending(fut.boxed())
    }

    pub(crate) async fn resolve(self) -> IOResult<Bytes> {
        match self {
            ContentSource::Bytes(bytes) => Ok(bytes),
            ContentSource::Stream(mut stream) => {
                let mut buf = Vec::new();
                stream.read_to_end(&mut buf).await?;
                Ok(buf.into())
            }
            ContentSource::Pending(fut) => fut.await,
        }
    }
}

impl From<Bytes> for ContentSource {
    fn from(bytes: Bytes) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<Vec<u8>> for ContentSource {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v.into())
    }
}

impl From<&[u8]> for ContentSource {
    fn from(v: &[u8]) -> Self {
        Self::Bytes(Bytes::copy_from_slice(v))
    }
}

impl From<&str> for ContentSource {
    fn from(s: &str) -> Self {
        Self::Bytes(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for ContentSource {
    fn from(s: String) -> Self {
        Self::Bytes(s.into_bytes().into())
    }
}

impl From<ByteStream> for ContentSource {
    fn from(stream: ByteStream) -> Self {
        Self::Stream(stream)
    }
}

impl From<std::fs::File> for ContentSource {
    fn from(f: std::fs::File) -> Self {
        Self::Stream(f.into())
    }
}

impl From<tokio::fs::File> for ContentSource {
    fn from(f: tokio::fs::File) -> Self {
        Self::Stream(f.into())
    }
}
