//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Serialized access to the outbound half of the connection

use std::sync::Arc;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

/// Outbound stream shared by the network and keyboard activities.
///
/// Each [`SharedWriter::write`] holds the lock for the whole block and flushes
/// before releasing it, so a reply block and a keyboard unit never interleave
/// on the wire.
pub struct SharedWriter<W> {
    inner: Arc<Mutex<W>>,
}

impl<W> Clone for SharedWriter<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<W: AsyncWrite + Unpin> SharedWriter<W> {
    /// Wraps `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(writer)),
        }
    }

    /// Writes `bytes` in full and flushes, as one uninterrupted operation.
    pub async fn write(&self, bytes: &[u8]) -> std::io::Result<()> {
        let mut writer = self.inner.lock().await;
        writer.write_all(bytes).await?;
        writer.flush().await
    }

    /// Shuts the outbound direction down.
    pub async fn shutdown(&self) -> std::io::Result<()> {
        self.inner.lock().await.shutdown().await
    }
}

#[cfg(test)]
mod tests {
    use super::SharedWriter;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn concurrent_blocks_do_not_interleave() {
        let (near, mut far) = tokio::io::duplex(7);
        let writer = SharedWriter::new(near);

        let mut tasks = Vec::new();
        for id in 0..32u8 {
            let writer = writer.clone();
            tasks.push(tokio::spawn(async move {
                writer.write(&[0xFF, id, id]).await.unwrap();
            }));
        }

        let mut received = vec![0u8; 32 * 3];
        far.read_exact(&mut received).await.unwrap();
        for task in tasks {
            task.await.unwrap();
        }

        let mut seen: Vec<u8> = received
            .chunks(3)
            .map(|block| {
                assert_eq!(block[0], 0xFF);
                assert_eq!(block[1], block[2]);
                block[1]
            })
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..32).collect::<Vec<u8>>());
    }

    #[tokio::test]
    async fn shutdown_signals_eof() {
        let (near, mut far) = tokio::io::duplex(16);
        let writer = SharedWriter::new(near);
        writer.write(b"bye").await.unwrap();
        writer.shutdown().await.unwrap();

        let mut received = Vec::new();
        far.read_to_end(&mut received).await.unwrap();
        assert_eq!(received, b"bye");
    }
}
