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

//! Dual-stream session
//!
//! A session runs two activities over one connection:
//!
//! - the network reader, which feeds every inbound chunk through the
//!   negotiation codec, writes data bytes to the screen and sends the chunk's
//!   replies back as one block;
//! - the keyboard reader, which forwards every keyboard unit (a byte in
//!   character mode, a line in line mode) to the network unchanged.
//!
//! The outbound stream is the only thing both activities touch and it is
//! serialized by [`SharedWriter`]. Read buffers and the reply queue belong to
//! the network reader alone.

use crate::shutdown::{ShutdownHandle, ShutdownReason};
use crate::{ClientConfig, Result, SharedWriter};
use bytes::BytesMut;
use rawtel_telnetcodec::{NegotiationCodec, NegotiationEvent, NegotiationPolicy, ReplyQueue};
use rawtel_terminal::{InputMode, RawModeController, TerminalDevice};
use std::future::Future;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::io::{ReadHalf, WriteHalf};
use tokio::task::{JoinError, JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// How a finished session ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOutcome {
    /// The first shutdown trigger
    pub reason: ShutdownReason,
    /// Whether a raw-mode snapshot was restored during shutdown
    pub terminal_restored: bool,
}

impl SessionOutcome {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> u8 {
        self.reason.exit_code()
    }
}

/// How the network reader stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NetworkEnd {
    PeerClosed,
    Cancelled,
}

/// A connected client session.
///
/// Owns the connection halves, the keyboard source, the screen sink and the
/// terminal controller. [`Session::run`] consumes it.
pub struct Session<R, W, K, O, D: TerminalDevice> {
    config: ClientConfig,
    reader: R,
    writer: SharedWriter<W>,
    keyboard: K,
    output: O,
    terminal: RawModeController<D>,
    shutdown: ShutdownHandle,
}

impl<S, K, O, D> Session<ReadHalf<S>, WriteHalf<S>, K, O, D>
where
    S: AsyncRead + AsyncWrite + Send + 'static,
    K: AsyncRead + Unpin + Send + 'static,
    O: AsyncWrite + Unpin + Send + 'static,
    D: TerminalDevice,
{
    /// Creates a session over a bidirectional `stream`.
    pub fn new(config: ClientConfig, stream: S, keyboard: K, output: O, device: D) -> Self {
        let (reader, writer) = tokio::io::split(stream);
        Session::from_parts(config, reader, writer, keyboard, output, device)
    }
}

impl<R, W, K, O, D> Session<R, W, K, O, D>
where
    R: AsyncRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
    K: AsyncRead + Unpin + Send + 'static,
    O: AsyncWrite + Unpin + Send + 'static,
    D: TerminalDevice,
{
    /// Creates a session from separate read and write halves.
    pub fn from_parts(
        config: ClientConfig,
        reader: R,
        writer: W,
        keyboard: K,
        output: O,
        device: D,
    ) -> Self {
        Session {
            config,
            reader,
            writer: SharedWriter::new(writer),
            keyboard,
            output,
            terminal: RawModeController::new(device),
            shutdown: ShutdownHandle::new(),
        }
    }

    /// Handle that can end the session from outside.
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.shutdown.clone()
    }

    /// The session configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Runs both activities until the first shutdown trigger, then shuts down.
    ///
    /// Triggers are `signal` completing, the peer closing the connection, a
    /// fatal error in either activity, or [`ShutdownHandle::trigger`]. Whatever
    /// the trigger, both activities are cancelled and awaited (at most
    /// [`ClientConfig::shutdown_grace`] before being aborted), the terminal is
    /// restored and the outbound stream is shut down.
    ///
    /// Fatal errors are returned after shutdown has completed. An invalid
    /// configuration is rejected before the terminal or the streams are used.
    pub async fn run<F>(self, signal: F) -> Result<SessionOutcome>
    where
        F: Future<Output = ()>,
    {
        let Session {
            config,
            reader,
            writer,
            keyboard,
            output,
            mut terminal,
            shutdown,
        } = self;

        config.validate()?;
        if let Err(error) = terminal.enter(config.input_mode) {
            warn!("Could not switch terminal to {} mode: {}", config.input_mode, error);
        }
        info!(
            "Session started ({} input, {} policy)",
            config.input_mode, config.policy
        );

        let token = shutdown.token();
        let codec = NegotiationCodec::with_policy(config.build_policy());
        let mut network = Some(tokio::spawn(network_reader(
            reader,
            writer.clone(),
            output,
            codec,
            config.buffer_size,
            token.clone(),
        )));
        let mut keyboard = Some(tokio::spawn(keyboard_reader(
            keyboard,
            writer.clone(),
            config.input_mode,
            config.buffer_size,
            token.clone(),
        )));

        tokio::pin!(signal);
        let (reason, failure) = loop {
            tokio::select! {
                () = &mut signal => break (ShutdownReason::Signal, None),
                () = token.cancelled() => {
                    break (shutdown.reason().unwrap_or(ShutdownReason::Signal), None);
                }
                joined = join_slot(&mut network) => match flatten(joined) {
                    Ok(NetworkEnd::PeerClosed) => break (ShutdownReason::PeerClosed, None),
                    Ok(NetworkEnd::Cancelled) => {
                        break (shutdown.reason().unwrap_or(ShutdownReason::Signal), None);
                    }
                    Err(error) => break (ShutdownReason::Fatal(error.to_string()), Some(error)),
                },
                joined = join_slot(&mut keyboard), if keyboard.is_some() => match flatten(joined) {
                    Ok(()) => debug!("keyboard input closed, still reading from the network"),
                    Err(error) => break (ShutdownReason::Fatal(error.to_string()), Some(error)),
                },
            }
        };

        shutdown.trigger(reason);
        let reason = shutdown.reason().unwrap_or(ShutdownReason::Signal);
        info!("Shutting down: {}", reason);

        tokio::join!(
            settle("network reader", network, config.shutdown_grace),
            settle("keyboard reader", keyboard, config.shutdown_grace),
        );

        let terminal_restored = terminal.restore();
        if let Err(error) = writer.shutdown().await {
            debug!("Failed to shut down connection: {}", error);
        }

        match failure {
            Some(error) => {
                error!("Session failed: {}", error);
                Err(error)
            }
            None => Ok(SessionOutcome {
                reason,
                terminal_restored,
            }),
        }
    }
}

/// Awaits the task in `slot`, emptying the slot once it has finished.
async fn join_slot<T>(slot: &mut Option<JoinHandle<T>>) -> std::result::Result<T, JoinError> {
    match slot {
        Some(handle) => {
            let joined = handle.await;
            *slot = None;
            joined
        }
        None => std::future::pending().await,
    }
}

fn flatten<T>(joined: std::result::Result<Result<T>, JoinError>) -> Result<T> {
    joined?
}

/// Waits for a cancelled activity to stop, aborting it after `grace`.
async fn settle<T>(name: &str, slot: Option<JoinHandle<T>>, grace: Duration) {
    let Some(handle) = slot else {
        return;
    };
    let abort = handle.abort_handle();
    match tokio::time::timeout(grace, handle).await {
        Ok(_) => debug!("{} stopped", name),
        Err(_) => {
            warn!("{} did not stop within {:?}, aborting", name, grace);
            abort.abort();
        }
    }
}

/// Network to screen, replies back to the network.
async fn network_reader<R, W, O, P>(
    mut reader: R,
    writer: SharedWriter<W>,
    mut output: O,
    mut codec: NegotiationCodec<P>,
    buffer_size: usize,
    token: CancellationToken,
) -> Result<NetworkEnd>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
    O: AsyncWrite + Unpin,
    P: NegotiationPolicy,
{
    let mut read_buffer = vec![0u8; buffer_size];
    let mut replies = ReplyQueue::with_chunk_capacity(buffer_size);

    loop {
        let read = tokio::select! {
            () = token.cancelled() => return Ok(NetworkEnd::Cancelled),
            read = reader.read(&mut read_buffer) => read?,
        };
        if read == 0 {
            info!("Connection closed by peer");
            return Ok(NetworkEnd::PeerClosed);
        }

        let mut chunk = BytesMut::from(&read_buffer[..read]);
        scan_chunk(&mut codec, &mut chunk, &mut output, &mut replies).await?;

        if !replies.is_empty() {
            debug!("sending {} negotiation replies", replies.len());
            writer.write(&replies.to_bytes()).await?;
        }
        replies.clear();
    }
}

/// Runs one chunk through the codec, writing data to `output` as it appears.
async fn scan_chunk<O, P>(
    codec: &mut NegotiationCodec<P>,
    chunk: &mut BytesMut,
    output: &mut O,
    replies: &mut ReplyQueue,
) -> Result<()>
where
    O: AsyncWrite + Unpin,
    P: NegotiationPolicy,
{
    use tokio_util::codec::Decoder;

    while let Some(event) = codec.decode(chunk)? {
        match event {
            NegotiationEvent::Data(data) => output.write_all(&data).await?,
            NegotiationEvent::Reply(reply) => replies.push(reply),
            NegotiationEvent::Ignored(_) => {}
        }
    }
    output.flush().await?;
    Ok(())
}

/// Keyboard to network, one unit per write.
async fn keyboard_reader<K, W>(
    keyboard: K,
    writer: SharedWriter<W>,
    mode: InputMode,
    buffer_size: usize,
    token: CancellationToken,
) -> Result<()>
where
    K: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut keyboard = BufReader::with_capacity(buffer_size, keyboard);
    let mut unit = Vec::with_capacity(buffer_size);

    loop {
        unit.clear();
        let read = tokio::select! {
            () = token.cancelled() => return Ok(()),
            read = read_unit(&mut keyboard, mode, &mut unit) => read?,
        };
        if read == 0 {
            return Ok(());
        }
        writer.write(&unit).await?;
    }
}

async fn read_unit<K>(
    keyboard: &mut BufReader<K>,
    mode: InputMode,
    unit: &mut Vec<u8>,
) -> std::io::Result<usize>
where
    K: AsyncRead + Unpin,
{
    match mode {
        InputMode::Line => keyboard.read_until(b'\n', unit).await,
        InputMode::Character => {
            let mut byte = [0u8; 1];
            let read = keyboard.read(&mut byte).await?;
            unit.extend_from_slice(&byte[..read]);
            Ok(read)
        }
    }
}
