//! Process main loop: requests on stdin, responses and events on stdout.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, error, info};

use nl_core::config::AppConfig;
use nl_core::ports::DisplayExpiry;

use super::runtime::{create_runtime, AppRuntime};
use super::wiring::wire_dependencies;
use crate::commands::dispatch;
use crate::protocol::{parse_request, Response};

const OUTPUT_BUFFER: usize = 64;

/// Runs until stdin closes and every in-flight request has answered.
pub async fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let (out_tx, out_rx) = mpsc::channel::<String>(OUTPUT_BUFFER);
    let writer = tokio::spawn(write_lines(out_rx, tokio::io::stdout()));

    let wired = wire_dependencies(&config, out_tx.clone()).context("Failed to wire dependencies")?;
    let runtime = Arc::new(create_runtime(&config, wired.deps).await?);
    let display_reset = spawn_display_reset(runtime.clone(), wired.timer_fired);

    info!("bridge ready, reading requests from stdin");
    serve(runtime.clone(), BufReader::new(tokio::io::stdin()), out_tx.clone()).await?;

    // Dropping every sender lets the writer drain and stop.
    display_reset.abort();
    let _ = display_reset.await;
    drop(runtime);
    drop(out_tx);
    writer.await.context("Output writer task failed")??;
    info!("stdin closed, bridge stopped");
    Ok(())
}

/// Reads one request per line and answers each on `out`.
///
/// Requests run concurrently so a slow submit never blocks other commands.
pub async fn serve<R>(
    runtime: Arc<AppRuntime>,
    input: R,
    out: mpsc::Sender<String>,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut in_flight = JoinSet::new();

    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read request line")?
    {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_request(line) {
            Ok(request) => {
                debug!(command = %request.command, "request received");
                let runtime = runtime.clone();
                let out = out.clone();
                in_flight.spawn(async move {
                    let response = dispatch(&runtime, request).await;
                    send_response(&out, &response).await;
                });
            }
            Err(response) => send_response(&out, &response).await,
        }

        while let Some(result) = in_flight.try_join_next() {
            log_join_result(result);
        }
    }

    while let Some(result) = in_flight.join_next().await {
        log_join_result(result);
    }
    Ok(())
}

fn log_join_result(result: Result<(), tokio::task::JoinError>) {
    if let Err(err) = result {
        error!(error = %err, "request task failed");
    }
}

async fn send_response(out: &mpsc::Sender<String>, response: &Response) {
    match serde_json::to_string(response) {
        Ok(line) => {
            if out.send(line).await.is_err() {
                debug!("output closed, response dropped");
            }
        }
        Err(err) => error!(error = %err, "failed to encode response"),
    }
}

/// Feeds expired display timers back into the contact form.
///
/// The form itself drops expiries whose timer was stopped or replaced
/// while they waited in the channel.
pub fn spawn_display_reset(
    runtime: Arc<AppRuntime>,
    mut timer_fired: mpsc::Receiver<DisplayExpiry>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(expiry) = timer_fired.recv().await {
            let form = runtime.usecases().contact_form();
            if &expiry.form_id == form.form_id() {
                form.display_elapsed(expiry.generation).await;
            } else {
                debug!(form_id = %expiry.form_id, "display timer for unknown form");
            }
        }
    })
}

/// Writes each line followed by `\n`, flushing per line.
pub async fn write_lines<W>(mut lines: mpsc::Receiver<String>, mut writer: W) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(line) = lines.recv().await {
        writer
            .write_all(line.as_bytes())
            .await
            .context("Failed to write output line")?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }
    Ok(())
}
