//! clipsave: save the current clipboard content to a file.
//!
//! Queries the system clipboard for its offered targets, prefers image over
//! text, and walks the user through a native save dialog. One run shows at
//! most one dialog and writes at most one file.

use std::process::ExitCode;
use std::sync::Arc;

use tracing::error;

use cs_app::{ExportClipboard, ExportError, ExportOutcome};
use cs_core::clipboard::TargetKind;
use cs_platform::{ImageEncoder, NativeSaveDialog, SystemClipboard};

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Stdout carries the user-facing status lines; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let flow = ExportClipboard::new(
        Arc::new(SystemClipboard::new()),
        Arc::new(NativeSaveDialog::new()),
        Arc::new(ImageEncoder::new()),
    );

    match flow.execute().await {
        Ok(outcome) => {
            report(&outcome);
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn report(outcome: &ExportOutcome) {
    match outcome {
        ExportOutcome::TextSaved { path } => {
            println!("Text successfully saved to: {}", path.display());
        }
        ExportOutcome::ImageSaved { path } => {
            println!("Image successfully saved to: {}", path.display());
        }
        ExportOutcome::TextCanceled => println!("Text save canceled."),
        ExportOutcome::ImageCanceled => println!("Image save canceled."),
        ExportOutcome::Unsupported => {
            println!("Clipboard is empty or contains an unsupported format.");
        }
        ExportOutcome::NoContent { targets } => {
            println!("Clipboard is empty or contains an unsupported format.");
            if !targets.is_empty() {
                let names: Vec<&str> = targets.iter().map(|t| t.as_str()).collect();
                println!("Found targets: {}", names.join(", "));
            }
        }
    }
}

fn report_error(err: &ExportError) {
    error!(error = %err, "export failed");

    match err {
        ExportError::Io {
            kind: TargetKind::Text,
            source,
            ..
        } => eprintln!("Error saving text file: {source}"),
        ExportError::Io {
            kind: TargetKind::Image,
            source,
            ..
        } => eprintln!("Error saving image: {source}"),
        ExportError::Encode(source) => eprintln!("Error saving image: {source}"),
        other => eprintln!("Error: {other}"),
    }
}
