//! Example: Download a shared document in several formats
//!
//! Run with: cargo run -p docpull --example download_doc -- <sharable-url>
//!
//! The document must be shared so that anonymous export is permitted.

use docpull::{extract_document_id, Downloader, ExportFormat};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("docpull=debug")),
        )
        .init();

    let url = match std::env::args().nth(1) {
        Some(url) => url,
        None => {
            eprintln!("Usage: download_doc <sharable-url>");
            std::process::exit(1);
        }
    };

    let id = match extract_document_id(&url) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    println!("Document id: {}", id);

    let downloader = Downloader::default();

    match downloader.fetch_text(&id).await {
        Ok(text) => {
            let preview = text.chars().take(120).collect::<String>();
            println!("Preview: {}", preview.replace('\n', " "));
        }
        Err(e) => eprintln!("Text fetch failed: {}", e),
    }

    for format in [ExportFormat::Pdf, ExportFormat::Txt] {
        match downloader
            .save_document(&id, "./downloads", "document", format)
            .await
        {
            Ok(path) => println!("Saved {}", path.display()),
            Err(e) => eprintln!("Failed to save {}: {}", format, e),
        }
    }
}
