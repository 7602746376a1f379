use chrono::Utc;
use clap::Parser;
use pdf_summary_core::{
    discover_pdf_files, ApiKey, BatchConfig, BatchRunner, ConfigError, DashScopeClient,
    API_KEY_ENV, DEFAULT_DASHSCOPE_ENDPOINT, DEFAULT_MODEL, DEFAULT_OUTPUT_DIR,
};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "pdf-summarizer", version)]
struct Cli {
    /// PDF files to summarize, processed in the given order.
    #[arg(value_name = "PDF")]
    inputs: Vec<PathBuf>,

    /// Folder searched recursively for additional PDFs.
    #[arg(long)]
    folder: Option<PathBuf>,

    /// Directory that receives `<name>_summary.txt` files.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Model name passed to the generation API.
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Text-generation endpoint URL.
    #[arg(long, default_value = DEFAULT_DASHSCOPE_ENDPOINT)]
    endpoint: String,

    /// DashScope API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let app_version = env!("CARGO_PKG_VERSION");

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();

    let api_key = ApiKey::from_value(cli.api_key)?;

    let mut inputs = cli.inputs;
    if let Some(folder) = &cli.folder {
        let found = discover_pdf_files(folder)?;
        if found.is_empty() {
            warn!(folder = %folder.display(), "no pdf files found in folder");
        }
        inputs.extend(found);
    }

    if inputs.is_empty() {
        return Err(ConfigError::NoInputs.into());
    }

    let service = DashScopeClient::new(&cli.endpoint)?;
    let config = BatchConfig::new(api_key)
        .with_model(cli.model)
        .with_output_dir(cli.output_dir);

    info!(
        version = app_version,
        started_at = %Utc::now().to_rfc3339(),
        inputs = inputs.len(),
        model = %config.model,
        "pdf-summarizer boot"
    );

    let report = BatchRunner::new(service, config).run(&inputs).await?;

    for document in &report.processed {
        println!(
            "{} -> {}",
            document.source.display(),
            document.output.display()
        );
    }
    for skipped in &report.skipped {
        println!(
            "skipped [{}] {}: {}",
            skipped.stage,
            skipped.path.display(),
            skipped.reason
        );
    }

    println!(
        "{} summarized, {} skipped at {}",
        report.processed.len(),
        report.skipped.len(),
        Utc::now().to_rfc3339()
    );

    Ok(())
}
