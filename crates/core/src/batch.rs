use crate::config::BatchConfig;
use crate::extractor::{extract_document_text_with, LopdfExtractor, PdfExtractor};
use crate::summarizer::Summarizer;
use crate::traits::GenerationService;
use crate::writer::{summary_output_path, write_summary};
use crate::{BatchReport, ProcessedDocument, SkipStage, SkippedDocument, SummaryError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Runs extract, summarize and write for each input in order, one document
/// at a time. A failing document is recorded and the batch moves on.
pub struct BatchRunner<S, E = LopdfExtractor> {
    summarizer: Summarizer<S>,
    extractor: E,
    output_dir: PathBuf,
}

impl<S> BatchRunner<S>
where
    S: GenerationService + Send + Sync,
{
    pub fn new(service: S, config: BatchConfig) -> Self {
        Self {
            summarizer: Summarizer::new(service, config.api_key).with_model(config.model),
            extractor: LopdfExtractor,
            output_dir: config.output_dir,
        }
    }
}

impl<S, E> BatchRunner<S, E>
where
    S: GenerationService + Send + Sync,
    E: PdfExtractor,
{
    pub fn with_extractor<X: PdfExtractor>(self, extractor: X) -> BatchRunner<S, X> {
        BatchRunner {
            summarizer: self.summarizer,
            extractor,
            output_dir: self.output_dir,
        }
    }

    pub fn summarizer(&self) -> &Summarizer<S> {
        &self.summarizer
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Fails only when the output directory cannot be created.
    pub async fn run(&self, inputs: &[PathBuf]) -> Result<BatchReport, SummaryError> {
        tokio::fs::create_dir_all(&self.output_dir).await?;

        let mut report = BatchReport::default();
        // output path -> source that produced it during this run
        let mut written: HashMap<PathBuf, PathBuf> = HashMap::new();

        for path in inputs {
            match self.process(path, &mut written).await {
                Ok(output) => report.processed.push(ProcessedDocument {
                    source: path.clone(),
                    output,
                }),
                Err((stage, error)) => {
                    warn!(path = %path.display(), stage = %stage, reason = %error, "skipped pdf");
                    report.skipped.push(SkippedDocument {
                        path: path.clone(),
                        stage,
                        reason: error.to_string(),
                    });
                }
            }
        }

        info!(
            processed = report.processed.len(),
            skipped = report.skipped.len(),
            "batch finished"
        );
        Ok(report)
    }

    async fn process(
        &self,
        path: &Path,
        written: &mut HashMap<PathBuf, PathBuf>,
    ) -> Result<PathBuf, (SkipStage, SummaryError)> {
        if !path.is_file() {
            return Err((
                SkipStage::Missing,
                SummaryError::NotAFile(path.display().to_string()),
            ));
        }

        // Output name is settled before extraction and the service call.
        let output = summary_output_path(&self.output_dir, path)
            .map_err(|error| (SkipStage::Write, error))?;
        if let Some(first) = written.get(&output) {
            return Err((
                SkipStage::Write,
                SummaryError::OutputConflict {
                    output: output.display().to_string(),
                    first: first.display().to_string(),
                },
            ));
        }

        info!(path = %path.display(), model = %self.summarizer.model(), "processing");

        let text = extract_document_text_with(&self.extractor, path)
            .map_err(|error| (SkipStage::Extract, error))?;

        let summary = self
            .summarizer
            .summarize(&text)
            .await
            .map_err(|error| (SkipStage::Summarize, error))?;

        write_summary(&summary, &output)
            .await
            .map_err(|error| (SkipStage::Write, error))?;

        written.insert(output.clone(), path.to_path_buf());
        Ok(output)
    }
}

/// Convenience wrapper: build a runner from `config` and process `inputs`.
pub async fn summarize_pdfs<S>(
    inputs: &[PathBuf],
    service: S,
    config: BatchConfig,
) -> Result<BatchReport, SummaryError>
where
    S: GenerationService + Send + Sync,
{
    BatchRunner::new(service, config).run(inputs).await
}
