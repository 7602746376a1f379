use crate::error::SummaryError;
use lopdf::Document;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct PageText {
    pub number: u32,
    pub text: String,
}

pub trait PdfExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<PageText>, SummaryError>;
}

#[derive(Default)]
pub struct LopdfExtractor;

impl PdfExtractor for LopdfExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<PageText>, SummaryError> {
        let document = Document::load(path).map_err(|error| SummaryError::PdfParse(error.to_string()))?;

        // get_pages is keyed by page number, so iteration is in page order.
        let mut pages = Vec::new();
        for (page_no, _page_id) in document.get_pages() {
            let text = document
                .extract_text(&[page_no])
                .map_err(|error| SummaryError::PdfParse(error.to_string()))?;

            pages.push(PageText {
                number: page_no,
                // trailing newline from lopdf's ET handling; see join_pages
                text: text.trim_end().to_string(),
            });
        }

        Ok(pages)
    }
}

/// Joins every page's text with newlines.
///
/// `LopdfExtractor` has already trimmed trailing whitespace from each page,
/// since lopdf ends every text object with `\n`; the text sent for
/// summarizing therefore has exactly one newline between pages.
pub fn join_pages(pages: &[PageText]) -> String {
    pages
        .iter()
        .map(|page| page.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn extract_document_text(path: &Path) -> Result<String, SummaryError> {
    extract_document_text_with(&LopdfExtractor, path)
}

pub fn extract_document_text_with(
    extractor: &dyn PdfExtractor,
    path: &Path,
) -> Result<String, SummaryError> {
    let pages = extractor.extract_pages(path)?;
    let text = join_pages(&pages);

    if text.trim().is_empty() {
        return Err(SummaryError::EmptyDocument(path.display().to_string()));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::{extract_document_text, extract_document_text_with, join_pages, PageText, PdfExtractor};
    use crate::error::SummaryError;
    use crate::test_support::write_text_pdf;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    struct BlankPages;

    impl PdfExtractor for BlankPages {
        fn extract_pages(&self, _path: &Path) -> Result<Vec<PageText>, SummaryError> {
            Ok(vec![
                PageText {
                    number: 1,
                    text: "  ".to_string(),
                },
                PageText {
                    number: 2,
                    text: String::new(),
                },
            ])
        }
    }

    #[test]
    fn pages_are_joined_in_order_with_newlines() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("three.pdf");
        write_text_pdf(&path, &["First page", "Second page", "Third page"])?;

        let text = extract_document_text(&path)?;

        assert_eq!(text, "First page\nSecond page\nThird page");
        Ok(())
    }

    #[test]
    fn unreadable_pdf_is_a_parse_error() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("broken.pdf");
        fs::write(&path, b"%PDF-1.4\n%broken")?;

        let result = extract_document_text(&path);

        assert!(matches!(result, Err(SummaryError::PdfParse(_))));
        Ok(())
    }

    #[test]
    fn blank_document_is_rejected() {
        let result = extract_document_text_with(&BlankPages, Path::new("blank.pdf"));
        assert!(matches!(result, Err(SummaryError::EmptyDocument(_))));
    }

    #[test]
    fn join_keeps_interior_empty_pages() {
        let pages = vec![
            PageText {
                number: 1,
                text: "a".to_string(),
            },
            PageText {
                number: 2,
                text: String::new(),
            },
            PageText {
                number: 3,
                text: "c".to_string(),
            },
        ];
        assert_eq!(join_pages(&pages), "a\n\nc");
    }
}
