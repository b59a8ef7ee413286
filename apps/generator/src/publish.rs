//! Document publishing — converts rendered markdown into styled standalone
//! HTML files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use pulldown_cmark::{html, Options, Parser};
use tracing::debug;

use crate::errors::AppError;

/// Publishes a markdown document under a base filename, returning the path
/// of the file written. Implementations own the target format.
pub trait DocumentPublisher: Send + Sync {
    fn publish(
        &self,
        markdown: &str,
        base_filename: &str,
        output_dir: &Path,
    ) -> Result<PathBuf, AppError>;
}

/// Styled HTML output. One self-contained file per document, stylesheet
/// embedded so the corpus can be browsed without any server.
pub struct HtmlDocumentPublisher;

const STYLESHEET: &str = r#"
body { font-family: Arial, sans-serif; line-height: 1.6; max-width: 800px; margin: 40px auto; padding: 20px; }
h1 { color: #2c3e50; border-bottom: 2px solid #3498db; }
h2 { color: #34495e; margin-top: 30px; border-bottom: 1px solid #eee; }
h3 { color: #7f8c8d; }
strong { color: #2c3e50; }
ul { margin-left: 20px; }
.meta { color: #666; font-size: 0.9em; }
"#;

impl DocumentPublisher for HtmlDocumentPublisher {
    fn publish(
        &self,
        markdown: &str,
        base_filename: &str,
        output_dir: &Path,
    ) -> Result<PathBuf, AppError> {
        fs::create_dir_all(output_dir).map_err(|e| {
            AppError::Publish(format!("creating {}: {e}", output_dir.display()))
        })?;

        let parser = Parser::new_ext(markdown, Options::empty());
        let mut body = String::with_capacity(markdown.len() * 2);
        html::push_html(&mut body, parser);

        let document = format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
             <style>{STYLESHEET}</style>\n</head>\n<body>\n{body}</body>\n</html>\n"
        );

        let path = output_dir.join(format!("{base_filename}.html"));
        fs::write(&path, document)
            .map_err(|e| AppError::Publish(format!("writing {}: {e}", path.display())))?;
        debug!("published document to {}", path.display());
        Ok(path)
    }
}

/// Makes a display name safe for use in a filename: spaces become
/// underscores, dots are dropped, path separators are replaced.
pub fn sanitize_filename(name: &str) -> String {
    name.replace(' ', "_").replace('.', "").replace('/', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_writes_an_html_file_with_the_rendered_body() {
        let dir = tempfile::tempdir().unwrap();
        let publisher = HtmlDocumentPublisher;

        let path = publisher
            .publish("# Jane Doe\n\nSenior engineer.", "cv_001_Jane_Doe", dir.path())
            .unwrap();

        assert_eq!(path.extension().unwrap(), "html");
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("<h1>Jane Doe</h1>"));
        assert!(content.contains("Senior engineer."));
        assert!(content.contains("<style>"));
    }

    #[test]
    fn test_publish_creates_missing_output_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let publisher = HtmlDocumentPublisher;

        let path = publisher.publish("body", "doc", &nested).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_sanitize_filename_strips_awkward_characters() {
        assert_eq!(sanitize_filename("Jane M. Doe"), "Jane_M_Doe");
        assert_eq!(
            sanitize_filename("Cloud Migration / Phase 2"),
            "Cloud_Migration___Phase_2"
        );
    }
}
