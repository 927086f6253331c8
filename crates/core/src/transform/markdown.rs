use pulldown_cmark::{html, Options, Parser};

use super::TransformError;

pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, markdown: &str) -> Result<String, TransformError>;
}

/// CommonMark with the GitHub extensions (tables, strikethrough, task lists).
///
/// Inline and block HTML are passed through untouched; nothing is sanitized.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommonMarkRenderer;

impl MarkdownRenderer for CommonMarkRenderer {
    fn render(&self, markdown: &str) -> Result<String, TransformError> {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS;
        let parser = Parser::new_ext(markdown, options);

        let mut output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut output, parser);

        Ok(output)
    }
}
