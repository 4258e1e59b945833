// Mon Oct 19 2026 - Alex

use super::comments::{CommentBlock, CommentFieldParser};
use super::error::SourceError;
use crate::mapfile::KEYBOARD_FUNCTIONS;
use crate::tree::Node;
use crate::utils::LineCursor;
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

static KBFUN_DEFINITION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"void\s+(kbfun_\S+)\s*\(void\)").expect("valid regex"));

const COMMENT_OPEN: &str = "/*";
const COMMENT_CLOSE: &str = "*/";
const COMMENT_PREFIX_CHARS: usize = 2;

/// A keyboard function declaration and the comment directly above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentedFunction {
    pub name: String,
    pub comments: CommentBlock,
}

impl DocumentedFunction {
    pub fn to_node(&self) -> Node {
        Node::map().with_entry(
            KEYBOARD_FUNCTIONS,
            Node::map().with_entry(
                self.name.clone(),
                Node::map().with_entry("comments", self.comments.to_node()),
            ),
        )
    }
}

pub struct SourceScanner {
    extension: String,
    parser: CommentFieldParser,
}

impl SourceScanner {
    pub fn new() -> Self {
        Self {
            extension: "c".to_string(),
            parser: CommentFieldParser::new(),
        }
    }

    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Scans every implementation file below `root`, in file-name order.
    pub fn scan_tree<P: AsRef<Path>>(&self, root: P) -> Result<Node, SourceError> {
        let root = root.as_ref();
        if !root.exists() {
            return Err(SourceError::InvalidPath(root.to_path_buf()));
        }

        log::info!("Scanning {} for *.{} files", root.display(), self.extension);

        let mut output = Node::map();
        let mut scanned = 0usize;

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() || !self.is_source_file(entry.path()) {
                continue;
            }

            for function in self.scan_file(entry.path())? {
                output.merge_in(function.to_node());
            }
            scanned += 1;
        }

        log::info!(
            "Scanned {} source files, {} documented keyboard functions",
            scanned,
            output.get(KEYBOARD_FUNCTIONS).map(Node::len).unwrap_or(0)
        );
        Ok(output)
    }

    pub fn is_source_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext == self.extension)
            .unwrap_or(false)
    }

    pub fn scan_file(&self, path: &Path) -> Result<Vec<DocumentedFunction>, SourceError> {
        let io_error = |source: std::io::Error| SourceError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut cursor = LineCursor::open(path).map_err(io_error)?;
        self.scan(&mut cursor, path)
    }

    pub fn scan_reader<R: BufRead>(
        &self,
        reader: R,
        path: &Path,
    ) -> Result<Vec<DocumentedFunction>, SourceError> {
        self.scan(&mut LineCursor::new(reader), path)
    }

    fn scan<R: BufRead>(
        &self,
        cursor: &mut LineCursor<R>,
        path: &Path,
    ) -> Result<Vec<DocumentedFunction>, SourceError> {
        let mut functions = Vec::new();
        let mut last_comment = String::new();

        while let Some(line) = Self::next_line(cursor, path)? {
            if line.trim() == COMMENT_OPEN {
                last_comment = Self::read_comment(cursor, path)?;
            } else if let Some(captures) = KBFUN_DEFINITION.captures(&line) {
                let name = captures[1].to_string();
                log::debug!("{}:{}: found {}", path.display(), cursor.line_number(), name);

                functions.push(DocumentedFunction {
                    name,
                    comments: self.parser.parse(&std::mem::take(&mut last_comment)),
                });
            }
        }

        Ok(functions)
    }

    fn read_comment<R: BufRead>(
        cursor: &mut LineCursor<R>,
        path: &Path,
    ) -> Result<String, SourceError> {
        let opened_at = cursor.line_number();
        let mut comment = String::new();

        loop {
            let line = Self::next_line(cursor, path)?.ok_or_else(|| {
                SourceError::UnterminatedComment {
                    path: path.to_path_buf(),
                    line: opened_at,
                }
            })?;

            if line.trim() == COMMENT_CLOSE {
                return Ok(comment);
            }

            comment.push_str(strip_comment_prefix(&line).trim());
            comment.push('\n');
        }
    }

    fn next_line<R: BufRead>(
        cursor: &mut LineCursor<R>,
        path: &Path,
    ) -> Result<Option<String>, SourceError> {
        cursor.advance().map_err(|source| SourceError::Io {
            path: PathBuf::from(path),
            source,
        })
    }
}

impl Default for SourceScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Drops the leading ` *` (or any two characters) of a comment body line.
fn strip_comment_prefix(line: &str) -> &str {
    line.char_indices()
        .nth(COMMENT_PREFIX_CHARS)
        .map(|(index, _)| &line[index..])
        .unwrap_or("")
}
