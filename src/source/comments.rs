// Mon Oct 19 2026 - Alex

use crate::tree::Node;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static FIELD_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[(.*)\]$").expect("valid regex"));

const NAME: &str = "name";
const DESCRIPTION: &str = "description";
const NOTE: &str = "note";
const NOTES: &str = "notes";

/// Documentation fields collected from one `[field]`-tagged comment.
///
/// `name` and `description` keep their first value. Every other field, `notes`
/// included, accumulates its values in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentBlock {
    pub name: Option<String>,
    pub description: Option<String>,
    pub fields: BTreeMap<String, Vec<String>>,
}

impl CommentBlock {
    pub fn parse(text: &str) -> Self {
        CommentFieldParser::new().parse(text)
    }

    pub fn notes(&self) -> &[String] {
        self.field(NOTES)
    }

    pub fn field(&self, name: &str) -> &[String] {
        self.fields.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.fields.is_empty()
    }

    fn add_field(&mut self, field: &str, value: String) {
        match field {
            NAME => {
                self.name.get_or_insert(value);
            }
            DESCRIPTION => {
                self.description.get_or_insert(value);
            }
            NOTE => self.fields.entry(NOTES.to_string()).or_default().push(value),
            other => self.fields.entry(other.to_string()).or_default().push(value),
        }
    }

    pub fn to_node(&self) -> Node {
        let mut node = Node::map();
        if let Some(name) = &self.name {
            node = node.with_entry(NAME, name.as_str());
        }
        if let Some(description) = &self.description {
            node = node.with_entry(DESCRIPTION, description.as_str());
        }
        for (field, values) in &self.fields {
            node = node.with_entry(field.clone(), values.clone());
        }
        node
    }
}

/// Turns a stripped comment body into a [`CommentBlock`].
///
/// A line `[field]` opens a section that runs until the next marker or the end
/// of the text. Anything before the first marker is dropped.
pub struct CommentFieldParser;

impl CommentFieldParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, text: &str) -> CommentBlock {
        let mut block = CommentBlock::default();
        let mut field: Option<String> = None;
        let mut value: Option<String> = None;

        for line in text.split('\n') {
            let line = line.trim();

            if let Some(captures) = FIELD_MARKER.captures(line) {
                Self::close_field(&mut block, field.take(), value.take());
                field = Some(captures[1].to_string());
            } else {
                append_line(value.get_or_insert_with(String::new), line);
            }
        }
        Self::close_field(&mut block, field, value);

        block
    }

    fn close_field(block: &mut CommentBlock, field: Option<String>, value: Option<String>) {
        if let Some(field) = field {
            let value = value.as_deref().unwrap_or("").trim().to_string();
            block.add_field(&field, value);
        }
    }
}

impl Default for CommentFieldParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Every line is joined with one space, two after a sentence-ending period.
fn append_line(value: &mut String, line: &str) {
    if value.ends_with('.') {
        value.push(' ');
    }
    value.push(' ');
    value.push_str(line);
}
