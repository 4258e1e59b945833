// Mon Oct 19 2026 - Alex

use super::error::MapError;
use super::records::{KeyboardFunction, LayoutMatrices, SymbolExtent, LAYOUT_MATRIX_NAMES};
use crate::tree::Node;
use crate::utils::{parse_hex, LineCursor};
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::BufRead;
use std::path::Path;

static KBFUN_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\.text\.kbfun_").expect("valid regex"));
static LAYOUT_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\.progmem\.data.*layout").expect("valid regex"));
static POSITION_AND_LENGTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(0x\S+)\s+(0x\S+)").expect("valid regex"));
static SYMBOL_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"0x\S+\s+(\S+)").expect("valid regex"));
static SECTION_LENGTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"0x\S+\s+(0x\S+)").expect("valid regex"));
static LAYOUT_SYMBOLS: Lazy<Vec<Regex>> = Lazy::new(|| {
    LAYOUT_MATRIX_NAMES
        .iter()
        .map(|name| {
            Regex::new(&format!(r"(0x\S+)\s+{}\s*$", regex::escape(name))).expect("valid regex")
        })
        .collect()
});

const KBFUN_PREFIX: &str = "kbfun_";

/// The combined layout section holds the plain table (one byte per key) and
/// the press and release tables (two bytes per key).
const LAYOUT_SECTION_SHARES: u64 = 5;

/// Lines following a layout section header that name the three tables.
const LAYOUT_LOOKAHEAD: usize = 3;

/// Extracts keyboard-function and layout-matrix extents from a linker map.
pub struct MapFileParser;

impl MapFileParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Node, MapError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(MapError::InvalidPath(path.to_path_buf()));
        }

        log::info!("Parsing map file {}", path.display());
        let mut cursor = LineCursor::open(path)?;
        self.parse(&mut cursor)
    }

    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Node, MapError> {
        self.parse(&mut LineCursor::new(reader))
    }

    fn parse<R: BufRead>(&self, cursor: &mut LineCursor<R>) -> Result<Node, MapError> {
        let mut output = Node::map();

        while let Some(line) = cursor.advance()? {
            if KBFUN_SECTION.is_match(&line) {
                let function = self.parse_keyboard_function(cursor)?;
                log::debug!(
                    "Keyboard function {} at 0x{:x} ({} bytes)",
                    function.name,
                    function.extent.position,
                    function.extent.length
                );
                output.merge_in(function.to_node());
            } else if LAYOUT_SECTION.is_match(&line) {
                let matrices = self.parse_layout_matrices(cursor, &line)?;
                log::debug!(
                    "Layout matrices at 0x{:x}/0x{:x}/0x{:x} (base length {})",
                    matrices.layout.position,
                    matrices.press.position,
                    matrices.release.position,
                    matrices.layout.length
                );
                output.merge_in(matrices.to_node());
            }
        }

        Ok(output)
    }

    fn parse_keyboard_function<R: BufRead>(
        &self,
        cursor: &mut LineCursor<R>,
    ) -> Result<KeyboardFunction, MapError> {
        let header_line = cursor.line_number();

        let extent_line = cursor.advance()?.ok_or_else(|| {
            MapError::malformed(header_line, "map ended before the keyboard function's extent")
        })?;
        let captures = POSITION_AND_LENGTH.captures(&extent_line).ok_or_else(|| {
            MapError::malformed(cursor.line_number(), "expected a hex position and length")
        })?;
        let position = self.hex_value(&captures[1], cursor.line_number())?;
        let length = self.hex_value(&captures[2], cursor.line_number())?;

        let name_line = cursor.advance()?.ok_or_else(|| {
            MapError::malformed(header_line, "map ended before the keyboard function's name")
        })?;
        let name = SYMBOL_NAME
            .captures(&name_line)
            .map(|captures| captures[1].to_string())
            .ok_or_else(|| {
                MapError::malformed(cursor.line_number(), "expected a hex address and symbol name")
            })?;

        if !name.starts_with(KBFUN_PREFIX) {
            return Err(MapError::malformed(
                cursor.line_number(),
                format!("symbol '{}' is not a keyboard function", name),
            ));
        }

        Ok(KeyboardFunction {
            name,
            extent: SymbolExtent::new(position, length),
        })
    }

    fn parse_layout_matrices<R: BufRead>(
        &self,
        cursor: &mut LineCursor<R>,
        header: &str,
    ) -> Result<LayoutMatrices, MapError> {
        let header_line = cursor.line_number();

        let captures = SECTION_LENGTH.captures(header).ok_or_else(|| {
            MapError::malformed(header_line, "expected a hex length on the layout section line")
        })?;
        let base_length = self.hex_value(&captures[1], header_line)? / LAYOUT_SECTION_SHARES;

        let block = cursor.take(LAYOUT_LOOKAHEAD)?;

        let mut positions = [None; 3];
        for (slot, pattern) in positions.iter_mut().zip(LAYOUT_SYMBOLS.iter()) {
            if let Some(captures) = block.iter().find_map(|line| pattern.captures(line)) {
                *slot = Some(self.hex_value(&captures[1], header_line)?);
            }
        }

        match positions {
            [Some(layout), Some(press), Some(release)] => {
                Ok(LayoutMatrices::new(base_length, [layout, press, release]))
            }
            _ => Err(MapError::IncompleteLayoutSet {
                line: header_line,
                missing: LAYOUT_MATRIX_NAMES
                    .iter()
                    .zip(positions.iter())
                    .filter(|(_, position)| position.is_none())
                    .map(|(name, _)| name.to_string())
                    .collect(),
            }),
        }
    }

    fn hex_value(&self, token: &str, line: usize) -> Result<u64, MapError> {
        parse_hex(token)
            .ok_or_else(|| MapError::malformed(line, format!("'{}' is not a hex number", token)))
    }
}

impl Default for MapFileParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapfile::records::{KEYBOARD_FUNCTIONS, LAYOUT_MATRICES};
    use std::io::Cursor;

    fn parse(text: &str) -> Result<Node, MapError> {
        MapFileParser::new().parse_reader(Cursor::new(text.as_bytes()))
    }

    const LAYOUT_BLOCK: &str = concat!(
        " .progmem.data  0x00000068      0x690 ./keyboard/ergodox/layout/qwerty.o\n",
        "                0x00000068                _kb_layout\n",
        "                0x000001f4                _kb_layout_press\n",
        "                0x0000050c                _kb_layout_release\n",
    );

    #[test]
    fn test_keyboard_function() {
        let text = ".text.kbfun_foo\n0x00001000   0x00000020\n0x00001000   kbfun_foo\n";
        let tree = parse(text).unwrap();

        let expected = Node::map().with_entry(
            KEYBOARD_FUNCTIONS,
            Node::map().with_entry(
                "kbfun_foo",
                Node::map().with_entry("position", 4096u64).with_entry("length", 32u64),
            ),
        );
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_indented_map_entries() {
        let text = concat!(
            " .text.kbfun_press_release\n",
            "                0x00000b3c       0x1c ./lib/key-functions/public/basic.o\n",
            "                0x00000b3c                kbfun_press_release\n",
            " .text.other    0x00000b58       0x10 ./main.o\n",
            " .text.kbfun_toggle\n",
            "                0x00000b68       0x2a ./lib/key-functions/public/basic.o\n",
            "                0x00000b68                kbfun_toggle\n",
        );
        let tree = parse(text).unwrap();

        let functions = tree.get(KEYBOARD_FUNCTIONS).unwrap();
        assert_eq!(functions.len(), 2);
        assert_eq!(
            functions.get_path(&["kbfun_press_release", "position"]).and_then(Node::as_u64),
            Some(0xb3c)
        );
        assert_eq!(
            functions.get_path(&["kbfun_toggle", "length"]).and_then(Node::as_u64),
            Some(0x2a)
        );
    }

    #[test]
    fn test_unrelated_lines_are_skipped() {
        let tree = parse("Archive member included\n .text  0x0 0x10 main.o\n\n").unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_layout_matrices() {
        let tree = parse(LAYOUT_BLOCK).unwrap();
        let matrices = tree.get(LAYOUT_MATRICES).unwrap();

        // 0x690 / 5
        assert_eq!(matrices.get_path(&["_kb_layout", "length"]).and_then(Node::as_u64), Some(336));
        assert_eq!(matrices.get_path(&["_kb_layout", "position"]).and_then(Node::as_u64), Some(0x68));
        assert_eq!(
            matrices.get_path(&["_kb_layout_press", "length"]).and_then(Node::as_u64),
            Some(672)
        );
        assert_eq!(
            matrices.get_path(&["_kb_layout_release", "position"]).and_then(Node::as_u64),
            Some(0x50c)
        );
    }

    #[test]
    fn test_layout_names_in_any_order() {
        let text = concat!(
            " .progmem.data  0x00000068      0x690 layout.o\n",
            "                0x0000050c                _kb_layout_release\n",
            "                0x00000068                _kb_layout\n",
            "                0x000001f4                _kb_layout_press\n",
        );
        let tree = parse(text).unwrap();
        assert_eq!(
            tree.get_path(&[LAYOUT_MATRICES, "_kb_layout", "position"]).and_then(Node::as_u64),
            Some(0x68)
        );
        assert_eq!(
            tree.get_path(&[LAYOUT_MATRICES, "_kb_layout_release", "position"])
                .and_then(Node::as_u64),
            Some(0x50c)
        );
    }

    #[test]
    fn test_missing_layout_matrix() {
        let text = concat!(
            " .progmem.data  0x00000068      0x690 layout.o\n",
            "                0x00000068                _kb_layout\n",
            "                0x000001f4                _kb_layout_press\n",
            "                0x0000050c                _kb_other\n",
        );
        match parse(text) {
            Err(MapError::IncompleteLayoutSet { line, missing }) => {
                assert_eq!(line, 1);
                assert_eq!(missing, vec!["_kb_layout_release".to_string()]);
            }
            other => panic!("expected IncompleteLayoutSet, got {:?}", other),
        }
    }

    #[test]
    fn test_layout_block_cut_short() {
        let text = concat!(
            " .progmem.data  0x00000068      0x690 layout.o\n",
            "                0x00000068                _kb_layout\n",
        );
        match parse(text) {
            Err(MapError::IncompleteLayoutSet { missing, .. }) => assert_eq!(missing.len(), 2),
            other => panic!("expected IncompleteLayoutSet, got {:?}", other),
        }
    }

    #[test]
    fn test_layout_lookahead_is_bounded() {
        let text = concat!(
            " .progmem.data  0x00000068      0x690 layout.o\n",
            "                0x00000068                _kb_layout\n",
            "                0x000001f4                _kb_layout_press\n",
            "                0x00000400                _kb_unrelated\n",
            "                0x0000050c                _kb_layout_release\n",
        );
        assert!(matches!(parse(text), Err(MapError::IncompleteLayoutSet { .. })));
    }

    #[test]
    fn test_keyboard_function_missing_extent() {
        let text = ".text.kbfun_foo\n                kbfun_foo\n";
        match parse(text) {
            Err(MapError::MalformedEntry { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected MalformedEntry, got {:?}", other),
        }
    }

    #[test]
    fn test_keyboard_function_at_end_of_input() {
        let text = ".text.kbfun_foo\n0x00001000   0x00000020\n";
        assert!(matches!(parse(text), Err(MapError::MalformedEntry { .. })));
        assert!(matches!(parse(".text.kbfun_foo"), Err(MapError::MalformedEntry { line: 1, .. })));
    }

    #[test]
    fn test_keyboard_function_wrong_symbol() {
        let text = ".text.kbfun_foo\n0x00001000   0x00000020\n0x00001000   main\n";
        assert!(matches!(parse(text), Err(MapError::MalformedEntry { line: 3, .. })));
    }

    #[test]
    fn test_both_sections_merge() {
        let text = format!(
            "{}{}",
            ".text.kbfun_foo\n0x00001000   0x00000020\n0x00001000   kbfun_foo\n",
            LAYOUT_BLOCK
        );
        let tree = parse(&text).unwrap();
        assert!(tree.contains_key(KEYBOARD_FUNCTIONS));
        assert_eq!(tree.get(LAYOUT_MATRICES).map(Node::len), Some(3));
    }

    #[test]
    fn test_missing_file() {
        let result = MapFileParser::new().parse_file("/nonexistent/firmware.map");
        assert!(matches!(result, Err(MapError::InvalidPath(_))));
    }
}
