// Mon Oct 19 2026 - Alex

use crate::tree::Node;

pub const KEYBOARD_FUNCTIONS: &str = "keyboard-functions";
pub const LAYOUT_MATRICES: &str = "layout-matrices";

pub const LAYOUT: &str = "_kb_layout";
pub const LAYOUT_PRESS: &str = "_kb_layout_press";
pub const LAYOUT_RELEASE: &str = "_kb_layout_release";

pub const LAYOUT_MATRIX_NAMES: [&str; 3] = [LAYOUT, LAYOUT_PRESS, LAYOUT_RELEASE];

/// Where a symbol lives in the image and how many bytes it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolExtent {
    pub position: u64,
    pub length: u64,
}

impl SymbolExtent {
    pub fn new(position: u64, length: u64) -> Self {
        Self { position, length }
    }

    pub fn to_node(&self) -> Node {
        Node::map()
            .with_entry("position", self.position)
            .with_entry("length", self.length)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardFunction {
    pub name: String,
    pub extent: SymbolExtent,
}

impl KeyboardFunction {
    pub fn to_node(&self) -> Node {
        Node::map().with_entry(
            KEYBOARD_FUNCTIONS,
            Node::map().with_entry(self.name.clone(), self.extent.to_node()),
        )
    }
}

/// The three layout tables. They are only ever produced together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMatrices {
    pub layout: SymbolExtent,
    pub press: SymbolExtent,
    pub release: SymbolExtent,
}

impl LayoutMatrices {
    /// `base_length` is the size of one byte-wide table; the press and release
    /// tables hold two-byte entries.
    pub fn new(base_length: u64, positions: [u64; 3]) -> Self {
        let [layout, press, release] = positions;
        Self {
            layout: SymbolExtent::new(layout, base_length),
            press: SymbolExtent::new(press, base_length * 2),
            release: SymbolExtent::new(release, base_length * 2),
        }
    }

    pub fn to_node(&self) -> Node {
        Node::map().with_entry(
            LAYOUT_MATRICES,
            Node::map()
                .with_entry(LAYOUT, self.layout.to_node())
                .with_entry(LAYOUT_PRESS, self.press.to_node())
                .with_entry(LAYOUT_RELEASE, self.release.to_node()),
        )
    }
}
