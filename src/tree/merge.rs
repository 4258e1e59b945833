// Mon Oct 19 2026 - Alex

use super::node::Node;

/// Recursively merges `incoming` into `base`.
///
/// Two maps merge key by key, recursing where both sides hold a map under the
/// same key. Any other pairing resolves to `incoming`, whatever the variants.
pub fn merge(base: Node, incoming: Node) -> Node {
    match (base, incoming) {
        (Node::Map(mut entries), Node::Map(additions)) => {
            for (key, value) in additions {
                let merged = match entries.remove(&key) {
                    Some(existing) => merge(existing, value),
                    None => value,
                };
                entries.insert(key, merged);
            }
            Node::Map(entries)
        }
        (_, incoming) => incoming,
    }
}

impl Node {
    pub fn merge(self, incoming: Node) -> Node {
        merge(self, incoming)
    }

    pub fn merge_in(&mut self, incoming: Node) {
        let base = std::mem::take(self);
        *self = merge(base, incoming);
    }
}
