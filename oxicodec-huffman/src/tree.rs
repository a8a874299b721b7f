//! Huffman tree construction and code generation.
//!
//! Nodes live in an arena and refer to their children by [`NodeId`]. Leaves
//! are pushed first, in ascending symbol order, and every merge appends a
//! new internal node, so a node's id is also its insertion sequence number.
//! The min-heap is keyed on `(frequency, id)`, a total order: ties are
//! always broken the same way and identical input gives an identical tree.

use crate::codes::{Code, CodeTable};
use crate::frequency::FrequencyTable;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Index of a node in the tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node of the Huffman tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    /// A symbol and its frequency.
    Leaf {
        /// The byte value.
        symbol: u8,
        /// Occurrence count.
        freq: u64,
    },
    /// A merge of two subtrees.
    Internal {
        /// Sum of both children's frequencies.
        freq: u64,
        /// Subtree reached by bit `0`.
        left: NodeId,
        /// Subtree reached by bit `1`.
        right: NodeId,
    },
}

impl Node {
    /// Frequency of this node.
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } | Node::Internal { freq, .. } => *freq,
        }
    }
}

/// Arena-backed Huffman tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl HuffmanTree {
    /// Build the tree for the symbols present in `freqs`.
    ///
    /// An empty table gives an empty tree.
    pub fn from_frequencies(freqs: &FrequencyTable) -> Self {
        let distinct = freqs.distinct();
        let mut tree = Self {
            nodes: Vec::with_capacity(distinct.saturating_mul(2).saturating_sub(1)),
            root: None,
        };
        let mut heap = BinaryHeap::with_capacity(distinct);

        for (symbol, freq) in freqs.symbols() {
            let id = tree.push(Node::Leaf { symbol, freq });
            heap.push(Reverse((freq, id)));
        }

        while let Some(Reverse((freq, left))) = heap.pop() {
            let Some(Reverse((right_freq, right))) = heap.pop() else {
                tree.root = Some(left);
                break;
            };

            // Counts from `FrequencyTable::from_counts` may sum past u64::MAX.
            let merged_freq = freq.saturating_add(right_freq);
            let merged = tree.push(Node::Internal {
                freq: merged_freq,
                left,
                right,
            });
            heap.push(Reverse((merged_freq, merged)));
        }

        log::trace!(
            "built Huffman tree: {} leaves, {} nodes",
            distinct,
            tree.nodes.len()
        );
        tree
    }

    /// Build the tree for the bytes of `data`.
    pub fn from_data(data: &[u8]) -> Self {
        Self::from_frequencies(&FrequencyTable::from_data(data))
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// The root node id, `None` for an empty tree.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The node stored under `id`.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True for the tree of empty input.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Derive the code table: a left edge appends `0`, a right edge `1`.
    ///
    /// A tree made of a single leaf assigns that symbol the code `0`,
    /// since an empty code could not be decoded.
    pub fn code_table(&self) -> CodeTable {
        let mut table = CodeTable::new();
        let Some(root) = self.root else {
            return table;
        };

        if let Node::Leaf { symbol, .. } = *self.node(root) {
            table.insert(symbol, Code::from_bits(vec![false]));
            return table;
        }

        self.assign_codes(root, Code::new(), &mut table);
        table
    }

    fn assign_codes(&self, id: NodeId, prefix: Code, table: &mut CodeTable) {
        match *self.node(id) {
            Node::Leaf { symbol, .. } => {
                table.insert(symbol, prefix);
            }
            Node::Internal { left, right, .. } => {
                self.assign_codes(left, prefix.extended(false), table);
                self.assign_codes(right, prefix.extended(true), table);
            }
        }
    }
}
