use std::fmt;

use super::min_heap::MinHeap;
use super::{Frequency, Symbol, SymbolFrequency, WeightedLength};
use crate::error::Error;
use crate::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Leaf { symbol: Symbol },
    Inner { left: usize, right: usize },
}

#[derive(Clone, Copy, Debug)]
pub struct Node {
    frequency: Frequency,
    kind: NodeKind,
}

impl Node {
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }
}

/// Nodes are created in index order, so comparing the index after the
/// frequency prefers leaves in input order and older inner nodes on ties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct QueueEntry {
    frequency: Frequency,
    index: usize,
}

/// Huffman tree stored as an arena. Leaves occupy the indices `0..leaf_count`
/// in input order, every merge appends one inner node.
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root_index: usize,
    leaf_count: usize,
}

impl HuffmanTree {
    pub fn new(symbols_and_frequencies: &[SymbolFrequency]) -> Result<HuffmanTree> {
        Self::validate(symbols_and_frequencies)?;
        let leaf_count = symbols_and_frequencies.len();
        let mut nodes: Vec<Node> = Vec::with_capacity(2 * leaf_count - 1);
        nodes.extend(symbols_and_frequencies.iter().map(|sf| Node {
            frequency: sf.frequency,
            kind: NodeKind::Leaf { symbol: sf.symbol },
        }));

        let mut queue = MinHeap::from_vec(
            nodes
                .iter()
                .enumerate()
                .map(|(index, node)| QueueEntry {
                    frequency: node.frequency,
                    index,
                })
                .collect(),
        );

        while queue.len() > 1 {
            let (Some(left), Some(right)) = (queue.extract_min(), queue.extract_min()) else {
                unreachable!("queue holds at least two nodes");
            };
            let merged = QueueEntry {
                frequency: left.frequency + right.frequency,
                index: nodes.len(),
            };
            log::trace!(
                "merging node {} (f:{}) and node {} (f:{}) into node {} (f:{})",
                left.index,
                left.frequency,
                right.index,
                right.frequency,
                merged.index,
                merged.frequency
            );
            nodes.push(Node {
                frequency: merged.frequency,
                kind: NodeKind::Inner {
                    left: left.index,
                    right: right.index,
                },
            });
            queue.insert(merged);
        }

        let root_index = queue
            .extract_min()
            .map(|entry| entry.index)
            .ok_or(Error::EmptyAlphabet)?;
        Ok(HuffmanTree {
            nodes,
            root_index,
            leaf_count,
        })
    }

    fn validate(symbols_and_frequencies: &[SymbolFrequency]) -> Result<()> {
        if symbols_and_frequencies.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        let mut seen = [false; Symbol::MAX as usize + 1];
        for sf in symbols_and_frequencies {
            if sf.frequency == 0 {
                return Err(Error::ZeroFrequency(sf.symbol));
            }
            if seen[sf.symbol as usize] {
                return Err(Error::DuplicateSymbol(sf.symbol));
            }
            seen[sf.symbol as usize] = true;
        }
        // inner frequencies never exceed the total, so checking it once is enough
        symbols_and_frequencies
            .iter()
            .try_fold(0 as Frequency, |total, sf| total.checked_add(sf.frequency))
            .ok_or(Error::FrequencyOverflow)?;
        Ok(())
    }

    pub fn root_index(&self) -> usize {
        self.root_index
    }

    pub fn root(&self) -> &Node {
        &self.nodes[self.root_index]
    }

    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total frequency of all symbols.
    pub fn frequency(&self) -> Frequency {
        self.root().frequency
    }

    pub fn max_depth(&self) -> usize {
        self.leaf_depths()
            .into_iter()
            .map(|(_, depth)| depth)
            .max()
            .unwrap_or(0)
    }

    /// Sum of frequency times depth over all leaves.
    pub fn weighted_path_length(&self) -> WeightedLength {
        self.leaf_depths()
            .into_iter()
            .map(|(index, depth)| {
                WeightedLength::from(self.nodes[index].frequency) * depth as WeightedLength
            })
            .sum()
    }

    fn leaf_depths(&self) -> Vec<(usize, usize)> {
        let mut leaves = Vec::with_capacity(self.leaf_count);
        let mut stack = vec![(self.root_index, 0)];
        while let Some((index, depth)) = stack.pop() {
            match self.nodes[index].kind {
                NodeKind::Leaf { symbol: _ } => leaves.push((index, depth)),
                NodeKind::Inner { left, right } => {
                    stack.push((right, depth + 1));
                    stack.push((left, depth + 1));
                }
            }
        }
        leaves
    }

    /// Walks the tree from the root, `false` taking the left and `true` the
    /// right edge. Returns the symbol only if the walk ends exactly on a leaf.
    pub fn decode<I: IntoIterator<Item = bool>>(&self, bits: I) -> Option<Symbol> {
        let mut current_index = self.root_index;
        for take_right in bits {
            match self.nodes[current_index].kind {
                NodeKind::Inner { left, right } => {
                    current_index = if take_right { right } else { left };
                }
                NodeKind::Leaf { symbol: _ } => return None,
            }
        }
        match self.nodes[current_index].kind {
            NodeKind::Leaf { symbol } => Some(symbol),
            NodeKind::Inner { .. } => None,
        }
    }

    fn write_outline(
        &self,
        f: &mut fmt::Formatter<'_>,
        index: usize,
        indentation: &str,
    ) -> fmt::Result {
        let node = self.nodes[index];
        match node.kind {
            NodeKind::Leaf { symbol } => writeln!(f, "(s:{},f:{})", symbol, node.frequency),
            NodeKind::Inner { left, right } => {
                writeln!(f, "(f:{})", node.frequency)?;
                write!(f, "{}├─0─ ", indentation)?;
                self.write_outline(f, left, &format!("{}│    ", indentation))?;
                write!(f, "{}└─1─ ", indentation)?;
                self.write_outline(f, right, &format!("{}     ", indentation))
            }
        }
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_outline(f, self.root_index, "")
    }
}
