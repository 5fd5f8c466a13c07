use std::fmt;
use std::io::{self, Write};

use clap::{builder::PossibleValue, ValueEnum};

use super::tree::{HuffmanTree, NodeKind};
use super::{Symbol, SymbolFrequency, WeightedLength};

/// Code word of a single symbol. `false` stands for a left edge, `true` for a
/// right edge of the tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitSequence {
    bits: Vec<bool>,
}

impl BitSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    pub fn starts_with(&self, prefix: &BitSequence) -> bool {
        self.bits.starts_with(&prefix.bits)
    }

    fn extended(mut self, bit: bool) -> Self {
        self.bits.push(bit);
        self
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolCode {
    pub symbol: Symbol,
    pub code: BitSequence,
}

/// How to treat an alphabet with a single symbol, whose tree is a lone leaf.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SingleSymbolPolicy {
    /// Keep the empty code of the root leaf.
    #[default]
    ZeroLength,
    /// Assign the code `0`.
    OneBit,
}

impl ValueEnum for SingleSymbolPolicy {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::ZeroLength, Self::OneBit]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::ZeroLength => Some(PossibleValue::new("ZeroLength")),
            Self::OneBit => Some(PossibleValue::new("OneBit")),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TableOrder {
    /// Depth-first, left before right.
    #[default]
    Traversal,
    /// Ascending symbol value.
    Symbol,
}

impl ValueEnum for TableOrder {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Traversal, Self::Symbol]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Traversal => Some(PossibleValue::new("Traversal")),
            Self::Symbol => Some(PossibleValue::new("Symbol")),
        }
    }
}

/// One code word per leaf of a [`HuffmanTree`], in the order the leaves are
/// visited by a depth-first, left before right traversal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTable {
    entries: Vec<SymbolCode>,
}

impl CodeTable {
    pub fn new(tree: &HuffmanTree, policy: SingleSymbolPolicy) -> CodeTable {
        let mut entries = Vec::with_capacity(tree.leaf_count());
        // every frame owns the path leading to its node
        let mut stack = vec![(tree.root_index(), BitSequence::new())];
        while let Some((index, path)) = stack.pop() {
            match tree.node(index).kind() {
                NodeKind::Leaf { symbol } => entries.push(SymbolCode { symbol, code: path }),
                NodeKind::Inner { left, right } => {
                    stack.push((right, path.clone().extended(true)));
                    stack.push((left, path.extended(false)));
                }
            }
        }
        if policy == SingleSymbolPolicy::OneBit && entries.len() == 1 {
            entries[0].code = BitSequence::new().extended(false);
        }
        CodeTable { entries }
    }

    pub fn entries(&self) -> &[SymbolCode] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn code_for(&self, symbol: Symbol) -> Option<&BitSequence> {
        self.entries
            .iter()
            .find(|entry| entry.symbol == symbol)
            .map(|entry| &entry.code)
    }

    pub fn sort_by_symbol(&mut self) {
        self.entries.sort_by_key(|entry| entry.symbol);
    }

    pub fn max_code_length(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.code.len())
            .max()
            .unwrap_or(0)
    }

    pub fn is_prefix_free(&self) -> bool {
        self.entries.iter().enumerate().all(|(i, a)| {
            self.entries
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !b.code.starts_with(&a.code))
        })
    }

    /// Sum of frequency times code length. Symbols without a code contribute
    /// nothing.
    pub fn weighted_length(&self, frequencies: &[SymbolFrequency]) -> WeightedLength {
        frequencies
            .iter()
            .filter_map(|sf| {
                self.code_for(sf.symbol).map(|code| {
                    WeightedLength::from(sf.frequency) * code.len() as WeightedLength
                })
            })
            .sum()
    }

    /// Mean code length in bits per symbol occurrence.
    pub fn average_code_length(&self, frequencies: &[SymbolFrequency]) -> f64 {
        let total: WeightedLength = frequencies
            .iter()
            .map(|sf| WeightedLength::from(sf.frequency))
            .sum();
        if total == 0 {
            return 0.0;
        }
        self.weighted_length(frequencies) as f64 / total as f64
    }

    /// Writes one line `<symbol>:<bits>` per entry, the symbol as its raw byte.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for entry in &self.entries {
            writer.write_all(&[entry.symbol, b':'])?;
            let digits: Vec<u8> = entry
                .code
                .iter()
                .map(|bit| if bit { b'1' } else { b'0' })
                .collect();
            writer.write_all(&digits)?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }
}
