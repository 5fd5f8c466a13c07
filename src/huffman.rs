pub mod code_table;
pub mod min_heap;
pub mod tree;

pub type Symbol = u8;
pub type Frequency = u64;
/// Frequency times code length summed over an alphabet. Wider than
/// [`Frequency`] since only the plain total is checked when building a tree.
pub type WeightedLength = u128;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymbolFrequency {
    pub symbol: Symbol,
    pub frequency: Frequency,
}

impl From<(Symbol, Frequency)> for SymbolFrequency {
    fn from(value: (Symbol, Frequency)) -> Self {
        Self {
            symbol: value.0,
            frequency: value.1,
        }
    }
}

pub use code_table::{BitSequence, CodeTable, SingleSymbolPolicy, SymbolCode, TableOrder};
pub use min_heap::MinHeap;
pub use tree::HuffmanTree;
