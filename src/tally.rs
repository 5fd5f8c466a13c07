use std::io::{self, Write};

use crate::huffman::{Frequency, Symbol, SymbolFrequency};

const ALPHABET_SIZE: usize = Symbol::MAX as usize + 1;

/// Counts how often each byte value occurs. Bytes can be fed through
/// [`Write`], so `io::copy` tallies a whole reader.
pub struct ByteFrequencyCounter {
    symbol_frequencies: [Frequency; ALPHABET_SIZE],
}

impl ByteFrequencyCounter {
    pub fn new() -> Self {
        Self {
            symbol_frequencies: [Frequency::default(); ALPHABET_SIZE],
        }
    }

    pub fn increment_symbol(&mut self, symbol: Symbol) {
        self.symbol_frequencies[symbol as usize] += 1;
    }

    pub fn frequency(&self, symbol: Symbol) -> Frequency {
        self.symbol_frequencies[symbol as usize]
    }

    pub fn total(&self) -> Frequency {
        self.symbol_frequencies.iter().sum()
    }

    /// Symbols that occurred at least once, in ascending symbol order.
    pub fn to_symbol_frequencies(&self) -> Vec<SymbolFrequency> {
        (0..=Symbol::MAX)
            .zip(self.symbol_frequencies.iter().copied())
            .filter(|&(_, f)| f > 0)
            .map(SymbolFrequency::from)
            .collect()
    }
}

impl Default for ByteFrequencyCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for ByteFrequencyCounter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for &symbol in buf {
            self.increment_symbol(symbol);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl FromIterator<Symbol> for ByteFrequencyCounter {
    fn from_iter<T: IntoIterator<Item = Symbol>>(symbols: T) -> Self {
        let mut counter = Self::new();
        for symbol in symbols {
            counter.increment_symbol(symbol);
        }
        counter
    }
}

#[cfg(test)]
mod test {
    use std::io;

    use super::ByteFrequencyCounter;
    use crate::huffman::SymbolFrequency;

    #[test]
    fn test_count_from_iterator() {
        let counter: ByteFrequencyCounter = b"abracadabra".iter().copied().collect();
        assert_eq!(counter.frequency(b'a'), 5);
        assert_eq!(counter.frequency(b'b'), 2);
        assert_eq!(counter.frequency(b'r'), 2);
        assert_eq!(counter.frequency(b'c'), 1);
        assert_eq!(counter.frequency(b'd'), 1);
        assert_eq!(counter.frequency(b'z'), 0);
        assert_eq!(counter.total(), 11);
    }

    #[test]
    fn test_symbol_frequencies_skip_absent_symbols() {
        let counter: ByteFrequencyCounter = b"abracadabra".iter().copied().collect();
        let expected = [(b'a', 5), (b'b', 2), (b'c', 1), (b'd', 1), (b'r', 2)]
            .map(SymbolFrequency::from)
            .to_vec();
        assert_eq!(counter.to_symbol_frequencies(), expected);
    }

    #[test]
    fn test_count_through_writer() -> io::Result<()> {
        let input: Vec<u8> = (0..=255u8).chain([0, 0, 255]).collect();
        let mut counter = ByteFrequencyCounter::new();
        io::copy(&mut input.as_slice(), &mut counter)?;
        let frequencies = counter.to_symbol_frequencies();
        assert_eq!(frequencies.len(), 256, "Every byte value must be counted");
        assert_eq!(frequencies[0], SymbolFrequency::from((0, 3)));
        assert_eq!(frequencies[255], SymbolFrequency::from((255, 2)));
        Ok(())
    }

    #[test]
    fn test_empty_input_has_no_symbols() {
        let counter = ByteFrequencyCounter::default();
        assert!(counter.to_symbol_frequencies().is_empty());
        assert_eq!(counter.total(), 0);
    }
}
