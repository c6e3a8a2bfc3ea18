use std::fmt;
use std::io::Write;
use std::str::FromStr;
use super::error::{Error, Result};

/// A fixed-length vector of bits, serialized as one line of '0'/'1'
/// characters with entry 0 first.
#[derive(Clone, PartialEq, Eq)]
pub struct BitVector {
    entries: Vec<bool>,
}

impl BitVector {
    pub fn new(len: usize) -> Self {
        BitVector {
            entries: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        for entry in self.entries.iter_mut() {
            *entry = false;
        }
    }

    /// Sets the bit at `index`. Returns false if it was already set.
    pub fn set(&mut self, index: usize) -> Result<bool> {
        let len = self.entries.len();
        match self.entries.get_mut(index) {
            Some(entry) => {
                let was_clear = !*entry;
                *entry = true;
                Ok(was_clear)
            }
            None => Err(Error::IndexOutOfRange { index, len }),
        }
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.entries.get(index).copied()
    }

    /// Hamming weight.
    pub fn weight(&self) -> usize {
        self.entries.iter().filter(|e| **e).count()
    }

    pub fn set_indices(&self) -> Vec<usize> {
        self.entries.iter()
            .enumerate()
            .filter(|(_, e)| **e)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn write_line<W: Write>(&self, writer: &mut W) -> Result<()> {
        let mut line: Vec<u8> = Vec::with_capacity(self.entries.len() + 1);
        for entry in self.entries.iter() {
            line.push(if *entry { b'1' } else { b'0' });
        }
        line.push(b'\n');
        writer.write_all(&line)?;
        Ok(())
    }

    pub fn parse_line(line: &str) -> Result<BitVector> {
        let mut entries: Vec<bool> = Vec::with_capacity(line.len());
        for (column, c) in line.chars().enumerate() {
            match c {
                '0' => entries.push(false),
                '1' => entries.push(true),
                found => return Err(Error::InvalidCharacter { column, found }),
            }
        }
        Ok(BitVector { entries })
    }

    /// Like `parse_line`, for input that may not be valid UTF-8. Columns are
    /// byte offsets and an offending byte is reported as its Latin-1 char.
    pub fn parse_bytes(line: &[u8]) -> Result<BitVector> {
        let mut entries: Vec<bool> = Vec::with_capacity(line.len());
        for (column, byte) in line.iter().enumerate() {
            match byte {
                b'0' => entries.push(false),
                b'1' => entries.push(true),
                found => return Err(Error::InvalidCharacter { column, found: *found as char }),
            }
        }
        Ok(BitVector { entries })
    }
}

impl FromStr for BitVector {
    type Err = Error;

    fn from_str(s: &str) -> Result<BitVector> {
        BitVector::parse_line(s)
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.entries.iter() {
            write!(f, "{}", if *entry { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<bitvector {}/{}>", self.weight(), self.entries.len())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;
    use super::BitVector;
    use super::super::error;

    #[test]
    fn new_is_all_zero() {
        let v = BitVector::new(1024);
        assert_eq!(v.len(), 1024);
        assert_eq!(v.weight(), 0);
        assert_eq!(format!("{}", v), "0".repeat(1024));
    }

    #[test]
    fn set_reports_collisions() -> Result<(), Box<dyn Error>> {
        let mut v = BitVector::new(8);
        assert!(v.set(3)?);
        assert!(!v.set(3)?);
        assert!(v.set(7)?);
        assert_eq!(v.weight(), 2);
        assert_eq!(v.set_indices(), vec![3, 7]);
        assert_eq!(v.get(3), Some(true));
        assert_eq!(v.get(0), Some(false));
        assert_eq!(v.get(8), None);
        Ok(())
    }

    #[test]
    fn set_out_of_range() {
        let mut v = BitVector::new(8);
        match v.set(8) {
            Err(error::Error::IndexOutOfRange { index: 8, len: 8 }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn clear_resets_every_entry() -> Result<(), Box<dyn Error>> {
        let mut v = BitVector::new(16);
        for i in 0..16 {
            v.set(i)?;
        }
        assert_eq!(v.weight(), 16);
        v.clear();
        assert_eq!(v.weight(), 0);
        assert_eq!(v.len(), 16);
        Ok(())
    }

    #[test]
    fn write_line_serializes_in_order() -> Result<(), Box<dyn Error>> {
        let mut v = BitVector::new(6);
        v.set(1)?;
        v.set(5)?;
        let mut out: Vec<u8> = Vec::new();
        v.write_line(&mut out)?;
        assert_eq!(out, b"010001\n");
        assert_eq!(format!("{:?}", v), "<bitvector 2/6>");
        Ok(())
    }

    #[test]
    fn parse_line() -> Result<(), Box<dyn Error>> {
        let v: BitVector = "0110".parse()?;
        assert_eq!(v.set_indices(), vec![1, 2]);
        assert_eq!(format!("{}", v), "0110");
        match BitVector::parse_line("01x0") {
            Err(error::Error::InvalidCharacter { column: 2, found: 'x' }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn parse_bytes_rejects_non_ascii() -> Result<(), Box<dyn Error>> {
        let v = BitVector::parse_bytes(b"1001")?;
        assert_eq!(v.set_indices(), vec![0, 3]);
        match BitVector::parse_bytes(b"01\xff0") {
            Err(error::Error::InvalidCharacter { column: 2, found: '\u{ff}' }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        Ok(())
    }
}
