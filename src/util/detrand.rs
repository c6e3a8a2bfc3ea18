// https://en.wikipedia.org/wiki/Linear_congruential_generator#cite_note-Steele20-3
//
// Parameters from Microsoft Visual/Quick C/C++
// m = 2^32
// a = 214013
// c = 2531011
//
// Simple enough to re-implement in a testbench that needs to reproduce a
// vector file from its seed.

use rand::{RngCore, Error};

#[derive(Debug, Clone)]
pub struct Lcg {
    seed: u32,
    a: u32,
    c: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Lcg {
        Lcg {
            a: 214013,
            c: 2531011,
            seed,
        }
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.seed = self.a.wrapping_mul(self.seed).wrapping_add(self.c);
        self.seed
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::RngCore;
    use super::Lcg;

    #[test]
    fn known_sequence() {
        let mut gen = Lcg::new(0);
        assert_eq!(gen.next_u32(), 2531011);
        assert_eq!(gen.next_u32(), 214013u32.wrapping_mul(2531011).wrapping_add(2531011));
    }

    #[test]
    fn next_u64_high_word_first() {
        let mut a = Lcg::new(12345);
        let mut b = Lcg::new(12345);
        let hi = b.next_u32() as u64;
        let lo = b.next_u32() as u64;
        assert_eq!(a.next_u64(), (hi << 32) | lo);
    }

    #[test]
    fn fill_bytes_partial_chunk() {
        let mut a = Lcg::new(7);
        let mut b = Lcg::new(7);
        let mut buf = [0u8; 6];
        a.fill_bytes(&mut buf);
        let first = b.next_u32().to_le_bytes();
        let second = b.next_u32().to_le_bytes();
        assert_eq!(&buf[0..4], &first[..]);
        assert_eq!(&buf[4..6], &second[0..2]);
    }
}
