use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use rand::{Rng, RngCore};
use super::bitvec::BitVector;
use super::config::Config;
use super::error::Result;

/// Totals for one generated file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    pub draws: usize,
    pub bits_set: usize,
    /// Draws that landed on an index already set on the same line.
    pub collisions: usize,
    pub min_weight: Option<usize>,
    pub max_weight: Option<usize>,
}

impl Summary {
    fn record(&mut self, drawn: usize, weight: usize) {
        self.lines += 1;
        self.draws += drawn;
        self.bits_set += weight;
        self.collisions += drawn - weight;
        self.min_weight = Some(self.min_weight.map_or(weight, |w| w.min(weight)));
        self.max_weight = Some(self.max_weight.map_or(weight, |w| w.max(weight)));
    }
}

pub struct Generator<R: RngCore> {
    config: Config,
    rng: R,
}

impl<R: RngCore> Generator<R> {
    pub fn new(config: Config, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Generator { config, rng })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn new_vector(&self) -> BitVector {
        BitVector::new(self.config.vector_len)
    }

    /// Resets `vector` and sets a random number of random bits in it.
    /// Returns the number of draws, which is greater than the resulting
    /// weight when the same index is drawn twice.
    pub fn fill(&mut self, vector: &mut BitVector) -> Result<usize> {
        vector.clear();
        let drawn = self.rng.gen_range(0..=self.config.max_set_bits);
        for _ in 0..drawn {
            let index = self.rng.gen_range(self.config.first_index..=self.config.last_index);
            vector.set(index)?;
        }
        Ok(drawn)
    }

    pub fn write_to<W: Write>(&mut self, writer: W) -> Result<Summary> {
        self.write_to_with(writer, |_, _, _| {})
    }

    /// Like `write_to`, calling `on_line(line_no, drawn, vector)` after each
    /// line is written.
    pub fn write_to_with<W, F>(&mut self, mut writer: W, mut on_line: F) -> Result<Summary>
        where W: Write, F: FnMut(usize, usize, &BitVector)
    {
        let mut vector = self.new_vector();
        let mut summary = Summary::default();
        for line_no in 0..self.config.line_count {
            let drawn = self.fill(&mut vector)?;
            vector.write_line(&mut writer)?;
            summary.record(drawn, vector.weight());
            on_line(line_no, drawn, &vector);
        }
        writer.flush()?;
        Ok(summary)
    }

    pub fn write_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Summary> {
        self.write_file_with(path, |_, _, _| {})
    }

    pub fn write_file_with<P, F>(&mut self, path: P, on_line: F) -> Result<Summary>
        where P: AsRef<Path>, F: FnMut(usize, usize, &BitVector)
    {
        let file = File::create(path)?;
        self.write_to_with(BufWriter::new(file), on_line)
    }
}

/// Writes `config.output` using the supplied random source.
pub fn generate_with<R: RngCore>(config: &Config, rng: R) -> Result<Summary> {
    let mut generator = Generator::new(config.clone(), rng)?;
    generator.write_file(&config.output)
}

/// Writes the default 100 x 1024 vector file to `test_vectors.txt` in the
/// current directory, using the thread-local random source.
pub fn generate() -> Result<Summary> {
    generate_with(&Config::default(), rand::thread_rng())
}
