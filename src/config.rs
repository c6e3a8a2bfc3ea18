use std::path::PathBuf;
use super::error::{Error, Result};

pub const DEFAULT_VECTOR_LEN: usize = 1024;
pub const DEFAULT_LINE_COUNT: usize = 100;
pub const DEFAULT_MAX_SET_BITS: usize = 31;
pub const DEFAULT_FIRST_INDEX: usize = 1;
pub const DEFAULT_LAST_INDEX: usize = 1023;
pub const DEFAULT_OUTPUT: &str = "test_vectors.txt";

/// Shape of a generated vector file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of bits on each line.
    pub vector_len: usize,
    /// Number of lines in the file.
    pub line_count: usize,
    /// Upper bound (inclusive) of the number of draws per line.
    pub max_set_bits: usize,
    /// Lowest index a draw may select. Defaults to 1, so bit 0 is never set
    /// and downstream consumers may rely on it being clear.
    pub first_index: usize,
    /// Highest index a draw may select (inclusive).
    pub last_index: usize,
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            vector_len: DEFAULT_VECTOR_LEN,
            line_count: DEFAULT_LINE_COUNT,
            max_set_bits: DEFAULT_MAX_SET_BITS,
            first_index: DEFAULT_FIRST_INDEX,
            last_index: DEFAULT_LAST_INDEX,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.vector_len == 0 {
            return Err(Error::InvalidConfig(String::from("vector length must be non-zero")));
        }
        if self.first_index > self.last_index {
            return Err(Error::InvalidConfig(format!(
                "first index {} is greater than last index {}",
                self.first_index, self.last_index)));
        }
        // The index range only matters when something can be drawn from it.
        if self.max_set_bits > 0 && self.last_index >= self.vector_len {
            return Err(Error::InvalidConfig(format!(
                "last index {} does not fit in a vector of length {}",
                self.last_index, self.vector_len)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use super::super::error::Error;

    fn expect_invalid(config: &Config) {
        match config.validate() {
            Err(Error::InvalidConfig(_)) => {}
            other => panic!("expected invalid config, got {:?}", other),
        }
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.vector_len, 1024);
        assert_eq!(config.line_count, 100);
        assert_eq!(config.max_set_bits, 31);
        assert_eq!(config.first_index, 1);
        assert_eq!(config.last_index, 1023);
        assert_eq!(config.output.to_str(), Some("test_vectors.txt"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_length() {
        expect_invalid(&Config { vector_len: 0, ..Config::default() });
    }

    #[test]
    fn rejects_inverted_range() {
        expect_invalid(&Config { first_index: 10, last_index: 9, ..Config::default() });
    }

    #[test]
    fn rejects_range_past_end() {
        expect_invalid(&Config { last_index: 1024, ..Config::default() });
    }

    #[test]
    fn range_ignored_without_draws() {
        let config = Config { vector_len: 4, max_set_bits: 0, ..Config::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_lines_allowed() {
        assert!(Config { line_count: 0, ..Config::default() }.validate().is_ok());
    }
}
