use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaxpyError {
    #[error("Failed to read test vector: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Length mismatch: x has {x} element(s), y has {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("Invalid grouping factor: {0} (expected m1, m2, m4 or m8)")]
    InvalidGrouping(String),

    #[error("Invalid vector register width: {0} bits (expected a power of two in 128..=65536)")]
    InvalidVlen(usize),
}

/// One element where the kernel disagreed with the scalar reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch {
    pub index: usize,
    pub expected: f32,
    pub actual: f32,
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "fail [{}]: expected {:.6}, got {:.6}",
            self.index, self.expected, self.actual
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_display() {
        let m = Mismatch {
            index: 3,
            expected: 1.5,
            actual: 1.25,
        };
        let s = m.to_string();
        assert!(s.contains("[3]"));
        assert!(s.contains("1.500000"));
        assert!(s.contains("1.250000"));
    }

    #[test]
    fn saxpy_error_io() {
        let err = SaxpyError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "not found",
        ));
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn saxpy_error_length_mismatch() {
        let err = SaxpyError::LengthMismatch { x: 4, y: 3 };
        let s = err.to_string();
        assert!(s.contains('4'));
        assert!(s.contains('3'));
    }

    #[test]
    fn saxpy_error_invalid_vlen() {
        let err = SaxpyError::InvalidVlen(96);
        assert!(err.to_string().contains("96 bits"));
    }
}
