//! Test vectors: the built-in 31-element fixture and YAML-loaded vectors.
//!
//! A vector file looks like:
//!
//! ```yaml
//! a: 55.66
//! x: [-0.43256481, -1.66558438]
//! y: [1.74914013, 0.13259822]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SaxpyError;

/// Relative tolerance the checker compares at.
pub const TOLERANCE: f32 = 1e-6;

/// Multiplier used with the fixture.
pub const FIXTURE_A: f32 = 55.66;

/// Fixture input `x`.
#[allow(clippy::excessive_precision, clippy::unreadable_literal)]
pub const FIXTURE_X: [f32; 31] = [
    -0.4325648115282207, -1.6655843782380970, 0.1253323064748307,
    0.2876764203585489, -1.1464713506814637, 1.1909154656429988,
    1.1891642016521031, -0.0376332765933176, 0.3272923614086541,
    0.1746391428209245, -0.1867085776814394, 0.7257905482933027,
    -0.5883165430141887, 2.1831858181971011, -0.1363958830865957,
    0.1139313135208096, 1.0667682113591888, 0.0592814605236053,
    -0.0956484054836690, -0.8323494636500225, 0.2944108163926404,
    -1.3361818579378040, 0.7143245518189522, 1.6235620644462707,
    -0.6917757017022868, 0.8579966728282626, 1.2540014216025324,
    -1.5937295764474768, -1.4409644319010200, 0.5711476236581780,
    -0.3998855777153632,
];

/// Fixture initial `y`.
#[allow(clippy::excessive_precision, clippy::unreadable_literal)]
pub const FIXTURE_Y: [f32; 31] = [
    1.7491401329284098, 0.1325982188803279, 0.3252281811989881,
    -0.7938091410349637, 0.3149236145048914, -0.5272704888029532,
    0.9322666565031119, 1.1646643544607362, -2.0456694357357357,
    -0.6443728590041911, 1.7410657940825480, 0.4867684246821860,
    1.0488288293660140, 1.4885752747099299, 1.2705014969484090,
    -1.8561241921210170, 2.1343209047321410, 1.4358467535865909,
    -0.9173023332875400, -1.1060770780029008, 0.8105708062681296,
    0.6985430696369063, -0.4015827425012831, 1.2687512030669628,
    -0.7836083053674872, 0.2132664971465569, 0.7878984786088954,
    0.8966819356782295, -0.1869172943544062, 1.0131816724341454,
    0.2484350696132857,
];

/// Inputs for one SAXPY run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestVector {
    pub a: f32,
    pub x: Vec<f32>,
    pub y: Vec<f32>,
}

impl TestVector {
    /// The built-in fixture.
    #[must_use]
    pub fn fixture() -> Self {
        Self {
            a: FIXTURE_A,
            x: FIXTURE_X.to_vec(),
            y: FIXTURE_Y.to_vec(),
        }
    }

    /// Parse and length-check a vector from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`SaxpyError::Yaml`] on malformed YAML and
    /// [`SaxpyError::LengthMismatch`] if `x` and `y` differ in length.
    pub fn from_yaml_str(src: &str) -> Result<Self, SaxpyError> {
        let v: Self = serde_yaml::from_str(src)?;
        v.validate()?;
        Ok(v)
    }

    /// Read a vector from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`SaxpyError::Io`] if the file cannot be read, otherwise as
    /// [`TestVector::from_yaml_str`].
    pub fn load(path: &Path) -> Result<Self, SaxpyError> {
        let src = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&src)
    }

    /// # Errors
    ///
    /// Returns [`SaxpyError::LengthMismatch`] if `x` and `y` differ in length.
    pub fn validate(&self) -> Result<(), SaxpyError> {
        if self.x.len() == self.y.len() {
            Ok(())
        } else {
            Err(SaxpyError::LengthMismatch {
                x: self.x.len(),
                y: self.y.len(),
            })
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
