use crate::error::CoreError;

pub const DEFAULT_PROBABILITY: f64 = 0.3;
pub const DEFAULT_MIN_COPIES: u32 = 5;
pub const DEFAULT_MAX_COPIES: u32 = 50;

/// How often a record seeds a cluster and how many copies it seeds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterPolicy {
    pub probability: f64,
    pub min_copies: u32,
    pub max_copies: u32,
}

impl Default for ClusterPolicy {
    fn default() -> Self {
        Self {
            probability: DEFAULT_PROBABILITY,
            min_copies: DEFAULT_MIN_COPIES,
            max_copies: DEFAULT_MAX_COPIES,
        }
    }
}

impl ClusterPolicy {
    pub fn new(probability: f64, min_copies: u32, max_copies: u32) -> Result<Self, CoreError> {
        let policy = Self {
            probability,
            min_copies,
            max_copies,
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(CoreError::InvalidProbability(self.probability.to_string()));
        }
        if self.min_copies > self.max_copies {
            return Err(CoreError::InvalidCopyRange {
                min: self.min_copies,
                max: self.max_copies,
            });
        }
        Ok(())
    }

    pub fn disabled() -> Self {
        Self {
            probability: 0.0,
            ..Self::default()
        }
    }
}
