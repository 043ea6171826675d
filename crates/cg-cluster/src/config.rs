use cg_core::config::{ClaimMode, GeneratorConfig};

use crate::error::ClusterError;

/// Paramètres d'un run de clustering.
///
/// # Example
/// ```
/// use cg_cluster::config::ClusterConfig;
/// use cg_core::config::ClaimMode;
/// let config = ClusterConfig::new(1.5, 4, ClaimMode::Shared);
/// assert!(config.validate().is_ok());
/// assert!(ClusterConfig::new(-1.0, 4, ClaimMode::Shared).validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClusterConfig {
    /// Distance euclidienne RGB strictement inférieure à laquelle deux
    /// couleurs partagent un cluster.
    pub threshold: f64,
    /// Nombre de clusterers concurrents. N'a pas à diviser la taille.
    pub workers: usize,
    pub mode: ClaimMode,
}

impl ClusterConfig {
    #[must_use]
    pub fn new(threshold: f64, workers: usize, mode: ClaimMode) -> Self {
        Self {
            threshold,
            workers,
            mode,
        }
    }

    /// Rejette les erreurs de configuration avant tout fan-out.
    ///
    /// # Errors
    /// [`ClusterError::InvalidWorkers`] if `workers == 0`,
    /// [`ClusterError::InvalidThreshold`] if the threshold is negative or NaN.
    pub fn validate(&self) -> Result<(), ClusterError> {
        if self.workers == 0 {
            return Err(ClusterError::InvalidWorkers(self.workers));
        }
        if self.threshold.is_nan() || self.threshold < 0.0 {
            return Err(ClusterError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}

impl From<&GeneratorConfig> for ClusterConfig {
    fn from(config: &GeneratorConfig) -> Self {
        Self::new(config.distance, config.workers, config.claim_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_workers() {
        let err = ClusterConfig::new(1.0, 0, ClaimMode::Shared).validate();
        assert!(matches!(err, Err(ClusterError::InvalidWorkers(0))));
    }

    #[test]
    fn rejects_nan_threshold() {
        let err = ClusterConfig::new(f64::NAN, 1, ClaimMode::Shared).validate();
        assert!(matches!(err, Err(ClusterError::InvalidThreshold(_))));
    }

    #[test]
    fn zero_threshold_is_valid() {
        assert!(ClusterConfig::new(0.0, 1, ClaimMode::Partitioned).validate().is_ok());
    }
}
