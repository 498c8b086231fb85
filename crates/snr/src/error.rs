//! Error types for the helios-snr crate.

/// Error type for all fallible operations in the helios-snr crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SnrError {
    /// Returned when configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Resample error (from the optional pre-binning step).
    #[error(transparent)]
    Resample(#[from] helios_resample::ResampleError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_config() {
        let e = SnrError::InvalidConfig {
            reason: "bad".to_string(),
        };
        assert_eq!(e.to_string(), "invalid configuration: bad");
    }

    #[test]
    fn from_resample_error() {
        let re = helios_resample::ResampleError::InvalidBinSize { bin_size: 1 };
        let se: SnrError = re.into();
        assert!(matches!(se, SnrError::Resample(_)));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SnrError>();
    }
}
