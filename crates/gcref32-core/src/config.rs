//! Codec configuration parameters.

/// What [`Codec::encode`](crate::Codec::encode) does when an address fails
/// the representability check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Return the error to the caller. Nothing is written.
    #[default]
    Propagate,
    /// Write the diagnostic to stderr, then return the error.
    Report,
    /// Write the diagnostic to stderr and abort the process.
    Abort,
}

/// Configuration for a [`Codec`](crate::Codec).
///
/// Plain data; copy it freely between threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodecConfig {
    /// Whether `encode_unchecked` asserts that its input is representable.
    ///
    /// Default: on in debug builds, off in release builds. The `strict`
    /// cargo feature turns it on for every profile.
    pub validate_unchecked: bool,

    /// Failure handling for checked encodes.
    ///
    /// Default: [`FailurePolicy::Propagate`].
    pub on_failure: FailurePolicy,
}

impl CodecConfig {
    /// Default for [`validate_unchecked`](Self::validate_unchecked).
    pub const DEFAULT_VALIDATE_UNCHECKED: bool = cfg!(any(debug_assertions, feature = "strict"));

    /// Default failure policy.
    pub const DEFAULT_ON_FAILURE: FailurePolicy = FailurePolicy::Propagate;

    /// Create a config with default values.
    pub const fn new() -> Self {
        Self {
            validate_unchecked: Self::DEFAULT_VALIDATE_UNCHECKED,
            on_failure: Self::DEFAULT_ON_FAILURE,
        }
    }

    /// Set whether `encode_unchecked` validates its input.
    pub const fn with_validate_unchecked(mut self, validate: bool) -> Self {
        self.validate_unchecked = validate;
        self
    }

    /// Set the failure policy for checked encodes.
    pub const fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.on_failure = policy;
        self
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::new()
    }
}
