//! Profile error types.

use ash::vk;
use thiserror::Error;

/// Profile-related errors.
///
/// A device that does not satisfy a profile is not an error; see
/// [`crate::Support`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// Vulkan error returned by an underlying query or by device creation.
    #[error("Vulkan error: {0}")]
    Vulkan(#[from] vk::Result),

    /// A non-empty profile name that no compiled-in profile carries.
    #[error("Unknown profile: {0}")]
    UnknownProfile(String),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, ProfileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vulkan_errors_convert() {
        let err: ProfileError = vk::Result::ERROR_INITIALIZATION_FAILED.into();
        assert_eq!(
            err,
            ProfileError::Vulkan(vk::Result::ERROR_INITIALIZATION_FAILED)
        );
    }

    #[test]
    fn unknown_profile_message_names_profile() {
        let err = ProfileError::UnknownProfile("not-a-real-profile".to_string());
        assert!(err.to_string().contains("not-a-real-profile"));
    }
}
