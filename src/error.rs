//! Error types for the Ning API SDK.
//!
//! This module contains the errors raised before any request reaches the
//! network: configuration errors and builder-construction failures.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` and all
//! validated item primitives return `Result<T, ValidationError>` to enable
//! fail-fast validation. Nothing is silently defaulted.
//!
//! # Example
//!
//! ```rust
//! use ning_api::{NetworkName, ConfigError};
//!
//! let result = NetworkName::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyNetworkName)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Network name cannot be empty.
    #[error("Network name cannot be empty. Please provide the subdomain of your Ning network.")]
    EmptyNetworkName,

    /// Network name contains characters that cannot appear in a URL path segment.
    #[error("Invalid network name '{name}'. Expected letters, digits and hyphens only.")]
    InvalidNetworkName {
        /// The invalid name that was provided.
        name: String,
    },

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Omit the token instead of passing an empty one.")]
    EmptyAccessToken,

    /// Page size is outside the range accepted by the API.
    #[error("Invalid page size {size}. Expected a value between 1 and {max}.")]
    InvalidPageSize {
        /// The rejected page size.
        size: u32,
        /// The largest page size the API accepts.
        max: u32,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://external.ning.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

/// Errors raised while constructing keys, field sets and request builders.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A field selection was requested with no fields in it.
    #[error("Field selection for {resource} cannot be empty. Use Fields::all() to request every field.")]
    EmptyFields {
        /// The content item type the fields belong to.
        resource: &'static str,
    },

    /// A content item key was constructed from an empty string.
    #[error("Key for {resource} cannot be empty.")]
    EmptyKey {
        /// The content item type the key identifies.
        resource: &'static str,
    },

    /// A multi-author lookup was issued without any authors.
    #[error("At least one author is required to look up {resource} items by author.")]
    EmptyAuthors {
        /// The content item type being looked up.
        resource: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_network_name_error_message() {
        let error = ConfigError::EmptyNetworkName;
        let message = error.to_string();
        assert!(message.contains("Network name cannot be empty"));
        assert!(message.contains("Ning network"));
    }

    #[test]
    fn test_invalid_page_size_error_message() {
        let error = ConfigError::InvalidPageSize { size: 0, max: 100 };
        let message = error.to_string();
        assert!(message.contains("page size 0"));
        assert!(message.contains("100"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "network" };
        let message = error.to_string();
        assert!(message.contains("network"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_validation_errors_name_the_resource() {
        let error = ValidationError::EmptyFields { resource: "User" };
        assert!(error.to_string().contains("User"));
        assert!(error.to_string().contains("Fields::all()"));

        let error = ValidationError::EmptyAuthors { resource: "User" };
        assert!(error.to_string().contains("At least one author"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyAccessToken;
        let _: &dyn std::error::Error = &error;
        let error = ValidationError::EmptyKey { resource: "User" };
        let _: &dyn std::error::Error = &error;
    }
}
