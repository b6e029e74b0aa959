//! Utility functions shared by the collaborators.
//!
//! - **URL validation**: links are checked before being handed to the OS
//!   browser launcher
//!
//! # Examples
//!
//! ```
//! use pocket_stories::util::validate_url_for_open;
//!
//! assert!(validate_url_for_open("https://example.com/story").is_ok());
//! assert!(validate_url_for_open("file:///etc/passwd").is_err());
//! ```

mod url_validator;

pub use url_validator::{validate_url_for_open, UrlValidationError};
