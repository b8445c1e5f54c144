//! # IO Utilities
//!
//! Path resolution for the `.muster` runtime directory.

use std::path::PathBuf;

/// Get the runtime directory path (.muster)
///
/// This is the storage location for all muster runtime files.
pub fn runtime_path() -> PathBuf {
    // Check for environment variable override
    if let Ok(path) = std::env::var("MUSTER_RUNTIME_PATH") {
        return PathBuf::from(path);
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".muster")
}

/// Directory holding one JSON session record per initiative id
pub fn sessions_path() -> PathBuf {
    runtime_path().join("sessions")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_path() {
        let path = runtime_path();
        assert!(path.ends_with(".muster"));
    }

    #[test]
    fn test_sessions_path() {
        let path = sessions_path();
        assert!(path.ends_with(".muster/sessions"));
    }
}
