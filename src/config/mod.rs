//! Configuration module for jciphers
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CipherPaths;
pub use settings::Settings;
