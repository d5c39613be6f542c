//! Remote metadata API client for tvmeta.
//!
//! Provides a client for the TheTVDB legacy XML API: by-id series lookup,
//! name search, and the user favorites list.

/// TheTVDB API client.
pub mod tvdb;
