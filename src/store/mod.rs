//! Storage layer for the rollcall application.
//!
//! The whole register state lives in two JSON string blobs behind a
//! key-value storage adapter. This module holds the adapter plus the two
//! in-memory collections that own the data between writes.

/// Key-value string-blob storage adapter.
///
/// Defines the `StorageBackend` trait together with the file-backed
/// store used in production and the in-memory store used in tests.
pub mod blob;

/// Attendance ledger.
///
/// Per-date, per-student attendance records with marking, querying, and
/// cascade purging.
pub mod ledger;

/// Roster store.
///
/// The ordered set of registered students with id uniqueness enforcement
/// and class enumeration.
pub mod roster;
