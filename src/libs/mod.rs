//! Core library modules for the rollcall application.
//!
//! Everything below the command layer lives here: the application
//! controller, the pure query functions, the collaborator seams (clock,
//! storage location), and the presentation helpers the commands render
//! with.

pub mod clock;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod messages;
pub mod query;
pub mod register;
pub mod student;
pub mod view;
