//! # lumen-core
//!
//! Core types and error types for Lumen.
//!
//! This crate provides the foundational types shared across all Lumen crates:
//! - Skill and input-kind enums with their storage representations
//! - The three fixed skill result records and the [`results::SkillResult`] union
//! - History items as stored in and read back from the history table
//! - Uploaded media assets handed to the orchestrators
//! - Cross-cutting error types

pub mod enums;
pub mod errors;
pub mod history;
pub mod media;
pub mod results;
