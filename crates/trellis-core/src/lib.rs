//! Trellis Core Types and Definitions
//!
//! This crate provides the foundational types for the Trellis ER-diagram
//! layout engine. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Geometry**: Integer grid cells and directions ([`geometry`] module)
//! - **Schema**: The input model of domains and relationships ([`schema`] module)

pub mod geometry;
pub mod identifier;
pub mod schema;
