//! # Catena Catalog Domain Models
//!
//! Core domain models for the Catena component catalog. All models
//! serialize with serde; write-side inputs validate with the validator
//! crate. Audit timestamps are carried here and stripped at the HTTP
//! boundary.
//!
//! ## Key Models
//!
//! - **Component**: a catalog part with a required name and optional description
//! - **Supplier** / **Product**: upstream entities, referenced but never mutated here
//! - **ComponentSupplier**: one component–supplier link row

pub mod association;
pub mod component;
pub mod product;
pub mod supplier;

pub use association::*;
pub use component::*;
pub use product::*;
pub use supplier::*;
