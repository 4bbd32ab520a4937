//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Query-string parameter DTOs where the entity supports filtered listing

pub mod category;
pub mod product;
pub mod product_category;
pub mod review;
