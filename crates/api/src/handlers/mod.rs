//! HTTP handlers, one module per entity.
//!
//! Handlers are stateless: each parses its input, invokes one repository
//! operation (the compound product-plus-edge create being the single
//! transactional exception), and maps the result to a status and JSON body.
//! Zero-row updates and deletes are converted to `NotFound` here; all
//! other failures propagate to [`crate::error::AppError`] unchanged.

pub mod category;
pub mod product;
pub mod product_category;
pub mod review;
