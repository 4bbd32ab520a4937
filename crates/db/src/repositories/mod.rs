//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod product_category_repo;
pub mod product_repo;
pub mod review_repo;

pub use category_repo::CategoryRepo;
pub use product_category_repo::ProductCategoryRepo;
pub use product_repo::ProductRepo;
pub use review_repo::ReviewRepo;
