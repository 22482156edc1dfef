//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories insert
//! rows directly through SeaORM, bypassing the service layer.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let document = factory::create_document(&db, user.id).await?;
//!
//!     // Or create the owner and the document together
//!     let (user, document) = factory::helpers::create_document_with_owner(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `document` - Create document entities
//! - `analysis` - Create analysis entities
//! - `activity` - Create activity entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod activity;
pub mod analysis;
pub mod document;
pub mod helpers;
pub mod user;

pub use activity::create_activity;
pub use analysis::create_analysis;
pub use document::create_document;
pub use user::create_user;
