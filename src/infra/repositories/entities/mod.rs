//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod access_token;
pub mod user;

// Re-exports for public API convenience
#[allow(unused_imports)]
pub use access_token::{
    ActiveModel as AccessTokenActiveModel, Entity as AccessTokenEntity, Model as AccessTokenModel,
};
#[allow(unused_imports)]
pub use user::{ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel};
