//! User domain entities.

pub mod model;
pub mod patch;

pub use model::{NewUser, User};
pub use patch::{FieldPatch, UserPatch};
