//! Domain models
//!
//! Wire shapes for the item resource. Structural validation happens when
//! serde decodes a request; there are no further business rules.

pub mod item;
pub mod window;

pub use item::{Item, ItemCreate};
pub use window::{ListParams, ListWindow};
