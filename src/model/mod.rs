//! Pure data structures: catalog products and the shopping cart aggregate.

pub mod cart;
pub mod product;

pub use cart::*;
pub use product::*;
