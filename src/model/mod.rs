//! Plain value types: what is being bought and what it adds up to.

pub mod summary;
pub mod ticket;

pub use summary::*;
pub use ticket::*;
