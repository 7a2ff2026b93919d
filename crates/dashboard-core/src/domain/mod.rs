//! Domain entities - the core business objects.

mod operator;
mod post;

pub use operator::Operator;
pub use post::{Post, PostChanges};
