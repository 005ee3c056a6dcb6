//! The [`LinkedList`] type, its [`Linkage`] kinds and its iterators.

mod iter;
mod kind;
mod linked_list;
mod node;
mod state;
mod tests;

pub use iter::*;
pub use kind::*;
pub use linked_list::*;
#[doc(hidden)]
pub use node::{Link, Node, NodePtr};
pub(crate) use state::*;
