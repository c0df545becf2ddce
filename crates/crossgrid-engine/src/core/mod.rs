pub use self::{board::*, point::*};

pub(crate) mod board;
pub(crate) mod point;
