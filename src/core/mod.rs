pub mod fade;
pub mod letters;
pub mod links;
pub mod sequence;
pub mod starfield;

pub use fade::*;
pub use letters::*;
pub use links::*;
pub use sequence::*;
pub use starfield::*;
