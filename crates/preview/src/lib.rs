pub mod options;
pub mod plan;
pub mod selection;
pub mod sequence;

pub use options::*;
pub use plan::*;
pub use selection::*;
pub use sequence::*;
