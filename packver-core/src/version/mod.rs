mod error;
mod field;
mod value;
mod version;

////////////////////////////////////////////////////////////////////////////////////////////////////

pub use error::*;
pub use field::*;
pub use value::*;
pub use version::*;
