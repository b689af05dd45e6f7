mod buffer;
mod cell;
mod value;

pub use buffer::ParamBuffer;
pub use cell::ValueCell;
pub use value::{ParamKind, ParamValue};
