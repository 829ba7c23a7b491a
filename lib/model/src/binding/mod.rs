mod row;
mod value;

pub use row::BindingRow;
pub use value::{BindingValue, ValueKind};
