pub mod inference;
mod labels;
pub mod types;

pub use inference::{infer, infer_one};
pub use labels::{format_label, macro_format_label, sub_format_label};
pub use types::{FormatTag, MacroFormat, SubFormat};
