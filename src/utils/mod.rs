mod format;

pub use format::{fit_text, format_percent, take_width, text_width};
