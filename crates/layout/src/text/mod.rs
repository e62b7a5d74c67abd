pub mod measurer;
pub mod wrapper;

pub use measurer::{MeasuredText, TextMeasurer};
