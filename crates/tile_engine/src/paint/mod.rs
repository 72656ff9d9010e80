pub mod fill;
pub mod line;

pub use fill::FillOperation;
pub use line::line_points;
