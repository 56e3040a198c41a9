pub mod blur;
pub mod driver;
pub mod options;
pub mod position;
