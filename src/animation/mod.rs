pub mod ease;
pub mod linearize;
