pub mod check;
pub mod play;
