pub mod eval;
pub mod kinds;
