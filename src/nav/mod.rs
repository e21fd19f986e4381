pub mod signal;
pub mod state;
