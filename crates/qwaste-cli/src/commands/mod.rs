pub mod simulate;
pub mod train;
