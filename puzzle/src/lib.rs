pub mod cell;
pub mod puzzle;
