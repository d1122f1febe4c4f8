//! Spatial - the cell grid the engines paint into

pub mod grid;
