pub mod gallery;
pub mod hotspot;
