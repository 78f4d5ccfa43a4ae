//! Procedural launcher icon generator
//!
//! Draws a split circle (teal and purple half-disks pulled apart over a deep navy
//! background) and renders it at every Android mipmap density.

pub mod geometry;
pub mod icon_gen;
pub mod output_plan;
pub mod palette;
