//! Views module - record subsets handed to the map and table renderers

mod ranking;
mod sampler;

pub use ranking::top_n;
pub use sampler::spatial_sample;
