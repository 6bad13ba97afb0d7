// Adapters layer: turns codec results into something a caller can show.

pub mod render;
