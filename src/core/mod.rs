pub mod engine;
pub mod normalizer;
pub mod replacer;
pub mod sink;
pub mod source;
