pub mod demo;
pub mod sample;
