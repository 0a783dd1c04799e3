mod prototype;

pub use prototype::Prototype;
