pub mod builder;
pub mod classifier;
pub mod pipeline;
pub mod scorer;

// re-exports
pub use builder::*;
pub use classifier::*;
pub use pipeline::*;
pub use scorer::*;
