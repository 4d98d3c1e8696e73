pub mod params;
pub mod score;
pub mod variant;
pub mod window;

// re-exports
pub use params::*;
pub use score::*;
pub use variant::*;
pub use window::*;
