// Reusable library API — visible to both CLI and WASM builds
pub mod catalog;
pub mod errors;
pub mod found;
pub mod grid;
pub mod line;
pub mod log;
pub mod normalize;
pub mod path;
pub mod presets;
pub mod selection;
pub mod session;
pub mod validator;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
