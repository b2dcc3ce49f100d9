#[cfg(not(target_arch = "wasm32"))]
pub mod console;
#[cfg(target_arch = "wasm32")]
pub mod wasm;
