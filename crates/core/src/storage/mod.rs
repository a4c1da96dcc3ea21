pub mod basket_store;
pub mod memory;
pub mod port;

// Native file backend (not available on WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod file;
