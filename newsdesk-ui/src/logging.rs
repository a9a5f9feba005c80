//! Browser console logging for `tracing` events.

use tracing_wasm::WASMLayerConfigBuilder;

/// Install the console subscriber. Call once, before mounting.
pub fn init(max_level: tracing::Level) {
    let config = WASMLayerConfigBuilder::new()
        .set_max_level(max_level)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
}
