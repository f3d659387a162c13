// The page modules are only driven from the browser build; natively they are
// compiled for their tests.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod backdrop;
mod clock;
mod content;
mod cursor;
mod field;
mod geometry;
mod logging;
mod pulse;
mod scroll_spy;
mod subscriptions;

#[cfg(target_arch = "wasm32")]
mod frontend;
#[cfg(target_arch = "wasm32")]
mod render;
#[cfg(not(target_arch = "wasm32"))]
mod server;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    server::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
