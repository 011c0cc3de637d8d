//! Task spawning that works on both the browser and native targets.

use std::future::Future;

/// Run `future` to completion off the render path: spawned on the browser
/// microtask queue for wasm, driven inline on native.
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(future);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        futures::executor::block_on(future);
    }
}
