use std::time::Duration;

#[cfg(target_arch = "wasm32")]
pub(crate) async fn sleep(after: Duration) {
    gloo_timers::future::sleep(after).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) async fn sleep(after: Duration) {
    tokio::time::sleep(after).await;
}
