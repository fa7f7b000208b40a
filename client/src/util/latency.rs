//! Artificial delay standing in for a network round-trip.

/// Wait `ms` milliseconds in the browser; returns immediately elsewhere.
pub async fn simulate(ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
    }
}
