use anyhow::{Context as _, Result};
use eframe::egui::Context;
use std::sync::{
    Arc,
    mpsc::{self, Receiver, Sender},
};
use tokio::{
    runtime::{Builder, Runtime},
    sync::Semaphore,
};

use crate::{
    data::{MarketDataProvider, load_coins_or_empty, load_series_or_empty},
    domain::{CoinRecord, PricePoint},
};

/// Results handed back to the UI thread.
#[derive(Debug)]
pub enum FetchEvent {
    Coins(Vec<CoinRecord>),
    Series { coin_id: String, points: Vec<PricePoint> },
}

/// Runs fetches off the UI thread: one task for the coin list, one per chart.
///
/// Tasks are independent. A failed fetch still reports back, with an empty result.
/// At most `max_in_flight` requests hit the provider at once; the rest wait for a permit.
pub struct FetchWorker {
    runtime: Runtime,
    provider: Arc<dyn MarketDataProvider>,
    permits: Arc<Semaphore>,
    tx: Sender<FetchEvent>,
    chart_days: u32,
    repaint: Option<Context>,
}

impl FetchWorker {
    pub fn new(
        provider: Arc<dyn MarketDataProvider>,
        chart_days: u32,
        max_in_flight: usize,
        repaint: Option<Context>,
    ) -> Result<(Self, Receiver<FetchEvent>)> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("coin-vault-fetch")
            .enable_all()
            .build()
            .context("Failed to create fetch runtime")?;
        let (tx, rx) = mpsc::channel();
        Ok((
            Self {
                runtime,
                provider,
                permits: Arc::new(Semaphore::new(max_in_flight.max(1))),
                tx,
                chart_days,
                repaint,
            },
            rx,
        ))
    }

    pub fn request_coins(&self) {
        let provider = Arc::clone(&self.provider);
        let permits = Arc::clone(&self.permits);
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();
        self.runtime.spawn(async move {
            // The semaphore is never closed
            let Ok(_permit) = permits.acquire_owned().await else {
                return;
            };
            let coins = load_coins_or_empty(provider.as_ref()).await;
            // Receiver gone means the app is shutting down
            let _ = tx.send(FetchEvent::Coins(coins));
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }

    pub fn request_series(&self, coin_id: &str) {
        let provider = Arc::clone(&self.provider);
        let permits = Arc::clone(&self.permits);
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();
        let coin_id = coin_id.to_string();
        let days = self.chart_days;
        self.runtime.spawn(async move {
            let Ok(_permit) = permits.acquire_owned().await else {
                return;
            };
            let points = load_series_or_empty(provider.as_ref(), &coin_id, days).await;
            let _ = tx.send(FetchEvent::Series { coin_id, points });
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };

    struct Canned;

    #[async_trait]
    impl MarketDataProvider for Canned {
        async fn fetch_coins(&self) -> anyhow::Result<Vec<CoinRecord>> {
            Ok(vec![CoinRecord::new("bitcoin", "Bitcoin", "BTC", 1.0)])
        }

        async fn fetch_price_series(&self, coin_id: &str, _days: u32) -> anyhow::Result<Vec<PricePoint>> {
            if coin_id == "bitcoin" {
                Ok(vec![PricePoint::new(0, 1.0), PricePoint::new(1, 2.0)])
            } else {
                Err(anyhow!("404"))
            }
        }
    }

    #[test]
    fn each_request_reports_back_independently() {
        let (worker, rx) = FetchWorker::new(Arc::new(Canned), 7, 4, None).unwrap();
        worker.request_coins();
        worker.request_series("bitcoin");
        worker.request_series("delisted");

        let mut events = Vec::new();
        for _ in 0..3 {
            events.push(rx.recv_timeout(Duration::from_secs(5)).unwrap());
        }

        assert!(events.iter().any(|e| matches!(e, FetchEvent::Coins(c) if c.len() == 1)));
        assert!(events.iter().any(
            |e| matches!(e, FetchEvent::Series { coin_id, points } if coin_id == "bitcoin" && points.len() == 2)
        ));
        assert!(events.iter().any(
            |e| matches!(e, FetchEvent::Series { coin_id, points } if coin_id == "delisted" && points.is_empty())
        ));
    }

    /// Records the highest number of overlapping series requests.
    #[derive(Default)]
    struct Counting {
        in_flight: AtomicUsize,
        peak: AtomicUsize,
    }

    #[async_trait]
    impl MarketDataProvider for Counting {
        async fn fetch_coins(&self) -> anyhow::Result<Vec<CoinRecord>> {
            Ok(Vec::new())
        }

        async fn fetch_price_series(&self, _coin_id: &str, _days: u32) -> anyhow::Result<Vec<PricePoint>> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            Ok(vec![PricePoint::new(0, 1.0)])
        }
    }

    #[test]
    fn chart_requests_are_capped_in_flight() {
        let provider = Arc::new(Counting::default());
        let (worker, rx) = FetchWorker::new(provider.clone(), 7, 3, None).unwrap();
        for i in 0..12 {
            worker.request_series(&format!("coin-{i}"));
        }
        for _ in 0..12 {
            let event = rx.recv_timeout(Duration::from_secs(5)).unwrap();
            assert!(matches!(event, FetchEvent::Series { points, .. } if points.len() == 1));
        }

        let peak = provider.peak.load(Ordering::SeqCst);
        assert!(peak >= 1);
        assert!(peak <= 3, "peak of {peak} requests in flight");
    }
}
