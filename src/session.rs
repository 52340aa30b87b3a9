//! Single-flight fetch coordination.
//!
//! One weather lookup may be in flight at a time. Submitting a new city
//! aborts the previous lookup, and completions carry a sequence number so a
//! stale result can never overwrite a newer one. Subscribers receive whole
//! [`Display`] snapshots over a watch channel.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

use crate::location::{
    locate_with_timeout, GeocodeError, LocateDevice, LocationError, ReverseGeocoder,
};
use crate::presentation::{map_to_view_state, ThemeResolver, ViewState};
use crate::weather::FetchWeather;

/// What the shell should currently show.
#[derive(Debug, Clone, PartialEq)]
pub enum Display {
    /// Nothing fetched yet
    Empty,
    /// Latest successfully mapped view state
    Weather(ViewState),
    /// Last fetch failed; message is user-presentable
    Failed(String),
}

#[derive(Error, Debug)]
pub enum LocationFlowError {
    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    Geocode(#[from] GeocodeError),
}

/// Coordinates weather lookups for one display surface.
pub struct WeatherSession {
    fetcher: Arc<dyn FetchWeather>,
    themes: Arc<ThemeResolver>,
    seq: Arc<AtomicU64>,
    in_flight: Mutex<Option<JoinHandle<()>>>,
    tx: watch::Sender<Display>,
}

impl WeatherSession {
    pub fn new(fetcher: Arc<dyn FetchWeather>, themes: ThemeResolver) -> Self {
        let (tx, _) = watch::channel(Display::Empty);
        Self {
            fetcher,
            themes: Arc::new(themes),
            seq: Arc::new(AtomicU64::new(0)),
            in_flight: Mutex::new(None),
            tx,
        }
    }

    /// Subscribe to display updates. Receivers always observe a whole
    /// snapshot; fields from two different fetches never mix.
    pub fn subscribe(&self) -> watch::Receiver<Display> {
        self.tx.subscribe()
    }

    /// Start a lookup for `city`, aborting any lookup still in flight.
    pub async fn request(&self, city: &str) {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let city = city.trim().to_string();

        let mut in_flight = self.in_flight.lock().await;
        if let Some(previous) = in_flight.take() {
            previous.abort();
        }

        let fetcher = Arc::clone(&self.fetcher);
        let themes = Arc::clone(&self.themes);
        let seq_counter = Arc::clone(&self.seq);
        let tx = self.tx.clone();

        *in_flight = Some(tokio::spawn(async move {
            let outcome = match fetcher.fetch(&city).await {
                Ok(record) => match map_to_view_state(&record, &city, &themes) {
                    Ok(view) => Display::Weather(view),
                    Err(e) => Display::Failed(e.to_string()),
                },
                Err(e) => Display::Failed(e.to_string()),
            };

            // A newer request may have started while this one was fetching
            if seq_counter.load(Ordering::SeqCst) == seq {
                let _ = tx.send(outcome);
            } else {
                tracing::debug!(city = %city, seq, "Dropping stale weather result");
            }
        }));
    }

    /// Resolve the device position to a city name and start a lookup for it.
    ///
    /// Location and geocoding failures are returned to the caller so the
    /// shell can prompt the user instead of hanging silently.
    pub async fn request_current_location(
        &self,
        provider: &dyn LocateDevice,
        geocoder: &ReverseGeocoder,
        timeout: Duration,
    ) -> Result<(), LocationFlowError> {
        let position = locate_with_timeout(provider, timeout).await?;
        let city = geocoder.city_name(position).await?;
        self.request(&city).await;
        Ok(())
    }
}
