//! Latest-wins sequencing for forecast lookups.
//!
//! Each lookup takes a [`LookupTicket`] before it starts fetching. Starting a new
//! lookup cancels the ticket of the previous one, so a slow request still in
//! flight is abandoned and reports [`LookupOutcome::Superseded`].

use crate::types::forecast_day::ForecastDay;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio_util::sync::{CancellationToken, WaitForCancellationFuture};

/// The result of [`crate::CityWeather::lookup`].
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// The forecast of the most recent lookup.
    Current(Vec<ForecastDay>),
    /// A newer lookup started before this one finished; its result was discarded.
    Superseded,
}

/// Tracks the cancellation token of the most recent lookup. Clones share it.
#[derive(Debug, Clone, Default)]
pub struct LookupSequencer {
    current: Arc<Mutex<Option<CancellationToken>>>,
}

impl LookupSequencer {
    /// Creates a sequencer with no lookup in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new lookup, cancelling the one issued before it.
    pub fn begin(&self) -> LookupTicket {
        let token = CancellationToken::new();
        if let Some(previous) = self.current.lock().replace(token.clone()) {
            previous.cancel();
        }
        LookupTicket { token }
    }
}

/// Handle of one lookup, cancelled as soon as a newer lookup begins.
#[derive(Debug)]
pub struct LookupTicket {
    token: CancellationToken,
}

impl LookupTicket {
    /// True while no newer lookup has begun.
    pub fn is_current(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Completes when a newer lookup begins.
    pub fn superseded(&self) -> WaitForCancellationFuture<'_> {
        self.token.cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn newest_ticket_is_current() {
        let sequencer = LookupSequencer::new();
        let first = sequencer.begin();
        assert!(first.is_current());

        let second = sequencer.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn clones_share_the_latest_lookup() {
        let sequencer = LookupSequencer::new();
        let ticket = sequencer.begin();
        let _newer = sequencer.clone().begin();
        assert!(!ticket.is_current());
    }

    #[tokio::test]
    async fn superseded_wakes_the_older_ticket() {
        let sequencer = LookupSequencer::new();
        let ticket = sequencer.begin();
        let newer = sequencer.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            let _ticket = newer.begin();
        });

        tokio::time::timeout(Duration::from_secs(2), ticket.superseded())
            .await
            .unwrap();
        assert!(!ticket.is_current());
    }
}
