use super::action::Action;
use super::reducer::reduce;
use super::state::{Payload, ViewState};
use crate::client::{ClientError, MarketClient};
use crate::services::SeriesGenerator;
use crate::types::{Coin, Timeframe};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Drives a [`ViewState`] from user selections and backend responses.
///
/// Each selection aborts the previous fetch, fills the chart with locally
/// generated series and starts a new fetch tagged with the new generation.
pub struct Dashboard {
    client: MarketClient,
    state: Arc<watch::Sender<ViewState>>,
    in_flight: Mutex<Option<JoinHandle<()>>>,
    generator: SeriesGenerator,
    rng: Mutex<StdRng>,
}

impl Dashboard {
    pub fn new(client: MarketClient, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let (tx, _rx) = watch::channel(ViewState::default());

        Self {
            client,
            state: Arc::new(tx),
            in_flight: Mutex::new(None),
            generator: SeriesGenerator::default(),
            rng: Mutex::new(rng),
        }
    }

    /// Start on `coin` and `timeframe` instead of the defaults. Nothing is fetched.
    pub fn with_selection(self, coin: Coin, timeframe: Timeframe) -> Self {
        self.state.send_modify(|state| {
            state.coin = coin;
            state.timeframe = timeframe;
        });
        self
    }

    /// Current view state.
    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Apply an action through the reducer.
    pub fn dispatch(&self, action: Action) {
        dispatch(&self.state, action);
    }

    /// Initial fetch for the current selection. Must be called inside a tokio
    /// runtime. Returns the new generation.
    pub fn load(&self) -> u64 {
        self.dispatch(Action::Reload);
        self.refresh()
    }

    /// Switch asset. Must be called inside a tokio runtime. Returns the new generation.
    pub fn select_coin(&self, coin: Coin) -> u64 {
        self.dispatch(Action::SelectCoin(coin));
        self.refresh()
    }

    pub fn select_timeframe(&self, timeframe: Timeframe) -> u64 {
        self.dispatch(Action::SelectTimeframe(timeframe));
        self.refresh()
    }

    /// Wait until the given generation is no longer loading.
    pub async fn settled(&self, generation: u64) -> ViewState {
        let mut rx = self.subscribe();
        loop {
            {
                let state = rx.borrow_and_update();
                if state.generation != generation || !state.loading {
                    return state.clone();
                }
            }
            if rx.changed().await.is_err() {
                return self.snapshot();
            }
        }
    }

    /// Seed mock data and start the fetch for the current generation.
    fn refresh(&self) -> u64 {
        let current = self.snapshot();
        let generation = current.generation;

        self.seed_mock(&current);

        let mut in_flight = match self.in_flight.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(previous) = in_flight.take() {
            debug!("Aborting fetch superseded by generation {}", generation);
            previous.abort();
        }

        let client = self.client.clone();
        let state = self.state.clone();
        let coin = current.coin;
        let timeframe = current.timeframe;

        *in_flight = Some(tokio::spawn(async move {
            let action = match fetch_all(&client, coin, timeframe).await {
                Ok(payload) => {
                    info!("Loaded {} ({}d) from {}", coin.id, timeframe, client.base_url());
                    Action::Loaded {
                        generation,
                        payload: Box::new(payload),
                    }
                }
                Err(e) => Action::Failed {
                    generation,
                    error: e.to_string(),
                },
            };
            dispatch(&state, action);
        }));

        generation
    }

    fn seed_mock(&self, current: &ViewState) {
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let generator = self.generator.with_history_len(current.timeframe.days());
        match generator.generate(current.current_price, &mut *rng) {
            Ok((history, prediction)) => self.dispatch(Action::MockGenerated {
                generation: current.generation,
                history,
                prediction,
            }),
            Err(e) => warn!("Skipping mock series: {}", e),
        }
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        if let Ok(mut in_flight) = self.in_flight.lock() {
            if let Some(handle) = in_flight.take() {
                handle.abort();
            }
        }
    }
}

fn dispatch(state: &watch::Sender<ViewState>, action: Action) {
    state.send_modify(|current| {
        let next = reduce(current, action);
        *current = next;
    });
}

/// Market, then sentiment, then news. The first failure aborts the rest.
async fn fetch_all(
    client: &MarketClient,
    coin: Coin,
    timeframe: Timeframe,
) -> Result<Payload, ClientError> {
    let market = client.fetch_market(coin.id, timeframe).await?;
    let sentiment = client.fetch_sentiment().await?;
    let news = client.fetch_news().await?;
    Ok(Payload {
        market,
        sentiment,
        news,
    })
}
