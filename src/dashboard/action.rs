use super::state::Payload;
use crate::types::{Coin, Series, Timeframe};

#[derive(Debug, Clone)]
pub enum Action {
    /// User picked an asset. Starts a new generation.
    SelectCoin(Coin),
    /// User picked a history window. Starts a new generation.
    SelectTimeframe(Timeframe),
    /// Refetch the current selection. Starts a new generation.
    Reload,
    /// Locally generated series shown while the fetch is in flight.
    MockGenerated {
        generation: u64,
        history: Series,
        prediction: Series,
    },
    /// Backend answered for `generation`.
    Loaded {
        generation: u64,
        payload: Box<Payload>,
    },
    /// Fetch for `generation` failed; the mock data stays on screen.
    Failed { generation: u64, error: String },
}

impl Action {
    /// Generation a result belongs to. `None` for user selections.
    pub fn generation(&self) -> Option<u64> {
        match self {
            Action::SelectCoin(_) | Action::SelectTimeframe(_) | Action::Reload => None,
            Action::MockGenerated { generation, .. }
            | Action::Loaded { generation, .. }
            | Action::Failed { generation, .. } => Some(*generation),
        }
    }
}
