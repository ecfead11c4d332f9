use super::action::Action;
use super::state::{ViewState, BACKEND_WARNING};
use tracing::{debug, warn};

/// Apply `action` to `state`, producing the next state.
///
/// Results carrying a generation other than the current one are stale and
/// leave the state untouched.
pub fn reduce(state: &ViewState, action: Action) -> ViewState {
    if let Some(generation) = action.generation() {
        if generation != state.generation {
            debug!(
                "Dropping stale result for generation {} (current {})",
                generation, state.generation
            );
            return state.clone();
        }
    }

    match action {
        Action::SelectCoin(coin) => ViewState {
            coin,
            ..begin_load(state)
        },
        Action::SelectTimeframe(timeframe) => ViewState {
            timeframe,
            ..begin_load(state)
        },
        Action::Reload => begin_load(state),
        Action::MockGenerated {
            history,
            prediction,
            ..
        } => ViewState {
            history,
            prediction,
            ..state.clone()
        },
        Action::Loaded { payload, .. } => {
            let payload = *payload;
            ViewState {
                loading: false,
                error: None,
                history: payload.market.history,
                prediction: payload.market.prediction,
                current_price: payload.market.current_price,
                metrics: payload.market.metrics,
                sentiment: payload.sentiment,
                news: payload.news,
                ..state.clone()
            }
        }
        Action::Failed { error, .. } => {
            warn!("API error: {}", error);
            ViewState {
                loading: false,
                error: Some(BACKEND_WARNING.to_string()),
                ..state.clone()
            }
        }
    }
}

fn begin_load(state: &ViewState) -> ViewState {
    ViewState {
        generation: state.generation + 1,
        loading: true,
        error: None,
        ..state.clone()
    }
}
