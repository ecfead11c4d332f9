use crate::types::{PricePoint, StitchedSeries};

/// Join history and forecast into a chartable pair.
///
/// The last historical point is appended once more to the history, flagged as
/// a prediction, so the dashed forecast line starts where the solid line ends.
/// Every forecast point is flagged as well. If either side is empty the
/// history is returned unchanged with an empty forecast.
pub fn stitch(history: &[PricePoint], prediction: &[PricePoint]) -> StitchedSeries {
    let last = match (history.last(), prediction.is_empty()) {
        (Some(last), false) => last,
        _ => {
            return StitchedSeries {
                history: history.to_vec(),
                prediction: Vec::new(),
            }
        }
    };

    let mut bridged = Vec::with_capacity(history.len() + 1);
    bridged.extend_from_slice(history);
    bridged.push(last.as_prediction());

    StitchedSeries {
        history: bridged,
        prediction: prediction.iter().map(PricePoint::as_prediction).collect(),
    }
}
