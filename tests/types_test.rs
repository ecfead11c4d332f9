//! Unit tests for types module

use augur::types::*;

#[test]
fn test_coin_registry() {
    assert_eq!(COINS.len(), 3);
    assert_eq!(Coin::default().id, "bitcoin");
    assert_eq!(Coin::find("ethereum").map(|c| c.symbol), Some("ETH"));
    assert_eq!(Coin::find("SOLANA").map(|c| c.color), Some("#14F195"));
    assert_eq!(Coin::find("dogecoin"), None);
}

#[test]
fn test_timeframe_from_str() {
    assert_eq!("7".parse::<Timeframe>(), Ok(Timeframe::Week));
    assert_eq!("30".parse::<Timeframe>(), Ok(Timeframe::Month));
    assert_eq!("90d".parse::<Timeframe>(), Ok(Timeframe::Quarter));
    assert!("14".parse::<Timeframe>().is_err());
    assert!("".parse::<Timeframe>().is_err());
}

#[test]
fn test_timeframe_days_and_display() {
    for timeframe in Timeframe::ALL {
        assert_eq!(timeframe.to_string(), timeframe.days().to_string());
    }
    assert_eq!(Timeframe::default(), Timeframe::Month);
}

#[test]
fn test_timeframe_serialization() {
    assert_eq!(serde_json::to_string(&Timeframe::Quarter).unwrap(), "\"90\"");
    let parsed: Timeframe = serde_json::from_str("\"7\"").unwrap();
    assert_eq!(parsed, Timeframe::Week);
}

#[test]
fn test_sentiment_color_boundaries() {
    assert_eq!(SentimentScore::new(71).color(), SentimentColor::Positive);
    assert_eq!(SentimentScore::new(70).color(), SentimentColor::Neutral);
    assert_eq!(SentimentScore::new(39).color(), SentimentColor::Negative);
    assert_eq!(SentimentScore::new(40).color(), SentimentColor::Neutral);
    assert_eq!(SentimentColor::Positive.hex(), "#10b981");
}

#[test]
fn test_sentiment_label_boundaries() {
    assert_eq!(SentimentScore::new(75).label().as_str(), "Strong Bullish");
    assert_eq!(SentimentScore::new(74).label().as_str(), "Bullish");
    assert_eq!(SentimentScore::new(45).label().as_str(), "Neutral");
    assert_eq!(SentimentScore::new(25).label().as_str(), "Bearish");
    assert_eq!(SentimentScore::new(24).label().as_str(), "Strong Bearish");
}

#[test]
fn test_sentiment_mappings_are_total() {
    for s in 0..=100u8 {
        let score = SentimentScore::new(s);
        let _ = score.color();
        assert!(!score.label().as_str().is_empty());
    }
}

#[test]
fn test_sentiment_snapshot_wire_format() {
    let json = serde_json::json!({
        "score": 30,
        "label": "Bearish",
        "twitter_vol": "8%",
        "reddit_growth": "-1.2%",
        "whale_flow": "Outflow"
    });

    let snapshot: SentimentSnapshot = serde_json::from_value(json).unwrap();
    assert_eq!(snapshot.score.value(), 30);
    assert_eq!(snapshot.whale_flow, WhaleFlow::Outflow);

    let back = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(back["score"], 30);
    assert_eq!(back["whale_flow"], "Outflow");
}

#[test]
fn test_market_data_wire_format() {
    let json = serde_json::json!({
        "history": [{"date": "Day 1", "price": 100.0}],
        "prediction": [{"date": "Pred 1", "price": 101.0, "isPrediction": true}],
        "current_price": 100.0,
        "metrics": {"rmse": 1.5, "mae": 0.5, "accuracy": "90%"}
    });

    let data: MarketData = serde_json::from_value(json).unwrap();
    assert!(!data.history[0].is_prediction);
    assert!(data.prediction[0].is_prediction);
    assert_eq!(data.metrics.accuracy, "90%");
    assert_eq!(data.metrics.volume_24h, 0.0);
}

#[test]
fn test_news_item_wire_format() {
    let item = NewsItem {
        id: 7,
        title: "Headline".to_string(),
        source: "Reuters".to_string(),
        time: "2hr ago".to_string(),
        sentiment: NewsSentiment::Negative,
    };

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["sentiment"], "negative");
    assert_eq!(json["time"], "2hr ago");
}

#[test]
fn test_stitched_series_chart_order() {
    let stitched = StitchedSeries {
        history: vec![PricePoint::new("Day 1", 1.0), PricePoint::new("Day 1", 1.0).as_prediction()],
        prediction: vec![PricePoint::new("Pred 1", 1.0).as_prediction()],
    };
    let chart = stitched.chart();
    assert_eq!(chart.len(), 3);
    assert_eq!(chart[2].date, "Pred 1");
    assert_eq!(stitched.bridge().map(|p| p.price), Some(1.0));
}
