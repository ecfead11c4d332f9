pub mod generator;
pub mod market;
pub mod metrics;
pub mod news;
pub mod sentiment;
pub mod stitcher;

pub use generator::SeriesGenerator;
pub use market::MarketService;
pub use news::NewsService;
pub use sentiment::SentimentService;
pub use stitcher::stitch;
