pub mod market;
pub mod news;
pub mod price;
pub mod sentiment;

pub use market::*;
pub use news::*;
pub use price::*;
pub use sentiment::*;
