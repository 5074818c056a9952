mod post;
mod raw_comment;
mod sentiment;
mod stock;

pub use post::RedditPost;
pub use raw_comment::RawComment;
pub use sentiment::{
    SentimentResponse, SentimentScore, SocialPost, TrendingStock, TrendingStocksResponse,
    TrendingTopic, TrendingTopicsResponse,
};
pub use stock::{PriceInterval, PricePoint, StockInfo, StockPriceResponse};
