use serde::{Deserialize, Serialize};

/// Current quote snapshot for a single stock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockInfo {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: String,
    pub market_cap: String,
    pub pe_ratio: f64,
}

/// Supported lookback windows for the price endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceInterval {
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "1W")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "5Y")]
    FiveYears,
}

impl Default for PriceInterval {
    fn default() -> Self {
        PriceInterval::OneDay
    }
}

impl PriceInterval {
    /// Parse from the query-string representation
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "1D" => Ok(PriceInterval::OneDay),
            "1W" => Ok(PriceInterval::OneWeek),
            "1M" => Ok(PriceInterval::OneMonth),
            "3M" => Ok(PriceInterval::ThreeMonths),
            "1Y" => Ok(PriceInterval::OneYear),
            "5Y" => Ok(PriceInterval::FiveYears),
            _ => Err(format!(
                "Invalid interval: '{}'. Valid values: 1D, 1W, 1M, 3M, 1Y, 5Y",
                s
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceInterval::OneDay => "1D",
            PriceInterval::OneWeek => "1W",
            PriceInterval::OneMonth => "1M",
            PriceInterval::ThreeMonths => "3M",
            PriceInterval::OneYear => "1Y",
            PriceInterval::FiveYears => "5Y",
        }
    }

    /// Number of data points generated for this window
    pub fn point_count(&self) -> usize {
        match self {
            PriceInterval::OneDay => 8,
            PriceInterval::OneWeek => 5,
            PriceInterval::OneMonth => 22,
            PriceInterval::ThreeMonths => 66,
            PriceInterval::OneYear => 52,
            PriceInterval::FiveYears => 60,
        }
    }

    /// Long-range windows get bigger price swings in the mock series
    pub fn is_long_range(&self) -> bool {
        matches!(self, PriceInterval::OneYear | PriceInterval::FiveYears)
    }
}

/// One OHLCV data point in a price series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricePoint {
    /// "HH:MM" for intraday, "YYYY-MM-DD" for longer windows
    pub time: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
}

/// Response body for `GET /stocks/{symbol}/price`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockPriceResponse {
    pub symbol: String,
    pub interval: String,
    pub data: Vec<PricePoint>,
}
