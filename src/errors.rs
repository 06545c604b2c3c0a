use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("no acceptable mutation site in {low}..={high} after {attempts} attempts")]
    SiteSearchExhausted {
        low: usize,
        high: usize,
        attempts: usize,
    },

    #[error("variant record has no field {index}: {record}")]
    TruncatedRecord { index: usize, record: String },

    #[error("variant coordinate is not an integer: {0}")]
    BadCoordinate(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
