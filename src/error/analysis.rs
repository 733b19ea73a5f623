use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(
        "Seasonal decomposition with period {period} needs at least {required} observations, got {available}."
    )]
    InsufficientPeriods {
        period: usize,
        required: usize,
        available: usize,
    },
    #[error("Missing values in {stage}; decomposition requires a complete series.")]
    MissingValues { stage: &'static str },
    #[error("Not enough data for {what}.")]
    EmptySelection { what: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
