#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("API credential is not configured")]
    MissingApiKey,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: HTTP {0}")]
    Api(reqwest::StatusCode),

    #[error("rate limit exceeded")]
    RateLimited,

    #[error("authentication rejected")]
    Unauthorized,

    #[error("model returned no text")]
    EmptyResponse,
}

#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("text extraction failed: {0}")]
    Engine(#[from] GeminiError),
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("translation failed: {0}")]
    Engine(#[from] GeminiError),
}
