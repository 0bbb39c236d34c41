use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to parse the curated city list")]
    CuratedParse(#[source] serde_json::Error),

    #[error("Failed to parse the station list")]
    StationParse(#[source] serde_json::Error),
}
