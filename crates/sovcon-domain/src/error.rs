use thiserror::Error;

/// The only failure surface in the console core: a policy document that
/// cannot be parsed or re-typed. Every failing operation leaves state
/// untouched; there is no partial merge.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("policy file is not a well-formed JSON object: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("value for '{path}' conflicts with the typed policy schema: {source}")]
    IncompatibleValue {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("serialize policy document: {0}")]
    Export(#[source] serde_json::Error),
}
