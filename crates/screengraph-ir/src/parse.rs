use crate::types::GraphSpec;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn parse_graph(json: &str) -> Result<GraphSpec, ParseError> {
    Ok(serde_json::from_str(json)?)
}
