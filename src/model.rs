use serde::Serialize;

use crate::error::ValidationError;

/// Documentation for a single HTTP API endpoint, assembled from one apidoc block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    /// The `<name>` of the `apidoc(<name>)` marker that opened the block.
    pub name: String,
    pub description: String,
    /// HTTP request verb, e.g. GET, PUT, POST, DELETE.
    pub method: String,
    /// URL structure with colon-prefixed params, e.g. `/v1/hello/:first/:last`.
    pub url_template: String,
    /// Every parsed `Parameter` section lands here; the grammar has no syntax for
    /// telling URL params from body params.
    pub url_params: Vec<Parameter>,
    /// Request body params. Never filled by the parser, kept for the layouts.
    pub data_params: Vec<Parameter>,
    pub success_response: Response,
    pub error_responses: Vec<Response>,
    /// Example calls, e.g. a curl command line.
    pub examples: Vec<String>,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub required: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Response {
    pub code: u16,
    /// A representative response body.
    pub content: String,
}

impl Endpoint {
    pub fn new(name: &str) -> Self {
        Endpoint {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Checks that the method and URL are present and that every `:param` segment of the
    /// URL has a matching entry in `url_params`. Reports the first problem found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.method.is_empty() {
            return Err(ValidationError::MissingMethod);
        }
        if self.url_template.is_empty() {
            return Err(ValidationError::MissingUrl);
        }

        for segment in self.url_template.split('/') {
            if let Some(param) = segment.strip_prefix(':') {
                if !self.url_params.iter().any(|p| p.name == param) {
                    return Err(ValidationError::MissingUrlParameter(param.to_string()));
                }
            }
        }
        Ok(())
    }
}

// ── Tests ──
