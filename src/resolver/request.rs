use serde::Deserialize;

use crate::gateway::{FETCH_PAGE, FunctionCall, GatewayError, READ_TEXT_FILE};

/// A resolution the model asked for, from the closed set we support
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolverRequest {
    FetchPage { url: String },
    ReadFile { file: String },
}

#[derive(Deserialize)]
struct UrlArgs {
    url: String,
}

#[derive(Deserialize)]
struct FileArgs {
    file: String,
}

impl ResolverRequest {
    /// Map a function call onto a request by exact name
    pub fn from_function_call(call: &FunctionCall) -> Result<Self, GatewayError> {
        let invalid = |e: serde_json::Error| GatewayError::InvalidArguments {
            name: call.name.clone(),
            reason: e.to_string(),
        };

        match call.name.as_str() {
            FETCH_PAGE => {
                let args: UrlArgs = serde_json::from_str(&call.arguments).map_err(invalid)?;
                Ok(Self::FetchPage { url: args.url })
            }
            READ_TEXT_FILE => {
                let args: FileArgs = serde_json::from_str(&call.arguments).map_err(invalid)?;
                Ok(Self::ReadFile { file: args.file })
            }
            other => Err(GatewayError::UnknownFunction(other.to_string())),
        }
    }

    /// Name of the function this request answers
    pub fn function_name(&self) -> &'static str {
        match self {
            Self::FetchPage { .. } => FETCH_PAGE,
            Self::ReadFile { .. } => READ_TEXT_FILE,
        }
    }
}
