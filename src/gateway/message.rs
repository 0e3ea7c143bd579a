use serde::{Deserialize, Serialize};

use super::FunctionDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Function,
}

/// One entry of a chat conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    /// Function name, set only on `Role::Function` results
    pub name: Option<String>,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            name: None,
            content: content.into(),
        }
    }

    /// The result of a function the model asked us to run
    pub fn function_result(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: Role::Function,
            name: Some(name.into()),
            content: content.into(),
        }
    }
}

/// Whether the model may answer with a function call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionCallMode {
    Auto,
}

impl FunctionCallMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionCallMode::Auto => "auto",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub messages: Vec<Message>,
    pub functions: Option<&'static [FunctionDescriptor]>,
    pub function_call: Option<FunctionCallMode>,
}

impl CompletionRequest {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            functions: None,
            function_call: None,
        }
    }

    /// A single user prompt with no callable functions
    pub fn user(prompt: impl Into<String>) -> Self {
        Self::new(vec![Message::user(prompt)])
    }

    /// Offer `functions` to the model and let it decide whether to call one
    pub fn with_functions(mut self, functions: &'static [FunctionDescriptor]) -> Self {
        self.functions = Some(functions);
        self.function_call = Some(FunctionCallMode::Auto);
        self
    }
}

/// A function invocation requested by the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    pub name: String,
    /// Raw JSON object of arguments, as produced by the model
    pub arguments: String,
}

/// What came back from one completion round-trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Text(String),
    FunctionCall(FunctionCall),
}
