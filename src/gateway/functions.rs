use serde_json::{Value, json};

/// A capability the model may ask us to invoke
#[derive(Debug)]
pub struct FunctionDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    /// The single required string argument
    pub parameter: &'static str,
    pub parameter_description: &'static str,
}

impl FunctionDescriptor {
    /// JSON-Schema object describing the arguments
    pub fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                self.parameter: {
                    "type": "string",
                    "description": self.parameter_description,
                }
            },
            "required": [self.parameter],
        })
    }
}

pub const FETCH_PAGE: &str = "get_page_content";
pub const READ_TEXT_FILE: &str = "get_txt_content";

/// Everything the model can ask us to resolve
pub static FUNCTION_DESCRIPTORS: [FunctionDescriptor; 2] = [
    FunctionDescriptor {
        name: FETCH_PAGE,
        description: "Get the contents of a web page given its URL",
        parameter: "url",
        parameter_description: "The URL of the web page, e.g. https://en.wikipedia.org/wiki/OpenAI",
    },
    FunctionDescriptor {
        name: READ_TEXT_FILE,
        description: "Get the contents of a .txt file",
        parameter: "file",
        parameter_description: "The file name ending in .txt, e.g. shakespeare.txt",
    },
];
