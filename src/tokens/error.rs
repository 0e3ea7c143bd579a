use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error("No tokenizer available for model '{0}'")]
    UnknownModel(String),
}
