/// First-pass prompt. The model may answer directly or ask us to resolve
/// a file name or URL through one of the declared functions.
pub fn bullet_summary(input: &str) -> String {
    format!(
        "Summarize the following text delimited by triple backquotes. If it is a .txt file or URL,
summarize the contents of the file or web page.
Format your response in bullet points that cover the key points of the text.
```{}```",
        input
    )
}

/// Prompt for one chunk of a longer document
pub fn chunk_summary(chunk: &str) -> String {
    format!(
        "Concisely summarize the following text delimited by triple backquotes.
Format your response in bullet points that cover the key points of the text.
```{}```",
        chunk
    )
}
