use async_trait::async_trait;
use eyre::{Result, bail};
use log::debug;

/// Default Gemini model used for summaries
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Capability offered by a generative-model provider: produce text for a prompt.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Client for the Gemini `generateContent` endpoint
pub struct Gemini {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl Gemini {
    pub fn new(client: reqwest::Client, api_key: String, model: String) -> Self {
        Self { client, api_key, model }
    }
}

#[async_trait]
impl GenerativeModel for Gemini {
    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!("Summarizing via Gemini API with model {}", self.model);

        let url = format!("{GEMINI_API_BASE}/models/{}:generateContent", self.model);

        let body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        { "text": prompt }
                    ]
                }
            ]
        });

        let resp = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("Gemini API returned {status}: {body}");
        }

        let json: serde_json::Value = resp.json().await?;
        extract_gemini_text(&json)
    }
}

fn extract_gemini_text(json: &serde_json::Value) -> Result<String> {
    if let Some(parts) = json
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
    {
        let text: String = parts
            .iter()
            .filter_map(|part| part.get("text")?.as_str().map(|s| s.to_string()))
            .collect::<Vec<_>>()
            .join("");
        if !text.is_empty() {
            return Ok(text);
        }
    }
    bail!("unexpected Gemini API response format");
}

/// Build the fixed summarization prompt around a transcript. The transcript is
/// embedded verbatim, however long it is.
pub fn build_prompt(transcript: &str) -> String {
    format!(
        "You are an expert summarizer. Your task is to provide a concise and clear summary \
         of the following text, which is a transcript from a YouTube video.\n\
         Also, extract 3-5 main key points from the video.\n\
         \n\
         ---\n\
         Video Transcript:\n\
         {transcript}\n\
         ---\n\
         \n\
         Please format your output as follows:\n\
         \n\
         **Summary:**\n\
         [Your concise summary here]\n\
         \n\
         **Main Points:**\n\
         * [Key Point 1]\n\
         * [Key Point 2]\n\
         * [Key Point 3]\n\
         * ..."
    )
}

/// Summarize a transcript. Failures never propagate: the returned string is
/// either the model's answer or a displayable failure message.
pub async fn summarize(model: &dyn GenerativeModel, transcript: &str) -> String {
    let prompt = build_prompt(transcript);
    match model.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            debug!("Summarization failed: {e}");
            format!("Error: Could not summarize the content. {e}")
        }
    }
}
