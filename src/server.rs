use std::sync::Arc;

use axum::{Form, Router, extract::State, response::Html, routing::get};
use eyre::Result;
use log::{debug, info};
use serde::Deserialize;

use crate::extract_video_id;
use crate::page::{self, View};
use crate::summarize::{self, GenerativeModel};
use crate::youtube::{self, TranscriptSource};

/// Default listen address
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

pub const INVALID_URL_MSG: &str = "Invalid YouTube URL. Please provide a valid link.";
pub const NO_TRANSCRIPT_MSG: &str = "Could not retrieve transcript for this video. It might \
     not have one or be in a language without an available transcript.";

/// Shared handles injected into the handlers.
#[derive(Clone)]
pub struct AppState {
    pub transcripts: Arc<dyn TranscriptSource>,
    pub model: Arc<dyn GenerativeModel>,
}

#[derive(Deserialize)]
pub struct SummarizeForm {
    pub youtube_url: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler).post(summarize_handler))
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(bind: &str, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn index_handler() -> Html<String> {
    Html(page::render(&View::Form))
}

async fn summarize_handler(
    State(state): State<AppState>,
    Form(form): Form<SummarizeForm>,
) -> Html<String> {
    debug!("Summarize request for {}", form.youtube_url);

    let Some(video_id) = extract_video_id(&form.youtube_url) else {
        return Html(page::render(&View::Error { message: INVALID_URL_MSG }));
    };

    let Some(transcript) = youtube::fetch_transcript(state.transcripts.as_ref(), &video_id).await
    else {
        return Html(page::render(&View::Error { message: NO_TRANSCRIPT_MSG }));
    };

    let content = summarize::summarize(state.model.as_ref(), &transcript).await;
    Html(page::render(&View::Summary {
        content: &content,
        video_url: &form.youtube_url,
    }))
}
