use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ytsum",
    about = "YouTube video summarizer web app",
    version = env!("GIT_DESCRIBE"),
)]
pub struct Cli {
    /// Address to listen on
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Gemini model for summarization
    #[arg(long)]
    pub model: Option<String>,

    /// Show startup detail on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
