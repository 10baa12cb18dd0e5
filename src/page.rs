use html_escape::{encode_double_quoted_attribute, encode_text};

/// What the single page shows for one request.
pub enum View<'a> {
    /// Initial GET: just the form.
    Form,
    /// A step failed: the form plus an error banner.
    Error { message: &'a str },
    /// The pipeline ran to the end: the form (input retained) plus the summary.
    Summary { content: &'a str, video_url: &'a str },
}

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>YouTube Video Summarizer</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 40px auto; max-width: 720px; padding: 0 16px; }
        input[type="text"] { width: 70%; padding: 8px; }
        button { padding: 8px 16px; }
        .error { color: #b00020; }
        .summary { background: #f5f5f5; padding: 16px; white-space: pre-wrap; }
        .source { font-size: 0.9em; }
    </style>
</head>
<body>
    <h1>YouTube Video Summarizer</h1>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";

/// Render the page for a view. All dynamic content is escaped.
pub fn render(view: &View) -> String {
    let mut html = String::from(PAGE_HEAD);

    let form_value = match view {
        View::Summary { video_url, .. } => encode_double_quoted_attribute(video_url).into_owned(),
        _ => String::new(),
    };
    html.push_str(&format!(
        "    <form method=\"post\" action=\"/\">\n        \
         <input type=\"text\" name=\"youtube_url\" placeholder=\"Paste a YouTube video URL\" value=\"{form_value}\">\n        \
         <button type=\"submit\">Summarize</button>\n    </form>\n"
    ));

    match view {
        View::Form => {}
        View::Error { message } => {
            html.push_str(&format!("    <p class=\"error\">{}</p>\n", encode_text(message)));
        }
        View::Summary { content, video_url } => {
            let url_attr = encode_double_quoted_attribute(video_url);
            html.push_str(&format!(
                "    <h2>Summary</h2>\n    <div class=\"summary\">{}</div>\n    \
                 <p class=\"source\">Source: <a href=\"{url_attr}\">{}</a></p>\n",
                encode_text(content),
                encode_text(video_url),
            ));
        }
    }

    html.push_str(PAGE_TAIL);
    html
}
