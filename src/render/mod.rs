//! HTML generation for the recommendations page.
//!
//! Markup is assembled with `format!`; there is no template engine and no
//! client-side logic. Upstream titles and image URLs are trusted verbatim
//! beyond attribute/text escaping.

use crate::models::RecommendationRecord;

/// Number of panels per grid row.
const ROW_WIDTH: usize = 3;

/// Directional glyph between the two titles of a pair.
const PAIR_GLYPH: &str = "➜";

/// Message tone for inline notices rendered in place of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// Wraps body content in the full page chrome.
pub fn page(content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Anime Recommendations</title>\n\
         <style>{STYLESHEET}</style>\n\
         </head>\n\
         <body>\n\
         <h1>Anime Recommendations</h1>\n\
         {content}\
         </body>\n\
         </html>\n"
    )
}

/// Renders the recommendation grid: consecutive rows of at most three panels,
/// rank badges numbered 1..=N in flattened order.
pub fn grid(records: &[RecommendationRecord]) -> String {
    let mut out = String::from("<div class=\"grid\">\n");
    for (row_index, row) in records.chunks(ROW_WIDTH).enumerate() {
        out.push_str("<div class=\"row\">\n");
        for (offset, record) in row.iter().enumerate() {
            out.push_str(&panel(row_index * ROW_WIDTH + offset + 1, record));
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n");
    out
}

/// One panel: the lead entry's poster with a rank badge, then the pair of
/// linked titles.
fn panel(rank: usize, record: &RecommendationRecord) -> String {
    let lead = record.lead();
    let followup = record.followup();

    format!(
        "<div class=\"panel\">\n\
         <div class=\"poster\">\n\
         <div class=\"rank-badge\">#{rank}</div>\n\
         <img src=\"{poster}\" alt=\"{lead_title}\">\n\
         </div>\n\
         <div class=\"anime-title\">\n\
         <a href=\"{lead_url}\" target=\"_blank\"><span class=\"truncate-title\">{lead_title}</span></a>\n\
         <span class=\"pair-glyph\">{PAIR_GLYPH}</span>\n\
         <a href=\"{followup_url}\" target=\"_blank\"><span class=\"truncate-title\">{followup_title}</span></a>\n\
         </div>\n\
         </div>\n",
        poster = escape(lead.poster_url()),
        lead_title = escape(&lead.title),
        lead_url = escape(&lead.detail_url()),
        followup_url = escape(&followup.detail_url()),
        followup_title = escape(&followup.title),
    )
}

/// Inline notice shown in place of the grid when the fetch fails or the feed
/// is empty.
pub fn message(severity: Severity, text: &str) -> String {
    let class = match severity {
        Severity::Warning => "warning",
        Severity::Error => "error",
    };
    format!("<div class=\"message {}\">{}</div>\n", class, escape(text))
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Page styling: light/dark variables, red accent, bordered posters,
/// ellipsis truncation for long titles.
const STYLESHEET: &str = "\
:root {
    color-scheme: light dark;
    --text-color: #1E1E1E;
    --bg-color: white;
    --box-shadow: rgba(0,0,0,0.1);
}
@media (prefers-color-scheme: dark) {
    :root {
        --text-color: #E1E1E1;
        --bg-color: #2E2E2E;
        --box-shadow: rgba(0,0,0,0.3);
    }
}
body {
    margin: 0 auto;
    padding: 0 20px;
    max-width: 1200px;
    font-family: sans-serif;
    color: var(--text-color);
}
h1 {
    color: #FF4B4B;
    font-size: 3rem;
    text-align: center;
    margin-bottom: 2rem;
}
.row {
    display: flex;
    gap: 20px;
    margin-bottom: 20px;
}
.panel {
    flex: 1;
    max-width: calc((100% - 40px) / 3);
}
.poster {
    position: relative;
    border: 2px solid #FF4B4B;
    border-radius: 10px;
    overflow: hidden;
    box-shadow: 0 4px 6px var(--box-shadow);
    margin-bottom: 15px;
}
.poster img {
    width: 100%;
    display: block;
}
.rank-badge {
    position: absolute;
    top: 10px;
    left: 10px;
    background-color: var(--bg-color);
    padding: 5px 10px;
    border-radius: 5px;
    z-index: 1;
    box-shadow: 0 2px 4px var(--box-shadow);
    color: #FF4B4B;
    font-weight: bold;
}
.anime-title {
    color: var(--text-color);
    font-size: 1.2rem;
    font-weight: bold;
    margin-bottom: 10px;
    text-align: center;
    background-color: var(--bg-color);
    padding: 10px;
    border-radius: 5px;
    box-shadow: 0 2px 4px var(--box-shadow);
}
.anime-title a {
    text-decoration: none;
    color: var(--text-color);
}
.truncate-title {
    white-space: nowrap;
    overflow: hidden;
    text-overflow: ellipsis;
    max-width: 200px;
    display: inline-block;
    vertical-align: bottom;
}
.message {
    text-align: center;
    font-size: 1.2rem;
    padding: 15px;
    border-radius: 5px;
    margin: 2rem auto;
    max-width: 600px;
}
.message.error {
    background-color: #FF4B4B;
    color: white;
}
.message.warning {
    background-color: #FFC107;
    color: #1E1E1E;
}
";
