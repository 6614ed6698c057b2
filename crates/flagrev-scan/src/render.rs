//! Wikitext for the report page.

use chrono::{DateTime, Locale, Utc};

use crate::reported::{AUTO_REVIEWER_HEADING, REVIEWER_HEADING};

const CANDIDATE_TEMPLATE: &str = "Wikipedia:Gesichtete Versionen/Rechtevergabe/Vorlage";
const NONE_MARKER: &str = ":''keine''";
const DONE_MARKER: &str = "{{Erledigt|--~~~~}}";

/// Day heading text, e.g. `5. März 2024`.
pub fn date_heading(date: DateTime<Utc>) -> String {
    date.format_localized("%-d. %B %Y", Locale::de_DE).to_string()
}

/// Section appended to the report page for one scanned day.
///
/// Both lists are sorted by name. An empty list renders as `keine`; when
/// both are empty the section is marked as done straight away.
pub fn render_section(
    date: DateTime<Utc>,
    reviewers: &[String],
    auto_reviewers: &[String],
) -> String {
    let mut out = format!("\n\n== {} ==\n", date_heading(date));

    push_list(&mut out, REVIEWER_HEADING, reviewers);
    out.push('\n');
    push_list(&mut out, AUTO_REVIEWER_HEADING, auto_reviewers);

    if reviewers.is_empty() && auto_reviewers.is_empty() {
        out.push_str(DONE_MARKER);
        out.push('\n');
    }
    out
}

fn push_list(out: &mut String, heading: &str, users: &[String]) {
    out.push_str(heading);
    out.push('\n');
    if users.is_empty() {
        out.push_str(NONE_MARKER);
        out.push('\n');
        return;
    }
    let mut sorted: Vec<&String> = users.iter().collect();
    sorted.sort();
    for user in sorted {
        out.push_str(&format!("* {{{{{CANDIDATE_TEMPLATE}|{user}}}}}\n"));
    }
}

/// Edit summary for saving the section.
pub fn edit_summary(date: DateTime<Utc>) -> String {
    format!("Neue Kandidaten für den {} hinzugefügt.", date_heading(date))
}
