//! Candidates already listed on the report page.
//!
//! The report page only ever grows at the end, so the text a revision added
//! is the suffix beyond its parent's length. Within one added block, user
//! templates are attributed to the tier heading that precedes them; lines
//! before any heading are ignored.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

pub const REVIEWER_HEADING: &str = "; Kandidaten für aktive Sichterrechte";
pub const AUTO_REVIEWER_HEADING: &str = "; Kandidaten für passive Sichterrechte";

/// Per-candidate template; group 1 is the username.
pub static RE_CANDIDATE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"\{\{Wikipedia:Gesichtete Versionen/Rechtevergabe/Vorlage\|([^}]+)\}\}").ok()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Reviewer,
    AutoReviewer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportedCandidates {
    pub reviewers: BTreeSet<String>,
    pub auto_reviewers: BTreeSet<String>,
}

impl ReportedCandidates {
    /// Collect candidates from the text each scan run appended.
    pub fn from_added_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut reported = Self::default();
        let Some(re) = RE_CANDIDATE.as_ref() else {
            return reported;
        };

        for text in texts {
            let mut section = Section::Preamble;
            for line in text.as_ref().lines() {
                match line.trim_end_matches('\r') {
                    REVIEWER_HEADING => section = Section::Reviewer,
                    AUTO_REVIEWER_HEADING => section = Section::AutoReviewer,
                    _ => {}
                }
                let target = match section {
                    Section::Preamble => continue,
                    Section::Reviewer => &mut reported.reviewers,
                    Section::AutoReviewer => &mut reported.auto_reviewers,
                };
                for caps in re.captures_iter(line) {
                    target.insert(caps[1].to_string());
                }
            }
        }
        reported
    }

    /// Collect candidates from the scan's own revisions of the report page,
    /// oldest first. `parent` is the page text before the first of them.
    pub fn from_revisions<S: AsRef<str>>(parent: &str, revisions: &[S]) -> Self {
        let mut previous = parent;
        let mut added = Vec::with_capacity(revisions.len());
        for rev in revisions {
            let text = rev.as_ref();
            added.push(added_text(previous, text));
            previous = text;
        }
        Self::from_added_texts(added)
    }

    pub fn is_reported_reviewer(&self, user: &str) -> bool {
        self.reviewers.contains(user)
    }

    pub fn is_reported_auto_reviewer(&self, user: &str) -> bool {
        self.auto_reviewers.contains(user)
    }
}

/// Suffix of `new` beyond the length of `old`.
pub fn added_text<'a>(old: &str, new: &'a str) -> &'a str {
    new.get(old.len()..).unwrap_or_default()
}
