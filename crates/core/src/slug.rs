//! Slug derivation and tolerant lookup for deep links.

const MAX_TITLE_SLUG: usize = 60;

/// Deep-link identifier for a job. Prefers the final path segment of the
/// apply URL; falls back to a hyphenated, truncated form of the title.
pub fn job_slug(apply_url: Option<&str>, title: Option<&str>) -> String {
    if let Some(url) = apply_url {
        if let Some(segment) = final_path_segment(url) {
            return segment.to_string();
        }
    }
    title_slug(title.unwrap_or(""))
}

/// Tolerant match: exact slug equality, or the apply URL carrying the slug
/// as a substring. The latter keeps legacy and foreign slugs resolvable.
pub fn slug_matches(slug: &str, job_slug: &str, apply_url: Option<&str>) -> bool {
    if slug.is_empty() {
        return false;
    }
    if job_slug == slug {
        return true;
    }
    apply_url.is_some_and(|url| url.contains(slug))
}

fn final_path_segment(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty() && !s.contains('.') && !s.contains(':'))
}

fn title_slug(title: &str) -> String {
    let mut out = String::new();
    let mut pending_hyphen = false;
    for c in title.trim().to_lowercase().chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else {
            pending_hyphen = true;
        }
        if out.chars().count() >= MAX_TITLE_SLUG {
            break;
        }
    }
    out.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_url_tail_wins() {
        assert_eq!(
            job_slug(
                Some("https://medlocum.ng/jobs/registered-nurse-lagos/"),
                Some("Registered Nurse"),
            ),
            "registered-nurse-lagos",
        );
    }

    #[test]
    fn query_and_fragment_are_stripped() {
        assert_eq!(
            job_slug(Some("https://example.com/jobs/locum-doctor?ref=feed#apply"), None),
            "locum-doctor",
        );
    }

    #[test]
    fn bare_domain_falls_back_to_title() {
        assert_eq!(
            job_slug(Some("https://jobbermed.com/"), Some("Consultant  Physician!")),
            "consultant-physician",
        );
    }

    #[test]
    fn title_slug_collapses_and_trims() {
        assert_eq!(job_slug(None, Some("  Nurse / Midwife (Full-Time) ")), "nurse-midwife-full-time");
    }

    #[test]
    fn title_slug_is_bounded() {
        let long = "a ".repeat(100);
        assert!(job_slug(None, Some(&long)).chars().count() <= 60);
    }

    #[test]
    fn tolerant_match_via_apply_url() {
        assert!(slug_matches(
            "registered-nurse-lagos",
            "some-other-slug",
            Some("https://medlocum.ng/jobs/registered-nurse-lagos/"),
        ));
        assert!(!slug_matches("", "x", Some("https://medlocum.ng/")));
        assert!(slug_matches("x", "x", None));
    }
}
