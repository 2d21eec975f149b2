use crate::core::states::state_code;
use crate::models::{College, CollegeSize, CollegeType};

/// Check if a college is located in the state with the given postal code
///
/// The record's state may be stored as a name or a code.
#[inline]
pub fn matches_state(college: &College, code: &str) -> bool {
    state_code(&college.state).is_some_and(|c| c == code)
}

/// Check if a college has the requested type
#[inline]
pub fn matches_type(college: &College, college_type: CollegeType) -> bool {
    match college_type.label() {
        Some(label) => college.college_type.trim().eq_ignore_ascii_case(label),
        None => true,
    }
}

/// Check if a college's enrollment falls in the requested size band
///
/// Records without a parseable enrollment never match a size band.
#[inline]
pub fn matches_size(college: &College, size: CollegeSize) -> bool {
    if size == CollegeSize::NoPreference {
        return true;
    }
    college
        .enrollment_count()
        .is_some_and(|count| size.contains(count))
}

/// Narrow a pool with a predicate, unless doing so would leave nothing
///
/// An empty result leaves the pool unchanged.
pub fn narrow_or_keep<'a, F>(pool: Vec<&'a College>, stage: &str, predicate: F) -> Vec<&'a College>
where
    F: Fn(&College) -> bool,
{
    let narrowed: Vec<&College> = pool.iter().copied().filter(|c| predicate(*c)).collect();

    if narrowed.is_empty() {
        tracing::debug!("Skipping {} filter: no colleges left out of {}", stage, pool.len());
        pool
    } else {
        tracing::debug!("{} filter kept {} of {} colleges", stage, narrowed.len(), pool.len());
        narrowed
    }
}

/// Prefix a scheme onto a website that lacks one
pub fn normalize_url(website: &str) -> String {
    let website = website.trim();
    let lower = website.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        website.to_string()
    } else {
        format!("https://{}", website.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Enrollment;

    fn college(name: &str, state: &str, college_type: &str, enrollment: Option<Enrollment>) -> College {
        College {
            name: name.to_string(),
            website: format!("www.{}.edu", name.to_lowercase()),
            state: state.to_string(),
            college_type: college_type.to_string(),
            enrollment,
        }
    }

    #[test]
    fn test_matches_state_by_code_and_name() {
        assert!(matches_state(&college("A", "IA", "Public", None), "IA"));
        assert!(matches_state(&college("B", "Iowa", "Public", None), "IA"));
        assert!(!matches_state(&college("C", "NE", "Public", None), "IA"));
        assert!(!matches_state(&college("D", "", "Public", None), "IA"));
    }

    #[test]
    fn test_matches_type() {
        let c = college("A", "IA", "private", None);
        assert!(matches_type(&c, CollegeType::Private));
        assert!(!matches_type(&c, CollegeType::Public));
        assert!(matches_type(&c, CollegeType::NoPreference));
    }

    #[test]
    fn test_matches_size() {
        let small = college("A", "IA", "Public", Some(Enrollment::Count(1800)));
        let unknown = college("B", "IA", "Public", Some(Enrollment::Text("n/a".to_string())));

        assert!(matches_size(&small, CollegeSize::Small));
        assert!(!matches_size(&small, CollegeSize::Large));
        assert!(!matches_size(&unknown, CollegeSize::Small));
        assert!(matches_size(&unknown, CollegeSize::NoPreference));
    }

    #[test]
    fn test_narrow_or_keep_skips_empty_result() {
        let a = college("A", "IA", "Public", None);
        let b = college("B", "IA", "Private", None);
        let pool = vec![&a, &b];

        let narrowed = narrow_or_keep(pool.clone(), "type", |c| c.college_type == "Private");
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0].name, "B");

        let kept = narrow_or_keep(pool, "type", |c| c.college_type == "Denominational");
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("www.grinnell.edu"), "https://www.grinnell.edu");
        assert_eq!(normalize_url(" https://uiowa.edu "), "https://uiowa.edu");
        assert_eq!(normalize_url("HTTP://luther.edu"), "HTTP://luther.edu");
        assert_eq!(normalize_url("//drake.edu"), "https://drake.edu");
    }
}
