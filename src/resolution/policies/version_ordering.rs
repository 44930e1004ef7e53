use std::cmp::Ordering;

/// Ordering of version strings as found in installed POM files.
///
/// Versions are split on `.` and `-`. Numeric parts compare numerically and
/// rank above non-numeric parts; non-numeric parts compare lexically. A
/// missing part counts as `0`, so `1.0` and `1.0.0` are equal while
/// `1.0-beta` sorts below `1.0`.
pub struct VersionOrdering;

impl VersionOrdering {
    pub fn compare(left: &str, right: &str) -> Ordering {
        let left_parts: Vec<&str> = Self::split(left);
        let right_parts: Vec<&str> = Self::split(right);
        let len = left_parts.len().max(right_parts.len());

        for i in 0..len {
            let l = left_parts.get(i).copied().unwrap_or("0");
            let r = right_parts.get(i).copied().unwrap_or("0");
            let ordering = Self::compare_part(l, r);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    /// Picks the highest version of an iterator, if any.
    pub fn max<'a, I>(versions: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        versions
            .into_iter()
            .max_by(|a, b| Self::compare(a, b))
    }

    /// A non-empty string that starts with an ASCII digit.
    pub fn looks_like_version(value: &str) -> bool {
        value.chars().next().is_some_and(|c| c.is_ascii_digit())
    }

    fn split(version: &str) -> Vec<&str> {
        version
            .trim()
            .split(['.', '-'])
            .filter(|part| !part.is_empty())
            .collect()
    }

    fn compare_part(left: &str, right: &str) -> Ordering {
        let left_numeric = left.chars().all(|c| c.is_ascii_digit());
        let right_numeric = right.chars().all(|c| c.is_ascii_digit());

        match (left_numeric, right_numeric) {
            (true, true) => {
                let l = left.trim_start_matches('0');
                let r = right.trim_start_matches('0');
                l.len().cmp(&r.len()).then_with(|| l.cmp(r))
            }
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => left.cmp(right),
        }
    }
}
