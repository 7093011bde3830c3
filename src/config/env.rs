//! # Environment Variable Utilities
//!
//! Helpers for reading configuration values from environment variables
//! with fallback defaults. Each reader has a provider-injected variant
//! so tests can supply values without touching the process environment.
//!
//! # Examples
//! ```rust,no_run
//! use respimg::config::env::{read_string, read_u64};
//!
//! let base = read_string("RESPIMG_ORIGINALS_BASE", "/uploads/originals");
//! let max = read_u64("RESPIMG_MAX_UPLOAD_BYTES", 10 * 1024 * 1024);
//! ```

/// Reads a string, returning the default when the variable is unset.
/// Surrounding quotes and whitespace are stripped.
pub fn read_string(name: &str, default: &str) -> String {
    read_string_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads a string using a custom provider function.
///
/// # Example
/// ```
/// use respimg::config::env::read_string_from;
///
/// let v = read_string_from(|_| Some("\"/media\"".into()), "BASE", "/uploads");
/// assert_eq!(v, "/media");
/// ```
pub fn read_string_from<F>(provider: F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match provider(name) {
        Some(v) => {
            let s = v.trim().trim_matches(|c| c == '"' || c == '\'');
            if s.is_empty() {
                default.to_string()
            } else {
                s.to_string()
            }
        }
        None => default.to_string(),
    }
}

/// Reads a `u64`, returning the default if parsing fails.
pub fn read_u64(name: &str, default: u64) -> u64 {
    read_u64_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads a `u64` using a custom provider function.
pub fn read_u64_from<F>(provider: F, name: &str, default: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

/// Reads a comma-separated list of `u32` values, returning the default
/// when the variable is unset or yields no parseable entries.
pub fn read_u32_list(name: &str, default: &[u32]) -> Vec<u32> {
    read_u32_list_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads a `u32` list using a custom provider function. Unparseable
/// entries are skipped.
///
/// # Example
/// ```
/// use respimg::config::env::read_u32_list_from;
///
/// let widths = read_u32_list_from(|_| Some("320, 640,bad,1024".into()), "W", &[100]);
/// assert_eq!(widths, vec![320, 640, 1024]);
/// ```
pub fn read_u32_list_from<F>(provider: F, name: &str, default: &[u32]) -> Vec<u32>
where
    F: Fn(&str) -> Option<String>,
{
    let parsed: Vec<u32> = provider(name)
        .map(|s| {
            s.split(',')
                .filter_map(|part| part.trim().parse::<u32>().ok())
                .collect()
        })
        .unwrap_or_default();
    if parsed.is_empty() {
        default.to_vec()
    } else {
        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_string_default_when_missing() {
        let got = read_string_from(|_| None, "X", "/uploads");
        assert_eq!(got, "/uploads");
    }

    #[test]
    fn test_read_string_strips_quotes_and_whitespace() {
        assert_eq!(read_string_from(|_| Some("  '/media'  ".into()), "X", "d"), "/media");
        assert_eq!(read_string_from(|_| Some("\"/m\"".into()), "X", "d"), "/m");
    }

    #[test]
    fn test_read_string_empty_value_falls_back() {
        assert_eq!(read_string_from(|_| Some("  ".into()), "X", "d"), "d");
    }

    #[test]
    fn test_read_u64_valid_number() {
        let got = read_u64_from(|_| Some("1048576".into()), "MAX", 10);
        assert_eq!(got, 1_048_576);
    }

    #[test]
    fn test_read_u64_invalid_or_missing() {
        assert_eq!(read_u64_from(|_| Some("big".into()), "MAX", 99), 99);
        assert_eq!(read_u64_from(|_| None, "MAX", 77), 77);
    }

    #[test]
    fn test_read_u32_list_parses_and_skips_bad_entries() {
        let got = read_u32_list_from(|_| Some("320,640 , 1024,nope".into()), "W", &[1]);
        assert_eq!(got, vec![320, 640, 1024]);
    }

    #[test]
    fn test_read_u32_list_falls_back_when_empty() {
        assert_eq!(read_u32_list_from(|_| None, "W", &[320, 640]), vec![320, 640]);
        assert_eq!(read_u32_list_from(|_| Some("a,b".into()), "W", &[320]), vec![320]);
    }

    #[test]
    fn test_process_env_readers_use_defaults_for_unset_vars() {
        temp_env::with_var_unset("RESPIMG_TEST_UNSET", || {
            assert_eq!(read_string("RESPIMG_TEST_UNSET", "d"), "d");
            assert_eq!(read_u64("RESPIMG_TEST_UNSET", 5), 5);
            assert_eq!(read_u32_list("RESPIMG_TEST_UNSET", &[9]), vec![9]);
        });
    }
}
