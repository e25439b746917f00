// Query string parsing
// Extracts the list-endpoint filter parameters from a raw query string

/// Filter parameters accepted by the list endpoints
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListParams {
    pub category: Option<String>,
    /// Raw value of the `premium` parameter; see [`premium_filter`]
    pub premium: Option<String>,
}

/// Parse `category` and `premium` out of a query string
///
/// Later occurrences of a parameter win, matching common framework behavior.
/// Unknown parameters are ignored.
pub fn parse_list_params(query: Option<&str>) -> ListParams {
    let mut params = ListParams::default();
    let Some(query) = query else {
        return params;
    };

    for pair in query.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };
        match percent_decode(key).as_str() {
            "category" => params.category = Some(percent_decode(value)),
            "premium" => params.premium = Some(percent_decode(value)),
            _ => {}
        }
    }

    params
}

/// Category filter
///
/// An empty value counts as no filter, the same as an absent parameter.
pub fn category_filter(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.is_empty())
}

/// Tri-state premium filter
///
/// Absent parameter means no filtering; a present parameter matches the
/// premium flag against `value == "true"`, so any other value selects the
/// non-premium records instead of erroring.
pub fn premium_filter(raw: Option<&str>) -> Option<bool> {
    raw.map(|value| value == "true")
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Decode percent-escapes and `+` in a query component
///
/// Malformed escapes are kept literally; invalid UTF-8 is replaced.
fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_query() {
        let params = parse_list_params(None);
        assert!(params.category.is_none());
        assert!(params.premium.is_none());
    }

    #[test]
    fn test_parse_both_params() {
        let params = parse_list_params(Some("category=romantic&premium=true"));
        assert_eq!(params.category.as_deref(), Some("romantic"));
        assert_eq!(params.premium.as_deref(), Some("true"));
    }

    #[test]
    fn test_parse_ignores_unknown_params() {
        let params = parse_list_params(Some("page=2&category=funny"));
        assert_eq!(params.category.as_deref(), Some("funny"));
        assert!(params.premium.is_none());
    }

    #[test]
    fn test_parse_last_occurrence_wins() {
        let params = parse_list_params(Some("category=a&category=b"));
        assert_eq!(params.category.as_deref(), Some("b"));
    }

    #[test]
    fn test_parse_valueless_param() {
        let params = parse_list_params(Some("premium"));
        assert_eq!(params.premium.as_deref(), Some(""));
    }

    #[test]
    fn test_percent_decoding() {
        let params = parse_list_params(Some("category=new%20year&premium=tru%65"));
        assert_eq!(params.category.as_deref(), Some("new year"));
        assert_eq!(params.premium.as_deref(), Some("true"));
    }

    #[test]
    fn test_plus_decodes_to_space() {
        let params = parse_list_params(Some("category=new+year"));
        assert_eq!(params.category.as_deref(), Some("new year"));
    }

    #[test]
    fn test_malformed_escape_kept_literally() {
        let params = parse_list_params(Some("category=50%ZZoff&premium=a%2"));
        assert_eq!(params.category.as_deref(), Some("50%ZZoff"));
        assert_eq!(params.premium.as_deref(), Some("a%2"));
    }

    #[test]
    fn test_category_filter_empty_is_no_filter() {
        assert_eq!(category_filter(None), None);
        assert_eq!(category_filter(Some("")), None);
        assert_eq!(category_filter(Some("romantic")), Some("romantic"));
    }

    #[test]
    fn test_premium_filter_tri_state() {
        assert_eq!(premium_filter(None), None);
        assert_eq!(premium_filter(Some("true")), Some(true));
        assert_eq!(premium_filter(Some("false")), Some(false));
        // Anything that is not exactly "true" selects the false branch
        assert_eq!(premium_filter(Some("TRUE")), Some(false));
        assert_eq!(premium_filter(Some("1")), Some(false));
        assert_eq!(premium_filter(Some("")), Some(false));
    }
}
