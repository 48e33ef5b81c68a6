use url::form_urlencoded;

pub const REST_PATH_PREFIX: &str = "/rest/v1";

/// Query sent with every ping: fetch at most one row, all columns.
pub fn ping_query() -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("select", "*")
        .append_pair("limit", "1")
        .finish()
}

/// Compose `{base}/rest/v1/{table}?{query}`.
///
/// A single trailing `/` on `base` is dropped. `table` and `query` are used
/// verbatim; both come from trusted configuration and `query` is expected to
/// be encoded already.
pub fn build_url(base: &str, table: &str, query: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    format!("{base}{REST_PATH_PREFIX}/{table}?{query}")
}

#[cfg(test)]
mod tests {
    use super::{build_url, ping_query};

    #[test]
    fn ping_query_keeps_star_unescaped() {
        assert_eq!(ping_query(), "select=*&limit=1");
    }

    #[test]
    fn build_url_strips_trailing_slash_from_base() {
        assert_eq!(
            build_url("https://x.supabase.co/", "items", "select=*&limit=1"),
            "https://x.supabase.co/rest/v1/items?select=*&limit=1"
        );
    }

    #[test]
    fn build_url_accepts_base_without_trailing_slash() {
        assert_eq!(
            build_url("https://x.supabase.co", "items", "select=*&limit=1"),
            "https://x.supabase.co/rest/v1/items?select=*&limit=1"
        );
    }

    #[test]
    fn build_url_strips_only_one_trailing_slash() {
        assert_eq!(
            build_url("https://x.supabase.co//", "items", "limit=1"),
            "https://x.supabase.co//rest/v1/items?limit=1"
        );
    }

    #[test]
    fn build_url_keeps_base_path_segments() {
        assert_eq!(
            build_url("http://127.0.0.1:54321/proxy/", "profiles", "select=*&limit=1"),
            "http://127.0.0.1:54321/proxy/rest/v1/profiles?select=*&limit=1"
        );
    }

    #[test]
    fn build_url_does_not_validate_table_name() {
        assert_eq!(
            build_url("https://x.supabase.co", "public.audit log", "limit=1"),
            "https://x.supabase.co/rest/v1/public.audit log?limit=1"
        );
    }
}
