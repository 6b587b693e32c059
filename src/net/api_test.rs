use super::*;

#[test]
fn api_url_prefixes_base_path() {
    assert_eq!(api_url("/auth/check"), "/api/auth/check");
    assert_eq!(api_url("/auth/login"), "/api/auth/login");
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("tok123"), "Bearer tok123");
}
