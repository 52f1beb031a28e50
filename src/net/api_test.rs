use super::*;

#[test]
fn encode_component_keeps_unreserved_characters() {
    assert_eq!(encode_component("AZaz09-_.!~*'()"), "AZaz09-_.!~*'()");
}

#[test]
fn encode_component_escapes_reserved_and_spaces() {
    assert_eq!(encode_component("Chess Club"), "Chess%20Club");
    assert_eq!(encode_component("a+b@x.com"), "a%2Bb%40x.com");
    assert_eq!(encode_component("a/b?c=d&e#f"), "a%2Fb%3Fc%3Dd%26e%23f");
}

#[test]
fn encode_component_escapes_utf8_bytes() {
    assert_eq!(encode_component("é"), "%C3%A9");
    assert_eq!(encode_component("✖"), "%E2%9C%96");
}

#[test]
fn activities_endpoint_formats_expected_path() {
    assert_eq!(activities_endpoint(""), "/activities");
    assert_eq!(activities_endpoint("/api"), "/api/activities");
}

#[test]
fn signup_endpoint_encodes_name_and_email() {
    assert_eq!(
        signup_endpoint("", "Chess Club", "b@x.com"),
        "/activities/Chess%20Club/signup?email=b%40x.com"
    );
    assert_eq!(
        signup_endpoint("https://school.test", "<b>X</b>", "q&a@x.com"),
        "https://school.test/activities/%3Cb%3EX%3C%2Fb%3E/signup?email=q%26a%40x.com"
    );
}

#[test]
fn reply_success_is_2xx_only() {
    assert!(ApiReply::new(200, ReplyBody::default()).is_success());
    assert!(ApiReply::new(204, ReplyBody::default()).is_success());
    assert!(!ApiReply::new(199, ReplyBody::default()).is_success());
    assert!(!ApiReply::new(400, ReplyBody::default()).is_success());
    assert!(!ApiReply::new(404, ReplyBody::default()).is_success());
}

#[test]
fn api_error_messages() {
    assert_eq!(ApiError::Transport("offline".to_owned()).to_string(), "request failed: offline");
    assert_eq!(ApiError::Decode("eof".to_owned()).to_string(), "malformed response: eof");
    assert_eq!(ApiError::Unavailable.to_string(), "not available outside the browser");
}

#[cfg(not(feature = "csr"))]
#[test]
fn http_api_is_unavailable_natively() {
    let api = HttpActivityApi::new("/base");
    assert_eq!(
        futures::executor::block_on(api.list_activities()),
        Err(ApiError::Unavailable)
    );
    assert_eq!(
        futures::executor::block_on(api.signup("Chess Club", "a@x.com")),
        Err(ApiError::Unavailable)
    );
}
