use super::*;

#[test]
fn encode_form_escapes_reserved_characters() {
    let encoded = encode_form([("_csrf", "a+b/c"), ("reason", "spam & abuse")]);
    assert_eq!(encoded, "_csrf=a%2Bb%2Fc&reason=spam%20%26%20abuse");
}

#[test]
fn encode_form_of_nothing_is_empty() {
    assert_eq!(encode_form(Vec::<(&str, &str)>::new()), "");
}

#[test]
fn builder_accumulates_headers_and_body() {
    let req = HttpRequest::post("/admin/users/u1/delete")
        .header(REQUESTED_WITH_HEADER.0, REQUESTED_WITH_HEADER.1)
        .form([("_method", "DELETE")]);
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.headers, vec![("X-Requested-With".to_owned(), "XMLHttpRequest".to_owned())]);
    assert_eq!(req.body, RequestBody::Form("_method=DELETE".to_owned()));
}

#[test]
fn response_ok_covers_2xx_only() {
    assert!(HttpResponse { status: 200, body: String::new() }.is_ok());
    assert!(HttpResponse { status: 204, body: String::new() }.is_ok());
    assert!(!HttpResponse { status: 302, body: String::new() }.is_ok());
    assert!(!HttpResponse { status: 500, body: String::new() }.is_ok());
}
