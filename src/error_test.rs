use super::*;

#[test]
fn server_error_surfaces_message_verbatim() {
    let err = ApiError::Server { status: 400, message: "User not found".to_owned() };
    assert_eq!(err.user_message(), "User not found");
}

#[test]
fn transport_error_hides_raw_cause() {
    let err = ApiError::Transport("TypeError: Failed to fetch".to_owned());
    assert_eq!(err.user_message(), COMMUNICATION_ERROR);
}

#[test]
fn validation_is_the_only_local_failure() {
    assert!(ApiError::Validation("queryType is required").is_local());
    assert!(!ApiError::Transport("x".to_owned()).is_local());
    assert!(!ApiError::Decode("x".to_owned()).is_local());
}

#[test]
fn display_includes_category() {
    let err = ApiError::Decode("expected value at line 1".to_owned());
    assert_eq!(err.to_string(), "response decode failed: expected value at line 1");
}
