// Unit tests for HttpStatusCode range checks

use crate::HttpStatusCode;

/// **VALUE**: Verifies the 2xx range the client treats as success.
///
/// **BUG THIS CATCHES**: An off-by-one on a range bound would make a 200 look like
/// a failure or let a 300 through as success.
#[test]
fn given_boundary_codes_when_checked_then_only_2xx_is_success() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(299).is_success());
    assert!(!HttpStatusCode(300).is_success());
    assert!(!HttpStatusCode(199).is_success());
    assert!(!HttpStatusCode::UNAUTHORIZED.is_success());
    assert!(!HttpStatusCode::NO_RESPONSE.is_success());
}

#[test]
fn given_status_code_when_displayed_then_prints_number() {
    assert_eq!(HttpStatusCode::from(422).to_string(), "422");
    assert_eq!(HttpStatusCode::NO_RESPONSE.to_string(), "0");
}
