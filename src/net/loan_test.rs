use super::*;

#[test]
fn request_url_matches_route() {
    assert_eq!(request_url("/prestamos/solicitar/", "42").as_deref(), Some("/prestamos/solicitar/42/"));
}

#[test]
fn request_url_normalizes_prefix_slash() {
    assert_eq!(request_url("/prestamos/solicitar", "7").as_deref(), Some("/prestamos/solicitar/7/"));
}

#[test]
fn request_url_trims_id() {
    assert_eq!(request_url("/prestamos/solicitar/", " 9 ").as_deref(), Some("/prestamos/solicitar/9/"));
}

#[test]
fn request_url_rejects_ids_outside_a_segment() {
    assert_eq!(request_url("/prestamos/solicitar/", ""), None);
    assert_eq!(request_url("/prestamos/solicitar/", "../admin"), None);
    assert_eq!(request_url("/prestamos/solicitar/", "1?x=2"), None);
}

#[test]
fn classify_status_accepts_2xx_only() {
    assert_eq!(classify_status(200), Ok(()));
    assert_eq!(classify_status(204), Ok(()));
    assert_eq!(classify_status(302), Err(LoanRequestError::Status(302)));
    assert_eq!(classify_status(403), Err(LoanRequestError::Status(403)));
    assert_eq!(classify_status(500), Err(LoanRequestError::Status(500)));
}

#[test]
fn user_messages_distinguish_status_from_transport() {
    assert_eq!(LoanRequestError::Status(500).user_message(), MSG_LOAN_FAILED);
    assert_eq!(LoanRequestError::Transport("offline".to_owned()).user_message(), MSG_CONNECTION_FAILED);
}

#[test]
fn error_display() {
    assert_eq!(LoanRequestError::Status(404).to_string(), "loan request failed: 404");
    assert_eq!(
        LoanRequestError::Transport("network down".to_owned()).to_string(),
        "loan request transport failure: network down"
    );
}
