use crate::api::{ApiErrorKind, ApiResult, AuthStatusResponse};
use crate::models::AdminUser;

/// Why the client believes nobody is signed in.
///
/// Diagnostic only: routing and every user-visible string treat all causes
/// the same way.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum AnonymousReason {
    SignedOut,
    Rejected(u16),
    CheckFailed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Session {
    Loading,
    Authenticated(AdminUser),
    Anonymous(AnonymousReason),
}

impl Session {
    /// Outcome of the one-shot startup status check.
    pub fn from_status_check(result: ApiResult<AuthStatusResponse>) -> Self {
        match result {
            Ok(res) => Session::Authenticated(res.user.unwrap_or_default()),
            Err(e) => match (e.kind, e.status) {
                (ApiErrorKind::Rejected, Some(status)) => {
                    Session::Anonymous(AnonymousReason::Rejected(status))
                }
                _ => Session::Anonymous(AnonymousReason::CheckFailed(
                    e.detail.unwrap_or(e.message),
                )),
            },
        }
    }

    /// The caller has already confirmed the login with the backend.
    pub fn login(user: AdminUser) -> Self {
        Session::Authenticated(user)
    }

    /// Applied only after the backend confirmed the logout.
    pub fn logged_out() -> Self {
        Session::Anonymous(AnonymousReason::SignedOut)
    }

    /// Apply the backend's answer to a logout request.
    ///
    /// Only a confirmed logout signs the user out; on failure the session is
    /// kept and the returned message goes to the header banner.
    pub fn after_logout(self, result: ApiResult<()>) -> (Self, Option<String>) {
        match result {
            Ok(()) => (Session::logged_out(), None),
            Err(e) => (self, Some(e.message)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Session::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn user(&self) -> Option<&AdminUser> {
        match self {
            Session::Authenticated(u) => Some(u),
            _ => None,
        }
    }

    /// Text shown to the visitor about their session. Anonymous sessions
    /// never carry one, whatever the cause.
    pub fn notice(&self) -> Option<String> {
        match self {
            Session::Loading => Some("Loading...".to_string()),
            Session::Authenticated(_) | Session::Anonymous(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{interpret_empty_response, interpret_response, ApiError, LOGOUT_FAILED_MESSAGE};

    fn status(code: u16, body: &str) -> ApiResult<AuthStatusResponse> {
        interpret_response(code, body, "Not signed in")
    }

    fn transport_failure() -> ApiResult<AuthStatusResponse> {
        Err(ApiError {
            kind: ApiErrorKind::Network,
            status: None,
            message: crate::api::NETWORK_ERROR_MESSAGE.to_string(),
            detail: Some("request timed out".to_string()),
        })
    }

    #[test]
    fn test_starts_loading() {
        let s = Session::Loading;
        assert!(s.is_loading());
        assert!(!s.is_authenticated());
        assert!(s.user().is_none());
    }

    #[test]
    fn test_ok_status_authenticates_with_user() {
        let s = Session::from_status_check(status(200, r#"{"user": {"username": "root"}}"#));
        assert!(s.is_authenticated());
        assert_eq!(s.user().map(|u| u.display_name()), Some("root"));
    }

    #[test]
    fn test_ok_status_without_user_still_authenticates() {
        let s = Session::from_status_check(status(200, "{}"));
        assert!(s.is_authenticated());
        assert_eq!(s.user().map(|u| u.display_name()), Some("Admin"));
    }

    #[test]
    fn test_unauthorized_status_is_anonymous() {
        let s = Session::from_status_check(status(401, r#"{"message": "No token"}"#));
        assert!(!s.is_loading());
        assert!(!s.is_authenticated());
        assert_eq!(s, Session::Anonymous(AnonymousReason::Rejected(401)));
    }

    #[test]
    fn test_transport_failure_is_anonymous() {
        let s = Session::from_status_check(transport_failure());
        assert!(!s.is_loading());
        assert!(!s.is_authenticated());
        assert_eq!(
            s,
            Session::Anonymous(AnonymousReason::CheckFailed("request timed out".to_string()))
        );
    }

    #[test]
    fn test_rejected_and_failed_checks_look_the_same_to_the_user() {
        let rejected = Session::from_status_check(status(401, "{}"));
        let failed = Session::from_status_check(transport_failure());
        assert_eq!(rejected.is_authenticated(), failed.is_authenticated());
        assert_eq!(rejected.is_loading(), failed.is_loading());
        assert_eq!(rejected.notice(), None);
        assert_eq!(failed.notice(), None);
    }

    #[test]
    fn test_garbled_status_body_is_anonymous() {
        let s = Session::from_status_check(status(200, "<html>"));
        assert!(matches!(s, Session::Anonymous(AnonymousReason::CheckFailed(_))));
    }

    #[test]
    fn test_confirmed_logout_signs_out() {
        let s = Session::login(AdminUser::named("ops"));
        let ok = interpret_empty_response(200, "", LOGOUT_FAILED_MESSAGE);
        let (s, banner) = s.after_logout(ok);
        assert_eq!(s, Session::Anonymous(AnonymousReason::SignedOut));
        assert!(banner.is_none());
    }

    #[test]
    fn test_rejected_logout_keeps_session_and_reports() {
        let s = Session::login(AdminUser::named("ops"));
        let rejected = interpret_empty_response(500, "{}", LOGOUT_FAILED_MESSAGE);
        let (s, banner) = s.after_logout(rejected);
        assert!(s.is_authenticated());
        assert_eq!(s.user().map(|u| u.display_name()), Some("ops"));
        assert_eq!(banner.as_deref(), Some(LOGOUT_FAILED_MESSAGE));
    }

    #[test]
    fn test_logout_network_failure_keeps_session() {
        let s = Session::login(AdminUser::named("ops"));
        let failed = Err(ApiError {
            kind: ApiErrorKind::Network,
            status: None,
            message: crate::api::NETWORK_ERROR_MESSAGE.to_string(),
            detail: Some("connection refused".to_string()),
        });
        let (s, banner) = s.after_logout(failed);
        assert!(s.is_authenticated());
        assert_eq!(banner.as_deref(), Some(crate::api::NETWORK_ERROR_MESSAGE));
    }

    #[test]
    fn test_login_then_logout() {
        let s = Session::login(AdminUser::named("ops"));
        assert!(s.is_authenticated());
        assert_eq!(s.user().map(|u| u.display_name()), Some("ops"));

        let s = Session::logged_out();
        assert!(!s.is_authenticated());
        assert!(s.user().is_none());
    }
}
