use jobsify_auth::error::AuthServiceError;
use jobsify_auth::usecase::otp::{VerifyOtpInput, VerifyOtpUseCase, issue_otp};
use jobsify_auth_types::token::validate_access_token;
use jobsify_domain::user::UserRole;

use crate::helpers::{
    MockOtpRepo, MockUserRepo, RecordingMailer, TEST_JWT_SECRET, expired_otp, test_otp, test_user,
};

fn unverified_user(id: i32, email: &str) -> jobsify_auth::domain::types::User {
    let mut user = test_user(id, email);
    user.email_verified = false;
    user
}

// ── issue_otp ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn reissue_supersedes_outstanding_code() {
    let otps = MockOtpRepo::new(vec![test_otp("a@x.com", "111111")]);
    let mailer = RecordingMailer::new();
    let otps_handle = otps.otps_handle();

    issue_otp(&otps, &mailer, "a@x.com").await.unwrap();

    let otps = otps_handle.lock().unwrap();
    assert_eq!(otps.len(), 1, "one outstanding code per email");
    assert_ne!(otps[0].code, "111111");
}

#[tokio::test]
async fn mailed_body_carries_the_stored_code() {
    let otps = MockOtpRepo::empty();
    let mailer = RecordingMailer::new();
    let otps_handle = otps.otps_handle();
    let sent_handle = mailer.sent_handle();

    issue_otp(&otps, &mailer, "a@x.com").await.unwrap();

    let code = otps_handle.lock().unwrap()[0].code.clone();
    let sent = sent_handle.lock().unwrap();
    assert!(sent[0].body.contains(&code));
}

// ── VerifyOtpUseCase ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_verify_consume_code_and_issue_token() {
    let users = MockUserRepo::new(vec![unverified_user(1, "a@x.com")]);
    let otps = MockOtpRepo::new(vec![test_otp("a@x.com", "042042")]);
    let users_handle = users.users_handle();
    let otps_handle = otps.otps_handle();

    let usecase = VerifyOtpUseCase {
        users,
        otps,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let output = usecase
        .execute(VerifyOtpInput {
            user_id: 1,
            code: "042042".to_owned(),
        })
        .await
        .unwrap();

    let info = validate_access_token(&output.access_token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.email, "a@x.com");
    assert_eq!(info.role, UserRole::Seeker);
    assert_eq!(info.exp, output.access_token_exp);

    // Single-use: the code is gone and the user is verified.
    assert!(otps_handle.lock().unwrap().is_empty());
    assert!(users_handle.lock().unwrap()[0].email_verified);
}

#[tokio::test]
async fn should_reject_unknown_user() {
    let usecase = VerifyOtpUseCase {
        users: MockUserRepo::empty(),
        otps: MockOtpRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase
        .execute(VerifyOtpInput {
            user_id: 42,
            code: "042042".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_when_no_code_outstanding() {
    let usecase = VerifyOtpUseCase {
        users: MockUserRepo::new(vec![unverified_user(1, "a@x.com")]),
        otps: MockOtpRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase
        .execute(VerifyOtpInput {
            user_id: 1,
            code: "042042".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::OtpNotFound)),
        "expected OtpNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn blocked_user_cannot_redeem_a_valid_code() {
    let mut user = unverified_user(1, "a@x.com");
    user.blocked = true;

    let otps = MockOtpRepo::new(vec![test_otp("a@x.com", "042042")]);
    let otps_handle = otps.otps_handle();

    let usecase = VerifyOtpUseCase {
        users: MockUserRepo::new(vec![user]),
        otps,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase
        .execute(VerifyOtpInput {
            user_id: 1,
            code: "042042".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::AccountBlocked)),
        "expected AccountBlocked, got {result:?}"
    );
    // Rejected before the code is touched.
    assert_eq!(otps_handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_expired_code() {
    let otps = MockOtpRepo::new(vec![expired_otp("a@x.com", "042042")]);
    let otps_handle = otps.otps_handle();

    let usecase = VerifyOtpUseCase {
        users: MockUserRepo::new(vec![unverified_user(1, "a@x.com")]),
        otps,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase
        .execute(VerifyOtpInput {
            user_id: 1,
            code: "042042".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::OtpExpired)),
        "expected OtpExpired, got {result:?}"
    );
    // Left in place; only reissue replaces it.
    assert_eq!(otps_handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn mismatch_retains_code_for_retry() {
    let users = MockUserRepo::new(vec![unverified_user(1, "a@x.com")]);
    let otps = MockOtpRepo::new(vec![test_otp("a@x.com", "042042")]);
    let users_handle = users.users_handle();

    let usecase = VerifyOtpUseCase {
        users,
        otps,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase
        .execute(VerifyOtpInput {
            user_id: 1,
            code: "999999".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::OtpMismatch)),
        "expected OtpMismatch, got {result:?}"
    );
    assert!(!users_handle.lock().unwrap()[0].email_verified);

    // The correct code still redeems.
    usecase
        .execute(VerifyOtpInput {
            user_id: 1,
            code: "042042".to_owned(),
        })
        .await
        .unwrap();
    assert!(users_handle.lock().unwrap()[0].email_verified);
}

#[tokio::test]
async fn consumed_code_cannot_be_replayed() {
    let usecase = VerifyOtpUseCase {
        users: MockUserRepo::new(vec![unverified_user(1, "a@x.com")]),
        otps: MockOtpRepo::new(vec![test_otp("a@x.com", "042042")]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    usecase
        .execute(VerifyOtpInput {
            user_id: 1,
            code: "042042".to_owned(),
        })
        .await
        .unwrap();

    let result = usecase
        .execute(VerifyOtpInput {
            user_id: 1,
            code: "042042".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::OtpNotFound)),
        "expected OtpNotFound on replay, got {result:?}"
    );
}
