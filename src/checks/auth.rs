//! Authentication checks: register, logout, login, who-am-i

use std::io::Write;

use serde_json::json;

use super::{conclude, describe_failure, names, Checked};
use crate::error::Result;
use crate::report::{CheckResult, Reporter};
use crate::session::Session;

/// Password used for every generated account
pub const TEST_PASSWORD: &str = "test1234";

/// Username unique per call: seconds since epoch plus a random suffix
pub fn generate_username() -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("testuser_{}_{}", chrono::Utc::now().timestamp(), &suffix[..8])
}

fn credentials(username: &str) -> serde_json::Value {
    json!({
        "username": username,
        "password": TEST_PASSWORD,
    })
}

/// Register a fresh account. The generated username is returned even on failure.
pub async fn register<W: Write>(session: &Session, reporter: &mut Reporter<W>) -> Checked<String> {
    let username = generate_username();
    let outcome = try_register(session, &username).await;
    conclude(reporter, names::REGISTER, outcome, username)
}

async fn try_register(session: &Session, username: &str) -> Result<Checked<String>> {
    let resp = session
        .post("/auth/register", Some(&credentials(username)))
        .await?;

    let success = resp.is_ok() && resp.success_flag();
    let detail = if success {
        format!("Username: {}", username)
    } else {
        format!("Username: {} ({})", username, describe_failure(&resp))
    };

    Ok(Checked {
        result: CheckResult::from_predicate(names::REGISTER, success).with_detail(detail),
        artifact: username.to_string(),
    })
}

/// End the current session
pub async fn logout<W: Write>(session: &Session, reporter: &mut Reporter<W>) -> Checked<()> {
    let outcome: Result<Checked<()>> = async {
        let resp = session.post("/auth/logout", None).await?;
        let result = if resp.is_ok() {
            CheckResult::pass(names::LOGOUT)
        } else {
            CheckResult::fail(names::LOGOUT).with_detail(describe_failure(&resp))
        };
        Ok(Checked::bare(result))
    }
    .await;
    conclude(reporter, names::LOGOUT, outcome, ())
}

/// Log in with `username` and the shared test password
pub async fn login<W: Write>(
    session: &Session,
    reporter: &mut Reporter<W>,
    username: &str,
) -> Checked<()> {
    let outcome: Result<Checked<()>> = async {
        let resp = session
            .post("/auth/login", Some(&credentials(username)))
            .await?;
        let result = if resp.is_ok() && resp.success_flag() {
            CheckResult::pass(names::LOGIN)
        } else {
            CheckResult::fail(names::LOGIN).with_detail(describe_failure(&resp))
        };
        Ok(Checked::bare(result))
    }
    .await;
    conclude(reporter, names::LOGIN, outcome, ())
}

/// Ask the service who the session belongs to
pub async fn who_am_i<W: Write>(session: &Session, reporter: &mut Reporter<W>) -> Checked<()> {
    let outcome: Result<Checked<()>> = async {
        let resp = session.get("/auth/me", &[]).await?;
        let user = &resp.body["user"];
        let success = resp.is_ok() && !user.is_null();

        let shown = user["username"].as_str().unwrap_or("None");
        let mut detail = format!("User: {}", shown);
        if !resp.is_ok() {
            detail = format!("{} ({})", detail, describe_failure(&resp));
        }

        Ok(Checked::bare(
            CheckResult::from_predicate(names::WHO_AM_I, success).with_detail(detail),
        ))
    }
    .await;
    conclude(reporter, names::WHO_AM_I, outcome, ())
}
