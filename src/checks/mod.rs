//! Check functions - one per API concern
//!
//! Every check issues its calls through the shared [`Session`](crate::session::Session),
//! emits exactly one line to the [`Reporter`], and hands back whatever
//! later checks need.

mod auth;
mod questions;
mod realtime;
mod rooms;

use std::io::Write;

use crate::error::Result;
use crate::report::{CheckResult, Reporter};
use crate::session::ApiResponse;

pub use auth::{generate_username, login, logout, register, who_am_i, TEST_PASSWORD};
pub use questions::{get_questions, QUESTION_CATEGORY, QUESTION_COUNT};
pub use realtime::websocket;
pub use rooms::{create_room, get_room, leave_room, list_rooms};

/// Display names, in run order
pub mod names {
    pub const REGISTER: &str = "Register";
    pub const LOGOUT: &str = "Logout";
    pub const LOGIN: &str = "Login";
    pub const WHO_AM_I: &str = "Get Current User";
    pub const GET_QUESTIONS: &str = "Get Questions";
    pub const CREATE_ROOM: &str = "Create Room";
    pub const GET_ROOM: &str = "Get Room Details";
    pub const LIST_ROOMS: &str = "List Rooms";
    pub const LEAVE_ROOM: &str = "Leave Room";
    pub const WEBSOCKET: &str = "WebSocket Connection";
}

/// A reported result plus the artifact handed to dependent checks
#[derive(Debug, Clone)]
pub struct Checked<T> {
    pub result: CheckResult,
    pub artifact: T,
}

impl<T> Checked<T> {
    pub fn passed(&self) -> bool {
        self.result.success
    }
}

impl Checked<()> {
    fn bare(result: CheckResult) -> Self {
        Self {
            result,
            artifact: (),
        }
    }
}

/// Report the outcome of a check, turning an error into a failed result
/// that carries `fallback` as its artifact.
fn conclude<W: Write, T>(
    reporter: &mut Reporter<W>,
    name: &str,
    outcome: Result<Checked<T>>,
    fallback: T,
) -> Checked<T> {
    let checked = outcome.unwrap_or_else(|e| Checked {
        result: CheckResult::fail(name).with_detail(e.to_string()),
        artifact: fallback,
    });
    reporter.report(&checked.result);
    checked
}

/// Short description of an unexpected reply, e.g. `status 401: invalid credentials`
fn describe_failure(resp: &ApiResponse) -> String {
    match resp.body["error"].as_str() {
        Some(error) => format!("status {}: {}", resp.status, error),
        None => format!("status {}", resp.status),
    }
}
