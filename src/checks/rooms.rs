//! Room lifecycle checks: create, inspect, list, leave

use std::io::Write;

use super::{conclude, describe_failure, names, Checked};
use crate::error::Result;
use crate::report::{CheckResult, Reporter};
use crate::session::{ApiResponse, Session};

/// Pull a usable room code out of a create-room reply
fn room_code(resp: &ApiResponse) -> Option<String> {
    resp.body["room"]["code"]
        .as_str()
        .filter(|code| !code.is_empty())
        .map(str::to_string)
}

/// Create a room hosted by the current user; yields its code when present
pub async fn create_room<W: Write>(
    session: &Session,
    reporter: &mut Reporter<W>,
) -> Checked<Option<String>> {
    let outcome: Result<Checked<Option<String>>> = async {
        let resp = session.post("/rooms", None).await?;
        let success = resp.is_ok() && resp.success_flag();
        let code = room_code(&resp);

        let mut detail = format!("Room Code: {}", code.as_deref().unwrap_or("None"));
        if !success {
            detail = format!("{} ({})", detail, describe_failure(&resp));
        }

        Ok(Checked {
            result: CheckResult::from_predicate(names::CREATE_ROOM, success).with_detail(detail),
            artifact: code,
        })
    }
    .await;
    conclude(reporter, names::CREATE_ROOM, outcome, None)
}

/// Fetch one room by code
pub async fn get_room<W: Write>(
    session: &Session,
    reporter: &mut Reporter<W>,
    code: &str,
) -> Checked<()> {
    let outcome: Result<Checked<()>> = async {
        let resp = session.get(&format!("/rooms/{}", code), &[]).await?;
        let room = &resp.body["room"];
        let success = resp.is_ok() && !room.is_null();

        let players = room["players"].as_array().map(Vec::len).unwrap_or(0);
        let mut detail = format!("Players: {}", players);
        if !resp.is_ok() {
            detail = format!("{} ({})", detail, describe_failure(&resp));
        }

        Ok(Checked::bare(
            CheckResult::from_predicate(names::GET_ROOM, success).with_detail(detail),
        ))
    }
    .await;
    conclude(reporter, names::GET_ROOM, outcome, ())
}

/// List rooms the current user belongs to; an empty list still passes
pub async fn list_rooms<W: Write>(session: &Session, reporter: &mut Reporter<W>) -> Checked<()> {
    let outcome: Result<Checked<()>> = async {
        let resp = session.get("/rooms", &[]).await?;
        let mut detail = format!("Found {} room(s)", resp.list_len("rooms"));
        if !resp.is_ok() {
            detail = format!("{} ({})", detail, describe_failure(&resp));
        }

        Ok(Checked::bare(
            CheckResult::from_predicate(names::LIST_ROOMS, resp.is_ok()).with_detail(detail),
        ))
    }
    .await;
    conclude(reporter, names::LIST_ROOMS, outcome, ())
}

/// Leave (and, as host, delete) the room
pub async fn leave_room<W: Write>(
    session: &Session,
    reporter: &mut Reporter<W>,
    code: &str,
) -> Checked<()> {
    let outcome: Result<Checked<()>> = async {
        let resp = session.delete(&format!("/rooms/{}", code)).await?;
        let result = if resp.is_ok() {
            CheckResult::pass(names::LEAVE_ROOM)
        } else {
            CheckResult::fail(names::LEAVE_ROOM).with_detail(describe_failure(&resp))
        };
        Ok(Checked::bare(result))
    }
    .await;
    conclude(reporter, names::LEAVE_ROOM, outcome, ())
}
