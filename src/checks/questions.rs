//! Question bank check

use std::io::Write;

use serde_json::Value;

use super::{conclude, describe_failure, names, Checked};
use crate::error::Result;
use crate::report::{CheckResult, Reporter};
use crate::session::Session;

pub const QUESTION_CATEGORY: &str = "PSI";
pub const QUESTION_COUNT: &str = "2";

/// Fetch questions; passes when at least one comes back.
///
/// The first question is returned for callers that want to inspect it.
pub async fn get_questions<W: Write>(
    session: &Session,
    reporter: &mut Reporter<W>,
) -> Checked<Option<Value>> {
    let outcome: Result<Checked<Option<Value>>> = async {
        let resp = session
            .get(
                "/questions",
                &[("category", QUESTION_CATEGORY), ("count", QUESTION_COUNT)],
            )
            .await?;

        let count = resp.list_len("questions");
        let success = resp.is_ok() && count > 0;
        let mut detail = format!("Got {} question(s)", count);
        if !resp.is_ok() {
            detail = format!("{} ({})", detail, describe_failure(&resp));
        }

        Ok(Checked {
            result: CheckResult::from_predicate(names::GET_QUESTIONS, success).with_detail(detail),
            artifact: resp.body["questions"].get(0).cloned(),
        })
    }
    .await;
    conclude(reporter, names::GET_QUESTIONS, outcome, None)
}
