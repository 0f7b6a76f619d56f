//! Issue records shaped like the GitHub GraphQL issue fragment.

use serde_json::{Value, json};

pub fn issue_json(id: &str, number: u64, title: &str) -> Value {
    json!({
        "id": id,
        "number": number,
        "title": title,
        "url": format!("https://github.com/gitpod-io/gitpod/issues/{number}"),
        "body": "Steps to reproduce",
        "state": "OPEN",
        "author": { "login": "octocat", "avatarUrl": "https://avatars.githubusercontent.com/u/583231" },
        "repository": { "nameWithOwner": "gitpod-io/gitpod" },
        "comments": { "totalCount": 3 },
        "updatedAt": "2024-06-03T14:05:00Z"
    })
}

pub fn ghost_issue_json(id: &str, number: u64, title: &str) -> Value {
    let mut value = issue_json(id, number, title);
    value["author"] = Value::Null;
    value["comments"]["totalCount"] = json!(0);
    value
}
