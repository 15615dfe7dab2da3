//! Test data fixtures

#![allow(dead_code)]

use serde_json::{json, Value};

pub const DETAILS_TEMPLATE: &str = "<h1>{{title}}</h1><p>{{location}}</p>";

pub const USERS_TEMPLATE: &str =
    "<section><h4>{{title}}</h4><ul>{{#each profiles}}<li>{{id}}:{{name}}</li>{{/each}}</ul></section>";

pub const CREATE_TEMPLATE: &str = concat!(
    "<tr id=\"event-row-{{event.id}}\">",
    "<td>{{event.title}}</td>",
    "<td><img src=\"{{img}}\"/></td>",
    "<td>{{event.applyingUserCount}}</td>",
    "</tr>"
);

/// An event with users in every category; followers come keyed by id
pub fn sample_event(id: &str) -> Value {
    json!({
        "id": id,
        "title": "Rust Meetup",
        "location": "Hall A",
        "applyingUsers": ["1", "2"],
        "registerUsers": [3],
        "followers": {"4": true, "5": true}
    })
}

/// An event whose only users are applicants
pub fn event_with_applicants(id: &str, applicants: &[&str]) -> Value {
    json!({
        "id": id,
        "title": "Workshop",
        "applyingUsers": applicants,
        "registerUsers": [],
        "followers": []
    })
}
