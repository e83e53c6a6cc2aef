//! HTML pages rendered with maud.
//!
//! Every page goes through [`layout`], which draws the navigation for the
//! current authentication state and shows the pending flash message. maud
//! escapes every interpolated value, so user text can be rendered directly.

pub mod pages;
pub mod snippets;
pub mod users;

use crate::validator::Validator;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::{DateTime, Datelike, Utc};
use maud::{html, Markup, DOCTYPE};

/// Data every page needs besides its own content
#[derive(Debug, Clone, Default)]
pub struct TemplateData {
    pub current_year: i32,
    pub flash: Option<String>,
    pub is_authenticated: bool,
    pub csrf_token: String,
}

impl TemplateData {
    pub fn new(flash: Option<String>, is_authenticated: bool, csrf_token: String) -> Self {
        TemplateData {
            current_year: Utc::now().year(),
            flash,
            is_authenticated,
            csrf_token,
        }
    }
}

/// Send `markup` as an HTML response with `status`
pub fn render(status: StatusCode, markup: Markup) -> Response {
    (status, Html(markup.into_string())).into_response()
}

/// Format a stored RFC 3339 timestamp as "02 Jan 2006 at 15:04" (UTC)
///
/// Values that do not parse are shown as stored.
pub fn human_date(stored: &str) -> String {
    DateTime::parse_from_rfc3339(stored)
        .map(|t| t.with_timezone(&Utc).format("%d %b %Y at %H:%M").to_string())
        .unwrap_or_else(|_| stored.to_string())
}

pub fn csrf_field(data: &TemplateData) -> Markup {
    html! {
        input type="hidden" name="csrf_token" value=(data.csrf_token);
    }
}

pub fn field_error(validator: &Validator, field: &str) -> Markup {
    html! {
        @if let Some(message) = validator.field_error(field) {
            label.error { (message) }
        }
    }
}

pub fn non_field_errors(validator: &Validator) -> Markup {
    html! {
        @for message in &validator.non_field_errors {
            div.error { (message) }
        }
    }
}

pub fn layout(title: &str, data: &TemplateData, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) " - Snippetbox" }
                link rel="stylesheet" href="/static/css/main.css";
            }
            body {
                header {
                    h1 { a href="/" { "Snippetbox" } }
                }
                nav {
                    div {
                        a href="/" { "Home" }
                        a href="/about" { "About" }
                        @if data.is_authenticated {
                            a href="/snippet/create" { "Create snippet" }
                        }
                    }
                    div {
                        @if data.is_authenticated {
                            a href="/account/view" { "Account" }
                            form action="/user/logout" method="POST" {
                                (csrf_field(data))
                                button { "Logout" }
                            }
                        } @else {
                            a href="/user/signup" { "Signup" }
                            a href="/user/login" { "Login" }
                        }
                    }
                }
                main {
                    @if let Some(flash) = &data.flash {
                        div.flash { (flash) }
                    }
                    (content)
                }
                footer {
                    "Powered by Rust in " (data.current_year)
                }
            }
        }
    }
}
