use super::{csrf_field, field_error, human_date, layout, TemplateData};
use crate::db::Snippet;
use crate::forms::{SnippetCreateForm, EXPIRY_CHOICES};
use maud::{html, Markup};

pub fn home(data: &TemplateData, snippets: &[Snippet]) -> Markup {
    layout(
        "Home",
        data,
        html! {
            h2 { "Latest Snippets" }
            @if snippets.is_empty() {
                p { "There's nothing to see here... yet!" }
            } @else {
                table {
                    tr {
                        th { "Title" }
                        th { "Created" }
                        th { "ID" }
                    }
                    @for snippet in snippets {
                        tr {
                            td { a href={ "/snippet/view/" (snippet.id) } { (snippet.title) } }
                            td { (human_date(&snippet.created)) }
                            td { "#" (snippet.id) }
                        }
                    }
                }
            }
        },
    )
}

pub fn view(data: &TemplateData, snippet: &Snippet) -> Markup {
    layout(
        &format!("Snippet #{}", snippet.id),
        data,
        html! {
            div.snippet {
                div.metadata {
                    strong { (snippet.title) }
                    span { "#" (snippet.id) }
                }
                pre { code { (snippet.content) } }
                div.metadata {
                    time { "Created: " (human_date(&snippet.created)) }
                    " "
                    time { "Expires: " (human_date(&snippet.expires)) }
                }
            }
        },
    )
}

fn expiry_label(days: i64) -> &'static str {
    match days {
        1 => "One Day",
        7 => "One Week",
        _ => "One Year",
    }
}

pub fn create(data: &TemplateData, form: &SnippetCreateForm) -> Markup {
    layout(
        "Create a New Snippet",
        data,
        html! {
            form action="/snippet/create" method="POST" {
                (csrf_field(data))
                div {
                    label { "Title:" }
                    (field_error(&form.validator, "title"))
                    input type="text" name="title" value=(form.title);
                }
                div {
                    label { "Content:" }
                    (field_error(&form.validator, "content"))
                    textarea name="content" { (form.content) }
                }
                div {
                    label { "Delete in:" }
                    (field_error(&form.validator, "expires"))
                    @for days in EXPIRY_CHOICES {
                        input type="radio" name="expires" value=(days) checked[form.expires == days];
                        " " (expiry_label(days)) " "
                    }
                }
                div {
                    input type="submit" value="Publish snippet";
                }
            }
        },
    )
}
