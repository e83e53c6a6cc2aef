use super::{layout, TemplateData};
use maud::{html, Markup};

pub fn about(data: &TemplateData) -> Markup {
    layout(
        "About",
        data,
        html! {
            h2 { "About" }
            p {
                "Snippetbox is a place to paste and share short pieces of text. "
                "Anyone can read a snippet until it expires; creating one needs an account."
            }
        },
    )
}
