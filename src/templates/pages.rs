use maud::{html, Markup};

use super::{layout, PageContext};

pub fn about(ctx: &PageContext) -> Markup {
    layout(
        ctx,
        "About",
        html! {
            h2 { "About" }
            p {
                "Snippetbox is a place to paste and share short pieces of text. "
                "Snippets expire after a day, a week or a year."
            }
        },
    )
}
