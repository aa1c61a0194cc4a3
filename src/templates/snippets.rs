use maud::{html, Markup};

use super::{field_error, human_date, layout, PageContext};
use crate::snippets::{Snippet, SnippetCreateForm};

pub fn home(ctx: &PageContext, snippets: &[Snippet]) -> Markup {
    layout(
        ctx,
        "Home",
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
                    @for s in snippets {
                        tr {
                            td { a href={ "/snippet/view/" (s.id) } { (s.title) } }
                            td { (human_date(s.created)) }
                            td { "#" (s.id) }
                        }
                    }
                }
            }
        },
    )
}

pub fn view(ctx: &PageContext, s: &Snippet) -> Markup {
    layout(
        ctx,
        &format!("Snippet #{}", s.id),
        html! {
            div.snippet {
                div.metadata {
                    strong { (s.title) }
                    span { "#" (s.id) }
                }
                pre { code { (s.content) } }
                div.metadata {
                    time { "Created: " (human_date(s.created)) }
                    time { "Expires: " (human_date(s.expires)) }
                }
            }
        },
    )
}

pub fn create(ctx: &PageContext, form: &SnippetCreateForm) -> Markup {
    let v = &form.validator;
    layout(
        ctx,
        "Create a New Snippet",
        html! {
            form action="/snippet/create" method="POST" {
                div {
                    label { "Title:" }
                    (field_error(v, "title"))
                    input type="text" name="title" value=(form.title);
                }
                div {
                    label { "Content:" }
                    (field_error(v, "content"))
                    textarea name="content" { (form.content) }
                }
                div {
                    label { "Delete in:" }
                    (field_error(v, "expires"))
                    input type="radio" name="expires" value="365" checked[form.expires == 365];
                    " One Year "
                    input type="radio" name="expires" value="7" checked[form.expires == 7];
                    " One Week "
                    input type="radio" name="expires" value="1" checked[form.expires == 1];
                    " One Day"
                }
                div {
                    input type="submit" value="Publish snippet";
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    #[test]
    fn content_is_escaped() {
        let now = OffsetDateTime::now_utc();
        let s = Snippet {
            id: 3,
            title: "<script>".into(),
            content: "a < b".into(),
            created: now,
            expires: now,
        };
        let page = view(&PageContext::default(), &s).into_string();
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains("a &lt; b"));
    }

    #[test]
    fn create_form_keeps_submitted_values() {
        let mut form = SnippetCreateForm {
            title: "O snail".into(),
            content: String::new(),
            expires: 7,
            ..Default::default()
        };
        form.validate();
        let page = create(&PageContext::default(), &form).into_string();
        assert!(page.contains(r#"value="O snail""#));
        assert!(page.contains("This field cannot be blank"));
        assert!(page.contains(r#"value="7" checked"#));
    }
}
