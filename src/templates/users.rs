use maud::{html, Markup};

use super::{field_error, human_date, layout, PageContext};
use crate::users::{LoginForm, PasswordUpdateForm, SignupForm, User};

pub fn signup(ctx: &PageContext, form: &SignupForm) -> Markup {
    let v = &form.validator;
    layout(
        ctx,
        "Signup",
        html! {
            form action="/user/signup" method="POST" novalidate {
                div {
                    label { "Name:" }
                    (field_error(v, "name"))
                    input type="text" name="name" value=(form.name);
                }
                div {
                    label { "Email:" }
                    (field_error(v, "email"))
                    input type="email" name="email" value=(form.email);
                }
                div {
                    label { "Password:" }
                    (field_error(v, "password"))
                    input type="password" name="password";
                }
                div {
                    input type="submit" value="Signup";
                }
            }
        },
    )
}

pub fn login(ctx: &PageContext, form: &LoginForm) -> Markup {
    let v = &form.validator;
    layout(
        ctx,
        "Login",
        html! {
            form action="/user/login" method="POST" novalidate {
                @for msg in &v.non_field_errors {
                    div.error { (msg) }
                }
                div {
                    label { "Email:" }
                    (field_error(v, "email"))
                    input type="email" name="email" value=(form.email);
                }
                div {
                    label { "Password:" }
                    (field_error(v, "password"))
                    input type="password" name="password";
                }
                div {
                    input type="submit" value="Login";
                }
            }
        },
    )
}

pub fn account(ctx: &PageContext, user: &User) -> Markup {
    layout(
        ctx,
        "Your Account",
        html! {
            h2 { "Your Account" }
            table {
                tr { th { "Name" } td { (user.name) } }
                tr { th { "Email" } td { (user.email) } }
                tr { th { "Joined" } td { (human_date(user.created)) } }
                tr {
                    th { "Password" }
                    td { a href="/account/password/update" { "Change password" } }
                }
            }
        },
    )
}

pub fn password_update(ctx: &PageContext, form: &PasswordUpdateForm) -> Markup {
    let v = &form.validator;
    layout(
        ctx,
        "Change Password",
        html! {
            h2 { "Change Password" }
            form action="/account/password/update" method="POST" novalidate {
                div {
                    label { "Current password:" }
                    (field_error(v, "currentPassword"))
                    input type="password" name="currentPassword";
                }
                div {
                    label { "New password:" }
                    (field_error(v, "newPassword"))
                    input type="password" name="newPassword";
                }
                div {
                    label { "Confirm new password:" }
                    (field_error(v, "newPasswordConfirmation"))
                    input type="password" name="newPasswordConfirmation";
                }
                div {
                    input type="submit" value="Change password";
                }
            }
        },
    )
}
