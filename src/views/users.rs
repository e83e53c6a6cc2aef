use super::{csrf_field, field_error, human_date, layout, non_field_errors, TemplateData};
use crate::db::User;
use crate::forms::{PasswordUpdateForm, UserLoginForm, UserSignupForm};
use maud::{html, Markup};

pub fn signup(data: &TemplateData, form: &UserSignupForm) -> Markup {
    layout(
        "Signup",
        data,
        html! {
            form action="/user/signup" method="POST" novalidate {
                (csrf_field(data))
                div {
                    label { "Name:" }
                    (field_error(&form.validator, "name"))
                    input type="text" name="name" value=(form.name);
                }
                div {
                    label { "Email:" }
                    (field_error(&form.validator, "email"))
                    input type="email" name="email" value=(form.email);
                }
                div {
                    label { "Password:" }
                    (field_error(&form.validator, "password"))
                    input type="password" name="password";
                }
                div {
                    input type="submit" value="Signup";
                }
            }
        },
    )
}

pub fn login(data: &TemplateData, form: &UserLoginForm) -> Markup {
    layout(
        "Login",
        data,
        html! {
            form action="/user/login" method="POST" novalidate {
                (csrf_field(data))
                (non_field_errors(&form.validator))
                div {
                    label { "Email:" }
                    (field_error(&form.validator, "email"))
                    input type="email" name="email" value=(form.email);
                }
                div {
                    label { "Password:" }
                    (field_error(&form.validator, "password"))
                    input type="password" name="password";
                }
                div {
                    input type="submit" value="Login";
                }
            }
        },
    )
}

pub fn account(data: &TemplateData, user: &User) -> Markup {
    layout(
        "Your Account",
        data,
        html! {
            h2 { "Your Account" }
            table {
                tr { th { "Name" } td { (user.name) } }
                tr { th { "Email" } td { (user.email) } }
                tr { th { "Joined" } td { (human_date(&user.created)) } }
                tr {
                    th { "Password" }
                    td { a href="/account/password/update" { "Change password" } }
                }
            }
        },
    )
}

pub fn password_update(data: &TemplateData, form: &PasswordUpdateForm) -> Markup {
    layout(
        "Change Password",
        data,
        html! {
            h2 { "Change Password" }
            form action="/account/password/update" method="POST" novalidate {
                (csrf_field(data))
                div {
                    label { "Current password:" }
                    (field_error(&form.validator, "currentPassword"))
                    input type="password" name="currentPassword";
                }
                div {
                    label { "New password:" }
                    (field_error(&form.validator, "newPassword"))
                    input type="password" name="newPassword";
                }
                div {
                    label { "Confirm new password:" }
                    (field_error(&form.validator, "confirmPassword"))
                    input type="password" name="confirmPassword";
                }
                div {
                    input type="submit" value="Change password";
                }
            }
        },
    )
}
