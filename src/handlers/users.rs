use super::{decode_form, PageContext};
use crate::error::{AppResult, ModelError};
use crate::forms::{PasswordUpdateForm, UserLoginForm, UserSignupForm};
use crate::session;
use crate::state::AppState;
use crate::views::{self, render};
use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};

// Signup

pub async fn signup(page: PageContext) -> AppResult<Response> {
    let data = page.template_data().await?;
    Ok(render(
        StatusCode::OK,
        views::users::signup(&data, &UserSignupForm::default()),
    ))
}

pub async fn signup_post(
    State(state): State<AppState>,
    page: PageContext,
    form: Result<Form<UserSignupForm>, FormRejection>,
) -> AppResult<Response> {
    let mut form = decode_form(form)?;

    form.validate();
    if form.validator.valid() {
        match state.users.insert(&form.name, &form.email, &form.password).await {
            Ok(()) => {
                page.flash("Your signup was successful. Please log in.").await?;
                return Ok(Redirect::to("/user/login").into_response());
            }
            Err(ModelError::DuplicateEmail) => {
                form.validator
                    .add_field_error("email", "Email address is already in use");
            }
            Err(e) => return Err(e.into()),
        }
    }

    let data = page.template_data().await?;
    Ok(render(
        StatusCode::UNPROCESSABLE_ENTITY,
        views::users::signup(&data, &form),
    ))
}

// Login and logout

pub async fn login(page: PageContext) -> AppResult<Response> {
    let data = page.template_data().await?;
    Ok(render(
        StatusCode::OK,
        views::users::login(&data, &UserLoginForm::default()),
    ))
}

pub async fn login_post(
    State(state): State<AppState>,
    page: PageContext,
    form: Result<Form<UserLoginForm>, FormRejection>,
) -> AppResult<Response> {
    let mut form = decode_form(form)?;

    form.validate();
    if form.validator.valid() {
        match state.users.authenticate(&form.email, &form.password).await {
            Ok(user_id) => {
                // New session id on privilege change; the old id stops working.
                page.session.cycle_id().await?;
                page.session
                    .insert(session::AUTHENTICATED_USER_ID, user_id)
                    .await?;

                let target: Option<String> = page.session.remove(session::REDIRECT_PATH).await?;
                let target = target.unwrap_or_else(|| "/snippet/create".to_string());

                tracing::info!(user_id, "user logged in");
                return Ok(Redirect::to(&target).into_response());
            }
            Err(ModelError::InvalidCredentials) => {
                form.validator
                    .add_non_field_error("Email or password is incorrect");
            }
            Err(e) => return Err(e.into()),
        }
    }

    let data = page.template_data().await?;
    Ok(render(
        StatusCode::UNPROCESSABLE_ENTITY,
        views::users::login(&data, &form),
    ))
}

pub async fn logout_post(page: PageContext) -> AppResult<Response> {
    page.session.cycle_id().await?;
    page.session
        .remove::<i64>(session::AUTHENTICATED_USER_ID)
        .await?;

    page.flash("You've been logged out successfully!").await?;
    Ok(Redirect::to("/").into_response())
}

// Account

pub async fn account_view(
    State(state): State<AppState>,
    page: PageContext,
) -> AppResult<Response> {
    let user = state.users.get(page.user_id()?).await?;

    let data = page.template_data().await?;
    Ok(render(StatusCode::OK, views::users::account(&data, &user)))
}

pub async fn password_update(page: PageContext) -> AppResult<Response> {
    let data = page.template_data().await?;
    Ok(render(
        StatusCode::OK,
        views::users::password_update(&data, &PasswordUpdateForm::default()),
    ))
}

pub async fn password_update_post(
    State(state): State<AppState>,
    page: PageContext,
    form: Result<Form<PasswordUpdateForm>, FormRejection>,
) -> AppResult<Response> {
    let mut form = decode_form(form)?;

    form.validate();
    if form.validator.valid() {
        let result = state
            .users
            .password_update(page.user_id()?, &form.current_password, &form.new_password)
            .await;

        match result {
            Ok(()) => {
                page.flash("Your password has been updated!").await?;
                return Ok(Redirect::to("/account/view").into_response());
            }
            Err(ModelError::InvalidCredentials) => {
                form.validator
                    .add_field_error("currentPassword", "Current password is incorrect");
            }
            Err(e) => return Err(e.into()),
        }
    }

    let data = page.template_data().await?;
    Ok(render(
        StatusCode::UNPROCESSABLE_ENTITY,
        views::users::password_update(&data, &form),
    ))
}
