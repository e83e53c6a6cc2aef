use super::{decode_form, PageContext};
use crate::error::{AppError, AppResult};
use crate::forms::SnippetCreateForm;
use crate::state::AppState;
use crate::views::{self, render};
use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};

/// Number of snippets listed on the home page
pub const LATEST_LIMIT: u32 = 10;

pub async fn home(State(state): State<AppState>, page: PageContext) -> AppResult<Response> {
    let snippets = state.snippets.latest(LATEST_LIMIT).await?;

    let data = page.template_data().await?;
    Ok(render(StatusCode::OK, views::snippets::home(&data, &snippets)))
}

pub async fn snippet_view(
    State(state): State<AppState>,
    Path(id): Path<String>,
    page: PageContext,
) -> AppResult<Response> {
    let id = match id.parse::<i64>() {
        Ok(id) if id >= 1 => id,
        _ => return Err(AppError::NotFound),
    };

    // ModelError::NoRecord becomes a 404 through AppError
    let snippet = state.snippets.get(id).await?;

    let data = page.template_data().await?;
    Ok(render(StatusCode::OK, views::snippets::view(&data, &snippet)))
}

pub async fn snippet_create(page: PageContext) -> AppResult<Response> {
    let data = page.template_data().await?;
    Ok(render(
        StatusCode::OK,
        views::snippets::create(&data, &SnippetCreateForm::default()),
    ))
}

pub async fn snippet_create_post(
    State(state): State<AppState>,
    page: PageContext,
    form: Result<Form<SnippetCreateForm>, FormRejection>,
) -> AppResult<Response> {
    let mut form = decode_form(form)?;

    form.validate();
    if !form.validator.valid() {
        let data = page.template_data().await?;
        return Ok(render(
            StatusCode::UNPROCESSABLE_ENTITY,
            views::snippets::create(&data, &form),
        ));
    }

    let id = state
        .snippets
        .insert(&form.title, &form.content, form.expires)
        .await?;

    page.flash("Snippet successfully created!").await?;

    Ok(Redirect::to(&format!("/snippet/view/{id}")).into_response())
}
