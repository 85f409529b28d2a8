//! HTTP handlers for changelog entry pages.

use axum::{
    extract::{Form, Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::application::handlers::{
    CreateEntryCommand, DeleteEntryCommand, GetEntryQuery, ListEntriesQuery, UpdateEntryCommand,
};
use crate::domain::changes::{EntryError, EntryForm};
use crate::domain::foundation::{EntryId, FormErrors};

use super::super::errors::HttpError;
use super::super::middleware::{OptionalAuth, RequireAuth};
use super::super::pages;
use super::super::state::AppState;
use super::super::urls::{names, Urls};
use super::dto::{EntryPath, PageQuery};

const CREATE_HEADING: &str = "New entry";
const UPDATE_HEADING: &str = "Update entry";

fn entry_redirect(urls: &Urls, id: EntryId) -> Result<Response, HttpError> {
    let location = urls.reverse(names::ENTRY_DETAIL, &[("pk", id.to_string())])?;
    Ok(Redirect::to(&location).into_response())
}

/// GET /entry/list/
pub async fn entry_list(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    urls: Urls,
    Query(query): Query<PageQuery>,
) -> Result<Response, HttpError> {
    let page = state
        .list_entries_handler()
        .handle(ListEntriesQuery {
            page: query.page()?,
        })
        .await?;

    // Page 1 may be empty; later pages must exist.
    if page.items.is_empty() && page.page > 1 {
        return Err(HttpError::NotFound);
    }

    Ok(Html(pages::entry_list(&urls, user.as_ref(), &page)?).into_response())
}

/// GET /entry/:pk/
pub async fn entry_detail(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    urls: Urls,
    Path(path): Path<EntryPath>,
) -> Result<Response, HttpError> {
    let entry = state
        .get_entry_handler()
        .handle(GetEntryQuery { id: path.id()? })
        .await?;

    Ok(Html(pages::entry_detail(&urls, user.as_ref(), &entry)?).into_response())
}

/// GET /entry/create/
pub async fn create_entry_form(
    RequireAuth(user): RequireAuth,
    urls: Urls,
) -> Result<Response, HttpError> {
    let action = urls.reverse(names::ENTRY_CREATE, &[])?;
    Ok(Html(pages::entry_form(
        Some(&user),
        CREATE_HEADING,
        &action,
        &EntryForm::default(),
        &FormErrors::new(),
    ))
    .into_response())
}

/// POST /entry/create/
pub async fn create_entry(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    urls: Urls,
    Form(form): Form<EntryForm>,
) -> Result<Response, HttpError> {
    let result = state
        .create_entry_handler()
        .handle(CreateEntryCommand {
            author: user.id.clone(),
            form: form.clone(),
        })
        .await;

    match result {
        Ok(entry) => entry_redirect(&urls, entry.id),
        Err(EntryError::ValidationFailed(errors)) => {
            let action = urls.reverse(names::ENTRY_CREATE, &[])?;
            Ok(Html(pages::entry_form(Some(&user), CREATE_HEADING, &action, &form, &errors))
                .into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /entry/update/:pk/
pub async fn update_entry_form(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    urls: Urls,
    Path(path): Path<EntryPath>,
) -> Result<Response, HttpError> {
    let id = path.id()?;
    let entry = state.get_entry_handler().handle(GetEntryQuery { id }).await?;
    let action = urls.reverse(names::ENTRY_UPDATE, &[("pk", id.to_string())])?;

    Ok(Html(pages::entry_form(
        Some(&user),
        UPDATE_HEADING,
        &action,
        &EntryForm::from(&entry),
        &FormErrors::new(),
    ))
    .into_response())
}

/// POST /entry/update/:pk/
pub async fn update_entry(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    urls: Urls,
    Path(path): Path<EntryPath>,
    Form(form): Form<EntryForm>,
) -> Result<Response, HttpError> {
    let id = path.id()?;
    let result = state
        .update_entry_handler()
        .handle(UpdateEntryCommand {
            id,
            form: form.clone(),
        })
        .await;

    match result {
        Ok(entry) => entry_redirect(&urls, entry.id),
        Err(EntryError::ValidationFailed(errors)) => {
            let action = urls.reverse(names::ENTRY_UPDATE, &[("pk", id.to_string())])?;
            Ok(Html(pages::entry_form(Some(&user), UPDATE_HEADING, &action, &form, &errors))
                .into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /entry/delete/:pk/
pub async fn delete_entry_confirm(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    urls: Urls,
    Path(path): Path<EntryPath>,
) -> Result<Response, HttpError> {
    let id = path.id()?;
    let entry = state.get_entry_handler().handle(GetEntryQuery { id }).await?;
    let action = urls.reverse(names::ENTRY_DELETE, &[("pk", id.to_string())])?;

    Ok(Html(pages::entry_delete(Some(&user), &entry, &action)).into_response())
}

/// POST /entry/delete/:pk/
pub async fn delete_entry(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    urls: Urls,
    Path(path): Path<EntryPath>,
) -> Result<Response, HttpError> {
    state
        .delete_entry_handler()
        .handle(DeleteEntryCommand { id: path.id()? })
        .await?;

    let location = urls.reverse(names::ENTRY_LIST, &[])?;
    Ok(Redirect::to(&location).into_response())
}
