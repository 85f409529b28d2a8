//! HTTP handlers for worksheet, further reading and report pages.

use axum::{
    extract::{Form, Path, Query, State},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};

use crate::application::handlers::{
    CreateFurtherReadingCommand, DeleteFurtherReadingCommand, GetFurtherReadingQuery,
    GetInvalidLinksQuery, GetWorksheetQuery, RenderInvalidLinksCommand,
    UpdateFurtherReadingCommand,
};
use crate::domain::foundation::{AuthenticatedUser, FormErrors, Slug};
use crate::domain::lesson::{
    FurtherReadingForm, InvalidLinkReport, LessonError, WorksheetContext, WorksheetLocator,
};

use super::super::errors::HttpError;
use super::super::middleware::{OptionalAuth, RequireAuth};
use super::super::pages;
use super::super::state::AppState;
use super::super::urls::{names, Urls};
use super::dto::{FurtherReadingPath, PrintQuery, ProjectPath, WorksheetDetailPath, WorksheetPath};

const CREATE_HEADING: &str = "Add further reading item";
const UPDATE_HEADING: &str = "Update further reading item";

fn worksheet_redirect(urls: &Urls, worksheet: &WorksheetContext) -> Result<Response, HttpError> {
    let location = urls.reverse(names::WORKSHEET_DETAIL, &worksheet.detail_params())?;
    Ok(Redirect::to(&location).into_response())
}

async fn locate(state: &AppState, locator: WorksheetLocator) -> Result<WorksheetContext, HttpError> {
    Ok(state.locate_worksheet_handler().handle(locator).await?)
}

fn render_form(
    user: &AuthenticatedUser,
    worksheet: &WorksheetContext,
    heading: &str,
    action: &str,
    form: &FurtherReadingForm,
    errors: &FormErrors,
) -> Response {
    Html(pages::further_reading_form(
        Some(user),
        worksheet,
        heading,
        action,
        form,
        errors,
    ))
    .into_response()
}

// ════════════════════════════════════════════════════════════════════════════════
// Worksheet
// ════════════════════════════════════════════════════════════════════════════════

/// GET /:project_slug/lesson/:section_slug/worksheet/:worksheet/
pub async fn worksheet_detail(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    urls: Urls,
    Path(path): Path<WorksheetDetailPath>,
) -> Result<Response, HttpError> {
    let id = path.worksheet_id()?;
    let detail = state
        .get_worksheet_handler()
        .handle(GetWorksheetQuery {
            project_slug: path.project_slug,
            section_slug: path.section_slug,
            id,
        })
        .await?;

    Ok(Html(pages::worksheet_detail(&urls, user.as_ref(), &detail)?).into_response())
}

// ════════════════════════════════════════════════════════════════════════════════
// Further reading
// ════════════════════════════════════════════════════════════════════════════════

/// GET .../further-reading/create/
pub async fn create_further_reading_form(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    urls: Urls,
    Path(path): Path<WorksheetPath>,
) -> Result<Response, HttpError> {
    let worksheet = locate(&state, path.locator()).await?;
    let action = pages::further_reading_url(&urls, names::FURTHER_READING_CREATE, &worksheet, None)?;

    Ok(render_form(
        &user,
        &worksheet,
        CREATE_HEADING,
        &action,
        &FurtherReadingForm::default(),
        &FormErrors::new(),
    ))
}

/// POST .../further-reading/create/
pub async fn create_further_reading(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    urls: Urls,
    Path(path): Path<WorksheetPath>,
    Form(form): Form<FurtherReadingForm>,
) -> Result<Response, HttpError> {
    let locator = path.locator();
    let result = state
        .create_further_reading_handler()
        .handle(CreateFurtherReadingCommand {
            locator: locator.clone(),
            form: form.clone(),
        })
        .await;

    match result {
        Ok(created) => worksheet_redirect(&urls, &created.worksheet),
        Err(LessonError::ValidationFailed(errors)) => {
            let worksheet = locate(&state, locator).await?;
            let action =
                pages::further_reading_url(&urls, names::FURTHER_READING_CREATE, &worksheet, None)?;
            Ok(render_form(&user, &worksheet, CREATE_HEADING, &action, &form, &errors))
        }
        Err(e) => Err(e.into()),
    }
}

/// GET .../further-reading/:pk/update/
pub async fn update_further_reading_form(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    urls: Urls,
    Path(path): Path<FurtherReadingPath>,
) -> Result<Response, HttpError> {
    let id = path.id()?;
    let worksheet = locate(&state, path.locator()).await?;
    let view = state
        .get_further_reading_handler()
        .handle(GetFurtherReadingQuery { id })
        .await?;
    let action = pages::further_reading_url(
        &urls,
        names::FURTHER_READING_UPDATE,
        &worksheet,
        Some(id.to_string()),
    )?;

    Ok(render_form(
        &user,
        &worksheet,
        UPDATE_HEADING,
        &action,
        &FurtherReadingForm::from(&view.item),
        &FormErrors::new(),
    ))
}

/// POST .../further-reading/:pk/update/
pub async fn update_further_reading(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    urls: Urls,
    Path(path): Path<FurtherReadingPath>,
    Form(form): Form<FurtherReadingForm>,
) -> Result<Response, HttpError> {
    let id = path.id()?;
    let locator = path.locator();
    let result = state
        .update_further_reading_handler()
        .handle(UpdateFurtherReadingCommand {
            id,
            locator: locator.clone(),
            form: form.clone(),
        })
        .await;

    match result {
        Ok(updated) => worksheet_redirect(&urls, &updated.worksheet),
        Err(LessonError::ValidationFailed(errors)) => {
            let worksheet = locate(&state, locator).await?;
            let action = pages::further_reading_url(
                &urls,
                names::FURTHER_READING_UPDATE,
                &worksheet,
                Some(id.to_string()),
            )?;
            Ok(render_form(&user, &worksheet, UPDATE_HEADING, &action, &form, &errors))
        }
        Err(e) => Err(e.into()),
    }
}

/// GET .../further-reading/:pk/delete/
pub async fn delete_further_reading_confirm(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    urls: Urls,
    Path(path): Path<FurtherReadingPath>,
) -> Result<Response, HttpError> {
    let id = path.id()?;
    let view = state
        .get_further_reading_handler()
        .handle(GetFurtherReadingQuery { id })
        .await?;
    let action = urls.reverse(
        names::FURTHER_READING_DELETE,
        &[
            ("project_slug", path.project_slug),
            ("section_slug", path.section_slug),
            ("worksheet", path.worksheet),
            ("pk", path.pk),
        ],
    )?;

    Ok(Html(pages::further_reading_delete(Some(&user), &view, &action)).into_response())
}

/// POST .../further-reading/:pk/delete/
pub async fn delete_further_reading(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    urls: Urls,
    Path(path): Path<FurtherReadingPath>,
) -> Result<Response, HttpError> {
    let id = path.id()?;
    let deleted = state
        .delete_further_reading_handler()
        .handle(DeleteFurtherReadingCommand { id })
        .await?;

    worksheet_redirect(&urls, &deleted.worksheet)
}

// ════════════════════════════════════════════════════════════════════════════════
// Invalid link report
// ════════════════════════════════════════════════════════════════════════════════

/// GET /:project_slug/invalid-further-reading/
pub async fn invalid_further_reading(
    State(state): State<AppState>,
    Path(path): Path<ProjectPath>,
) -> Result<Json<InvalidLinkReport>, HttpError> {
    let report = state
        .get_invalid_links_handler()
        .handle(GetInvalidLinksQuery {
            project_slug: Some(path.project_slug),
        })
        .await?;
    Ok(Json(report))
}

/// GET /:project_slug/print-invalid-further-reading/?data=<json>&download=<0|1>
pub async fn print_invalid_further_reading(
    State(state): State<AppState>,
    Path(path): Path<ProjectPath>,
    Query(query): Query<PrintQuery>,
) -> Result<Response, HttpError> {
    // The slug lands verbatim in a quoted header parameter.
    let project_slug = Slug::new(path.project_slug).map_err(|_| HttpError::NotFound)?;
    let raw = query
        .data
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| HttpError::BadRequest("Missing report data.".to_string()))?;
    let report: InvalidLinkReport = serde_json::from_str(raw)
        .map_err(|e| HttpError::BadRequest(format!("Invalid report data: {}", e)))?;

    let rendered = state
        .render_invalid_links_handler()
        .handle(RenderInvalidLinksCommand {
            project_slug: project_slug.to_string(),
            report,
        })
        .await?;

    let disposition = format!(
        "{}; filename=\"{}\"",
        if query.wants_download() { "attachment" } else { "inline" },
        rendered.filename
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        rendered.bytes,
    )
        .into_response())
}
