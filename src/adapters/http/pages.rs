//! Server-rendered HTML pages.
//!
//! Pages are plain strings assembled from escaped values. Any page that
//! links elsewhere takes the request's `Urls` so locale-prefixed requests
//! keep their prefix.

use std::fmt::Write as _;

use crate::application::handlers::{FurtherReadingView, WorksheetDetail};
use crate::application::html::escape;
use crate::domain::changes::{Entry, EntryForm};
use crate::domain::foundation::{AuthenticatedUser, FormErrors};
use crate::domain::lesson::{FurtherReadingForm, Project, WorksheetContext};
use crate::ports::EntryPage;

use super::urls::{names, ReverseError, Urls};

const PAGE_CSS: &str = "body{font-family:sans-serif;margin:2em auto;max-width:60em}\
.errorlist{color:#a00;margin:0;padding-left:1em}\
label{display:block;margin-top:1em}\
input[type=text],input[type=url],textarea{width:100%}";

/// Wraps a page body in the site layout.
pub fn layout(title: &str, user: Option<&AuthenticatedUser>, body: &str) -> String {
    let account = match user {
        Some(user) => format!(
            "<p class=\"account\">Signed in as {}</p>",
            escape(user.display_name_or_email())
        ),
        None => String::new(),
    };
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>{css}</style>\n</head>\n<body>\n{account}\n{body}\n</body>\n</html>\n",
        title = escape(title),
        css = PAGE_CSS,
        account = account,
        body = body,
    )
}

fn field_errors(errors: &FormErrors, field: &str) -> String {
    let messages = errors.for_field(field);
    if messages.is_empty() {
        return String::new();
    }
    let mut html = String::from("<ul class=\"errorlist\">");
    for message in messages {
        let _ = write!(html, "<li>{}</li>", escape(message));
    }
    html.push_str("</ul>");
    html
}

fn text_input(name: &str, label: &str, kind: &str, value: &str, errors: &FormErrors) -> String {
    format!(
        "<label for=\"id_{name}\">{label}</label>{errors}\
         <input type=\"{kind}\" name=\"{name}\" id=\"id_{name}\" value=\"{value}\">",
        name = name,
        label = escape(label),
        errors = field_errors(errors, name),
        kind = kind,
        value = escape(value),
    )
}

fn textarea(name: &str, label: &str, value: &str, errors: &FormErrors) -> String {
    format!(
        "<label for=\"id_{name}\">{label}</label>{errors}\
         <textarea name=\"{name}\" id=\"id_{name}\" rows=\"6\">{value}</textarea>",
        name = name,
        label = escape(label),
        errors = field_errors(errors, name),
        value = escape(value),
    )
}

fn post_form(action: &str, fields: &str, submit: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{}\">{}<p><button type=\"submit\">{}</button></p></form>",
        escape(action),
        fields,
        escape(submit)
    )
}

// ════════════════════════════════════════════════════════════════════════════════
// Lessons
// ════════════════════════════════════════════════════════════════════════════════

pub fn home(
    urls: &Urls,
    user: Option<&AuthenticatedUser>,
    projects: &[Project],
) -> Result<String, ReverseError> {
    let mut body = String::from("<h1>Projects</h1>\n");
    if projects.is_empty() {
        body.push_str("<p>No projects yet.</p>\n");
    } else {
        body.push_str("<ul class=\"projects\">\n");
        for project in projects {
            let report = urls.reverse(
                names::INVALID_FURTHER_READING,
                &[("project_slug", project.slug.to_string())],
            )?;
            let _ = writeln!(
                body,
                "<li>{} <a href=\"{}\">invalid further reading</a></li>",
                escape(&project.name),
                escape(&report)
            );
        }
        body.push_str("</ul>\n");
    }
    let _ = writeln!(
        body,
        "<p><a href=\"{}\">Changelog</a></p>",
        escape(&urls.reverse(names::ENTRY_LIST, &[])?)
    );
    Ok(layout("Projects", user, &body))
}

fn further_reading_params(
    worksheet: &WorksheetContext,
) -> [(&'static str, String); 3] {
    [
        ("project_slug", worksheet.project_slug.to_string()),
        ("section_slug", worksheet.section_slug.to_string()),
        ("worksheet", worksheet.worksheet.slug.to_string()),
    ]
}

/// URL of a further-reading action on `worksheet`.
pub fn further_reading_url(
    urls: &Urls,
    name: &str,
    worksheet: &WorksheetContext,
    pk: Option<String>,
) -> Result<String, ReverseError> {
    let mut params = further_reading_params(worksheet).to_vec();
    if let Some(pk) = pk {
        params.push(("pk", pk));
    }
    urls.reverse(name, &params)
}

pub fn worksheet_detail(
    urls: &Urls,
    user: Option<&AuthenticatedUser>,
    detail: &WorksheetDetail,
) -> Result<String, ReverseError> {
    let worksheet = &detail.worksheet;
    let mut body = format!(
        "<p>{}</p>\n<h1>{}</h1>\n<h2>Further reading</h2>\n",
        escape(&worksheet.project_name),
        escape(&worksheet.worksheet.module)
    );

    if detail.further_reading.is_empty() {
        body.push_str("<p>No further reading.</p>\n");
    } else {
        body.push_str("<ul class=\"further-reading\">\n");
        for item in &detail.further_reading {
            let pk = Some(item.id.to_string());
            let edit = further_reading_url(urls, names::FURTHER_READING_UPDATE, worksheet, pk.clone())?;
            let delete = further_reading_url(urls, names::FURTHER_READING_DELETE, worksheet, pk)?;
            let _ = writeln!(
                body,
                "<li><a href=\"{link}\">{text}</a> \
                 <a class=\"edit\" href=\"{edit}\">edit</a> \
                 <a class=\"delete\" href=\"{delete}\">delete</a></li>",
                link = escape(&item.link),
                text = escape(&item.text),
                edit = escape(&edit),
                delete = escape(&delete),
            );
        }
        body.push_str("</ul>\n");
    }

    let create = further_reading_url(urls, names::FURTHER_READING_CREATE, worksheet, None)?;
    let _ = writeln!(
        body,
        "<p><a href=\"{}\">Add further reading</a></p>",
        escape(&create)
    );
    Ok(layout(&worksheet.worksheet.module, user, &body))
}

pub fn further_reading_form(
    user: Option<&AuthenticatedUser>,
    worksheet: &WorksheetContext,
    heading: &str,
    action: &str,
    form: &FurtherReadingForm,
    errors: &FormErrors,
) -> String {
    let fields = format!(
        "{}{}",
        textarea("text", "Text", &form.text, errors),
        text_input("link", "Link", "url", &form.link, errors)
    );
    let body = format!(
        "<p>{}</p>\n<h1>{}</h1>\n{}\n",
        escape(&worksheet.worksheet.module),
        escape(heading),
        post_form(action, &fields, "Save")
    );
    layout(heading, user, &body)
}

pub fn further_reading_delete(
    user: Option<&AuthenticatedUser>,
    view: &FurtherReadingView,
    action: &str,
) -> String {
    let body = format!(
        "<h1>Delete further reading</h1>\n\
         <p>Are you sure you want to delete \"{}\" from {}?</p>\n{}\n",
        escape(&view.item.text),
        escape(&view.worksheet.worksheet.module),
        post_form(action, "", "Delete")
    );
    layout("Delete further reading", user, &body)
}

// ════════════════════════════════════════════════════════════════════════════════
// Changelog
// ════════════════════════════════════════════════════════════════════════════════

pub fn entry_list(
    urls: &Urls,
    user: Option<&AuthenticatedUser>,
    page: &EntryPage,
) -> Result<String, ReverseError> {
    let list_url = urls.reverse(names::ENTRY_LIST, &[])?;
    let mut body = String::from("<h1>Changelog</h1>\n");

    if page.items.is_empty() {
        body.push_str("<p>No entries yet.</p>\n");
    } else {
        body.push_str("<ul class=\"entries\">\n");
        for entry in &page.items {
            let detail = urls.reverse(names::ENTRY_DETAIL, &[("pk", entry.id.to_string())])?;
            let _ = writeln!(
                body,
                "<li><a href=\"{}\">{}</a> <small>{}</small></li>",
                escape(&detail),
                escape(&entry.title),
                escape(&entry.created_at.display_date())
            );
        }
        body.push_str("</ul>\n");
    }

    body.push_str("<p class=\"pagination\">");
    if page.has_previous() {
        let _ = write!(
            body,
            "<a rel=\"prev\" href=\"{}?page={}\">Previous</a> ",
            escape(&list_url),
            page.page - 1
        );
    }
    let _ = write!(body, "Page {}", page.page);
    if page.has_next() {
        let _ = write!(
            body,
            " <a rel=\"next\" href=\"{}?page={}\">Next</a>",
            escape(&list_url),
            page.page + 1
        );
    }
    body.push_str("</p>\n");

    let _ = writeln!(
        body,
        "<p><a href=\"{}\">New entry</a></p>",
        escape(&urls.reverse(names::ENTRY_CREATE, &[])?)
    );
    Ok(layout("Changelog", user, &body))
}

pub fn entry_detail(
    urls: &Urls,
    user: Option<&AuthenticatedUser>,
    entry: &Entry,
) -> Result<String, ReverseError> {
    let pk = [("pk", entry.id.to_string())];
    let video = match &entry.video {
        Some(video) => format!(
            "<p class=\"video\"><a href=\"{0}\">{0}</a></p>\n",
            escape(video)
        ),
        None => String::new(),
    };
    let body = format!(
        "<h1>{title}</h1>\n<p><small>{date}</small></p>\n<div class=\"description\">{description}</div>\n\
         {video}<p><a href=\"{edit}\">edit</a> <a href=\"{delete}\">delete</a> \
         <a href=\"{list}\">all entries</a></p>\n",
        title = escape(&entry.title),
        date = escape(&entry.created_at.display_date()),
        description = escape(&entry.description),
        video = video,
        edit = escape(&urls.reverse(names::ENTRY_UPDATE, &pk)?),
        delete = escape(&urls.reverse(names::ENTRY_DELETE, &pk)?),
        list = escape(&urls.reverse(names::ENTRY_LIST, &[])?),
    );
    Ok(layout(&entry.title, user, &body))
}

pub fn entry_form(
    user: Option<&AuthenticatedUser>,
    heading: &str,
    action: &str,
    form: &EntryForm,
    errors: &FormErrors,
) -> String {
    let fields = format!(
        "{}{}{}",
        text_input("title", "Title", "text", &form.title, errors),
        textarea("description", "Description", &form.description, errors),
        text_input("video", "Video", "url", &form.video, errors)
    );
    let body = format!(
        "<h1>{}</h1>\n{}\n",
        escape(heading),
        post_form(action, &fields, "Save")
    );
    layout(heading, user, &body)
}

pub fn entry_delete(user: Option<&AuthenticatedUser>, entry: &Entry, action: &str) -> String {
    let body = format!(
        "<h1>Delete entry</h1>\n<p>Are you sure you want to delete \"{}\"?</p>\n{}\n",
        escape(&entry.title),
        post_form(action, "", "Delete")
    );
    layout("Delete entry", user, &body)
}

// ════════════════════════════════════════════════════════════════════════════════
// Errors
// ════════════════════════════════════════════════════════════════════════════════

pub fn not_found() -> String {
    layout(
        "Page not found",
        None,
        "<h1>Page not found</h1>\n<p>The page you requested does not exist.</p>\n",
    )
}

pub fn bad_request(message: &str) -> String {
    let body = format!("<h1>Bad request</h1>\n<p>{}</p>\n", escape(message));
    layout("Bad request", None, &body)
}

pub fn service_unavailable() -> String {
    layout(
        "Service unavailable",
        None,
        "<h1>Service unavailable</h1>\n<p>Please try again shortly.</p>\n",
    )
}

pub fn server_error(method: &str, path: &str) -> String {
    let body = format!(
        "<h1>Server error</h1>\n\
         <p>Something went wrong while handling your request.</p>\n\
         <p class=\"request\"><code>{} {}</code></p>\n",
        escape(method),
        escape(path)
    );
    layout("Server error", None, &body)
}
