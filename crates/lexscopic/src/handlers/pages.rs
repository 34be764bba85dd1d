use askama::Template;
use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use lexscopic_core::events::{group_into_sections, DEFAULT_END_TIME, DEFAULT_START_TIME};
use lexscopic_core::storage::RepositoryError;

use crate::{
    handlers::AppError,
    models::{ListEventsQuery, SubmitEvent},
    state::AppState,
    views::{date_options, price_options, tag_chips, ListingView, SelectOption, TagChip},
};

/// Template wrapper that converts Askama templates into HTML responses.
struct HtmlTemplate<T>(T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {err}"),
            )
                .into_response(),
        }
    }
}

/// Listing page with filters, grouped results and the submission form.
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    query: String,
    picked_date: String,
    filtered: bool,
    visible_count: usize,
    price_options: Vec<SelectOption>,
    date_options: Vec<SelectOption>,
    tag_chips: Vec<TagChip>,
    listing: ListingView,
    today: String,
    default_start_time: &'static str,
    default_end_time: &'static str,
}

/// Handler for the listing page (GET /).
pub async fn index(
    State(state): State<AppState>,
    query: Result<Query<ListEventsQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let today = state.today();
    let criteria = query.into_criteria(today)?;

    let visible = state.visible_events(&criteria).await?;
    let sections = group_into_sections(&visible);

    Ok(HtmlTemplate(IndexTemplate {
        query: criteria.query.clone(),
        picked_date: criteria
            .date_mode
            .picked_date()
            .unwrap_or(today)
            .format("%Y-%m-%d")
            .to_string(),
        filtered: criteria != Default::default(),
        visible_count: visible.len(),
        price_options: price_options(&criteria),
        date_options: date_options(&criteria),
        tag_chips: tag_chips(&criteria),
        listing: ListingView::new(&sections, &visible, state.zone(), today),
        today: today.format("%Y-%m-%d").to_string(),
        default_start_time: DEFAULT_START_TIME,
        default_end_time: DEFAULT_END_TIME,
    }))
}

/// Handler for the submission form (POST /events).
///
/// Prepends the event and sends the browser back to the listing.
pub async fn submit_event_form(
    State(state): State<AppState>,
    form: Result<Form<SubmitEvent>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Form(payload) = form?;

    state.submit(payload.into_draft(state.today())).await?;

    Ok(Redirect::to("/"))
}

/// Redirects to the "Add to Google Calendar" link for an event
/// (GET /events/{id}/calendar).
pub async fn calendar_redirect(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let record = state
        .event_repo
        .get_event(&id)
        .await?
        .ok_or(RepositoryError::NotFound {
            entity_type: "Event",
            id,
        })?;

    let link = state.zone().calendar_link(&record)?;

    Ok(Redirect::to(&link))
}
