// src/presentation/http/controllers/polls.rs
use crate::application::{
    commands::votes::{CastVoteCommand, NO_CHOICE_SELECTED, VoteOutcome},
    queries::questions::{GetQuestionQuery, GetQuestionResultsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::templates;
use axum::{
    Extension,
    extract::{Form, Path},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tera::Context;

#[derive(Debug, Deserialize)]
pub struct VoteForm {
    #[serde(default)]
    pub choice: Option<i64>,
}

pub async fn index(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    let questions = state
        .services
        .question_queries
        .list_questions()
        .await
        .into_http()?;

    let mut context = Context::new();
    context.insert("latest_question_list", &questions);
    templates::render("index.html", &context)
        .into_http()
        .map(Html)
}

pub async fn detail(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Html<String>> {
    let question = state
        .services
        .question_queries
        .get_question(GetQuestionQuery { id })
        .await
        .into_http()?;

    let mut context = Context::new();
    context.insert("question", &question);
    context.insert("error_message", &Option::<&str>::None);
    templates::render("detail.html", &context)
        .into_http()
        .map(Html)
}

pub async fn results(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Html<String>> {
    let question = state
        .services
        .question_queries
        .get_question_results(GetQuestionResultsQuery { id })
        .await
        .into_http()?;

    let mut context = Context::new();
    context.insert("question", &question);
    templates::render("results.html", &context)
        .into_http()
        .map(Html)
}

pub async fn vote(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Form(form): Form<VoteForm>,
) -> HttpResult<Response> {
    let outcome = state
        .services
        .vote_commands
        .cast_vote(CastVoteCommand {
            question_id: id,
            choice_id: form.choice,
        })
        .await
        .into_http()?;

    match outcome {
        VoteOutcome::Recorded => Ok(Redirect::to(&format!("/polls/{id}/results")).into_response()),
        VoteOutcome::NotSelected => {
            // Same page the voter came from, with the error message on top.
            let question = state
                .services
                .question_queries
                .get_question(GetQuestionQuery { id })
                .await
                .into_http()?;

            let mut context = Context::new();
            context.insert("question", &question);
            context.insert("error_message", NO_CHOICE_SELECTED);
            templates::render("detail.html", &context)
                .into_http()
                .map(|html| Html(html).into_response())
        }
    }
}
