use actix_web::{http::header::ContentType, HttpResponse};
use askama::Template;
use tracing::error;

use crate::structs::{riot_champion_struct::RiotChampionData, riot_items_struct::RiotItem};

pub const NOT_FOUND_BODY: &str = "Not Found";

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub champs: Vec<RiotChampionData>,
    pub items: Vec<RiotItem>,
}

#[derive(Template)]
#[template(path = "item.html")]
pub struct ItemPage {
    pub item: RiotItem,
}

#[derive(Template)]
#[template(path = "champ.html")]
pub struct ChampPage {
    pub champion: RiotChampionData,
}

/// The helpers templates may call. Formula errors render as an empty cell.
mod filters {
    use std::{borrow::Borrow, fmt::Display};

    use tracing::warn;

    use crate::{error::FormulaError, services::formula_service};

    pub fn add<T: Borrow<usize>>(a: T, b: usize) -> ::askama::Result<usize> {
        Ok(formula_service::add(*a.borrow(), b))
    }

    pub fn attack_speed_at_level_zero<T: Borrow<f64>>(offset: T) -> ::askama::Result<String> {
        Ok(or_empty(formula_service::attack_speed_at_level_zero(
            *offset.borrow(),
        )))
    }

    pub fn attack_speed_growth_per_level<T: Borrow<f64>>(
        per_level: T,
    ) -> ::askama::Result<String> {
        Ok(or_empty(formula_service::attack_speed_growth_per_level(
            *per_level.borrow(),
        )))
    }

    pub fn space_to_underscore<T: Display>(text: T) -> ::askama::Result<String> {
        Ok(formula_service::space_to_underscore(&text.to_string()))
    }

    fn or_empty(result: Result<String, FormulaError>) -> String {
        result.unwrap_or_else(|e| {
            warn!(error = %e, "formula helper failed, rendering empty");
            String::new()
        })
    }
}

pub fn render_page<T: Template>(page: &T) -> HttpResponse {
    match page.render() {
        Ok(html) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(html),
        Err(e) => {
            error!(error = %e, "template rendering failed");
            HttpResponse::InternalServerError()
                .content_type(ContentType::plaintext())
                .body("Internal Server Error")
        }
    }
}

pub fn not_found() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(NOT_FOUND_BODY)
}
