use log::{debug, warn};
use rocket::get;
use rocket::response::content::RawHtml;
use rocket::response::status::BadRequest;
use rocket::serde::json::Json;
use rocket::State;
use std::sync::Arc;

use super::util::parse_index;
use crate::bit_vector::BitVector;

#[get("/")]
pub async fn index_page() -> RawHtml<&'static str> {
	RawHtml(include_str!("index.html"))
}

#[get("/toggle?<index>")]
pub async fn toggle(checkboxes: &State<Arc<BitVector>>, index: Option<&str>) -> Result<String, BadRequest<String>> {
	let idx = parse_index(index, checkboxes.capacity()).map_err(|err| {
		warn!("rejected toggle: {}", err);
		BadRequest(err.to_string())
	})?;

	let checked = checkboxes.toggle(idx).map_err(|err| {
		warn!("rejected toggle: {}", err);
		BadRequest(err.to_string())
	})?;
	debug!("checkbox {} is now {}", idx, if checked { "checked" } else { "unchecked" });
	Ok(format!("Toggled checkbox {}", idx))
}

#[get("/count")]
pub async fn count(checkboxes: &State<Arc<BitVector>>) -> String {
	checkboxes.count_checked().to_string()
}

#[get("/state")]
pub async fn state(checkboxes: &State<Arc<BitVector>>) -> Json<Vec<bool>> {
	Json(checkboxes.snapshot())
}
