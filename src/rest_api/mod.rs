mod util;
mod get;

use get::*;

use crate::bit_vector::BitVector;
use rocket::figment::Figment;
use rocket::{catch, catchers, routes, Build, Rocket};
use std::sync::Arc;

#[catch(404)]
fn not_found(req: &rocket::Request) -> String {
	format!("{} not found", req.uri().path())
}

pub fn build(checkboxes: Arc<BitVector>, figment: Figment) -> Rocket<Build> {
	rocket::custom(figment)
		.manage(checkboxes)
		.mount("/", routes![
			index_page,
			toggle,
			count,
			state,
		])
		.register("/", catchers![not_found])
}

pub async fn launch_server(checkboxes: Arc<BitVector>, figment: Figment) -> Result<(), rocket::Error> {
	build(checkboxes, figment).launch().await?;
	Ok(())
}
