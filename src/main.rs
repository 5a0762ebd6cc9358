// checkboxes -- A million checkboxes, served over HTTP.
// Copyright (C) 2020 the checkboxes authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License verion 3 as
// published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

mod bit_vector;
mod rest_api;
mod settings;

use bit_vector::BitVector;
use log::{error, info};
use settings::Settings;
use std::sync::Arc;


#[rocket::main]
async fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let figment = Settings::figment();
	let settings = match Settings::from_figment(&figment) {
		Ok(settings) => settings,
		Err(e) => {
			error!("invalid configuration: {}", e);
			std::process::exit(1);
		}
	};
	info!("starting with {} checkboxes on {}:{}", settings.capacity, settings.address, settings.port);

	let checkboxes = Arc::new(BitVector::new(settings.capacity));
	if let Err(e) = rest_api::launch_server(checkboxes, figment).await {
		error!("server failed: {}", e);
		std::process::exit(1);
	}
}
