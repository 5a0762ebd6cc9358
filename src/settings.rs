use rocket::figment::{Figment, Profile};
use rocket::figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

pub const DEFAULT_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CAPACITY: usize = 1_000_000;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Settings {
	pub address: IpAddr,
	pub port: u16,
	pub capacity: usize
}

impl Default for Settings {
	fn default() -> Settings {
		Settings {
			address: DEFAULT_ADDRESS,
			port: DEFAULT_PORT,
			capacity: DEFAULT_CAPACITY
		}
	}
}

impl Settings {
	/// Rocket's usual configuration sources, with our defaults sitting between
	/// Rocket's built-in defaults and `Rocket.toml` / `ROCKET_*` variables.
	pub fn figment() -> Figment {
		Figment::from(rocket::Config::default())
			.merge(Serialized::defaults(Settings::default()))
			.merge(Toml::file(Env::var_or("ROCKET_CONFIG", "Rocket.toml")).nested())
			.merge(Env::prefixed("ROCKET_").ignore(&["PROFILE"]).global())
			.select(Profile::from_env_or("ROCKET_PROFILE", rocket::Config::DEFAULT_PROFILE))
	}

	pub fn from_figment(figment: &Figment) -> Result<Settings, rocket::figment::Error> {
		figment.extract()
	}
}
