use std::{env, net::SocketAddr};

use crate::{error::AppError, services::trips::Latency};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub latency: Latency,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let listen_addr: SocketAddr = env::var("TRIPBOARD_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|err| AppError::Config(format!("invalid TRIPBOARD_LISTEN_ADDR: {err}")))?;

        let latency = match env::var("TRIPBOARD_LATENCY").ok().as_deref() {
            None | Some("nominal") => Latency::nominal(),
            Some("none") => Latency::none(),
            Some(other) => {
                return Err(AppError::Config(format!(
                    "invalid TRIPBOARD_LATENCY: {other} (expected 'nominal' or 'none')"
                )))
            }
        };

        Ok(Self {
            listen_addr,
            latency,
        })
    }
}
