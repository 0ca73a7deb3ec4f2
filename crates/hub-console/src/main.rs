#![allow(non_snake_case)]

#[cfg(feature = "ssr")]
mod config {
    use std::net::SocketAddr;

    use serde::Deserialize;

    #[derive(Deserialize, Clone, Debug, PartialEq)]
    #[serde(default)]
    pub struct Config {
        pub server: ServerConfig,
    }

    #[derive(Deserialize, Clone, Debug, PartialEq)]
    #[serde(default)]
    pub struct ServerConfig {
        pub bind: String,
        pub port: u16,
    }

    impl Default for Config {
        fn default() -> Self {
            Self {
                server: ServerConfig::default(),
            }
        }
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                bind: "127.0.0.1".into(),
                port: 3000,
            }
        }
    }

    impl ServerConfig {
        pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
            format!("{}:{}", self.bind, self.port).parse()
        }
    }

    pub fn load(path: &str) -> Config {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("failed to parse config {path}: {e}, using defaults");
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("failed to read config {path}: {e}, using defaults");
                Config::default()
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn missing_file_falls_back_to_defaults() {
            let config = load("/nonexistent/hub-console.toml");
            assert_eq!(config, Config::default());
        }

        #[test]
        fn partial_file_keeps_remaining_defaults() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            std::fs::write(&path, "[server]\nport = 8080\n").unwrap();

            let config = load(path.to_str().unwrap());
            assert_eq!(config.server.bind, "127.0.0.1");
            assert_eq!(config.server.port, 8080);
        }

        #[test]
        fn invalid_file_falls_back_to_defaults() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            std::fs::write(&path, "[server\nport = ").unwrap();

            assert_eq!(load(path.to_str().unwrap()), Config::default());
        }

        #[test]
        fn bad_bind_address_is_reported() {
            let server = ServerConfig {
                bind: "not-an-ip".into(),
                port: 3000,
            };
            assert!(server.socket_addr().is_err());
            assert_eq!(
                ServerConfig::default().socket_addr().unwrap().to_string(),
                "127.0.0.1:3000"
            );
        }
    }
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use hub_ui::{shell, App};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let configPath = if let Some(idx) = args.iter().position(|a| a == "--config") {
        args.get(idx + 1)
            .cloned()
            .unwrap_or_else(|| "config.example.toml".into())
    } else {
        "config.example.toml".into()
    };

    let appConfig = config::load(&configPath);
    tracing::info!(
        "loaded config from {configPath}: bind={}:{}",
        appConfig.server.bind,
        appConfig.server.port
    );

    let conf = get_configuration(None).expect("failed to load Leptos configuration");
    let leptosOptions = conf.leptos_options;

    let addr = match appConfig.server.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::warn!(
                "invalid bind address in {configPath}: {e}, using {}",
                leptosOptions.site_addr
            );
            leptosOptions.site_addr
        }
    };

    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptosOptions, routes, {
            let leptosOptions = leptosOptions.clone();
            move || shell(leptosOptions.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}

#[cfg(not(feature = "ssr"))]
fn main() {}
