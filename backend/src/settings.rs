//! Service configuration loaded via OrthoConfig.
//!
//! Values are layered from defaults, an optional configuration file,
//! `USERS_API_*` environment variables and command-line flags.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::doc::DocumentSource;
use crate::outbound::memory::InMemoryUserRepository;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4567;

/// Configuration values for the HTTP service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS_API")]
pub struct ServiceSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Declarative OpenAPI document (YAML or JSON) served instead of the
    /// generated one.
    pub openapi_file: Option<PathBuf>,
    /// Public base URL written into the document's `servers` list.
    pub server_url: Option<String>,
    /// Pre-populate the store with the two sample users.
    pub seed_users: Option<bool>,
}

impl ServiceSettings {
    /// Configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port, falling back to 4567.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Whether the store starts with the sample users; on unless disabled.
    pub fn seed_users(&self) -> bool {
        self.seed_users.unwrap_or(true)
    }

    /// Fresh store, seeded unless `seed_users` is off.
    pub fn user_repository(&self) -> InMemoryUserRepository {
        if self.seed_users() {
            InMemoryUserRepository::seeded()
        } else {
            InMemoryUserRepository::new()
        }
    }

    /// Document source implied by `openapi_file`.
    pub fn document_source(&self) -> DocumentSource {
        self.openapi_file
            .clone()
            .map_or(DocumentSource::Generated, DocumentSource::File)
    }

    /// Resolve the bind address.
    ///
    /// # Errors
    /// Returns an I/O error when the host does not resolve.
    pub fn socket_addr(&self) -> io::Result<SocketAddr> {
        (self.host(), self.port())
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    format!("host {} resolved to no addresses", self.host()),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for service configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    use crate::domain::ports::UserRepository;

    const VARS: [&str; 5] = [
        "USERS_API_HOST",
        "USERS_API_PORT",
        "USERS_API_OPENAPI_FILE",
        "USERS_API_SERVER_URL",
        "USERS_API_SEED_USERS",
    ];

    fn cleared_env() -> [(&'static str, Option<String>); 5] {
        VARS.map(|name| (name, None))
    }

    fn load_from_args<const N: usize>(args: [&str; N]) -> ServiceSettings {
        ServiceSettings::load_from_iter(args.map(OsString::from)).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(cleared_env());

        let settings = load_from_args(["users-backend"]);
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), DEFAULT_PORT);
        assert!(settings.seed_users());
        assert_eq!(settings.document_source(), DocumentSource::Generated);
        assert!(settings.server_url.is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("USERS_API_HOST", Some("127.0.0.1".to_owned())),
            ("USERS_API_PORT", Some("8081".to_owned())),
            (
                "USERS_API_OPENAPI_FILE",
                Some("/etc/users/openapi.yaml".to_owned()),
            ),
            (
                "USERS_API_SERVER_URL",
                Some("https://users.example.test".to_owned()),
            ),
            ("USERS_API_SEED_USERS", Some("false".to_owned())),
        ]);

        let settings = load_from_args(["users-backend"]);
        assert_eq!(settings.host(), "127.0.0.1");
        assert_eq!(settings.port(), 8081);
        assert!(!settings.seed_users());
        assert_eq!(
            settings.document_source(),
            DocumentSource::File(PathBuf::from("/etc/users/openapi.yaml"))
        );
        assert_eq!(
            settings.server_url.as_deref(),
            Some("https://users.example.test")
        );
    }

    fn listed_ids(repository: &InMemoryUserRepository) -> Vec<(i64, String)> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime builds");
        runtime
            .block_on(repository.list())
            .expect("list")
            .iter()
            .map(|user| (user.id().get(), user.name().to_owned()))
            .collect()
    }

    #[rstest]
    fn default_settings_build_a_seeded_store() {
        let _guard = lock_env(cleared_env());

        let settings = load_from_args(["users-backend"]);
        assert_eq!(
            listed_ids(&settings.user_repository()),
            [(1, "John Doe".to_owned()), (2, "Jane Smith".to_owned())]
        );
    }

    #[rstest]
    fn disabling_seed_users_builds_an_empty_store() {
        let _guard = lock_env([
            ("USERS_API_HOST", None),
            ("USERS_API_PORT", None),
            ("USERS_API_OPENAPI_FILE", None),
            ("USERS_API_SERVER_URL", None),
            ("USERS_API_SEED_USERS", Some("false".to_owned())),
        ]);

        let settings = load_from_args(["users-backend"]);
        assert!(listed_ids(&settings.user_repository()).is_empty());
    }

    #[rstest]
    fn command_line_overrides_environment() {
        let _guard = lock_env([
            ("USERS_API_HOST", None),
            ("USERS_API_PORT", Some("8081".to_owned())),
            ("USERS_API_OPENAPI_FILE", None),
            ("USERS_API_SERVER_URL", None),
            ("USERS_API_SEED_USERS", None),
        ]);

        let settings = load_from_args(["users-backend", "--port", "9090"]);
        assert_eq!(settings.port(), 9090);
    }

    #[rstest]
    fn socket_addr_combines_host_and_port() {
        let _guard = lock_env(cleared_env());

        let mut settings = load_from_args(["users-backend"]);
        settings.host = Some("127.0.0.1".to_owned());
        settings.port = Some(4000);
        let addr = settings.socket_addr().expect("loopback resolves");
        assert_eq!(addr, SocketAddr::from(([127, 0, 0, 1], 4000)));
    }
}
