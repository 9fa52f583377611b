//! Error types for the healthcheck server.
//! Used by: config, server, main.

use std::net::{AddrParseError, SocketAddr};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),

    #[error("invalid listen address {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn bind_error_names_the_address() {
        let err = Error::Bind {
            addr: "127.0.0.1:8080".parse().unwrap(),
            source: std::io::Error::new(ErrorKind::AddrInUse, "address in use"),
        };
        assert_eq!(err.to_string(), "failed to bind 127.0.0.1:8080: address in use");
    }

    #[test]
    fn io_error_converts_to_serve() {
        let err: Error = std::io::Error::new(ErrorKind::Other, "boom").into();
        assert!(matches!(err, Error::Serve(_)));
    }

    #[test]
    fn invalid_addr_quotes_the_value() {
        let source = "nope".parse::<SocketAddr>().unwrap_err();
        let err = Error::InvalidAddr { value: "nope".into(), source };
        assert!(err.to_string().starts_with("invalid listen address \"nope\""));
    }
}
