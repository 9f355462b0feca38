//! Node endpoint strings of the form `{grpc|rest}[+http|+https]://host[:port][/path]`.
//!
//! Ports default to [`DEFAULT_SECURE_PORT`] for `+https` and to
//! [`DEFAULT_INSECURE_PORT`] otherwise, for both protocols.

use url::Url;

use crate::{
    definitions::{DEFAULT_INSECURE_PORT, DEFAULT_SECURE_PORT},
    errors::{FeeShareError, FeeShareResult},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Protocol {
    Grpc,
    Rest,
}

/// Endpoint descriptor, built by [`parse_url`] and read only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedUrl {
    protocol: Protocol,
    secure: bool,
    hostname: String,
    port: u16,
    host_and_port: String,
}

impl ParsedUrl {
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn secure(&self) -> bool {
        self.secure
    }

    /// Host followed by the path of the url, if any (`rpc.cosmos.directory/juno`).
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// `{hostname}:{port}`.
    pub fn host_and_port(&self) -> &str {
        &self.host_and_port
    }

    fn scheme(&self) -> &'static str {
        if self.secure {
            "https"
        } else {
            "http"
        }
    }

    fn default_port(&self) -> u16 {
        if self.secure {
            DEFAULT_SECURE_PORT
        } else {
            DEFAULT_INSECURE_PORT
        }
    }

    fn split_host(&self) -> (&str, &str) {
        match self.hostname.find('/') {
            Some(idx) => self.hostname.split_at(idx),
            None => (self.hostname.as_str(), ""),
        }
    }

    /// Host without the path component.
    pub fn host(&self) -> &str {
        self.split_host().0
    }

    /// Path component, empty or starting with `/`.
    pub fn path(&self) -> &str {
        self.split_host().1
    }

    /// Base url for REST requests, the port is omitted when it matches the scheme default.
    pub fn rest_url(&self) -> String {
        let (host, path) = self.split_host();
        if self.port == self.default_port() {
            format!("{}://{host}{path}", self.scheme())
        } else {
            format!("{}://{host}:{}{path}", self.scheme(), self.port)
        }
    }

    /// Uri used to dial a gRPC channel.
    pub fn grpc_uri(&self) -> String {
        let (host, path) = self.split_host();
        format!("{}://{host}:{}{path}", self.scheme(), self.port)
    }
}

pub fn parse_url(url: &str) -> FeeShareResult<ParsedUrl> {
    let parsed = Url::parse(url).map_err(|err| FeeShareError::invalid_url(url, err.to_string()))?;

    // `Url` lower-cases the scheme
    let (protocol, security) = match parsed.scheme().split_once('+') {
        Some((protocol, security)) => (protocol, Some(security)),
        None => (parsed.scheme(), None),
    };

    let protocol = match protocol {
        "grpc" => Protocol::Grpc,
        "rest" => Protocol::Rest,
        other => {
            return Err(FeeShareError::invalid_url(
                url,
                format!("unsupported protocol `{other}`"),
            ))
        }
    };

    let secure = match security {
        Some("https") => true,
        Some("http") | None => false,
        Some(other) => {
            return Err(FeeShareError::invalid_url(
                url,
                format!("unsupported security `{other}`"),
            ))
        }
    };

    let host = parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .ok_or_else(|| FeeShareError::invalid_url(url, "missing host"))?;

    let port = parsed.port().unwrap_or(if secure {
        DEFAULT_SECURE_PORT
    } else {
        DEFAULT_INSECURE_PORT
    });

    let hostname = format!("{host}{}", parsed.path().trim_end_matches('/'));
    let host_and_port = format!("{hostname}:{port}");

    Ok(ParsedUrl {
        protocol,
        secure,
        hostname,
        port,
        host_and_port,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_secure_grpc_with_path() {
        let parsed = parse_url("grpc+https://rpc.cosmos.directory/juno").unwrap();

        assert_eq!(parsed.protocol(), Protocol::Grpc);
        assert!(parsed.secure());
        assert_eq!(parsed.hostname(), "rpc.cosmos.directory/juno");
        assert_eq!(parsed.port(), 443);
        assert_eq!(parsed.host_and_port(), "rpc.cosmos.directory/juno:443");
        assert_eq!(parsed.host(), "rpc.cosmos.directory");
        assert_eq!(parsed.path(), "/juno");
    }

    #[test]
    fn explicit_port_wins() {
        let parsed = parse_url("grpc+https://juno-grpc.polkachu.com:12690").unwrap();
        assert_eq!(parsed.port(), 12690);
        assert_eq!(parsed.host_and_port(), "juno-grpc.polkachu.com:12690");

        let parsed = parse_url("rest+http://localhost:1317").unwrap();
        assert_eq!(parsed.protocol(), Protocol::Rest);
        assert!(!parsed.secure());
        assert_eq!(parsed.port(), 1317);
    }

    #[test]
    fn insecure_defaults() {
        let parsed = parse_url("grpc://localhost").unwrap();
        assert!(!parsed.secure());
        assert_eq!(parsed.port(), 80);

        let parsed = parse_url("rest+http://node.example/").unwrap();
        assert_eq!(parsed.hostname(), "node.example");
        assert_eq!(parsed.port(), 80);
    }

    #[test]
    fn protocol_is_case_insensitive() {
        let parsed = parse_url("GRPC+HTTPS://Node.Example").unwrap();
        assert_eq!(parsed.protocol(), Protocol::Grpc);
        assert!(parsed.secure());
    }

    #[test]
    fn rejects_bad_protocols() {
        for url in [
            "rpc.cosmos.directory/juno",
            "https://rpc.cosmos.directory",
            "grpc+ftp://rpc.cosmos.directory",
            "ws://localhost:26657",
        ] {
            let err = parse_url(url).unwrap_err();
            assert!(
                matches!(err, FeeShareError::InvalidUrl { .. }),
                "{url}: {err}"
            );
        }
    }

    #[test]
    fn host_and_port_matches_parts() {
        for url in [
            "grpc+https://rpc.cosmos.directory/juno",
            "grpc+http://localhost:9090",
            "rest+https://rest.cosmos.directory/juno/",
            "grpc://node.example",
        ] {
            let parsed = parse_url(url).unwrap();
            assert_eq!(
                parsed.host_and_port(),
                format!("{}:{}", parsed.hostname(), parsed.port()),
                "{url}"
            );
        }
    }

    #[test]
    fn derived_urls() {
        let parsed = parse_url("rest+https://rest.cosmos.directory/juno").unwrap();
        assert_eq!(parsed.rest_url(), "https://rest.cosmos.directory/juno");
        assert_eq!(parsed.grpc_uri(), "https://rest.cosmos.directory:443/juno");

        let parsed = parse_url("rest+http://localhost:1317").unwrap();
        assert_eq!(parsed.rest_url(), "http://localhost:1317");
    }
}
