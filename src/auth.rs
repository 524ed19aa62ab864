use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Username/password pair sent to the daemon with every request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Credentials {
        Credentials {
            user: user.into(),
            password: password.into(),
        }
    }

    /// Value for the `Authorization` header, `Basic base64(user:password)`.
    pub fn header_value(&self) -> String {
        let token = BASE64.encode(format!("{}:{}", self.user, self.password));
        format!("Basic {}", token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_daemon_credentials() {
        let credentials = Credentials::new("electrum", "electrumz");
        assert_eq!(credentials.header_value(), "Basic ZWxlY3RydW06ZWxlY3RydW16");
    }

    #[test]
    fn empty_password_keeps_separator() {
        let credentials = Credentials::new("user", "");
        assert_eq!(credentials.header_value(), "Basic dXNlcjo=");
    }
}
