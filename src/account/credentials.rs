use std::fmt;

/// Secrets fixed at account opening
#[derive(Clone)]
pub struct Credentials {
    password: String,
    reset_code: String,
}

impl Credentials {
    pub fn new(password: impl Into<String>, reset_code: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            reset_code: reset_code.into(),
        }
    }

    pub fn password_matches(&self, password: &str) -> bool {
        self.password == password
    }

    pub fn reset_code_matches(&self, reset_code: &str) -> bool {
        self.reset_code == reset_code
    }
}

// keep secrets out of logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("password", &"***")
            .field("reset_code", &"***")
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::Credentials;

    #[test]
    fn exact_match_only() {
        let c = Credentials::new("pass123", "reset456");
        assert!(c.password_matches("pass123"));
        assert!(!c.password_matches("Pass123"));
        assert!(!c.password_matches("reset456"));
        assert!(c.reset_code_matches("reset456"));
        assert!(!c.reset_code_matches("reset456 "));
    }

    #[test]
    fn debug_hides_secrets() {
        let c = Credentials::new("pass123", "reset456");
        let dbg = format!("{c:?}");
        assert!(!dbg.contains("pass123"));
        assert!(!dbg.contains("reset456"));
    }
}
