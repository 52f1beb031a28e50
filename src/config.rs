//! Board configuration.
//!
//! The host page may point the board at a non-default API root with
//! `<body data-api-base="/api">`; otherwise requests go to the same origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// How long a signup notice stays visible.
pub const SIGNUP_NOTICE_MS: u32 = 5000;
/// How long a removal notice stays visible.
pub const REMOVAL_NOTICE_MS: u32 = 4000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    /// Prefix for every API path; empty means same origin.
    pub api_base: String,
    pub signup_notice_ms: u32,
    pub removal_notice_ms: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            signup_notice_ms: SIGNUP_NOTICE_MS,
            removal_notice_ms: REMOVAL_NOTICE_MS,
        }
    }
}

impl BoardConfig {
    #[must_use]
    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = normalize_base(base);
        self
    }

    /// Read `data-api-base` from `<body>`, falling back to defaults.
    pub fn from_document() -> Self {
        #[cfg(feature = "csr")]
        {
            let base = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
                .and_then(|body| body.get_attribute("data-api-base"));
            match base {
                Some(base) => Self::default().with_api_base(&base),
                None => Self::default(),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_owned()
}
