/// Default upload endpoint.
pub const DEFAULT_UPLOAD_URL: &str = "https://upload.imagekit.io/api/v1/files/upload";

/// Default management API base.
pub const DEFAULT_API_URL: &str = "https://api.imagekit.io/v1";

/// ImageKit credentials and endpoints loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ImageKitConfig {
    /// Public delivery endpoint, e.g. `https://ik.imagekit.io/<id>`.
    pub url_endpoint: String,
    pub public_key: String,
    /// Used as the HTTP Basic username; the password is empty.
    pub private_key: String,
    pub upload_url: String,
    pub api_url: String,
    /// Timeout for each outbound request in seconds (default: `30`).
    pub timeout_secs: u64,
}

impl ImageKitConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` when `IK_PRIVATE_KEY` is unset or blank.
    ///
    /// | Env Var           | Default                                          |
    /// |-------------------|--------------------------------------------------|
    /// | `IK_URL_ENDPOINT` | empty                                            |
    /// | `IK_PUBLIC_KEY`   | empty                                            |
    /// | `IK_PRIVATE_KEY`  | required                                         |
    /// | `IK_UPLOAD_URL`   | `https://upload.imagekit.io/api/v1/files/upload` |
    /// | `IK_API_URL`      | `https://api.imagekit.io/v1`                     |
    /// | `IK_TIMEOUT_SECS` | `30`                                             |
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let private_key = lookup("IK_PRIVATE_KEY").filter(|k| !k.trim().is_empty())?;

        let timeout_secs: u64 = lookup("IK_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".into())
            .parse()
            .expect("IK_TIMEOUT_SECS must be a valid u64");

        Some(Self {
            url_endpoint: lookup("IK_URL_ENDPOINT").unwrap_or_default(),
            public_key: lookup("IK_PUBLIC_KEY").unwrap_or_default(),
            private_key,
            upload_url: lookup("IK_UPLOAD_URL").unwrap_or_else(|| DEFAULT_UPLOAD_URL.into()),
            api_url: lookup("IK_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.into()),
            timeout_secs,
        })
    }
}
