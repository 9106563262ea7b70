//! Verifies that a request came from Slack by comparing the `token` field
//! of its form-encoded body against a shared secret.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("request has no body")]
    MissingBody,
    #[error("request body is not form encoded: {0}")]
    Form(#[source] serde_urlencoded::de::Error),
    #[error("request body has no token")]
    MissingToken,
    #[error("request body has more than one token")]
    RepeatedToken,
    #[error("token does not match")]
    Mismatch,
}

/// Succeeds only when `body` carries exactly one `token` equal to `secret`
pub fn verify(body: Option<&str>, secret: &str) -> Result<(), Error> {
    let body = body.ok_or(Error::MissingBody)?;
    let fields: Vec<(String, String)> = serde_urlencoded::from_str(body).map_err(Error::Form)?;
    let mut tokens = fields
        .into_iter()
        .filter(|(name, _)| name == "token")
        .map(|(_, value)| value);
    match (tokens.next(), tokens.next()) {
        (None, _) => Err(Error::MissingToken),
        (Some(_), Some(_)) => Err(Error::RepeatedToken),
        (Some(token), None) if token == secret => Ok(()),
        _ => Err(Error::Mismatch),
    }
}
