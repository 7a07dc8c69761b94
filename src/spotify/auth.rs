use crate::{
    config::{self, Credentials},
    error::{Error, Result},
    spotify::{Auth, HttpClient, ProviderRequest},
    types::AccessGrant,
    utils,
};

/// Exchanges the long-lived refresh token for a short-lived access token.
///
/// Posts a `refresh_token` grant to Spotify's token endpoint with the app
/// identity in a basic `Authorization` header. The grant is not cached; every
/// lookup performs its own exchange.
///
/// # Arguments
///
/// * `client` - HTTP capability used for the exchange
/// * `credentials` - App identity and refresh token
///
/// # Errors
///
/// - [`Error::TokenRefresh`] when the endpoint answers with a non-success status
/// - [`Error::Http`] on network failure
/// - [`Error::Json`] when the body is not a token response
///
/// # Example
///
/// ```
/// let grant = refresh_access_token(&ReqwestClient::new(), &credentials).await?;
/// println!("Bearer {}", grant.access_token);
/// ```
pub async fn refresh_access_token(
    client: &dyn HttpClient,
    credentials: &Credentials,
) -> Result<AccessGrant> {
    let basic = utils::encode_basic_credential(&credentials.client_id, &credentials.client_secret);

    let request = ProviderRequest::post_form(
        config::SPOTIFY_API_TOKEN_URL,
        Auth::Basic(basic),
        &[
            ("grant_type", "refresh_token"),
            ("refresh_token", credentials.refresh_token.as_str()),
        ],
    );

    let response = client.send(request).await?;
    if !response.is_success() {
        return Err(Error::TokenRefresh(response.status));
    }

    response.json::<AccessGrant>()
}
