use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONNECTION, COOKIE, ORIGIN, REFERER, TE, USER_AGENT};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;

use crate::error::Error;
use crate::response::league_info::AccountLeagueInfo;

const BASE_URL: &str = "https://www.streetfighter.com";
const LEAGUE_INFO_PATH: &str = "/6/buckler/api/profile/play/act/leagueinfo";

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:136.0) Gecko/20100101 Firefox/136.0";

/// `-1` asks for the current season.
pub const CURRENT_SEASON: i64 = -1;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LeagueInfoRequest<'a> {
    target_short_id: i64,
    target_season_id: i64,
    locale: &'a str,
    peak: bool,
}

/// Client for the Buckler's Boot Camp profile API.
///
/// The API only answers requests that look like they come from a logged in
/// browser session, so every request carries the session cookie and the
/// headers a browser would send.
#[derive(Debug, Clone)]
pub struct BucklerClient {
    client: Client,
    base_url: String,
    cookie: String,
    season: i64,
    locale: String,
}

impl BucklerClient {
    pub fn new(cookie: impl Into<String>) -> Self {
        Self::with_base_url(BASE_URL, cookie)
    }

    pub fn with_base_url(base_url: impl Into<String>, cookie: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            cookie: cookie.into(),
            season: CURRENT_SEASON,
            locale: "en".to_string(),
        }
    }

    pub fn season(mut self, season: i64) -> Self {
        self.season = season;
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn request(&self, capcom_id: i64) -> RequestBuilder {
        let body = LeagueInfoRequest {
            target_short_id: capcom_id,
            target_season_id: self.season,
            locale: &self.locale,
            peak: true,
        };

        self.client
            .post(format!("{}{}", self.base_url, LEAGUE_INFO_PATH))
            .json(&body)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(ACCEPT, "*/*")
            .header(ACCEPT_LANGUAGE, "en-US,en;q=0.5")
            .header(
                REFERER,
                format!("{}/6/buckler/profile/{}/play", BASE_URL, capcom_id),
            )
            .header(ORIGIN, BASE_URL)
            .header("DNT", "1")
            .header(CONNECTION, "keep-alive")
            .header(COOKIE, &self.cookie)
            .header("Sec-Fetch-Dest", "empty")
            .header("Sec-Fetch-Mode", "cors")
            .header("Sec-Fetch-Site", "same-origin")
            .header("Priority", "u=0")
            .header(TE, "trailers")
    }

    pub async fn fetch_league_info(&self, capcom_id: i64) -> Result<AccountLeagueInfo, Error> {
        tracing::debug!(capcom_id, season = self.season, "requesting league info");

        let res = self.request(capcom_id).send().await?;

        let status = res.status();
        let text = res.text().await?;

        if !status.is_success() {
            tracing::warn!(%status, "league info request was not successful");
            return Err(Error::Status { status, body: text });
        }

        serde_json::from_str(&text).map_err(|err| {
            tracing::error!(%err, "league info response did not match the expected shape");
            Error::Json(err)
        })
    }
}
