use std::sync::Arc;

use reqwest::{Client, Method, StatusCode, header};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::BackendConfig;

use super::error::{GatewayError, GatewayResult};

/// Path prefix of the REST surface exposed by the hosted backend.
const REST_PREFIX: &str = "rest/v1";

/// Equality filter applied to a query, rendered as `column=eq.value`.
pub type Filter<'a> = (&'a str, String);

/// Thin client over the hosted PostgREST backend.
///
/// Exposes the three read operations the storefront consumes: filtered
/// multi-row selects, single-row fetch-or-none, and an existence count that
/// transfers no row bodies.
#[derive(Clone)]
pub struct PostgrestClient {
    client: Client,
    base_url: Arc<str>,
    api_key: Arc<str>,
}

/// Error payload shape returned by PostgREST on rejected queries.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl PostgrestClient {
    /// Build a client for the given backend configuration.
    pub fn new(config: &BackendConfig) -> GatewayResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|source| GatewayError::ClientBuilder { source })?;

        Ok(Self {
            client,
            base_url: Arc::<str>::from(config.base_url.trim_end_matches('/')),
            api_key: Arc::<str>::from(config.api_key.as_str()),
        })
    }

    fn request(&self, method: Method, table: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}/{}", self.base_url, REST_PREFIX, table);
        self.client
            .request(method, url)
            .header("apikey", self.api_key.as_ref())
            .bearer_auth(self.api_key.as_ref())
    }

    /// Fetch all rows of `table` matching every filter, optionally ordered.
    pub async fn select<T>(
        &self,
        table: &str,
        columns: &str,
        filters: &[Filter<'_>],
        order: Option<&str>,
    ) -> GatewayResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut query = build_query(columns, filters);
        if let Some(order) = order {
            query.push(("order", order.to_string()));
        }

        let response = self
            .request(Method::GET, table)
            .query(&query)
            .send()
            .await
            .map_err(|source| GatewayError::RequestSend {
                table: table.to_string(),
                source,
            })?;

        let response = reject_error_status(table, response).await?;
        response
            .json::<Vec<T>>()
            .await
            .map_err(|source| GatewayError::DecodeResponse {
                table: table.to_string(),
                source,
            })
    }

    /// Fetch the single row of `table` matching every filter.
    ///
    /// Zero matches is an expected outcome and yields `Ok(None)`; the
    /// PostgREST single-object representation signals it with
    /// `406 Not Acceptable` rather than an empty body.
    pub async fn select_single<T>(
        &self,
        table: &str,
        columns: &str,
        filters: &[Filter<'_>],
    ) -> GatewayResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let query = build_query(columns, filters);

        let response = self
            .request(Method::GET, table)
            .header(header::ACCEPT, "application/vnd.pgrst.object+json")
            .query(&query)
            .send()
            .await
            .map_err(|source| GatewayError::RequestSend {
                table: table.to_string(),
                source,
            })?;

        match response.status() {
            StatusCode::NOT_ACCEPTABLE => Ok(None),
            status if status.is_success() => {
                response.json::<T>().await.map(Some).map_err(|source| {
                    GatewayError::DecodeResponse {
                        table: table.to_string(),
                        source,
                    }
                })
            }
            _ => Err(rejected(table, response).await),
        }
    }

    /// Count the rows of `table` without fetching any bodies.
    ///
    /// The total comes back in the `Content-Range` header of a `HEAD`
    /// request issued with `Prefer: count=exact`.
    pub async fn count(&self, table: &str) -> GatewayResult<u64> {
        let response = self
            .request(Method::HEAD, table)
            .header("Prefer", "count=exact")
            .query(&[("select", "id")])
            .send()
            .await
            .map_err(|source| GatewayError::RequestSend {
                table: table.to_string(),
                source,
            })?;

        let response = reject_error_status(table, response).await?;
        response
            .headers()
            .get(header::CONTENT_RANGE)
            .and_then(|value| value.to_str().ok())
            .and_then(|range| range.rsplit('/').next())
            .and_then(|total| total.parse::<u64>().ok())
            .ok_or_else(|| GatewayError::CountUnavailable {
                table: table.to_string(),
            })
    }
}

fn build_query<'a>(columns: &str, filters: &'a [Filter<'a>]) -> Vec<(&'a str, String)> {
    let mut query: Vec<(&str, String)> = vec![("select", columns.to_string())];
    query.extend(
        filters
            .iter()
            .map(|(column, predicate)| (*column, predicate.clone())),
    );
    query
}

async fn reject_error_status(
    table: &str,
    response: reqwest::Response,
) -> GatewayResult<reqwest::Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(rejected(table, response).await)
    }
}

/// Extract the backend's own error text, falling back to the status reason
/// when the response carries no parseable body (e.g. `HEAD` requests).
async fn rejected(table: &str, response: reqwest::Response) -> GatewayError {
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown backend error")
                .to_string()
        });

    GatewayError::QueryRejected {
        table: table.to_string(),
        status,
        message,
    }
}

#[cfg(test)]
mod tests {
    use httpmock::Method::HEAD;
    use httpmock::prelude::*;

    use super::*;

    fn client(server: &MockServer) -> PostgrestClient {
        let config = BackendConfig::new(server.base_url(), "test-key");
        PostgrestClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn count_parses_the_content_range_total() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(HEAD)
                .path("/rest/v1/products")
                .header("Prefer", "count=exact")
                .header("apikey", "test-key");
            then.status(200).header("Content-Range", "0-0/17");
        });

        let total = client(&server).count("products").await.unwrap();

        mock.assert();
        assert_eq!(total, 17);
    }

    #[tokio::test]
    async fn count_without_content_range_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(HEAD).path("/rest/v1/products");
            then.status(200);
        });

        let err = client(&server).count("products").await.unwrap_err();

        assert!(matches!(err, GatewayError::CountUnavailable { .. }));
    }

    #[tokio::test]
    async fn rejected_queries_surface_the_backend_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/rest/v1/products");
            then.status(400)
                .header("content-type", "application/json")
                .json_body(serde_json::json!({
                    "message": "permission denied for table products",
                    "code": "42501"
                }));
        });

        let err = client(&server)
            .select::<serde_json::Value>("products", "*", &[], None)
            .await
            .unwrap_err();

        match err {
            GatewayError::QueryRejected { status, message, .. } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(message, "permission denied for table products");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
