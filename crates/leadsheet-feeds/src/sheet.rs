//! Published-spreadsheet feed: one HTTP GET to a CSV export URL.

use crate::{FetchError, LeadFeed};

#[derive(Debug, Clone)]
pub struct SheetFeed {
    client: reqwest::Client,
    url: String,
}

impl SheetFeed {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl LeadFeed for SheetFeed {
    async fn fetch(&self) -> Result<String, FetchError> {
        let resp = self.client.get(&self.url).send().await?;

        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status().as_u16()));
        }

        let bytes = resp.bytes().await?;
        tracing::debug!(url = %self.url, bytes = bytes.len(), "sheet: fetched");
        Ok(crate::decode(&bytes))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use tokio::net::TcpListener;

    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn fetches_body_on_success() {
        let base = serve(Router::new().route("/sheet.csv", get(|| async { "Name\nAcme\n" }))).await;
        let feed = SheetFeed::new(format!("{base}/sheet.csv"));
        assert_eq!(feed.fetch().await.unwrap(), "Name\nAcme\n");
    }

    #[tokio::test]
    async fn stray_latin1_byte_only_damages_its_own_cell() {
        let body: &'static [u8] = b"Name,City\nAcme,Pune\nCaf\xe9,Mysore\n";
        let base = serve(Router::new().route("/sheet.csv", get(move || async move { body }))).await;

        let state = crate::load(&SheetFeed::new(format!("{base}/sheet.csv"))).await;
        let book = state.book().expect("a bad byte must not fail the load");
        assert_eq!(book.len(), 2);
        assert_eq!(book.leads()[0].name, "Acme");
        assert_eq!(book.leads()[1].name, "Caf\u{FFFD}");
        assert_eq!(book.leads()[1].city, "Mysore");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let base = serve(Router::new().route(
            "/sheet.csv",
            get(|| async { (StatusCode::FORBIDDEN, "nope") }),
        ))
        .await;
        let feed = SheetFeed::new(format!("{base}/sheet.csv"));
        assert!(matches!(feed.fetch().await, Err(FetchError::Status(403))));
    }

    #[tokio::test]
    async fn connection_refused_is_a_transport_error() {
        // Bind then drop to get a port nothing is listening on.
        let port = {
            let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            l.local_addr().unwrap().port()
        };
        let feed = SheetFeed::new(format!("http://127.0.0.1:{port}/sheet.csv"));
        assert!(matches!(feed.fetch().await, Err(FetchError::Transport(_))));
    }
}
