//! Handler for the outbound redirect gate.

use axum::{
    extract::{RawQuery, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use tracing::{debug, error};

use crate::domain::countdown::Countdown;
use crate::domain::entities::{DisclaimerPage, RedirectDecision};
use crate::state::AppState;

/// Shows the disclaimer page for a whitelisted outbound link.
///
/// # Endpoint
///
/// `GET /fundgrube/redirect?url=<target>&service=<service>[&title=<title>]`
///
/// # Request Flow
///
/// 1. Decode the raw query string once
/// 2. Validate URL, service and host whitelist
/// 3. Render the disclaimer page with countdown
///
/// # Responses
///
/// - **200 OK**: Disclaimer page
/// - **302 Found** to the site home: any rejection or rendering failure.
///   The request input is never reflected on this path.
pub async fn gate_handler(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    let decision = state.gate.evaluate_query(query.as_deref().unwrap_or_default());

    let request = match decision {
        RedirectDecision::Accepted(request) => request,
        RedirectDecision::Rejected(rejection) => {
            metrics::counter!("gate_decisions_total", "outcome" => "rejected", "reason" => rejection.as_str())
                .increment(1);
            return home_redirect(&state);
        }
    };

    let service = request.service;
    let page = DisclaimerPage::new(
        request,
        Countdown::new(state.config.countdown_seconds),
        state.config.site_links(),
    );

    match state.renderer.render(&page) {
        Ok(html) => {
            debug!(%service, "Serving redirect disclaimer");
            metrics::counter!("gate_decisions_total", "outcome" => "accepted").increment(1);
            (
                [
                    (header::CACHE_CONTROL, "no-store"),
                    (header::REFERRER_POLICY, "no-referrer"),
                    (header::HeaderName::from_static("x-robots-tag"), "noindex, nofollow"),
                ],
                Html(html),
            )
                .into_response()
        }
        Err(e) => {
            error!(%service, "Failed to render disclaimer page: {}", e);
            metrics::counter!("gate_decisions_total", "outcome" => "render_failed").increment(1);
            home_redirect(&state)
        }
    }
}

/// Fail-closed response: `302 Found` to the site home with an empty body.
fn home_redirect(state: &AppState) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, state.config.home_url().to_string())],
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use crate::domain::renderer::{MockDisclaimerRenderer, RenderError};
    use axum::body::to_bytes;
    use std::sync::Arc;

    fn state_with(renderer: MockDisclaimerRenderer) -> AppState {
        AppState::new(Arc::new(test_config()), Arc::new(renderer))
    }

    async fn body_of(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_accepted_renders_page() {
        let mut renderer = MockDisclaimerRenderer::new();
        renderer
            .expect_render()
            .withf(|page| {
                page.profile.name == "Facebook"
                    && page.target_url == "https://www.facebook.com/sharer/sharer.php?u=x"
                    && page.title.as_deref() == Some("Rotes Fahrrad")
                    && page.countdown.seconds() == 5
                    && page.countdown.is_running()
            })
            .times(1)
            .returning(|_| Ok("<html>ok</html>".to_string()));

        let response = gate_handler(
            State(state_with(renderer)),
            RawQuery(Some(
                "url=https%3A%2F%2Fwww.facebook.com%2Fsharer%2Fsharer.php%3Fu%3Dx&service=facebook&title=Rotes+Fahrrad"
                    .to_string(),
            )),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
        assert_eq!(body_of(response).await, "<html>ok</html>");
    }

    #[tokio::test]
    async fn test_rejected_never_renders() {
        let mut renderer = MockDisclaimerRenderer::new();
        renderer.expect_render().never();

        let response = gate_handler(
            State(state_with(renderer)),
            RawQuery(Some(
                "url=https%3A%2F%2Fevil.example%2F&service=facebook".to_string(),
            )),
        )
        .await;

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers()[header::LOCATION],
            "https://fundgrube.example/"
        );
        assert!(body_of(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_query_redirects_home() {
        let mut renderer = MockDisclaimerRenderer::new();
        renderer.expect_render().never();

        let response = gate_handler(State(state_with(renderer)), RawQuery(None)).await;

        assert_eq!(response.status(), StatusCode::FOUND);
    }

    #[tokio::test]
    async fn test_render_failure_fails_closed() {
        let mut renderer = MockDisclaimerRenderer::new();
        renderer
            .expect_render()
            .times(1)
            .returning(|_| Err(RenderError::Template("boom".to_string())));

        let response = gate_handler(
            State(state_with(renderer)),
            RawQuery(Some("url=https%3A%2F%2Fwa.me%2F&service=whatsapp".to_string())),
        )
        .await;

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers()[header::LOCATION],
            "https://fundgrube.example/"
        );
        let body = body_of(response).await;
        assert!(!body.contains("boom"));
        assert!(!body.contains("wa.me"));
    }
}
