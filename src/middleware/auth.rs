//! Bearer token の検証 → AuthCtx を extensions に入れる
//!
//! Flow:
//! - `Authorization` ヘッダを取り出す（欠落は空文字に正規化し、scheme チェックで落とす）
//! - `JwtHandler::extract_member_id` で署名・期限・subject を検証
//! - member store で生存確認（soft-delete 済みは不在扱い）
//! - `AuthCtx` を request extensions に入れて次の handler へ
//!
//! 期限切れは握りつぶさず 401 (`REISSUE_TOKEN`) で返す。クライアントは
//! refresh フローを回してから再試行する。

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::services::auth::AuthError;
use crate::state::AppState;

const NULL_AUTH_HEADER: &str = "";

/// 保護対象の Router に認証を掛ける。
///
/// 例：
/// ```ignore
/// let v1 = api::v1::routes();
/// let v1 = middleware::auth::apply(v1, state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(NULL_AUTH_HEADER);

    // Log the failure class only, never the header value.
    let member_id = state.jwt.extract_member_id(auth_header).map_err(|err| {
        tracing::warn!(error = %err, "token verification failed");
        AppError::from(err)
    })?;

    let member = state
        .members
        .find_active(member_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!(member_id, "token subject has no active member");
            AppError::from(AuthError::MemberNotFound(member_id))
        })?;

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(AuthCtx::new(member.id, member.role));

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::get,
    };
    use chrono::{Duration, Utc};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::api::v1::extractors::AuthCtxExtractor;
    use crate::services::auth::JwtHandler;
    use crate::services::members::testing::{InMemoryMembers, member};
    use crate::services::members::MemberRecord;
    use crate::state::AppState;

    use super::apply;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    // Gate + a handler that echoes the authenticated member id.
    fn test_app(members: Vec<MemberRecord>) -> (Router, Arc<JwtHandler>) {
        let jwt = Arc::new(JwtHandler::new(SECRET, 0));
        let store = Arc::new(InMemoryMembers::with(members));
        let state = AppState::new(jwt.clone(), store);

        async fn echo_member_id(AuthCtxExtractor(ctx): AuthCtxExtractor) -> String {
            ctx.member_id.to_string()
        }

        let router = Router::new().route("/auth", get(echo_member_id));
        let app = apply(router, state.clone()).with_state(state);
        (app, jwt)
    }

    fn get_auth(auth_header: Option<String>) -> Request<Body> {
        let builder = Request::builder().uri("/auth");
        let builder = match auth_header {
            Some(value) => builder.header(header::AUTHORIZATION, value),
            None => builder,
        };
        builder.body(Body::empty()).unwrap()
    }

    async fn json_body(resp: axum::response::Response) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn assert_error_envelope(body: &serde_json::Value, message: &str) {
        assert_eq!(body["result"], "ERROR");
        assert_eq!(body["error"]["code"], "401");
        assert_eq!(body["error"]["message"], message);
        assert!(body["error"]["validations"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_scheme_is_rejected_with_401() {
        let (app, jwt) = test_app(vec![member(1)]);
        let token = jwt.create_token(1, 10_000, Utc::now()).unwrap();

        let req = get_auth(Some(format!("INVALID_SCHEME {token}")));
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_error_envelope(&json_body(resp).await, "인증 실패");
    }

    #[tokio::test]
    async fn expired_token_asks_for_reissue() {
        let (app, jwt) = test_app(vec![member(1)]);
        let issued_at = Utc::now() - Duration::seconds(60);
        let expired = jwt.create_token(1, 0, issued_at).unwrap();

        let req = get_auth(Some(format!("Bearer {expired}")));
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_error_envelope(&json_body(resp).await, "REISSUE_TOKEN");
    }

    #[tokio::test]
    async fn unknown_member_is_rejected_with_401() {
        let (app, jwt) = test_app(Vec::new());
        let token = jwt.create_token(9999, 10_000, Utc::now()).unwrap();

        let req = get_auth(Some(format!("Bearer {token}")));
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_error_envelope(&json_body(resp).await, "인증 실패");
    }

    #[tokio::test]
    async fn valid_token_reaches_the_handler() {
        let (app, jwt) = test_app(vec![member(1)]);
        let token = jwt.create_token(1, 10_000, Utc::now()).unwrap();

        let req = get_auth(Some(format!("Bearer {token}")));
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"1");
    }

    #[tokio::test]
    async fn missing_header_behaves_like_empty_header() {
        let (app, _jwt) = test_app(vec![member(1)]);

        let resp = app.oneshot(get_auth(None)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_error_envelope(&json_body(resp).await, "인증 실패");
    }
}
