/*
 * Responsibility
 * - /me handler: 認証済み member 自身のプロフィール
 * - AuthCtx extractor で member_id を受け、store から読み直して DTO を返す
 */
use axum::{Json, extract::State};

use crate::{
    api::v1::dto::members::MemberResponse, api::v1::extractors::AuthCtxExtractor, error::AppError,
    state::AppState,
};

pub async fn me(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<MemberResponse>, AppError> {
    // Middleware already verified the member; a miss here means the row was
    // deleted between the gate and this lookup.
    let member = state
        .members
        .find_active(ctx.member_id)
        .await?
        .ok_or(AppError::not_found("member"))?;

    Ok(Json(MemberResponse::from(member)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{body::Body, http::Request, http::StatusCode, http::header};
    use chrono::Utc;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::api;
    use crate::middleware;
    use crate::services::auth::JwtHandler;
    use crate::services::members::testing::{InMemoryMembers, member};
    use crate::state::AppState;

    #[tokio::test]
    async fn me_returns_profile_of_authenticated_member() {
        let jwt = Arc::new(JwtHandler::new("0123456789abcdef0123456789abcdef", 0));
        let members = Arc::new(InMemoryMembers::with(vec![member(1)]));
        let state = AppState::new(jwt.clone(), members);

        let v1 = middleware::auth::apply(api::v1::routes(), state.clone());
        let app = v1.with_state(state);

        let token = jwt.create_token(1, 10_000, Utc::now()).unwrap();
        let req = Request::builder()
            .uri("/me")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();

        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["id"], 1);
        assert_eq!(body["email"], "test@email.com");
        assert_eq!(body["member_name"], "tester");
        assert_eq!(body["role"], "NORMAL");
    }
}
