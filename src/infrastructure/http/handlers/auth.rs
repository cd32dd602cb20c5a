//! Auth HTTP Handlers

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::sync::Arc;

use crate::application::{AuthStatus, ChangePassword, Login, Logout, Session};
use crate::infrastructure::http::dto::{
    parse_json_body, AuthStatusResponse, ChangePasswordRequest, LoginRequest, OkResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::{AppState, CookieSettings};

/// 会话 Cookie：HttpOnly、SameSite=Lax、Path=/，有效期与会话一致
fn session_cookie(settings: &CookieSettings, session: &Session) -> Cookie<'static> {
    Cookie::build((settings.name.clone(), session.token.clone()))
        .http_only(true)
        .secure(settings.secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::seconds(session.max_age_secs()))
        .build()
}

/// 登录
pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    body: Result<Bytes, BytesRejection>,
) -> Result<(CookieJar, Json<OkResponse>), ApiError> {
    let req: LoginRequest = parse_json_body(&body?)?;

    let session = state
        .login_handler
        .handle(Login {
            password: req.password.unwrap_or_default(),
        })
        .await?;

    Ok((
        jar.add(session_cookie(&state.cookie, &session)),
        Json(OkResponse::ok()),
    ))
}

/// 登出，同时清除 Cookie
pub async fn logout(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<OkResponse>), ApiError> {
    let token = state.session_token(&jar);
    state.logout_handler.handle(Logout { token }).await?;

    let removal = Cookie::build((state.cookie.name.clone(), "")).path("/");
    Ok((jar.remove(removal), Json(OkResponse::ok())))
}

/// 修改密码，成功后下发新会话 Cookie
pub async fn change_password(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    body: Result<Bytes, BytesRejection>,
) -> Result<(CookieJar, Json<OkResponse>), ApiError> {
    let req: ChangePasswordRequest = parse_json_body(&body?)?;

    let session = state
        .change_password_handler
        .handle(ChangePassword {
            old_password: req.old_password.unwrap_or_default(),
            new_password: req.new_password.unwrap_or_default(),
        })
        .await?;

    Ok((
        jar.add(session_cookie(&state.cookie, &session)),
        Json(OkResponse::ok()),
    ))
}

pub async fn auth_status(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Json<AuthStatusResponse> {
    let authenticated = state.auth_status_handler.handle(AuthStatus {
        token: state.session_token(&jar),
    });
    Json(AuthStatusResponse { authenticated })
}
