//! Registration, login and the verification wizard.

use hl_auth::TokenKind;
use hl_core::responses::{
    AdminLoginResponse, LoginRequest, LoginResponse, ProfileResponse, ProgressResponse,
    RegisterRequest, RegisterResponse, VerificationStatusResponse,
};
use reqwest::Method;
use reqwest::multipart::Form;

use crate::{ApiClient, ApiError, Upload};

/// Fields of the profile step. Phone should already be digits-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub phone: String,
    pub address: String,
    pub bio: String,
    pub profile_photo: Option<Upload>,
}

impl ApiClient {
    /// `POST /api/v1/auth/register`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects it.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.send_json(Method::POST, "/api/v1/auth/register", request, None)
            .await
    }

    /// `POST /api/v1/auth/login`. The returned token is not stored here.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the credentials are rejected.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.send_json(Method::POST, "/api/v1/auth/login", request, None)
            .await
    }

    /// `POST /api/v1/admin/auth/login`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the credentials are rejected.
    pub async fn admin_login(&self, request: &LoginRequest) -> Result<AdminLoginResponse, ApiError> {
        self.send_json(
            Method::POST,
            "/api/v1/admin/auth/login",
            request,
            Some(TokenKind::Admin),
        )
        .await
    }

    /// `PUT /api/v1/users/profile` (multipart).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects it.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<ProgressResponse, ApiError> {
        let mut form = Form::new()
            .text("phone", update.phone)
            .text("address", update.address)
            .text("bio", update.bio);
        if let Some(photo) = update.profile_photo {
            form = form.part("profilePhoto", photo.into_part()?);
        }
        self.send_multipart(Method::PUT, "/api/v1/users/profile", form)
            .await
    }

    /// `POST /api/v1/users/documents` (multipart).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects it.
    pub async fn upload_documents(
        &self,
        government_id: Upload,
        address_proof: Upload,
    ) -> Result<ProgressResponse, ApiError> {
        let form = Form::new()
            .part("governmentId", government_id.into_part()?)
            .part("addressProof", address_proof.into_part()?);
        self.send_multipart(Method::POST, "/api/v1/users/documents", form)
            .await
    }

    /// `GET /api/v1/user/profile`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the response cannot be parsed.
    pub async fn profile(&self) -> Result<ProfileResponse, ApiError> {
        self.get_json("/api/v1/user/profile", Some(TokenKind::User))
            .await
    }

    /// `GET /api/v1/users/verification-status`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the response cannot be parsed.
    pub async fn verification_status(&self) -> Result<VerificationStatusResponse, ApiError> {
        self.get_json("/api/v1/users/verification-status", Some(TokenKind::User))
            .await
    }
}
