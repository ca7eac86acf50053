//! Sign-in, sign-out and the verification wizard.

use std::path::Path;

use hl_auth::TokenKind;
use hl_client::{ProfileUpdate, Upload};
use hl_core::entities::{AdminIdentity, User};
use hl_core::responses::{LoginRequest, ProgressResponse, RegisterRequest, RegisterResponse};
use hl_core::validation;

use crate::notify::Notification;
use crate::{QueryKey, SyncContext, SyncError};

/// Registration form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
}

impl SyncContext {
    /// # Errors
    ///
    /// Returns [`SyncError::Invalid`] for malformed input, or [`SyncError::Api`]
    /// if the backend rejects the registration.
    pub async fn register(&self, form: &Registration) -> Result<RegisterResponse, SyncError> {
        validation::validate_registration(
            &form.name,
            &form.email,
            &form.password,
            &form.confirm_password,
            form.agree_to_terms,
        )?;
        let response = self
            .client
            .register(&RegisterRequest {
                name: form.name.trim().to_string(),
                email: form.email.trim().to_string(),
                password: form.password.clone(),
                agree_to_terms: form.agree_to_terms,
            })
            .await?;
        tracing::info!(user_id = response.user_id, "registered");
        Ok(response)
    }

    /// Log in, persist the user token and start the session.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Invalid`] for malformed input, [`SyncError::Api`]
    /// for rejected credentials, or [`SyncError::Auth`] if the token cannot be stored.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User, SyncError> {
        validation::validate_login(email, password)?;
        let response = self
            .client
            .login(&LoginRequest {
                email: email.trim().to_string(),
                password: password.to_string(),
            })
            .await?;
        self.client.tokens().store(TokenKind::User, &response.token)?;

        let user = User::from(&response);
        self.cache.clear();
        self.session.login(user.clone());
        self.begin_session();
        tracing::info!(user_id = %user.id, "signed in");
        Ok(user)
    }

    /// Rebuild the session from a stored token.
    ///
    /// Returns `Ok(None)` when no token is stored or the backend rejects it.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Api`] for failures other than 401.
    pub async fn restore(&self) -> Result<Option<User>, SyncError> {
        if hl_auth::load_fresh(self.client.tokens().as_ref(), TokenKind::User).is_none() {
            return Ok(None);
        }
        match self.profile().await {
            Ok(profile) => {
                let user = User::from(&profile);
                self.session.login(user.clone());
                self.begin_session();
                Ok(Some(user))
            }
            Err(SyncError::Api(error)) if error.status == 401 => {
                self.session.logout();
                self.begin_session();
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }

    /// Drop the user token, the session and every cached query.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Auth`] if the stored token cannot be removed.
    pub fn sign_out(&self) -> Result<(), SyncError> {
        self.client.tokens().delete(TokenKind::User)?;
        self.session.logout();
        self.begin_session();
        self.cache.clear();
        Ok(())
    }

    /// Log in to the super-admin console and persist the admin token.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Api`] for rejected credentials, or
    /// [`SyncError::Auth`] if the token cannot be stored.
    pub async fn admin_sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AdminIdentity, SyncError> {
        validation::validate_login(email, password)?;
        let response = self
            .client
            .admin_login(&LoginRequest {
                email: email.trim().to_string(),
                password: password.to_string(),
            })
            .await?;
        self.client.tokens().store(TokenKind::Admin, &response.token)?;
        tracing::info!(admin_id = response.admin.id, "admin signed in");
        Ok(response.admin)
    }

    /// # Errors
    ///
    /// Returns [`SyncError::Auth`] if the stored token cannot be removed.
    pub fn admin_sign_out(&self) -> Result<(), SyncError> {
        Ok(self.client.tokens().delete(TokenKind::Admin)?)
    }

    /// Submit the profile step. The phone number is reduced to digits first.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Invalid`] for malformed input or [`SyncError::Api`]
    /// if the backend rejects the update.
    pub async fn submit_profile(
        &self,
        mut update: ProfileUpdate,
    ) -> Result<ProgressResponse, SyncError> {
        const FAILED: &str = "Failed to update profile";

        validation::validate_profile(&update.phone, &update.address, &update.bio)
            .map_err(|e| self.report_failure(FAILED, e))?;
        if let Some(photo) = &update.profile_photo {
            validation::validate_document("profilePhoto", Path::new(&photo.file_name), photo.size())
                .map_err(|e| self.report_failure(FAILED, e))?;
        }
        update.phone = validation::normalize_phone(&update.phone);
        update.address = update.address.trim().to_string();
        update.bio = update.bio.trim().to_string();

        let progress = self
            .client
            .update_profile(update)
            .await
            .map_err(|e| self.report_failure(FAILED, e))?;

        self.session.apply_progress(&progress);
        self.invalidate_progress();
        self.notifier
            .emit(Notification::success("Profile saved", progress.message.clone()));
        Ok(progress)
    }

    /// Submit both verification documents.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Invalid`] for oversized or unsupported files, or
    /// [`SyncError::Api`] if the backend rejects the upload.
    pub async fn submit_documents(
        &self,
        government_id: Upload,
        address_proof: Upload,
    ) -> Result<ProgressResponse, SyncError> {
        const FAILED: &str = "Failed to upload documents";

        for (field, upload) in [
            ("governmentId", &government_id),
            ("addressProof", &address_proof),
        ] {
            validation::validate_document(field, Path::new(&upload.file_name), upload.size())
                .map_err(|e| self.report_failure(FAILED, e))?;
        }

        let progress = self
            .client
            .upload_documents(government_id, address_proof)
            .await
            .map_err(|e| self.report_failure(FAILED, e))?;

        self.session.apply_progress(&progress);
        self.session
            .mark_documents_submitted(Some(progress.profile_completion_percentage).filter(|p| *p > 0));
        self.invalidate_progress();
        self.notifier.emit(Notification::success(
            "Documents submitted",
            Some("Your documents are under review.".to_string()),
        ));
        Ok(progress)
    }

    fn invalidate_progress(&self) {
        self.cache.invalidate(&QueryKey::profile());
        self.cache.invalidate(&QueryKey::verification_status());
    }
}
