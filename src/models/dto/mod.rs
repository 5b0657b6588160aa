pub mod message;
pub mod payment;
pub mod post;
pub mod user;
pub use message::Message;
pub use payment::*;
pub use post::*;
pub use user::*;

use crate::models::Error;
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

/// Trims `value` and rejects the field if nothing is left.
pub(crate) fn required_field(name: &str, value: &str) -> Result<String, Error> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation(format!("{name} is required")));
    }
    Ok(trimmed.to_string())
}

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(
            Message,
            SignupInfo,
            LoginInfo,
            TokenResponse,
            CreateAccountInfo,
            UserCreatedResponse,
            UploadPost,
            UpdatePost,
            PostResponse,
            PostCreatedResponse,
            PostUpdatedResponse,
            NewPaymentInfo,
            PaymentResponse,
            PaymentSubmittedResponse,
            crate::models::Role,
            crate::models::PaymentStatus,
        ),
    ),
    modifiers(&SecurityAddon)
)]
/// Captures OpenAPI schemas and canned responses defined in the DTO module
pub struct OpenApiSchemas;

pub struct SecurityAddon;
impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components: &mut utoipa::openapi::Components = openapi.components.as_mut().unwrap(); // we can unwrap safely since there already is components registered.
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
    }
}
