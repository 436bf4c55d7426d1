use crate::result::{ApiReply, success_to_api_response};
use crate::routes::Params;

use super::model::{EmailCheck, PasswordReport};

pub async fn validate_email(params: Params) -> ApiReply<EmailCheck> {
    let email = params.require("email", "Email is required")?;

    Ok(success_to_api_response(
        EmailCheck::inspect(email),
        "Email validation completed",
    ))
}

pub async fn validate_password(params: Params) -> ApiReply<PasswordReport> {
    let password = params.require("password", "Password is required")?;

    Ok(success_to_api_response(
        PasswordReport::assess(password),
        "Password validation completed",
    ))
}
