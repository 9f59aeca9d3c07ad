//! 注册表单

use crate::models::SignupRequest;
use thiserror::Error;

pub const SIGNUP_SUCCESS_TITLE: &str = "Inscription réussie!";
pub const SIGNUP_SUCCESS_TEXT: &str = "Vous pouvez maintenant vous connecter";
pub const SIGNUP_ERROR_TITLE: &str = "Erreur d'inscription";
pub const SIGNUP_FALLBACK: &str = "Une erreur est survenue";

const PHONE_DIGITS: usize = 10;

/// 密码强度 0..=4
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PasswordStrength(u8);

impl PasswordStrength {
    pub fn score(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            0 => "Faible",
            1 => "Moyen",
            2 => "Bon",
            3 => "Fort",
            _ => "Très fort",
        }
    }

    /// 强度条宽度（百分比）
    pub fn percent(self) -> u8 {
        match self.0 {
            0 => 25,
            1 => 50,
            2 => 75,
            _ => 100,
        }
    }
}

/// 长度 ≥ 8、大写字母、数字、非字母数字字符各加一分
pub fn password_strength(password: &str) -> PasswordStrength {
    let checks = [
        password.chars().count() >= 8,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    PasswordStrength(checks.into_iter().filter(|ok| *ok).count() as u8)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupFormError {
    #[error("Tous les champs sont requis.")]
    MissingField,
    #[error("Le numéro de téléphone doit contenir 10 chiffres.")]
    InvalidPhone,
}

pub fn is_valid_phone(tel: &str) -> bool {
    let tel = tel.trim();
    tel.len() == PHONE_DIGITS && tel.chars().all(|c| c.is_ascii_digit())
}

/// 校验并生成注册请求；电话以字符串发送
pub fn build_signup(
    name: &str,
    email: &str,
    tel: &str,
    password: &str,
) -> Result<SignupRequest, SignupFormError> {
    if [name, email, tel].iter().any(|f| f.trim().is_empty()) || password.is_empty() {
        return Err(SignupFormError::MissingField);
    }
    if !is_valid_phone(tel) {
        return Err(SignupFormError::InvalidPhone);
    }
    Ok(SignupRequest {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        tel: tel.trim().to_string(),
        password: password.to_string(),
    })
}
