//! Validaciones de inputs
//!
//! Este módulo contiene las validaciones que no cubre el derive de
//! `validator`: fuerza de contraseña, fechas futuras y truncado de textos
//! libres antes de persistirlos.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LOWERCASE_RE: Regex = Regex::new(r"[a-z]").expect("regex válida");
    static ref UPPERCASE_RE: Regex = Regex::new(r"[A-Z]").expect("regex válida");
    static ref DIGIT_RE: Regex = Regex::new(r"\d").expect("regex válida");
}

/// Longitud máxima de un comentario de review
pub const MAX_REVIEW_LENGTH: usize = 500;

/// Feedback de validación de contraseña
#[derive(Debug, PartialEq, Eq)]
pub struct PasswordFeedback {
    pub valid: bool,
    pub message: &'static str,
}

/// Validar fuerza de contraseña: mínimo 8 caracteres con minúscula,
/// mayúscula y dígito
pub fn password_feedback(password: &str) -> PasswordFeedback {
    if password.is_empty() {
        return PasswordFeedback {
            valid: false,
            message: "Password is required",
        };
    }
    if password.len() < 8 {
        return PasswordFeedback {
            valid: false,
            message: "Password must be at least 8 characters",
        };
    }
    if !LOWERCASE_RE.is_match(password) {
        return PasswordFeedback {
            valid: false,
            message: "Password must include at least one lowercase letter",
        };
    }
    if !UPPERCASE_RE.is_match(password) {
        return PasswordFeedback {
            valid: false,
            message: "Password must include at least one uppercase letter",
        };
    }
    if !DIGIT_RE.is_match(password) {
        return PasswordFeedback {
            valid: false,
            message: "Password must include at least one number",
        };
    }
    PasswordFeedback {
        valid: true,
        message: "Password is strong",
    }
}

/// Validar que una fecha no esté en el pasado
pub fn is_future_or_today(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}

/// Truncar un texto libre al límite dado, respetando límites de chars
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_feedback() {
        assert!(!password_feedback("").valid);
        assert!(!password_feedback("short1A").valid);
        assert!(!password_feedback("alllowercase1").valid);
        assert!(!password_feedback("ALLUPPERCASE1").valid);
        assert!(!password_feedback("NoDigitsHere").valid);
        assert!(password_feedback("GoodPass1").valid);
    }

    #[test]
    fn test_is_future_or_today() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert!(is_future_or_today(today, today));
        assert!(is_future_or_today(today.succ_opt().unwrap(), today));
        assert!(!is_future_or_today(today.pred_opt().unwrap(), today));
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hola mundo", 4), "hola");
        assert_eq!(truncate_text("corto", 500), "corto");
        // No parte caracteres multibyte
        assert_eq!(truncate_text("áéíóú", 3), "áéí");
    }
}
