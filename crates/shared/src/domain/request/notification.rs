use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Serialize, Deserialize, Clone, Debug, IntoParams)]
pub struct FindAllNotificationRequest {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    /// Restrict to one user's notifications; absent returns everything,
    /// broadcasts included.
    pub user_id: Option<i32>,
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

/// Omitting `user_id` turns the notification into a broadcast row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateNotificationRequest {
    #[validate(range(min = 1))]
    pub user_id: Option<i32>,

    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[validate(length(min = 1))]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broadcast_without_user_id_passes() {
        let req = CreateNotificationRequest {
            user_id: None,
            title: "Manutenção".to_string(),
            message: "O app ficará indisponível hoje à noite.".to_string(),
        };

        assert!(req.validate().is_ok());
    }

    #[test]
    fn empty_title_is_rejected() {
        let req = CreateNotificationRequest {
            user_id: Some(1),
            title: String::new(),
            message: "mensagem".to_string(),
        };

        assert!(req.validate().is_err());
    }
}
