use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Serialize, Deserialize, Clone, Debug, IntoParams)]
pub struct FindAllUserRequest {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    /// Matches against user name or email.
    #[serde(default)]
    pub search: String,
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

/// Body for both the add-points and remove-points operations; the target user
/// comes from the path. Only the magnitude is accepted, the sign is decided
/// by the endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct PointsMutationRequest {
    #[validate(range(min = 1))]
    pub points: i64,

    #[validate(length(min = 1, max = 500))]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_points_is_rejected() {
        let req = PointsMutationRequest {
            points: 0,
            description: "bonus".to_string(),
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn negative_points_is_rejected() {
        let req = PointsMutationRequest {
            points: -50,
            description: "bonus".to_string(),
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn empty_description_is_rejected() {
        let req = PointsMutationRequest {
            points: 100,
            description: String::new(),
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn positive_points_with_description_passes() {
        let req = PointsMutationRequest {
            points: 500,
            description: "Bônus de boas-vindas".to_string(),
        };

        assert!(req.validate().is_ok());
    }
}
