use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A meal entry in one user's diet journal.
///
/// `date` is the moment the meal was eaten as caller-supplied epoch
/// milliseconds. The REST layer renders it as an RFC 3339 timestamp; the
/// millisecond value is the source of truth for ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,
    /// ID of the user this meal belongs to
    pub user_id: String,
    pub name: String,
    pub description: String,
    /// Whether the meal was diet-compliant
    pub is_on_diet: bool,
    /// Epoch milliseconds, caller supplied (not the server clock)
    pub date: i64,
}

/// A journal user, bound 1:1 to an anonymous session token at creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// The session token that owns this user record
    pub session_id: String,
}

/// Request for registering a journal user under the current session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// Request for creating a meal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMealRequest {
    pub name: String,
    pub description: String,
    pub is_on_diet: bool,
    /// RFC 3339 timestamp of when the meal was eaten
    pub date: String,
}

/// Request for replacing every field of an existing meal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMealRequest {
    pub name: String,
    pub description: String,
    pub is_on_diet: bool,
    /// RFC 3339 timestamp of when the meal was eaten
    pub date: String,
}

/// A meal as rendered on the wire, date formatted as RFC 3339 UTC
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_on_diet: bool,
    pub date: String,
}

/// Response containing a session's meals, most recent first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealListResponse {
    pub meals: Vec<MealResponse>,
}

/// Response after registering a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Aggregate adherence statistics for one session's journal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResponse {
    pub total_meals: u32,
    pub total_meals_on_diet: u32,
    pub total_meals_off_diet: u32,
    /// Longest run of chronologically consecutive on-diet meals
    pub best_on_diet_sequence: u32,
}

/// Format an epoch-milliseconds timestamp as RFC 3339 UTC with millisecond
/// precision, e.g. `2023-12-14T01:02:02.000Z`.
///
/// Returns `None` for timestamps outside chrono's representable range.
pub fn format_epoch_millis(millis: i64) -> Option<String> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Parse an RFC 3339 timestamp into epoch milliseconds.
pub fn parse_date_millis(date: &str) -> Result<i64, chrono::ParseError> {
    DateTime::parse_from_rfc3339(date).map(|dt| dt.timestamp_millis())
}

impl Meal {
    /// The meal's date rendered as RFC 3339 UTC, falling back to the raw
    /// millisecond value when out of chrono's range.
    pub fn date_rfc3339(&self) -> String {
        format_epoch_millis(self.date).unwrap_or_else(|| self.date.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_epoch_millis() {
        assert_eq!(
            format_epoch_millis(1702516922000).as_deref(),
            Some("2023-12-14T01:22:02.000Z")
        );
        // Millisecond precision is preserved
        assert_eq!(
            format_epoch_millis(1702516922123).as_deref(),
            Some("2023-12-14T01:22:02.123Z")
        );
        assert_eq!(format_epoch_millis(0).as_deref(), Some("1970-01-01T00:00:00.000Z"));
    }

    #[test]
    fn test_parse_date_millis() {
        assert_eq!(parse_date_millis("2023-12-14T01:22:02.000Z").unwrap(), 1702516922000);
        // Offsets are normalized to the same instant
        assert_eq!(
            parse_date_millis("2023-12-13T21:22:02.000-04:00").unwrap(),
            1702516922000
        );
        assert!(parse_date_millis("not a date").is_err());
        assert!(parse_date_millis("2023-12-14").is_err());
    }

    #[test]
    fn test_date_round_trip_is_millisecond_exact() {
        for millis in [0, 1, 999, 1702516922123, 4102444800000] {
            let formatted = format_epoch_millis(millis).unwrap();
            assert_eq!(parse_date_millis(&formatted).unwrap(), millis);
        }
    }

    #[test]
    fn test_meal_date_rfc3339() {
        let meal = Meal {
            id: "meal-1".to_string(),
            user_id: "user-1".to_string(),
            name: "Breakfast".to_string(),
            description: "Oats".to_string(),
            is_on_diet: true,
            date: 1702516922000,
        };
        assert_eq!(meal.date_rfc3339(), "2023-12-14T01:22:02.000Z");
    }

    #[test]
    fn test_meal_request_wire_format_is_camel_case() {
        let request: CreateMealRequest = serde_json::from_str(
            r#"{"name":"Lunch","description":"Salad","isOnDiet":true,"date":"2023-12-14T12:00:00.000Z"}"#,
        )
        .unwrap();
        assert!(request.is_on_diet);
        assert_eq!(request.name, "Lunch");
    }

    #[test]
    fn test_metrics_response_wire_format() {
        let response = MetricsResponse {
            total_meals: 3,
            total_meals_on_diet: 2,
            total_meals_off_diet: 1,
            best_on_diet_sequence: 1,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["totalMeals"], 3);
        assert_eq!(json["totalMealsOnDiet"], 2);
        assert_eq!(json["totalMealsOffDiet"], 1);
        assert_eq!(json["bestOnDietSequence"], 1);
    }
}
