use shared::{Meal, MealListResponse, MealResponse};

/// Maps domain meals (epoch-millisecond dates) to their wire shape
/// (RFC 3339 dates)
pub struct MealMapper;

impl MealMapper {
    pub fn to_response(meal: Meal) -> MealResponse {
        let date = meal.date_rfc3339();
        MealResponse {
            id: meal.id,
            name: meal.name,
            description: meal.description,
            is_on_diet: meal.is_on_diet,
            date,
        }
    }

    pub fn to_list_response(meals: Vec<Meal>) -> MealListResponse {
        MealListResponse {
            meals: meals.into_iter().map(Self::to_response).collect(),
        }
    }
}
