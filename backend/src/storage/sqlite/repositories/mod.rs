pub mod meal_repository;
pub mod user_repository;

pub use meal_repository::MealRepository;
pub use user_repository::UserRepository;
