mod constraints;
mod schema_reset;
mod seeding;
