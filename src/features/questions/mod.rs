//! Trivia questions: paginated listing, search, creation and deletion.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/questions?page=N` | Ten questions per page |
//! | POST | `/questions` | Create a question, or search with `searchTerm` |
//! | DELETE | `/questions/{id}` | Delete a question |
//! | GET | `/categories/{cat_id}/questions?page=N` | Questions of category `cat_id + 1` |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::QuestionService;
