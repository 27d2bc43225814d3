//! Внешний API калькулятора.
//!
//! Здесь описываются:
//! - запросы (queries.rs) — все операции только читают;
//! - DTO (dto.rs) — JSON-формы запросов и ответов;
//! - проверки (validation.rs) — формат карт, количество, дубликаты;
//! - ошибки (errors.rs) — то, что видит клиент.

pub mod dto;
pub mod errors;
pub mod queries;
pub mod validation;

pub use dto::*;
pub use errors::*;
pub use queries::*;
pub use validation::*;
