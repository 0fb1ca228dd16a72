mod catalog;
mod question;
mod screen;
mod status;

pub use catalog::{Catalog, CatalogError, MAX_SPOON_ADJUSTMENT, MIN_SPOON_ADJUSTMENT};
pub use question::{AnswerOption, Question};
pub use screen::Screen;
pub use status::{ParseStatusError, Status};
