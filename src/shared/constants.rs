/// Questions per page on paginated listings
pub const QUESTIONS_PER_PAGE: i64 = 10;

/// Added to the `{cat_id}` path segment of `/categories/{cat_id}/questions`.
///
/// Clients address categories by their zero-based position in the category
/// list, while category ids start at 1.
pub const CATEGORY_PATH_OFFSET: i64 = 1;

/// `quiz_category.id` that selects questions from every category
pub const ALL_CATEGORIES_ID: i64 = 0;
