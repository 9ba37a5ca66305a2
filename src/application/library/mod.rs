mod errors;
mod library_service;
mod notifications;

pub use errors::*;
pub use library_service::{
    ServiceDependencies, add_book, borrow_book, get_book_by_isbn, register_user, return_book,
};
pub use notifications::{availability_message, notify_user_with_book_reviews, review_message};
