//! Book catalog endpoints

use axum::{
    extract::{Path, State},
    http::{header, HeaderName, StatusCode},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::Book,
    AppState,
};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "List of books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.get_books().await?;
    Ok(Json(books))
}

/// Create a new book
///
/// The caller supplies the id; the response carries a Location header
/// referencing the created resource.
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = Book)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(book): Json<Book>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<Book>)> {
    state.services.books.add_book(book.clone()).await?;

    let location = format!("/api/v1/books/{}", book.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(book)))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    request_body = Book,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut book): Json<Book>,
) -> AppResult<Json<Book>> {
    // Required-field check runs before the service is involved.
    book.validate()?;

    if !state.services.books.update_book(id, book.clone()).await? {
        return Err(AppError::NotFound(format!("Book {} not found", id)));
    }

    // Echo the stored entity: the path id wins over whatever the payload carried.
    book.id = id;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    if !state.services.books.delete_book(id).await? {
        return Err(AppError::NotFound(format!("Book {} not found", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
