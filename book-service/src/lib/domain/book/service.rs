use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookCommand;
use crate::domain::book::models::BookId;
use crate::domain::book::ports::BookRepository;
use crate::domain::book::ports::BookServicePort;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Domain service implementation for book operations.
///
/// Every write resolves the requester in the user directory first, so a
/// token that outlives its (soft-deleted) account cannot touch books.
/// Ownership is enforced on every mutation.
pub struct BookService<BR, UR>
where
    BR: BookRepository,
    UR: UserRepository,
{
    repository: Arc<BR>,
    user_repository: Arc<UR>,
}

impl<BR, UR> BookService<BR, UR>
where
    BR: BookRepository,
    UR: UserRepository,
{
    pub fn new(repository: Arc<BR>, user_repository: Arc<UR>) -> Self {
        Self {
            repository,
            user_repository,
        }
    }

    async fn ensure_live_user(&self, user_id: &UserId) -> Result<(), BookError> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await
            .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        match user {
            Some(_) => Ok(()),
            None => {
                tracing::warn!(user_id = %user_id, "Rejected book write by unknown user");
                Err(BookError::UserNotFound(user_id.to_string()))
            }
        }
    }

    async fn find_owned(&self, id: &BookId, requester: &UserId) -> Result<Book, BookError> {
        self.ensure_live_user(requester).await?;

        let book = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(id.to_string()))?;

        if !book.is_owned_by(requester) {
            tracing::warn!(book_id = %id, user_id = %requester, "Rejected modification by non-owner");
            return Err(BookError::NotOwner {
                user_id: requester.to_string(),
                book_id: id.to_string(),
            });
        }

        Ok(book)
    }
}

#[async_trait]
impl<BR, UR> BookServicePort for BookService<BR, UR>
where
    BR: BookRepository,
    UR: UserRepository,
{
    async fn create_book(&self, command: BookCommand, owner: UserId) -> Result<Book, BookError> {
        self.ensure_live_user(&owner).await?;

        let now = Utc::now();
        let book = Book {
            id: BookId::new(),
            title: command.title,
            author: command.author,
            published_year: command.published_year,
            isbn: command.isbn,
            user_id: owner,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(book).await?;
        tracing::info!(book_id = %created.id, user_id = %owner, "Book created");

        Ok(created)
    }

    async fn get_book(&self, id: &BookId) -> Result<Book, BookError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(id.to_string()))
    }

    async fn update_book(
        &self,
        id: &BookId,
        command: BookCommand,
        requester: UserId,
    ) -> Result<Book, BookError> {
        let mut book = self.find_owned(id, &requester).await?;

        book.title = command.title;
        book.author = command.author;
        book.published_year = command.published_year;
        book.isbn = command.isbn;
        book.updated_at = Utc::now();

        let updated = self.repository.update(book).await?;
        tracing::info!(book_id = %id, user_id = %requester, "Book updated");

        Ok(updated)
    }

    async fn delete_book(&self, id: &BookId, requester: UserId) -> Result<(), BookError> {
        self.find_owned(id, &requester).await?;
        self.repository.delete(id).await?;
        tracing::info!(book_id = %id, user_id = %requester, "Book deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::book::models::AuthorName;
    use crate::domain::book::models::BookTitle;
    use crate::domain::book::models::Isbn;
    use crate::domain::book::models::PublishedYear;
    use crate::domain::user::errors::UserError;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::User;
    use crate::domain::user::models::Username;

    mock! {
        pub TestBookRepository {}

        #[async_trait]
        impl BookRepository for TestBookRepository {
            async fn create(&self, book: Book) -> Result<Book, BookError>;
            async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError>;
            async fn update(&self, book: Book) -> Result<Book, BookError>;
            async fn delete(&self, id: &BookId) -> Result<(), BookError>;
        }
    }

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
            async fn update(&self, user: User) -> Result<User, UserError>;
            async fn delete(&self, id: &UserId) -> Result<(), UserError>;
        }
    }

    fn live_user(id: UserId) -> User {
        let now = Utc::now();
        User {
            id,
            username: Username::new("reader".to_string()).unwrap(),
            email: EmailAddress::new("reader@example.com".to_string()).unwrap(),
            password_hash: "$argon2id$hash".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// User directory in which every id resolves to a live user.
    fn live_users() -> Arc<MockTestUserRepository> {
        let mut users = MockTestUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(live_user(*id))));
        Arc::new(users)
    }

    fn deleted_users() -> Arc<MockTestUserRepository> {
        let mut users = MockTestUserRepository::new();
        users.expect_find_by_id().times(1).returning(|_| Ok(None));
        Arc::new(users)
    }

    fn gatsby_command() -> BookCommand {
        BookCommand {
            title: BookTitle::new("The Great Gatsby".to_string()).unwrap(),
            author: AuthorName::new("F. Scott Fitzgerald".to_string()).unwrap(),
            published_year: PublishedYear::new(1925).unwrap(),
            isbn: Isbn::new("9780743273565".to_string()).unwrap(),
        }
    }

    fn update_command() -> BookCommand {
        BookCommand {
            title: BookTitle::new("Numerical Recipes".to_string()).unwrap(),
            author: AuthorName::new("Press et al.".to_string()).unwrap(),
            published_year: PublishedYear::new(1986).unwrap(),
            isbn: Isbn::new("978-0-306-40615-7".to_string()).unwrap(),
        }
    }

    fn stored_book(owner: UserId) -> Book {
        let command = gatsby_command();
        let created_at = Utc::now() - chrono::Duration::hours(1);
        Book {
            id: BookId::new(),
            title: command.title,
            author: command.author,
            published_year: command.published_year,
            isbn: command.isbn,
            user_id: owner,
            created_at,
            updated_at: created_at,
        }
    }

    #[tokio::test]
    async fn test_create_book_records_owner() {
        let mut repository = MockTestBookRepository::new();
        let owner = UserId::new();

        repository
            .expect_create()
            .withf(move |book| book.user_id == owner && book.title.as_str() == "The Great Gatsby")
            .times(1)
            .returning(|book| Ok(book));

        let service = BookService::new(Arc::new(repository), live_users());

        let book = service.create_book(gatsby_command(), owner).await.unwrap();
        assert_eq!(book.user_id, owner);
        assert_eq!(book.isbn.as_str(), "9780743273565");
    }

    #[tokio::test]
    async fn test_create_book_by_deleted_user_is_rejected() {
        let mut repository = MockTestBookRepository::new();
        repository.expect_create().times(0);

        let service = BookService::new(Arc::new(repository), deleted_users());

        let result = service.create_book(gatsby_command(), UserId::new()).await;
        assert!(matches!(result, Err(BookError::UserNotFound(_))));
    }

    #[tokio::test]
    async fn test_create_book_user_lookup_failure() {
        let mut users = MockTestUserRepository::new();
        users
            .expect_find_by_id()
            .times(1)
            .returning(|_| Err(UserError::DatabaseError("query timed out".to_string())));
        let mut repository = MockTestBookRepository::new();
        repository.expect_create().times(0);

        let service = BookService::new(Arc::new(repository), Arc::new(users));

        let result = service.create_book(gatsby_command(), UserId::new()).await;
        assert!(matches!(result, Err(BookError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_get_book_not_found() {
        let mut repository = MockTestBookRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = BookService::new(Arc::new(repository), live_users());

        let result = service.get_book(&BookId::new()).await;
        assert!(matches!(result, Err(BookError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_book_by_owner() {
        let mut repository = MockTestBookRepository::new();
        let owner = UserId::new();
        let book = stored_book(owner);
        let book_id = book.id;

        repository
            .expect_find_by_id()
            .withf(move |id| *id == book_id)
            .times(1)
            .returning(move |_| Ok(Some(book.clone())));
        repository
            .expect_update()
            .withf(move |book| {
                book.id == book_id
                    && book.user_id == owner
                    && book.title.as_str() == "Numerical Recipes"
                    && book.updated_at > book.created_at
            })
            .times(1)
            .returning(|book| Ok(book));

        let service = BookService::new(Arc::new(repository), live_users());

        let updated = service
            .update_book(&book_id, update_command(), owner)
            .await
            .unwrap();
        assert_eq!(updated.published_year.value(), 1986);
        assert_eq!(updated.isbn.as_str(), "9780306406157");
    }

    #[tokio::test]
    async fn test_update_book_by_other_user_is_rejected() {
        let mut repository = MockTestBookRepository::new();
        let book = stored_book(UserId::new());
        let book_id = book.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(book.clone())));
        repository.expect_update().times(0);

        let service = BookService::new(Arc::new(repository), live_users());

        let result = service
            .update_book(&book_id, update_command(), UserId::new())
            .await;
        assert!(matches!(result, Err(BookError::NotOwner { .. })));
    }

    #[tokio::test]
    async fn test_update_book_by_deleted_owner_is_rejected() {
        let mut repository = MockTestBookRepository::new();
        repository.expect_find_by_id().times(0);
        repository.expect_update().times(0);

        let service = BookService::new(Arc::new(repository), deleted_users());

        let result = service
            .update_book(&BookId::new(), update_command(), UserId::new())
            .await;
        assert!(matches!(result, Err(BookError::UserNotFound(_))));
    }

    #[tokio::test]
    async fn test_update_missing_book() {
        let mut repository = MockTestBookRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = BookService::new(Arc::new(repository), live_users());

        let result = service
            .update_book(&BookId::new(), update_command(), UserId::new())
            .await;
        assert!(matches!(result, Err(BookError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_book_by_owner() {
        let mut repository = MockTestBookRepository::new();
        let owner = UserId::new();
        let book = stored_book(owner);
        let book_id = book.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(book.clone())));
        repository
            .expect_delete()
            .withf(move |id| *id == book_id)
            .times(1)
            .returning(|_| Ok(()));

        let service = BookService::new(Arc::new(repository), live_users());

        assert!(service.delete_book(&book_id, owner).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_book_by_other_user_is_rejected() {
        let mut repository = MockTestBookRepository::new();
        let book = stored_book(UserId::new());
        let book_id = book.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(book.clone())));
        repository.expect_delete().times(0);

        let service = BookService::new(Arc::new(repository), live_users());

        let result = service.delete_book(&book_id, UserId::new()).await;
        assert!(matches!(result, Err(BookError::NotOwner { .. })));
    }

    #[tokio::test]
    async fn test_delete_book_by_deleted_owner_is_rejected() {
        let mut repository = MockTestBookRepository::new();
        repository.expect_delete().times(0);

        let service = BookService::new(Arc::new(repository), deleted_users());

        let result = service.delete_book(&BookId::new(), UserId::new()).await;
        assert!(matches!(result, Err(BookError::UserNotFound(_))));
    }
}
