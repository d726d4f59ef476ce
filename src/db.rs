use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

pub fn create_pool(database_url: &str) -> Result<DbPool, r2d2::Error> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    // An in-memory database exists per connection, so it must not be pooled wider.
    let max_size = if database_url == ":memory:" { 1 } else { 8 };
    Pool::builder().max_size(max_size).build(manager)
}
