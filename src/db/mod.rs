pub use categories::*;
pub use db::*;
pub use posts::*;
pub use tags::*;
pub use users::*;

mod categories;
mod db;
mod posts;
mod tags;
mod users;
