pub mod age;
pub mod error;
pub mod projection;
pub mod record;

pub use age::AgeBucket;
pub use error::{Error, Result};
pub use projection::{
    AgeBucketCount, AuthorBookRow, AuthorCount, CountryCount, CountryTitleCount, TitleCount,
};
pub use record::{BookRating, Column};
