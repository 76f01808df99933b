/// UI module exports
pub mod cards;

pub use cards::{ArticleCard, ArticleList, LatestArticle};
