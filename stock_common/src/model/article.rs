//! News articles and the deduplicated selection shown to the user.
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Upper bound on the number of headlines kept per search.
pub const MAX_ARTICLES: usize = 5;

/// A single headline with its link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Headline, used as the deduplication key.
    pub title: String,
    /// Link to the full article.
    pub link: String,
}

impl Article {
    /// Builds an article from its parts.
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Article {
            title: title.into(),
            link: link.into(),
        }
    }

    /// `"{title}\n\t{link}\n\n"`
    pub fn render(&self) -> String {
        format!("{}\n\t{}\n\n", self.title, self.link)
    }
}

/// Up to `MAX_ARTICLES` articles with pairwise distinct titles, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsSelection {
    articles: Vec<Article>,
}

impl NewsSelection {
    /// Keeps the first occurrence of each title and stops once the cap is reached.
    ///
    /// Titles are compared exactly (case-sensitive, no normalization).
    pub fn select_unique<I>(articles: I) -> Self
    where
        I: IntoIterator<Item = Article>,
    {
        let mut seen: HashSet<String> = HashSet::with_capacity(MAX_ARTICLES);
        let mut kept = Vec::with_capacity(MAX_ARTICLES);

        for article in articles {
            if kept.len() == MAX_ARTICLES {
                break;
            }
            if seen.insert(article.title.clone()) {
                kept.push(article);
            }
        }
        NewsSelection { articles: kept }
    }

    /// Selected articles in first-seen order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Number of selected articles, at most `MAX_ARTICLES`.
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// `true` when no article was selected.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Concatenation of every article's rendering, in order.
    pub fn render(&self) -> String {
        self.articles.iter().map(Article::render).collect()
    }
}

impl IntoIterator for NewsSelection {
    type Item = Article;
    type IntoIter = std::vec::IntoIter<Article>;

    fn into_iter(self) -> Self::IntoIter {
        self.articles.into_iter()
    }
}
