//! Legal documents and articles.
//!
//! Documents form a graph: a document lists its articles and the documents
//! it references by [`DocumentId`]. All records of an extract live in one
//! flat list and are resolved through the renderer's document index, so the
//! same document can be shared by several restrictions.

use crate::records::{LocalizedText, Office};
use serde::{Deserialize, Serialize};

/// Identifier of a document or article within one extract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A legal record: either a full document (law, ordinance, legal provision)
/// or a single article of one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LegalDocument {
    Document(Document),
    Article(Article),
}

impl LegalDocument {
    pub fn id(&self) -> &DocumentId {
        match self {
            LegalDocument::Document(document) => &document.id,
            LegalDocument::Article(article) => &article.id,
        }
    }
}

impl From<Document> for LegalDocument {
    fn from(document: Document) -> Self {
        LegalDocument::Document(document)
    }
}

impl From<Article> for LegalDocument {
    fn from(article: Article) -> Self {
        LegalDocument::Article(article)
    }
}

/// A legal document such as a legal provision, law or ordinance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub legal_state: String,
    pub title: LocalizedText,
    pub text_at_web: LocalizedText,
    pub responsible_office: Office,
    #[serde(default)]
    pub official_title: Option<LocalizedText>,
    #[serde(default)]
    pub abbreviation: Option<LocalizedText>,
    #[serde(default)]
    pub official_number: Option<String>,
    /// Canton abbreviation, for cantonal documents
    #[serde(default)]
    pub canton: Option<String>,
    /// Municipality name, for communal documents
    #[serde(default)]
    pub municipality: Option<String>,
    /// Numbers of the relevant articles
    #[serde(default)]
    pub article_numbers: Vec<String>,
    /// Articles of this document
    #[serde(default)]
    pub articles: Vec<DocumentId>,
    /// Other documents this one refers to
    #[serde(default)]
    pub references: Vec<DocumentId>,
}

impl Document {
    /// Create a document with all optional fields unset.
    pub fn new(
        id: impl Into<String>,
        legal_state: impl Into<String>,
        title: impl Into<LocalizedText>,
        text_at_web: impl Into<LocalizedText>,
        responsible_office: Office,
    ) -> Self {
        Self {
            id: DocumentId::new(id),
            legal_state: legal_state.into(),
            title: title.into(),
            text_at_web: text_at_web.into(),
            responsible_office,
            official_title: None,
            abbreviation: None,
            official_number: None,
            canton: None,
            municipality: None,
            article_numbers: Vec::new(),
            articles: Vec::new(),
            references: Vec::new(),
        }
    }

    pub fn with_article(mut self, id: impl Into<String>) -> Self {
        self.articles.push(DocumentId::new(id));
        self
    }

    pub fn with_reference(mut self, id: impl Into<String>) -> Self {
        self.references.push(DocumentId::new(id));
        self
    }
}

/// A single article of a legal document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: DocumentId,
    pub legal_state: String,
    /// Article number, e.g. "Art. 12"
    pub number: String,
    #[serde(default)]
    pub text_at_web: Option<LocalizedText>,
    #[serde(default)]
    pub text: Option<LocalizedText>,
}

impl Article {
    pub fn new(
        id: impl Into<String>,
        legal_state: impl Into<String>,
        number: impl Into<String>,
    ) -> Self {
        Self {
            id: DocumentId::new(id),
            legal_state: legal_state.into(),
            number: number.into(),
            text_at_web: None,
            text: None,
        }
    }
}
