//! Reference descriptors for images delivered by link instead of inline.
//!
//! When an extract is rendered without images, symbols and logos are
//! replaced by descriptors obtained from a [`ReferenceBuilder`]. The
//! renderer never builds URLs itself; the hosting service decides what a
//! descriptor looks like.

/// The logos shown on every extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogoKind {
    /// Logo of the PLR cadastre
    PlrCadastre,
    /// Logo of the Swiss confederation
    Confederation,
    /// Logo of the canton
    Canton,
}

impl LogoKind {
    /// Identifier used in logo references.
    pub fn code(&self) -> &'static str {
        match self {
            LogoKind::PlrCadastre => "oereb",
            LogoKind::Confederation => "confederation",
            LogoKind::Canton => "canton",
        }
    }
}

/// An image the renderer needs a reference descriptor for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRef<'a> {
    Logo(LogoKind),
    /// Logo of the municipality with the given federal number
    Municipality { fosnr: u32 },
    /// Legend symbol of a restriction type
    Symbol {
        theme_code: &'a str,
        type_code: &'a str,
    },
}

/// Builds reference descriptors for images.
pub trait ReferenceBuilder: Send + Sync {
    fn build_ref(&self, image: &ImageRef<'_>) -> String;
}

/// Builds image URLs below a service base URL:
///
/// - `{base}/image/logo/{oereb|confederation|canton}`
/// - `{base}/image/municipality/{fosnr}`
/// - `{base}/image/symbol/{theme_code}/{type_code}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlReferenceBuilder {
    base_url: String,
}

impl UrlReferenceBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl ReferenceBuilder for UrlReferenceBuilder {
    fn build_ref(&self, image: &ImageRef<'_>) -> String {
        match image {
            ImageRef::Logo(kind) => format!("{}/image/logo/{}", self.base_url, kind.code()),
            ImageRef::Municipality { fosnr } => {
                format!("{}/image/municipality/{}", self.base_url, fosnr)
            },
            ImageRef::Symbol {
                theme_code,
                type_code,
            } => format!(
                "{}/image/symbol/{}/{}",
                self.base_url,
                urlencoding::encode(theme_code),
                urlencoding::encode(type_code)
            ),
        }
    }
}
