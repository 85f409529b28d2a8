//! Path and query types for changelog routes.

use serde::Deserialize;

use crate::domain::foundation::EntryId;

use super::super::errors::HttpError;

#[derive(Debug, Clone, Deserialize)]
pub struct EntryPath {
    pub pk: String,
}

impl EntryPath {
    pub fn id(&self) -> Result<EntryId, HttpError> {
        self.pk.parse().map_err(|_| HttpError::NotFound)
    }
}

/// `?page=N` on the entry list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    /// Missing means the first page; anything but a positive number is a 404.
    pub fn page(&self) -> Result<Option<u32>, HttpError> {
        match self.page.as_deref() {
            None => Ok(None),
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(page) if page >= 1 => Ok(Some(page)),
                _ => Err(HttpError::NotFound),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_parsing() {
        assert_eq!(PageQuery::default().page(), Ok(None));
        let q = |s: &str| PageQuery {
            page: Some(s.to_string()),
        };
        assert_eq!(q("3").page(), Ok(Some(3)));
        assert_eq!(q("0").page(), Err(HttpError::NotFound));
        assert_eq!(q("last").page(), Err(HttpError::NotFound));
    }

    #[test]
    fn entry_pk_must_be_digits() {
        let path = EntryPath {
            pk: "-1".to_string(),
        };
        assert_eq!(path.id(), Err(HttpError::NotFound));
    }
}
