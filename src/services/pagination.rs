use thiserror::Error;

/// Taille de page de la liste d'historique
pub const HISTORY_PAGE_SIZE: u64 = 25;
/// Plafond de la vue principale (pas une vraie pagination)
pub const DASHBOARD_PAGE_SIZE: u64 = 20;

// LIMIT / OFFSET sont liés en BIGINT côté Postgres
const MAX_SQL_BOUND: u64 = i64::MAX as u64;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page must be >= 1")]
    InvalidPage,
    #[error("page size must be >= 1")]
    InvalidPageSize,
    #[error("page size is too large")]
    PageSizeTooLarge,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    pub fn new(page: u64, limit: u64) -> Result<Self, PaginationError> {
        if page == 0 {
            return Err(PaginationError::InvalidPage);
        }
        if limit == 0 {
            return Err(PaginationError::InvalidPageSize);
        }
        if limit > MAX_SQL_BOUND {
            return Err(PaginationError::PageSizeTooLarge);
        }
        Ok(Self { page, limit })
    }

    pub fn first(limit: u64) -> Result<Self, PaginationError> {
        Self::new(1, limit)
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// (page - 1) * limit, ou `None` quand la page est au-delà de toute table
    /// (l'offset ne tient pas dans un BIGINT) : la fenêtre est alors vide.
    pub fn offset(&self) -> Option<u64> {
        (self.page - 1)
            .checked_mul(self.limit)
            .filter(|offset| *offset <= MAX_SQL_BOUND)
    }

    pub fn next(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            limit: self.limit,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, limit: HISTORY_PAGE_SIZE }
    }
}

/// Une fenêtre de résultats + indicateur "il y a peut-être une suite"
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub records: Vec<T>,
    pub has_more: bool,
    pub page: u64,
    pub limit: u64,
}

impl<T> Page<T> {
    // has_more est optimiste : une page pleine suppose qu'il en reste.
    // Avec exactement `limit` éléments restants, le client fera une requête de plus
    // qui reviendra vide. Comportement conservé volontairement pour compatibilité.
    pub fn from_window(request: PageRequest, mut records: Vec<T>) -> Self {
        let limit = request.limit();
        records.truncate(usize::try_from(limit).unwrap_or(usize::MAX));

        Self {
            has_more: records.len() as u64 == limit,
            records,
            page: request.page(),
            limit,
        }
    }
}
