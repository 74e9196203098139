/// Whether catalog detail was obtained for a component.
///
/// Builders receive either the reduced view carried by the violation
/// itself or the full record fetched from Black Duck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Enrichment<T> {
    /// Only the violation's own license/vulnerability lists are known
    ViolationOnly,
    /// The full catalog record is available and authoritative
    FullDetail(T),
}

impl<T> From<Option<T>> for Enrichment<T> {
    fn from(detail: Option<T>) -> Self {
        match detail {
            Some(detail) => Enrichment::FullDetail(detail),
            None => Enrichment::ViolationOnly,
        }
    }
}
