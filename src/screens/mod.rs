pub mod detail;
pub mod list;

pub(crate) const MSG_HIRING_OPEN: &str = "Набор открыт";
pub(crate) const MSG_HIRING_CLOSED: &str = "Набор закрыт";

/// Navigation contract between screens. A route carries only what the target
/// screen needs to read its own data from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    ShiftsList,
    ShiftPage { id: String },
}
