/// Merges two layers of the same settings type.
///
/// Values present in `overrides` win; values missing there are taken from
/// `self`.
pub trait Overlay: Sized {
    fn overlay(self, overrides: Self) -> Self;
}
