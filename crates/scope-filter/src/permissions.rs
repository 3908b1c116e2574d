//! Edit/delete permissions
//!
//! Private filters are only ever listed to their author, so anyone who can
//! see one may change it. Public filters may only be changed by their
//! author. Checks compare against the real current user id.

use crate::filter::{SavedFilter, UserId};

/// True if `user` may edit `filter`
///
/// Private filters pass for any user. Callers must only hand out private
/// filter ids to their author, as [`FilterLibrary::visible_from`] does.
///
/// [`FilterLibrary::visible_from`]: crate::FilterLibrary::visible_from
#[inline]
#[must_use]
pub fn can_edit(filter: &SavedFilter, user: &UserId) -> bool {
    !filter.is_public || filter.is_owned_by(user)
}

/// True if `user` may delete `filter`
///
/// Same rule as [`can_edit`], including the assumption that a private
/// filter's id is only known to its author.
#[inline]
#[must_use]
pub fn can_delete(filter: &SavedFilter, user: &UserId) -> bool {
    can_edit(filter, user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::FilterScope;

    #[test]
    fn author_may_modify_public_filter() {
        let me = UserId::from("1");
        let filter = SavedFilter::public("shared", me.clone(), FilterScope::everywhere()).unwrap();

        assert!(can_edit(&filter, &me));
        assert!(can_delete(&filter, &me));
    }

    #[test]
    fn others_may_not_modify_public_filter() {
        let filter =
            SavedFilter::public("shared", UserId::from("1"), FilterScope::everywhere()).unwrap();
        let other = UserId::from("2");

        assert!(!can_edit(&filter, &other));
        assert!(!can_delete(&filter, &other));
    }

    #[test]
    fn private_filters_are_always_modifiable() {
        let filter = SavedFilter::private("mine", UserId::from("1")).unwrap();
        assert!(can_edit(&filter, &UserId::from("2")));
        assert!(can_delete(&filter, &UserId::from("2")));
    }
}
