/// Macro to create a [`Collection`] from a list of elements.
///
/// Invoked without arguments it is equivalent to [`Collection::new`];
/// otherwise the given elements are appended in order, exactly as
/// [`Collection::from_items`] would.
///
/// The capacity rules of the constructors apply unchanged: the result has
/// room for at least [`Collection::DEFAULT_CAPACITY`] elements.
///
/// # Examples
///
/// ```
/// use seqcol::{Collection, collection};
///
/// let empty: Collection<i32> = collection![];
/// assert_eq!(empty.to_string(), "[]");
///
/// let numbers = collection![5, 6];
/// assert_eq!(numbers.len(), 2);
/// assert_eq!(numbers.to_string(), "[5, 6]");
///
/// let names = collection!["Peter", "Alex"];
/// assert_eq!(names.get(1), Ok(&"Alex"));
/// ```
///
/// [`Collection`]: crate::Collection
/// [`Collection::new`]: crate::Collection::new
/// [`Collection::from_items`]: crate::Collection::from_items
/// [`Collection::DEFAULT_CAPACITY`]: crate::Collection::DEFAULT_CAPACITY
#[macro_export]
macro_rules! collection {
    () => {
        $crate::Collection::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::Collection::from_items([$($element),+])
    };
}
